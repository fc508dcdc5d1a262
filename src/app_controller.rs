use std::sync::Arc;

use anyhow::Result;
use log::{debug, info, warn};

use crate::app_config::{Config, OutputFormat};
use crate::errors::TranscriptError;
use crate::providers::TranscriptProvider;
use crate::providers::youtube::YouTubeTranscripts;
use crate::subtitle_processor::CaptionTrack;
use crate::video_url;

// @module: Request orchestration for subtitle downloads

/// Both renderings of one fetched caption track
#[derive(Debug, Clone)]
pub struct FormattedTrack {
    /// SRT cue rendering
    pub srt: String,

    /// Plain text rendering
    pub plain: String,
}

impl FormattedTrack {
    /// Rendering selected by the requested output format
    pub fn for_format(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Srt => &self.srt,
            OutputFormat::Text => &self.plain,
        }
    }
}

/// Per-request mapping from language code to formatted subtitles
///
/// Iteration preserves insertion order, which is the provider's listing
/// order. Built fresh for every request and discarded after display; a
/// language is present exactly when its fetch succeeded with a non-empty
/// caption sequence.
#[derive(Debug, Default)]
pub struct SubtitleResults {
    tracks: Vec<(String, FormattedTrack)>,
}

impl SubtitleResults {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, language: String, formatted: FormattedTrack) {
        self.tracks.push((language, formatted));
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of languages in the mapping - used by tests and external consumers
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Look up one language's formatted subtitles - used by tests and external consumers
    #[allow(dead_code)]
    pub fn get(&self, language: &str) -> Option<&FormattedTrack> {
        self.tracks
            .iter()
            .find(|(code, _)| code == language)
            .map(|(_, formatted)| formatted)
    }

    /// Iterate tracks in provider order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormattedTrack)> {
        self.tracks
            .iter()
            .map(|(code, formatted)| (code.as_str(), formatted))
    }

    /// Iterate language codes in provider order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|(code, _)| code.as_str())
    }
}

/// Outcome of one subtitle request, ready for display by the hosting layer
#[derive(Debug)]
pub enum RequestOutcome {
    /// Subtitles were fetched for at least one language
    Subtitles {
        /// Identifier extracted from the request URL
        video_id: String,
        /// Result mapping in provider order
        results: SubtitleResults,
        /// Output format requested for display
        format: OutputFormat,
    },

    /// The request failed as a whole
    Error {
        /// Human-readable failure message
        message: String,
    },
}

impl RequestOutcome {
    /// Whether the request failed - used by tests and external consumers
    #[allow(dead_code)]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The failure message, if the request failed - used by tests and external consumers
    #[allow(dead_code)]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            Self::Subtitles { .. } => None,
        }
    }
}

/// Main application controller for subtitle requests
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Transcript provider boundary
    provider: Arc<dyn TranscriptProvider>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let provider = Arc::new(YouTubeTranscripts::new(&config.provider));
        Ok(Self { config, provider })
    }

    /// Create a controller backed by a specific provider - used by tests
    /// and alternative hosting layers
    #[allow(dead_code)]
    pub fn with_provider(config: Config, provider: Arc<dyn TranscriptProvider>) -> Self {
        Self { config, provider }
    }

    /// The configuration this controller was built with - used by hosting layers
    #[allow(dead_code)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one subtitle request end to end
    ///
    /// Extracts the video identifier, asks the provider for the available
    /// caption languages, then fetches and formats each language in listing
    /// order. A failure fetching one language is logged and skipped; only
    /// identifier extraction failure, a listing failure, or an empty result
    /// mapping fail the whole request, each with its own message.
    pub async fn process_request(&self, video_url: &str, format: OutputFormat) -> RequestOutcome {
        let Some(video_id) = video_url::extract_video_id(video_url) else {
            return RequestOutcome::Error {
                message: "Invalid YouTube URL. Please enter a valid URL.".to_string(),
            };
        };

        debug!("Extracted video id {} from {}", video_id, video_url);

        let languages = match self.provider.list_languages(&video_id).await {
            Ok(languages) => languages,
            Err(e) => {
                return RequestOutcome::Error {
                    message: listing_failure_message(&e),
                };
            }
        };

        info!(
            "Provider lists {} caption language(s) for video {}",
            languages.len(),
            video_id
        );

        let (results, skipped) = self.fetch_all_languages(&video_id, &languages).await;

        for (language, reason) in &skipped {
            warn!("Skipped language {}: {}", language, reason);
        }

        if results.is_empty() {
            return RequestOutcome::Error {
                message: "No downloadable subtitles found for this video.".to_string(),
            };
        }

        RequestOutcome::Subtitles {
            video_id,
            results,
            format,
        }
    }

    /// Fold over the language codes in provider order, accumulating
    /// formatted tracks and collecting a skip reason per failed language
    ///
    /// Fetches run sequentially; a failed language is skipped exactly once,
    /// never retried. An empty caption sequence counts as a skip.
    async fn fetch_all_languages(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> (SubtitleResults, Vec<(String, String)>) {
        let mut results = SubtitleResults::new();
        let mut skipped = Vec::new();

        for language in languages {
            match self.provider.fetch_captions(video_id, language).await {
                Ok(entries) if entries.is_empty() => {
                    skipped.push((language.clone(), "caption track contained no entries".to_string()));
                }
                Ok(entries) => {
                    let track = CaptionTrack::with_entries(language.clone(), entries);
                    results.insert(
                        language.clone(),
                        FormattedTrack {
                            srt: track.to_srt(),
                            plain: track.to_plain_text(),
                        },
                    );
                }
                Err(e) => {
                    skipped.push((language.clone(), e.to_string()));
                }
            }
        }

        (results, skipped)
    }
}

/// Select the user-facing message for a failure of the language listing call
fn listing_failure_message(error: &TranscriptError) -> String {
    match error {
        TranscriptError::VideoUnavailable => {
            "The video is unavailable or has been removed.".to_string()
        }
        TranscriptError::TranscriptsDisabled => {
            "Subtitles are disabled for this video by the owner. Please check if the video has captions enabled."
                .to_string()
        }
        TranscriptError::NoTranscriptFound => "No subtitles available for this video.".to_string(),
        other => format!("An unexpected error occurred: {}", other),
    }
}
