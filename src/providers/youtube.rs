use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, header};
use serde::Deserialize;

use crate::app_config::ProviderConfig;
use crate::errors::TranscriptError;
use crate::providers::TranscriptProvider;
use crate::subtitle_processor::CaptionEntry;

// @const: Player response extraction regex
static PLAYER_RESPONSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"var ytInitialPlayerResponse\s*=\s*(\{.+?\});").unwrap()
});

// @const: Timedtext <text> element regex
static TEXT_ELEMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<text([^>]*?)(?:/>|>(.*?)</text>)"#).unwrap()
});

// @const: Timedtext attribute regexes
static START_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"start="([^"]*)""#).unwrap());
static DUR_ATTR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"dur="([^"]*)""#).unwrap());

/// Subset of the watch-page player response the client cares about
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrackInfo>>,
}

/// One caption track as listed by the player response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrackInfo {
    base_url: Option<String>,
    language_code: Option<String>,
}

/// YouTube transcript client speaking the public watch-page surface
///
/// Listing and fetching both start from the watch page's embedded player
/// response; fetching resolves the track's timedtext URL from it. Responses
/// are never cached, so a fetch after a listing re-resolves the track list.
#[derive(Debug)]
pub struct YouTubeTranscripts {
    /// HTTP client for provider requests
    client: Client,
    /// Base endpoint URL
    endpoint: String,
    /// User-Agent header value
    user_agent: String,
}

impl YouTubeTranscripts {
    /// Create a new client from provider configuration
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Fetch and decode the player response for a video
    async fn player_response(&self, video_id: &str) -> Result<PlayerResponse, TranscriptError> {
        let watch_url = format!("{}/watch?v={}", self.endpoint, video_id);

        let response = self
            .client
            .get(&watch_url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| TranscriptError::RequestFailed(format!("failed to fetch watch page: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            error!("Watch page request failed ({}) for video {}", status, video_id);
            return Err(TranscriptError::RequestFailed(format!(
                "watch page returned HTTP {}",
                status
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| TranscriptError::RequestFailed(format!("failed to read watch page: {}", e)))?;

        let raw = PLAYER_RESPONSE_REGEX
            .captures(&html)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                TranscriptError::ParseError("player response not found in watch page".to_string())
            })?;

        serde_json::from_str(raw.as_str())
            .map_err(|e| TranscriptError::ParseError(format!("invalid player response JSON: {}", e)))
    }

    /// Map the player response to its caption track list, classifying
    /// whole-video failure states
    fn caption_tracks(player: PlayerResponse) -> Result<Vec<CaptionTrackInfo>, TranscriptError> {
        if let Some(playability) = &player.playability_status {
            if playability.status.as_deref() == Some("ERROR") {
                debug!(
                    "Playability error: {}",
                    playability.reason.as_deref().unwrap_or("no reason given")
                );
                return Err(TranscriptError::VideoUnavailable);
            }
        }

        let captions = player.captions.ok_or(TranscriptError::TranscriptsDisabled)?;
        let tracks = captions
            .player_captions_tracklist_renderer
            .and_then(|renderer| renderer.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(TranscriptError::NoTranscriptFound);
        }

        Ok(tracks)
    }
}

#[async_trait]
impl TranscriptProvider for YouTubeTranscripts {
    async fn list_languages(&self, video_id: &str) -> Result<Vec<String>, TranscriptError> {
        let player = self.player_response(video_id).await?;
        let tracks = Self::caption_tracks(player)?;

        // A video may carry manual and ASR tracks under the same code; keep
        // the first occurrence of each
        let mut languages: Vec<String> = Vec::new();
        for track in &tracks {
            if let Some(code) = &track.language_code {
                if !code.is_empty() && !languages.iter().any(|seen| seen == code) {
                    languages.push(code.clone());
                }
            }
        }

        debug!("Found {} caption language(s) for video {}", languages.len(), video_id);
        Ok(languages)
    }

    async fn fetch_captions(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<CaptionEntry>, TranscriptError> {
        let player = self.player_response(video_id).await?;
        let tracks = Self::caption_tracks(player)?;

        let track = tracks
            .iter()
            .find(|t| t.language_code.as_deref() == Some(language))
            .ok_or(TranscriptError::NoTranscriptFound)?;

        let base_url = track.base_url.as_deref().ok_or_else(|| {
            TranscriptError::ParseError(format!("caption track {} has no base URL", language))
        })?;

        let response = self
            .client
            .get(base_url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                TranscriptError::RequestFailed(format!("failed to fetch caption track: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranscriptError::RequestFailed(format!(
                "caption track returned HTTP {}",
                status
            )));
        }

        let xml = response.text().await.map_err(|e| {
            TranscriptError::RequestFailed(format!("failed to read caption track: {}", e))
        })?;

        Ok(parse_timedtext(&xml))
    }
}

/// Parse a timedtext XML document into caption entries
///
/// Entries keep provider order. A missing or unparseable `start` or `dur`
/// attribute is read as zero; cues with empty text are preserved.
pub fn parse_timedtext(xml: &str) -> Vec<CaptionEntry> {
    let mut entries = Vec::new();

    for caps in TEXT_ELEMENT_REGEX.captures_iter(xml) {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let start = attr_value(&START_ATTR_REGEX, attrs)
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0);
        let duration = attr_value(&DUR_ATTR_REGEX, attrs)
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(0.0);
        let text = decode_entities(caps.get(2).map_or("", |m| m.as_str()));

        entries.push(CaptionEntry::new(start, duration, text));
    }

    entries
}

fn attr_value<'a>(regex: &Regex, attrs: &'a str) -> Option<&'a str> {
    regex
        .captures(attrs)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decode the HTML entities the timedtext feed uses
///
/// `&amp;` is decoded last; decoding it first would let double-encoded
/// sequences like `&amp;lt;` collapse twice.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
