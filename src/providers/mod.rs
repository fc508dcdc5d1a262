/*!
 * Provider implementations for transcript services.
 *
 * This module contains the client boundary to the external captioning
 * provider: the `TranscriptProvider` trait plus the concrete YouTube
 * implementation.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TranscriptError;
use crate::subtitle_processor::CaptionEntry;

/// Common trait for transcript providers
///
/// This trait defines the interface the request handler orchestrates
/// against, allowing the external provider to be swapped out in tests and
/// alternative hosting layers.
#[async_trait]
pub trait TranscriptProvider: Send + Sync + Debug {
    /// List the language codes of the caption tracks available for a video
    ///
    /// # Arguments
    /// * `video_id` - The provider video identifier
    ///
    /// # Returns
    /// * `Result<Vec<String>, TranscriptError>` - Distinct language codes in
    ///   provider order, or a classified whole-video failure
    async fn list_languages(&self, video_id: &str) -> Result<Vec<String>, TranscriptError>;

    /// Fetch the caption entries of one language track
    ///
    /// # Arguments
    /// * `video_id` - The provider video identifier
    /// * `language` - A language code previously returned by `list_languages`
    ///
    /// # Returns
    /// * `Result<Vec<CaptionEntry>, TranscriptError>` - Entries in provider
    ///   order, or an error the caller treats generically
    async fn fetch_captions(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<CaptionEntry>, TranscriptError>;
}

pub mod youtube;
