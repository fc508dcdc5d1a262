/*!
 * Error types for the ytsubs application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur at the transcript provider boundary
///
/// The first three variants classify whole-video failure states reported by
/// the provider during language listing; the remaining variants cover
/// transport and decoding problems and are treated as unclassified.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// The video does not exist or has been removed
    #[error("video is unavailable or has been removed")]
    VideoUnavailable,

    /// The video owner has disabled captions
    #[error("transcripts are disabled for this video")]
    TranscriptsDisabled,

    /// The video exists but carries no caption track
    #[error("no transcript found for this video")]
    NoTranscriptFound,

    /// Error when making a request to the provider fails
    #[error("transcript request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing a provider response fails
    #[error("failed to parse provider response: {0}")]
    ParseError(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the transcript provider
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
