/*!
 * # ytsubs - YouTube Subtitle Fetcher
 *
 * A Rust library for downloading YouTube caption tracks and rendering them
 * as SRT cues or plain text.
 *
 * ## Features
 *
 * - Extract video identifiers from watch and short-link URLs
 * - List every caption language available for a video
 * - Fetch each language's track and render it in SRT and plain text form
 * - Skip languages that fail to download without failing the whole request
 * - ISO 639 language code display support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `video_url`: Video identifier extraction from user-supplied URLs
 * - `subtitle_processor`: Caption track formatting (SRT and plain text)
 * - `app_controller`: Request orchestration and partial-failure policy
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for transcript providers:
 *   - `providers::youtube`: YouTube watch-page transcript client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod subtitle_processor;
pub mod video_url;

// Re-export main types for easier usage
pub use app_config::{Config, OutputFormat};
pub use app_controller::{Controller, FormattedTrack, RequestOutcome, SubtitleResults};
pub use errors::{AppError, TranscriptError};
pub use subtitle_processor::{CaptionEntry, CaptionTrack};
pub use video_url::extract_video_id;
