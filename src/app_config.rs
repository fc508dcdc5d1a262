use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Output format selected for display
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Transcript provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Subtitle output format label
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: SRT cue format with timing lines
    #[default]
    Srt,
    // @format: Plain text, one caption per line
    Text,
}

impl OutputFormat {
    // @returns: Capitalized format name
    #[allow(dead_code)]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Srt => "SRT",
            Self::Text => "Plain text",
        }
    }

    // @returns: File extension for the format
    pub fn extension(&self) -> &str {
        match self {
            Self::Srt => "srt",
            Self::Text => "txt",
        }
    }
}

// Implement Display trait for OutputFormat
impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Srt => write!(f, "srt"),
            Self::Text => write!(f, "text"),
        }
    }
}

// Implement FromStr trait for OutputFormat
impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(anyhow!("Invalid output format: {}", s)),
        }
    }
}

/// Transcript provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: User-Agent header sent with provider requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_endpoint() -> String {
    "https://www.youtube.com".to_string()
}

fn default_user_agent() -> String {
    // The watch page serves a consent interstitial to clients without a
    // browser User-Agent
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.provider.endpoint.is_empty() {
            return Err(anyhow!("Provider endpoint must not be empty"));
        }

        url::Url::parse(&self.provider.endpoint)
            .map_err(|e| anyhow!("Invalid provider endpoint '{}': {}", self.provider.endpoint, e))?;

        if self.provider.timeout_secs == 0 {
            return Err(anyhow!("Provider timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_format: OutputFormat::default(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
