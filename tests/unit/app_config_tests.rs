/*!
 * Tests for app configuration
 */

use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use anyhow::Result;
use ytsubs::app_config::{Config, LogLevel, OutputFormat};

use crate::common;

/// Test default configuration values
#[test]
fn test_config_default_shouldUseExpectedValues() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Srt);
    assert_eq!(config.provider.endpoint, "https://www.youtube.com");
    assert_eq!(config.provider.timeout_secs, 30);
    assert!(!config.provider.user_agent.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_config_validate_withDefaults_shouldSucceed() {
    assert!(Config::default().validate().is_ok());
}

/// Test validation of an empty endpoint
#[test]
fn test_config_validate_withEmptyEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = String::new();
    assert!(config.validate().is_err());
}

/// Test validation of an unparseable endpoint
#[test]
fn test_config_validate_withInvalidEndpoint_shouldFail() {
    let mut config = Config::default();
    config.provider.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
}

/// Test validation of a zero timeout
#[test]
fn test_config_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.provider.timeout_secs = 0;
    assert!(config.validate().is_err());
}

/// Test output format parsing from strings
#[test]
fn test_outputFormat_fromStr_shouldParseKnownLabels() {
    assert_eq!(OutputFormat::from_str("srt").unwrap(), OutputFormat::Srt);
    assert_eq!(OutputFormat::from_str("SRT").unwrap(), OutputFormat::Srt);
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
    assert!(OutputFormat::from_str("vtt").is_err());
}

/// Test output format display helpers
#[test]
fn test_outputFormat_helpers_shouldDescribeFormat() {
    assert_eq!(OutputFormat::Srt.to_string(), "srt");
    assert_eq!(OutputFormat::Text.to_string(), "text");
    assert_eq!(OutputFormat::Srt.extension(), "srt");
    assert_eq!(OutputFormat::Text.extension(), "txt");
    assert_eq!(OutputFormat::Srt.display_name(), "SRT");
    assert_eq!(OutputFormat::Text.display_name(), "Plain text");
}

/// Test writing a configuration file and loading it back
#[test]
fn test_config_roundtrip_withConfigFile_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.output_format = OutputFormat::Text;
    config.provider.timeout_secs = 10;
    config.log_level = LogLevel::Debug;

    let config_json = serde_json::to_string_pretty(&config)?;
    std::fs::write(&config_path, config_json)?;

    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let loaded: Config = serde_json::from_reader(reader)?;

    assert_eq!(loaded.output_format, OutputFormat::Text);
    assert_eq!(loaded.provider.timeout_secs, 10);
    assert_eq!(loaded.provider.endpoint, config.provider.endpoint);
    assert_eq!(loaded.log_level, LogLevel::Debug);

    Ok(())
}

/// Test that missing fields fall back to defaults when deserializing
#[test]
fn test_config_deserialize_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let loaded: Config = serde_json::from_str("{}")?;

    assert_eq!(loaded.output_format, OutputFormat::Srt);
    assert_eq!(loaded.provider.endpoint, "https://www.youtube.com");
    assert_eq!(loaded.log_level, LogLevel::Info);

    Ok(())
}
