// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};

use crate::app_config::{Config, LogLevel, OutputFormat};
use crate::app_controller::{Controller, RequestOutcome, SubtitleResults};

mod app_config;
mod app_controller;
mod errors;
mod language_utils;
mod providers;
mod subtitle_processor;
mod video_url;

/// CLI wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Srt,
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Srt => OutputFormat::Srt,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch subtitles for a video URL (default command)
    #[command(alias = "get")]
    Fetch(FetchArgs),

    /// Generate shell completions for ytsubs
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FetchArgs {
    /// Video URL to fetch subtitles for
    #[arg(value_name = "VIDEO_URL")]
    video_url: String,

    /// Output format to display or write
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Write one subtitle file per language into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Restrict output to a single language code (e.g. 'en', 'pt-BR')
    #[arg(long)]
    language: Option<String>,

    /// Only list the downloadable caption languages
    #[arg(long)]
    list: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytsubs - YouTube subtitle downloader
///
/// Fetches every available caption track for a YouTube video and renders
/// them as SRT cues or plain text.
#[derive(Parser, Debug)]
#[command(name = "ytsubs")]
#[command(version = "0.1.0")]
#[command(about = "YouTube subtitle downloader")]
#[command(long_about = "ytsubs fetches the caption tracks of a YouTube video and renders them as SRT or plain text.

EXAMPLES:
    ytsubs https://www.youtube.com/watch?v=dQw4w9WgXcQ       # Print SRT for every language
    ytsubs -f text https://youtu.be/dQw4w9WgXcQ              # Print plain text instead
    ytsubs --list https://youtu.be/dQw4w9WgXcQ               # List downloadable languages
    ytsubs --language en -o subs https://youtu.be/dQw4w9WgXcQ # Write subs/<id>.en.srt
    ytsubs -o subs https://youtu.be/dQw4w9WgXcQ              # One file per language
    ytsubs completions bash > ytsubs.bash                    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video URL to fetch subtitles for
    #[arg(value_name = "VIDEO_URL")]
    video_url: Option<String>,

    /// Output format to display or write
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Write one subtitle file per language into this directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Restrict output to a single language code (e.g. 'en', 'pt-BR')
    #[arg(long)]
    language: Option<String>,

    /// Only list the downloadable caption languages
    #[arg(long)]
    list: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytsubs", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Fetch(args)) => run_fetch(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let video_url = cli
                .video_url
                .ok_or_else(|| anyhow!("VIDEO_URL is required when no subcommand is specified"))?;

            let fetch_args = FetchArgs {
                video_url,
                format: cli.format,
                output_dir: cli.output_dir,
                language: cli.language,
                list: cli.list,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_fetch(fetch_args).await
        }
    }
}

async fn run_fetch(options: FetchArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(format) = &options.format {
        config.output_format = format.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let format = config.output_format;
    let controller = Controller::with_config(config)?;

    match controller.process_request(&options.video_url, format).await {
        RequestOutcome::Error { message } => Err(anyhow!(message)),
        RequestOutcome::Subtitles {
            video_id,
            results,
            format,
        } => display_results(&options, &video_id, &results, format),
    }
}

/// Display or write the fetched subtitles per the CLI options
fn display_results(
    options: &FetchArgs,
    video_id: &str,
    results: &SubtitleResults,
    format: OutputFormat,
) -> Result<()> {
    if options.list {
        info!("Downloadable caption languages:");
        for language in results.languages() {
            match language_utils::get_language_name(language) {
                Ok(name) => println!("{} ({})", language, name),
                Err(_) => println!("{}", language),
            }
        }
        return Ok(());
    }

    // Selection happens after the full fetch, so an unknown language here
    // still reports against the downloadable set
    if let Some(wanted) = &options.language {
        let selected = results
            .iter()
            .find(|(code, _)| language_utils::language_codes_match(code, wanted))
            .ok_or_else(|| {
                anyhow!(
                    "No downloadable subtitles found for language: {} (available: {})",
                    wanted,
                    results.languages().collect::<Vec<_>>().join(", ")
                )
            })?;
        let (language, track) = selected;

        if let Some(dir) = &options.output_dir {
            write_subtitle_file(dir, video_id, language, track.for_format(format), format)?;
        } else {
            println!("{}", track.for_format(format));
        }
        return Ok(());
    }

    if let Some(dir) = &options.output_dir {
        for (language, track) in results.iter() {
            write_subtitle_file(dir, video_id, language, track.for_format(format), format)?;
        }
        return Ok(());
    }

    for (language, track) in results.iter() {
        let name = language_utils::get_language_name(language)
            .unwrap_or_else(|_| language.to_string());
        println!("==== {} ({}) ====", language, name);
        println!("{}", track.for_format(format));
    }

    Ok(())
}

/// Write one language's subtitles into the output directory
fn write_subtitle_file(
    output_dir: &Path,
    video_id: &str,
    language: &str,
    content: &str,
    format: OutputFormat,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let filename = format!("{}.{}.{}", video_id, language, format.extension());
    let path = output_dir.join(filename);

    fs::write(&path, content)
        .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

    info!("Wrote {:?}", path);
    Ok(())
}
