// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use subtool::app_config::{self, Config};
use subtool::app_controller::Controller;
use subtool::file_utils::FileManager;
use subtool::segment;
use subtool::subtitle_processor::SubtitleFormat;
use subtool::timing;

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
    Ass,
    Sub,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
            CliSubtitleFormat::Ass => SubtitleFormat::Ass,
            CliSubtitleFormat::Sub => SubtitleFormat::Sub,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render subtitle files from an SRT or segments JSON file (or a folder of them)
    Render(RenderArgs),

    /// Change the start and/or end of a single segment
    Retime(RetimeArgs),

    /// Generate shell completions for subtool
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input SRT / segments JSON file, or a directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output directory (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output formats, comma separated
    #[arg(short = 'F', long = "format", value_enum, value_delimiter = ',')]
    formats: Vec<CliSubtitleFormat>,

    /// Frame rate for MicroDVD output
    #[arg(long)]
    fps: Option<f64>,

    /// Seconds added to every segment (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<f64>,

    /// Duration multiplier (0.1 to 5.0)
    #[arg(long)]
    scale: Option<f64>,

    /// Language code of the segment text (e.g., 'en', 'es', 'fr')
    #[arg(short = 'L', long)]
    language: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct RetimeArgs {
    /// Input SRT or segments JSON file
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Zero-based index of the segment to change
    #[arg(short, long)]
    index: usize,

    /// New start time in seconds
    #[arg(short, long)]
    start: Option<f64>,

    /// New end time in seconds
    #[arg(short, long)]
    end: Option<f64>,

    /// Output format
    #[arg(short = 'F', long = "format", value_enum, default_value = "srt")]
    format: CliSubtitleFormat,

    /// Write the retimed segments as JSON instead of a subtitle document
    #[arg(long)]
    json: bool,

    /// Frame rate for MicroDVD output
    #[arg(long)]
    fps: Option<f64>,

    /// Output file (stdout when omitted)
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subtool - subtitle files from transcribed speech
///
/// Renders timed speech segments as SRT, WebVTT, ASS or MicroDVD subtitles,
/// with global and per-segment timing adjustments.
#[derive(Parser, Debug)]
#[command(name = "subtool")]
#[command(version)]
#[command(about = "Subtitle generation and retiming for transcribed video")]
#[command(long_about = "subtool renders timed speech segments as subtitle files and adjusts their timing.

EXAMPLES:
    subtool render talk.json                        # Render with the formats from conf.json
    subtool render talk.srt -F vtt,ass,sub --fps 25 # Convert an SRT to three formats
    subtool render talk.srt --offset -1.5 -f        # Shift everything 1.5s earlier
    subtool render talk.json --scale 1.2            # Make every segment 20% longer
    subtool render ./transcripts/                   # Process a whole directory
    subtool retime talk.srt -i 3 -s 12.0 -e 14.5    # Retime the fourth segment to stdout
    subtool retime talk.json -i 0 -e 2.0 --json     # Retime and keep the segments as JSON
    subtool completions bash > subtool.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

INPUTS:
    .srt   - SubRip documents (malformed blocks are skipped)
    .json  - a list of {start, end, text} segments, or an object with a
             `segments` list such as a transcription service response")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

fn main() -> Result<()> {
    // Accept everything here; log::set_max_level does the actual filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subtool", &mut std::io::stdout());
            Ok(())
        }
        Commands::Render(args) => run_render(args),
        Commands::Retime(args) => run_retime(args),
    }
}

/// Load config and apply the log level (CLI flag wins over config)
fn load_config(config_path: &str, log_level: Option<&CliLogLevel>) -> Result<Config> {
    if let Some(level) = log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(config_path)?;

    if let Some(level) = log_level {
        config.log_level = level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

fn run_render(options: RenderArgs) -> Result<()> {
    let mut config = load_config(&options.config_path, options.log_level.as_ref())?;

    // Override config with CLI options if provided
    if !options.formats.is_empty() {
        config.output_formats = options.formats.iter().map(|f| (*f).into()).collect();
    }
    if let Some(fps) = options.fps {
        config.frame_rate = fps;
    }
    if let Some(offset) = options.offset {
        config.timing.offset_seconds = offset;
    }
    if let Some(scale) = options.scale {
        config.timing.duration_scale = scale;
    }
    if let Some(language) = &options.language {
        config.language = language.clone();
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        let written = controller.run(&options.input_path, &output_dir, options.force_overwrite)?;
        info!("Done: {} file(s) written", written.len());
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            return Err(anyhow!("--output-dir is not supported for directory input; outputs are written next to each file"));
        }
        controller.run_folder(&options.input_path, options.force_overwrite)?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn run_retime(options: RetimeArgs) -> Result<()> {
    let config = load_config(&options.config_path, options.log_level.as_ref())?;
    let fps = options.fps.unwrap_or(config.frame_rate);
    let controller = Controller::with_config(config)?;

    let segments = controller.load_segments(&options.input_path)?;
    let retimed = timing::adjust_segment_timing(&segments, options.index, options.start, options.end)
        .with_context(|| format!("Failed to retime {:?}", options.input_path))?;

    let document = if options.json {
        segment::segments_to_json(&retimed)?
    } else {
        let format: SubtitleFormat = options.format.into();
        format.render(&retimed, fps)
    };

    match &options.output {
        Some(path) => {
            FileManager::write_to_file(path, &document)?;
            info!("Wrote {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
