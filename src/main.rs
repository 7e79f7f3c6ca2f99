// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use rand::rngs::StdRng;
use rand::SeedableRng;

use karafx::app_config::{JobConfig, LogLevel};
use karafx::file_utils;
use karafx::generator::EffectGenerator;
use karafx::style_catalog::StyleCatalog;

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

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate karaoke effect lines from a script (default command)
    #[command(alias = "generate")]
    Generate(GenerateArgs),

    /// Generate shell completions for karafx
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input ASS script containing {\k}-timed dialogue lines
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Output file for the generated effect lines
    #[arg(short, long, default_value = "karafx_out.txt")]
    output: PathBuf,

    /// Configuration file (JSON, or the flat KEY:value hand-off format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only process dialogue lines carrying this style (overrides config)
    #[arg(long)]
    style: Option<String>,

    /// Seed the entry-layer randomness for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// karafx - Multi-layer karaoke effect generator for ASS subtitles
///
/// Reads an ASS script, extracts the {\k}-timed syllables of each dialogue
/// line, and writes one animated override-tag line per syllable and layer
/// (entry, highlight, settle) for a host editor to ingest.
#[derive(Parser, Debug)]
#[command(name = "karafx")]
#[command(version = "0.3.0")]
#[command(about = "Multi-layer karaoke effect generator for ASS subtitles")]
#[command(long_about = "karafx converts {\\k}-timed karaoke dialogue into three-layer animated effect lines.

EXAMPLES:
    karafx song.ass                             # Generate with default effect settings
    karafx -c effect.conf -o fx.txt song.ass    # Use a host hand-off config
    karafx --style Karaoke --seed 7 song.ass    # Deterministic output for one style
    karafx completions bash > karafx.bash       # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input ASS script containing {\k}-timed dialogue lines
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Output file for the generated effect lines
    #[arg(short, long, default_value = "karafx_out.txt")]
    output: PathBuf,

    /// Configuration file (JSON, or the flat KEY:value hand-off format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only process dialogue lines carrying this style (overrides config)
    #[arg(long)]
    style: Option<String>,

    /// Seed the entry-layer randomness for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
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
    // Initialize the logger once with info level by default; the level is
    // updated after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "karafx", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            let script = cli.script.ok_or_else(|| {
                anyhow::anyhow!("SCRIPT is required when no subcommand is specified")
            })?;

            run_generate(GenerateArgs {
                script,
                output: cli.output,
                config: cli.config,
                style: cli.style,
                seed: cli.seed,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // Load the job configuration, if any
    let mut config = match &options.config {
        Some(path) => JobConfig::from_file(path)?,
        None => JobConfig::default(),
    };

    if let Some(style) = options.style {
        config.selected_style = Some(style);
    }

    // Command line log level wins over the config file
    let log_level = options
        .log_level
        .map(LogLevel::from)
        .unwrap_or(config.log_level);
    log::set_max_level(level_filter(log_level));

    let script = file_utils::read_script(&options.script)?;
    let catalog = StyleCatalog::parse(&script);

    if catalog.is_empty() {
        warn!("No styles found in script, using default font metrics");
    }

    let generator = EffectGenerator::new(catalog, &config);

    let lines = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generator.generate(&script, &mut rng)
        }
        None => generator.generate(&script, &mut rand::rng()),
    };

    if lines.is_empty() {
        warn!(
            "No effect lines generated from {} — check the selected style and {{\\k}} timing",
            options.script.display()
        );
    }

    file_utils::write_lines(&options.output, &lines)
        .with_context(|| format!("Failed to write output: {}", options.output.display()))?;

    info!(
        "Wrote {} effect lines to {}",
        lines.len(),
        options.output.display()
    );

    Ok(())
}
