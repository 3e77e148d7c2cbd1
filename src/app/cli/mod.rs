//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ConversionReport, ConvertOptions};
use crate::domain::paths::DEFAULT_INPUT_DIR;
use crate::domain::{AppError, LayoutKind};

#[derive(Parser)]
#[command(name = "qapdf")]
#[command(version)]
#[command(
    about = "Convert question/answer GIF pairs into one PDF per question",
    long_about = None
)]
struct Cli {
    /// Directory holding `<id>.gif` questions and `<id>s.gif` answers
    #[arg(default_value = DEFAULT_INPUT_DIR)]
    dir: PathBuf,
    /// Convert only this question identifier
    id: Option<String>,
    /// Output directory (overrides `output_dir` in the config file)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,
    /// Config file (defaults to `qapdf.toml` inside DIR when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Use the compact fixed-offset page layout
    #[arg(long)]
    simple: bool,
    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run_convert(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_convert(cli: Cli) -> Result<i32, AppError> {
    let options = ConvertOptions {
        input_dir: cli.dir,
        output_dir: cli.output,
        config_path: cli.config,
        layout: cli.simple.then_some(LayoutKind::Compact),
    };

    let report = match cli.id.as_deref() {
        Some(id) => api::convert_one(&options, id)?,
        None => api::convert_all(&options)?,
    };

    emit(&report, cli.format)?;
    Ok(report.exit_code())
}

fn emit(report: &ConversionReport, format: ReportFormat) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => report.emit(),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
