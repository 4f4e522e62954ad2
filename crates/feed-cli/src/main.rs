//! # feedctl entry point
//!
//! Parses command-line arguments, loads configuration, initialises tracing
//! and dispatches to the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feed_cli::config::{CliConfig, LogFormat};
use feed_cli::link::{run_link, LinkArgs};
use feed_cli::schemas::{run_check_schemas, run_schemas};
use feed_cli::validate::{run_validate, ValidateArgs};
use feed_cli::{build_validator, EXIT_OPERATIONAL};

/// Validate feed documents and links against the feed schemas.
#[derive(Parser, Debug)]
#[command(name = "feedctl", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory of *.schema.json files to use instead of the embedded
    /// schemas. Overrides FEED_SCHEMA_DIR.
    #[arg(long, global = true)]
    schema_dir: Option<PathBuf>,

    /// Log output format: text or json. Overrides FEED_LOG_FORMAT.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate JSON or YAML documents as an element kind.
    Validate(ValidateArgs),

    /// Compile every schema and check every element kind is bound.
    CheckSchemas,

    /// Check a URL against a link type.
    Link(LinkArgs),

    /// List the available schema identifiers.
    Schemas,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.with_overrides(cli.schema_dir.clone(), cli.log_format),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_OPERATIONAL);
        }
    };

    init_tracing(cli.verbose, config.log_format);
    tracing::debug!(?config, "feedctl starting");

    let result = build_validator(&config).and_then(|validator| {
        let mut stdout = std::io::stdout().lock();
        match &cli.command {
            Commands::Validate(args) => run_validate(args, &validator, &mut stdout),
            Commands::CheckSchemas => run_check_schemas(&validator, &mut stdout),
            Commands::Link(args) => run_link(args, &mut stdout),
            Commands::Schemas => run_schemas(&validator, &mut stdout),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the verbosity flag picks the level.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
