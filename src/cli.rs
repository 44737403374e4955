//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use rfc_clean::config::Overrides;
use rfc_clean::output::OutputMode;

/// rfc-clean - Strip page headers and footers from Internet-Drafts
#[derive(Parser, Debug)]
#[command(
    name = "rfc-clean",
    version,
    about = "Clean RFC-style text files by removing headers and footers",
    long_about = "Clean RFC-style text files by removing headers and footers.\n\n\
                  Every <input_dir>/<topic>/*.txt file is mirrored into <output_dir>.\n\
                  Files named rfc* are copied verbatim; drafts have their running\n\
                  page headers and footers stripped."
)]
pub struct Cli {
    /// Path to the directory of topic folders [default: "GreenAI Data"]
    #[arg(long = "input_dir", visible_alias = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Path to the output directory for cleaned files [default: "GreenAI Data Cleaned"]
    #[arg(long = "output_dir", visible_alias = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file with run settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop at the first file that fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let overrides = Overrides {
        input_dir: cli.input_dir,
        output_dir: cli.output_dir,
        fail_fast: cli.fail_fast,
    };

    commands::process(cli.config.as_deref(), overrides, output_mode)
}
