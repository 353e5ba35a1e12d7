//! Configuration management for the SIF language server and checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Keyword dictionary file locations
//! - Logger setup

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Options shared by the language server and the batch checker
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Extra keyword dictionary files, merged over the built-in one
    #[arg(
        long = "keywords",
        value_name = "PATH",
        help = "Additional keyword dictionary (JSON or TOML), may be repeated"
    )]
    pub keywords: Vec<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Command-line arguments for the SIF language server
#[derive(Debug, Parser)]
#[command(name = "sif-ls")]
#[command(about = "Language server for Elmer solver input files")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Output format of the batch checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for the batch checker
#[derive(Debug, Parser)]
#[command(name = "sif-check")]
#[command(about = "Report unknown keywords in Elmer solver input files")]
#[command(version)]
pub struct CheckArgs {
    /// Files to validate
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Dictionary files in the user config directory, loaded when present
    pub user_keyword_files: Vec<PathBuf>,
    /// Dictionary files given on the command line
    pub keyword_files: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Self::from_common(args.common)
    }

    pub fn from_common(common: CommonArgs) -> Result<Self> {
        let mut user_keyword_files = Vec::new();

        // ~/.config/sif-ls/keywords.{json,toml}
        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join("sif-ls");
            user_keyword_files.push(dir.join("keywords.json"));
            user_keyword_files.push(dir.join("keywords.toml"));
        }

        Ok(Config {
            user_keyword_files,
            keyword_files: common.keywords,
            log_level: common.log_level,
        })
    }

    /// Install the stderr logger. `RUST_LOG` wins over `--log-level`.
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // A logger may already be installed (tests, embedding)
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
