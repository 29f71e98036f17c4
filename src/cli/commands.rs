//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination arithmetic CLI
#[derive(Parser, Debug)]
#[command(name = "paging-core")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show offset, totals and neighbours for a page
    Page {
        /// Page number (defaults to 1)
        #[arg(short, long)]
        page: Option<String>,

        /// Records per page (defaults to the settings)
        #[arg(long)]
        per_page: Option<String>,

        /// Total number of entries, if known
        #[arg(long)]
        total: Option<String>,

        /// Pretend the page was fetched with this many records
        #[arg(long)]
        items: Option<usize>,
    },

    /// Show the page links a pager would display
    Links {
        /// Current page
        #[arg(long)]
        current: String,

        /// Total number of pages
        #[arg(long)]
        total: u64,

        /// Links on each side of the current page (defaults to the settings)
        #[arg(long)]
        inner: Option<u32>,

        /// Links next to the first and last page (defaults to the settings)
        #[arg(long)]
        outer: Option<u32>,
    },

    /// Show the effective settings
    Settings,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
