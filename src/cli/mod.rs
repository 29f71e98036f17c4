//! CLI module
//!
//! Command-line interface for inspecting page arithmetic.
//!
//! # Commands
//!
//! - `page` - Show offset, totals and neighbours for a page
//! - `links` - Show the page links a pager would display
//! - `settings` - Show the effective settings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
