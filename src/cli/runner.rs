//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{global_settings, load_settings, PaginationSettings};
use crate::error::{Result, ResultExt};
use crate::links::{visible_pages, with_gaps, PageLink, WindowOptions};
use crate::page::{NumericInput, PageNumber};
use crate::pagination::{PageDescriptor, PageInfo};
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        let settings = self.load_settings()?;

        match &self.cli.command {
            Commands::Page {
                page,
                per_page,
                total,
                items,
            } => self.page(
                &settings,
                page.as_deref(),
                per_page.as_deref(),
                total.as_deref(),
                *items,
            ),
            Commands::Links {
                current,
                total,
                inner,
                outer,
            } => self.links(&settings, current, *total, *inner, *outer),
            Commands::Settings => self.settings(&settings),
        }
    }

    /// Settings from `--config`, or the process-wide ones
    fn load_settings(&self) -> Result<PaginationSettings> {
        match &self.cli.config {
            Some(path) => load_settings(path)
                .with_context(|| format!("Failed to load settings from {}", path.display())),
            None => Ok(global_settings()),
        }
    }

    fn page(
        &self,
        settings: &PaginationSettings,
        page: Option<&str>,
        per_page: Option<&str>,
        total: Option<&str>,
        items: Option<usize>,
    ) -> Result<String> {
        let per_page =
            per_page.map_or_else(|| NumericInput::from(settings.per_page), NumericInput::from);
        let mut pager = PageDescriptor::with_default_page(page, per_page, total)?;

        if let Some(count) = items {
            let count = count.min(pager.per_page().value() as usize);
            debug!(count, "Simulating a fetched page");
            pager.populate(vec![(); count]);
        }

        let info = pager.info();
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&info)?),
            OutputFormat::Pretty => Ok(format_page_info(&info)),
        }
    }

    fn links(
        &self,
        settings: &PaginationSettings,
        current: &str,
        total: u64,
        inner: Option<u32>,
        outer: Option<u32>,
    ) -> Result<String> {
        let current = PageNumber::page(current)?;
        let window = WindowOptions::new(
            inner.unwrap_or(settings.inner_window),
            outer.unwrap_or(settings.outer_window),
        );

        let pages = visible_pages(
            current.value(),
            total,
            window.inner_window,
            window.outer_window,
        );
        let links = with_gaps(&pages);

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "current_page": current,
                "total_pages": total,
                "window": window,
                "pages": pages,
                "links": links,
            }))?),
            OutputFormat::Pretty => Ok(format_links(&links, current.value())),
        }
    }

    fn settings(&self, settings: &PaginationSettings) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(settings)?),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(settings)?),
        }
    }
}

fn format_page_info(info: &PageInfo) -> String {
    let unknown = || "unknown".to_string();
    let none = || "-".to_string();

    let total_pages = info.total_pages.map_or_else(unknown, |n| n.to_string());
    let mut lines = vec![format!(
        "page {} of {} (per page {}, offset {})",
        info.current_page, total_pages, info.per_page, info.offset
    )];
    lines.push(format!(
        "total entries: {}",
        info.total_entries.map_or_else(unknown, |n| n.to_string())
    ));
    lines.push(format!(
        "previous: {}",
        info.previous_page.map_or_else(none, |n| n.to_string())
    ));
    lines.push(format!(
        "next: {}",
        info.next_page.map_or_else(none, |n| n.to_string())
    ));
    if info.out_of_bounds {
        lines.push("out of bounds".to_string());
    }
    lines.join("\n")
}

fn format_links(links: &[PageLink], current: u64) -> String {
    links
        .iter()
        .map(|link| match link {
            PageLink::Page(page) if *page == current => format!("[{page}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
