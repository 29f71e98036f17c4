//! Page link windowing
//!
//! Decides which page numbers a pager should show.
//!
//! # Overview
//!
//! A pager shows the first and last few pages (the outer window) and a
//! run of pages around the current one (the inner window). Runs of two or
//! more pages between those windows are hidden and drawn as a single gap;
//! a lone hidden page is shown instead, since a gap marker would take the
//! same room.
//!
//! ```text
//! current = 10, total = 20, inner = 2, outer = 1
//!
//!   1 2 … 8 9 [10] 11 12 … 19 20
//! ```

mod window;

pub use window::{page_links, visible_pages, with_gaps, PageLink, WindowOptions};

#[cfg(test)]
mod tests;
