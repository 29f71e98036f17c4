//! Visible page computation

use crate::config::{DEFAULT_INNER_WINDOW, DEFAULT_OUTER_WINDOW};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Link window sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOptions {
    /// Links shown on each side of the current page
    pub inner_window: u32,
    /// Links shown next to the first and last page
    pub outer_window: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            inner_window: DEFAULT_INNER_WINDOW,
            outer_window: DEFAULT_OUTER_WINDOW,
        }
    }
}

impl WindowOptions {
    /// Create window options
    pub fn new(inner_window: u32, outer_window: u32) -> Self {
        Self {
            inner_window,
            outer_window,
        }
    }
}

/// One entry of a rendered pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    /// Link to a page
    Page(u64),
    /// Two or more hidden pages
    Gap,
}

impl PageLink {
    /// Check if this is a gap marker
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// Page number, if this is a page link
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Gap => None,
        }
    }
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Gap => f.write_str("…"),
        }
    }
}

/// Ordered page numbers a pager should display.
///
/// The inner window is `current - inner ..= current + inner`, slid back
/// inside `1..=total` when it overflows either end so it keeps its width
/// whenever there are enough pages. Everything else is visible except the
/// runs between the outer windows and the inner window, which are dropped
/// when they contain at least two pages.
///
/// ```
/// use paging_core::links::visible_pages;
///
/// assert_eq!(
///     visible_pages(10, 20, 2, 1),
///     vec![1, 2, 8, 9, 10, 11, 12, 19, 20]
/// );
/// assert_eq!(visible_pages(1, 1, 4, 1), vec![1]);
/// ```
pub fn visible_pages(
    current_page: u64,
    total_pages: u64,
    inner_window: u32,
    outer_window: u32,
) -> Vec<u64> {
    if total_pages == 0 {
        return Vec::new();
    }

    // Signed arithmetic keeps the window shifts simple near either edge.
    let total = i128::from(total_pages);
    let current = i128::from(current_page);
    let inner = i128::from(inner_window);
    let outer = i128::from(outer_window);

    let mut window_from = current - inner;
    let mut window_to = current + inner;

    if window_to > total {
        window_from -= window_to - total;
        window_to = total;
    }
    if window_from < 1 {
        window_to += 1 - window_from;
        window_from = 1;
        window_to = window_to.min(total);
    }

    // Gaps are half-open ranges of hidden pages
    let left_gap = (2 + outer)..window_from;
    let right_gap = (window_to + 1)..(total - outer);

    let hides_left = left_gap.end - left_gap.start > 1;
    let hides_right = right_gap.end - right_gap.start > 1;

    trace!(
        current_page,
        total_pages,
        window_from = window_from as u64,
        window_to = window_to as u64,
        hides_left,
        hides_right,
        "Computed page link window"
    );

    let left_to = if hides_left {
        left_gap.start - 1
    } else {
        window_from - 1
    };
    let right_from = if hides_right {
        right_gap.end
    } else {
        window_to + 1
    };

    (1..=left_to)
        .chain(window_from..=window_to)
        .chain(right_from..=total)
        .map(|page| page as u64)
        .collect()
}

/// Insert a gap marker between non-adjacent page numbers
pub fn with_gaps(pages: &[u64]) -> Vec<PageLink> {
    let mut links = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u64> = None;

    for &page in pages {
        if let Some(prev) = previous {
            if page.saturating_sub(prev) > 1 {
                links.push(PageLink::Gap);
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }

    links
}

/// Visible pages with gap markers, ready for a renderer
pub fn page_links(current_page: u64, total_pages: u64, options: WindowOptions) -> Vec<PageLink> {
    with_gaps(&visible_pages(
        current_page,
        total_pages,
        options.inner_window,
        options.outer_window,
    ))
}
