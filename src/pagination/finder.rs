//! Paginated finders
//!
//! Wraps any "fetch a window of records" function with pagination: the
//! caller supplies how to fetch `limit` records starting at `offset` and how
//! to count everything, and [`paginate`] decides which of the two to call.

use super::collection::PageDescriptor;
use crate::config::{global_settings, PaginationSettings};
use crate::error::{Error, Result};
use crate::page::{NumericInput, PageNumber};
use tracing::debug;

/// When to run the count query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountStrategy {
    /// Count only when the fetched page cannot settle the total
    #[default]
    Auto,
    /// Always count, even if the fetched page settled the total
    Always,
    /// Never count; the total may stay unknown
    Skip,
}

/// Options for a paginated query
#[derive(Debug, Clone, Default)]
pub struct PaginateOptions {
    /// Requested page; required by [`paginate`]
    pub page: Option<NumericInput>,
    /// Records per page; falls back to the settings
    pub per_page: Option<NumericInput>,
    /// Known total, skipping the count query
    pub total_entries: Option<NumericInput>,
    /// How to count; cannot be combined with `total_entries`
    pub count: Option<CountStrategy>,
}

impl PaginateOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested page
    #[must_use]
    pub fn page(mut self, page: impl Into<NumericInput>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Set records per page
    #[must_use]
    pub fn per_page(mut self, per_page: impl Into<NumericInput>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    /// Set a known total
    #[must_use]
    pub fn total_entries(mut self, total: impl Into<NumericInput>) -> Self {
        self.total_entries = Some(total.into());
        self
    }

    /// Set the count strategy
    #[must_use]
    pub fn count(mut self, strategy: CountStrategy) -> Self {
        self.count = Some(strategy);
        self
    }

    /// Page size from the options, or from `settings` when not given
    pub(crate) fn resolve_per_page(&self, settings: &PaginationSettings) -> NumericInput {
        self.per_page
            .clone()
            .unwrap_or_else(|| NumericInput::from(settings.per_page))
    }

    pub(crate) fn check_exclusive(&self) -> Result<()> {
        if self.total_entries.is_some() && self.count.is_some() {
            return Err(Error::argument(
                "total_entries and count cannot be given together",
            ));
        }
        Ok(())
    }
}

/// Run a paginated query using the process-wide settings.
///
/// `fetch_page` receives `(offset, limit)`. `count_total` is only called
/// when the total is neither given nor settled by the fetched page (see
/// [`CountStrategy`]).
///
/// ```
/// use paging_core::pagination::{paginate, PaginateOptions};
///
/// let rows: Vec<u32> = (1..=23).collect();
/// let options = PaginateOptions::new().page(3).per_page(10);
///
/// let pager = paginate(
///     &options,
///     |offset, limit| {
///         Ok::<_, paging_core::Error>(
///             rows.iter().skip(offset as usize).take(limit as usize).copied().collect(),
///         )
///     },
///     || -> paging_core::Result<usize> { unreachable!("short page settles the total") },
/// )
/// .unwrap();
///
/// assert_eq!(pager.items(), &[21, 22, 23]);
/// assert_eq!(pager.total_entries(), Some(23));
/// ```
pub fn paginate<T, F, C, N, E>(
    options: &PaginateOptions,
    fetch_page: F,
    count_total: C,
) -> Result<PageDescriptor<T>>
where
    F: FnOnce(u64, u64) -> std::result::Result<Vec<T>, E>,
    C: FnOnce() -> std::result::Result<N, E>,
    N: Into<NumericInput>,
    E: Into<Error>,
{
    paginate_with(&global_settings(), options, fetch_page, count_total)
}

/// Run a paginated query with explicit settings
pub fn paginate_with<T, F, C, N, E>(
    settings: &PaginationSettings,
    options: &PaginateOptions,
    fetch_page: F,
    count_total: C,
) -> Result<PageDescriptor<T>>
where
    F: FnOnce(u64, u64) -> std::result::Result<Vec<T>, E>,
    C: FnOnce() -> std::result::Result<N, E>,
    N: Into<NumericInput>,
    E: Into<Error>,
{
    let page = options
        .page
        .clone()
        .ok_or_else(|| Error::argument("page parameter required"))?;
    options.check_exclusive()?;

    let total = options.total_entries.clone().unwrap_or_default();
    let mut pager =
        PageDescriptor::with_total(page, options.resolve_per_page(settings), total)?;

    let offset = pager.offset();
    let limit = pager.per_page().value();
    debug!(offset, limit, "Fetching page window");
    let items = fetch_page(offset, limit).map_err(Into::into)?;
    pager.populate(items);

    let strategy = options.count.unwrap_or_default();
    let needs_count = match strategy {
        CountStrategy::Always => true,
        CountStrategy::Auto => pager.total_entries().is_none(),
        CountStrategy::Skip => false,
    };

    if needs_count {
        debug!(?strategy, "Counting total entries");
        let total = count_total().map_err(Into::into)?;
        pager.set_total_entries(total)?;
    }

    Ok(pager)
}

/// Like [`paginate`], but a missing page means the first page
pub fn paginate_or_first<T, F, C, N, E>(
    options: &PaginateOptions,
    fetch_page: F,
    count_total: C,
) -> Result<PageDescriptor<T>>
where
    F: FnOnce(u64, u64) -> std::result::Result<Vec<T>, E>,
    C: FnOnce() -> std::result::Result<N, E>,
    N: Into<NumericInput>,
    E: Into<Error>,
{
    if options.page.as_ref().is_some_and(|page| !page.is_null()) {
        return paginate(options, fetch_page, count_total);
    }

    let options = PaginateOptions {
        page: Some(NumericInput::from(PageNumber::FIRST.value())),
        ..options.clone()
    };
    paginate(&options, fetch_page, count_total)
}
