//! Page descriptor
//!
//! A page of records together with the numbers a pager needs.

use crate::error::{Error, Result};
use crate::page::{IntoPageNumber, NumericInput, PageField, PageNumber, MAX_BIGINT};
use serde::Serialize;
use std::ops::Deref;
use tracing::debug;

/// One page of a larger result set.
///
/// Holds the current page, the page size and, once known, the total number
/// of entries. The records themselves are supplied after construction with
/// [`populate`](Self::populate); when the total was not given up front,
/// populating a short page settles it without a separate count.
///
/// ```
/// use paging_core::pagination::PageDescriptor;
///
/// let mut pager = PageDescriptor::new(2, 5).unwrap();
/// pager.populate(vec!["f", "g", "h"]);
///
/// assert_eq!(pager.offset(), 5);
/// assert_eq!(pager.total_entries(), Some(8));
/// assert_eq!(pager.total_pages(), Some(2));
/// assert_eq!(pager.next_page(), None);
/// ```
///
/// A descriptor is mutated only through `&mut self`, so it cannot be
/// populated from two threads at once; shared references are read-only.
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor<T> {
    current_page: PageNumber,
    per_page: PageNumber,
    offset: u64,
    total_entries: Option<u64>,
    total_pages: Option<u64>,
    items: Vec<T>,
}

/// Page metadata without the records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page (1-based)
    pub current_page: u64,
    /// Records per page
    pub per_page: u64,
    /// Total records, if known
    pub total_entries: Option<u64>,
    /// Total pages, if the total is known
    pub total_pages: Option<u64>,
    /// Records skipped before this page
    pub offset: u64,
    /// Previous page, absent on the first page
    pub previous_page: Option<u64>,
    /// Next page, absent on the last page or when the total is unknown
    pub next_page: Option<u64>,
    /// Whether the current page lies past the last page
    pub out_of_bounds: bool,
}

impl<T> PageDescriptor<T> {
    /// Create a descriptor with an unknown total.
    ///
    /// `page` is required: a missing page is an invalid page, not page 1.
    /// Use [`with_default_page`](Self::with_default_page) when a missing page
    /// means "unspecified".
    pub fn new(page: impl IntoPageNumber, per_page: impl IntoPageNumber) -> Result<Self> {
        Self::with_total(page, per_page, NumericInput::Null)
    }

    /// Create a descriptor with a known total.
    ///
    /// A null `total` leaves the total unknown; anything else must be a
    /// non-negative integer no larger than [`MAX_BIGINT`].
    pub fn with_total(
        page: impl IntoPageNumber,
        per_page: impl IntoPageNumber,
        total: impl Into<NumericInput>,
    ) -> Result<Self> {
        let current_page = page.into_page_number(PageField::Page)?;
        let per_page = per_page.into_page_number(PageField::PerPage)?;
        let offset = current_page.to_offset(per_page.value())?.value();

        let mut pager = Self {
            current_page,
            per_page,
            offset,
            total_entries: None,
            total_pages: None,
            items: Vec::new(),
        };

        let total = total.into();
        if !total.is_null() {
            pager.assign_total(parse_total(&total)?);
        }
        Ok(pager)
    }

    /// Create a descriptor where a missing page means the first page
    pub fn with_default_page<P: IntoPageNumber>(
        page: Option<P>,
        per_page: impl IntoPageNumber,
        total: impl Into<NumericInput>,
    ) -> Result<Self> {
        match page {
            Some(page) if !page.is_unspecified() => Self::with_total(page, per_page, total),
            _ => Self::with_total(PageNumber::FIRST, per_page, total),
        }
    }

    /// Create a descriptor and hand it to `fill` before returning it.
    ///
    /// ```
    /// use paging_core::pagination::PageDescriptor;
    ///
    /// let pager = PageDescriptor::create(1, 10, 3, |pager| {
    ///     pager.populate(vec![1, 2, 3]);
    ///     Ok(())
    /// })
    /// .unwrap();
    /// assert_eq!(pager.len(), 3);
    /// ```
    pub fn create<F>(
        page: impl IntoPageNumber,
        per_page: impl IntoPageNumber,
        total: impl Into<NumericInput>,
        fill: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut pager = Self::with_total(page, per_page, total)?;
        fill(&mut pager)?;
        Ok(pager)
    }

    // ========================================================================
    // Population
    // ========================================================================

    /// Store the records for this page and return them.
    ///
    /// If the total is still unknown it is inferred when possible:
    /// a page shorter than `per_page` must be the last one, and an empty
    /// first page means there are no entries at all. A full page, or an
    /// empty page past the first, leaves the total unknown.
    ///
    /// Calling this again replaces the records; the inference only runs
    /// while the total is still unknown.
    pub fn populate(&mut self, items: Vec<T>) -> &[T] {
        self.items = items;

        if self.total_entries.is_none() {
            let len = self.items.len() as u64;
            if len < self.per_page.value() && (self.current_page.value() == 1 || len > 0) {
                let total = self.offset + len;
                debug!(
                    page = self.current_page.value(),
                    len, total, "Inferred total entries from a short page"
                );
                self.assign_total(total);
            }
        }

        &self.items
    }

    /// Set the total number of entries
    pub fn set_total_entries(&mut self, total: impl Into<NumericInput>) -> Result<()> {
        let total = total.into();
        if total.is_null() {
            return Err(Error::argument("total_entries is required"));
        }
        self.assign_total(parse_total(&total)?);
        Ok(())
    }

    fn assign_total(&mut self, total: u64) {
        self.total_entries = Some(total);
        self.total_pages = Some(if total == 0 {
            1
        } else {
            total.div_ceil(self.per_page.value())
        });
    }

    // ========================================================================
    // Readers
    // ========================================================================

    /// Current page number (1-based)
    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    /// Records per page
    pub fn per_page(&self) -> PageNumber {
        self.per_page
    }

    /// Total entries across all pages, if known
    pub fn total_entries(&self) -> Option<u64> {
        self.total_entries
    }

    /// Number of pages, if the total is known; never less than 1
    pub fn total_pages(&self) -> Option<u64> {
        self.total_pages
    }

    /// Records preceding this page
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Previous page, unless this is the first
    pub fn previous_page(&self) -> Option<u64> {
        let page = self.current_page.value();
        (page > 1).then(|| page - 1)
    }

    /// Next page, if the total is known and this is not the last page
    pub fn next_page(&self) -> Option<u64> {
        self.total_pages
            .filter(|&total_pages| self.current_page < total_pages)
            .map(|_| self.current_page.value() + 1)
    }

    /// Check if the current page lies past the last page.
    ///
    /// Always false while the total is unknown.
    pub fn out_of_bounds(&self) -> bool {
        self.total_pages
            .is_some_and(|total_pages| self.current_page > total_pages)
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.current_page.value() == 1
    }

    /// Check if this is known to be the last page
    pub fn is_last_page(&self) -> bool {
        self.total_pages == Some(self.current_page.value())
    }

    /// Page metadata without the records
    pub fn info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page.value(),
            per_page: self.per_page.value(),
            total_entries: self.total_entries,
            total_pages: self.total_pages,
            offset: self.offset,
            previous_page: self.previous_page(),
            next_page: self.next_page(),
            out_of_bounds: self.out_of_bounds(),
        }
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Records on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take the records, dropping the metadata
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Convert the records while keeping the page metadata
    pub fn map_items<U, F>(self, f: F) -> PageDescriptor<U>
    where
        F: FnMut(T) -> U,
    {
        PageDescriptor {
            current_page: self.current_page,
            per_page: self.per_page,
            offset: self.offset,
            total_entries: self.total_entries,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Validate an explicit total entry count
fn parse_total(total: &NumericInput) -> Result<u64> {
    let value = total
        .to_integer()
        .map_err(|message| Error::argument(format!("invalid total_entries {total}: {message}")))?;

    if value < 0 {
        return Err(Error::argument(format!(
            "total_entries must not be negative, got {value}"
        )));
    }
    if value > MAX_BIGINT as i128 {
        return Err(Error::argument(format!(
            "total_entries must not exceed {MAX_BIGINT}, got {value}"
        )));
    }
    Ok(value as u64)
}

impl<T> Deref for PageDescriptor<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PageDescriptor<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PageDescriptor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
