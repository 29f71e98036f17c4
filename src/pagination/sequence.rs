//! Pagination for in-memory sequences

use super::collection::PageDescriptor;
use super::finder::PaginateOptions;
use crate::config::{global_settings, PaginationSettings};
use crate::error::Result;
use crate::page::NumericInput;

/// Paginate an ordered in-memory sequence.
///
/// The page defaults to 1, the page size to the settings, and the total to
/// the length of the sequence. A total given in the options wins over the
/// length, which lets a caller page through a prefix it already holds.
///
/// ```
/// use paging_core::pagination::{PaginateOptions, PaginateSlice};
///
/// let letters = ["a", "b", "c", "d", "e"];
/// let pager = letters.paginate(&PaginateOptions::new().page(2).per_page(2)).unwrap();
///
/// assert_eq!(pager.items(), &["c", "d"]);
/// assert_eq!(pager.total_pages(), Some(3));
/// ```
pub trait PaginateSlice<T> {
    /// Paginate using the process-wide settings
    fn paginate(&self, options: &PaginateOptions) -> Result<PageDescriptor<T>> {
        self.paginate_with(&global_settings(), options)
    }

    /// Paginate using explicit settings
    fn paginate_with(
        &self,
        settings: &PaginationSettings,
        options: &PaginateOptions,
    ) -> Result<PageDescriptor<T>>;
}

impl<T: Clone> PaginateSlice<T> for [T] {
    fn paginate_with(
        &self,
        settings: &PaginationSettings,
        options: &PaginateOptions,
    ) -> Result<PageDescriptor<T>> {
        options.check_exclusive()?;

        let total = options
            .total_entries
            .clone()
            .unwrap_or_else(|| NumericInput::from(self.len()));

        let mut pager = PageDescriptor::with_default_page(
            options.page.clone(),
            options.resolve_per_page(settings),
            total,
        )?;

        let start = usize::try_from(pager.offset()).map_or(self.len(), |o| o.min(self.len()));
        let per_page = usize::try_from(pager.per_page().value()).unwrap_or(usize::MAX);
        let end = start.saturating_add(per_page).min(self.len());

        pager.populate(self[start..end].to_vec());
        Ok(pager)
    }
}
