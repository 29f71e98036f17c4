//! Pagination module
//!
//! Supports: page descriptors, paginated finders, in-memory sequences
//!
//! # Overview
//!
//! A [`PageDescriptor`] knows which page is being shown and how large pages
//! are. It learns the total number of entries either up front, from a short
//! last page, or from an explicit count. [`paginate`] drives that flow for
//! any fetch/count pair, and [`PaginateSlice`] does the same for data that is
//! already in memory.

mod collection;
mod finder;
mod sequence;

pub use collection::{PageDescriptor, PageInfo};
pub use finder::{paginate, paginate_or_first, paginate_with, CountStrategy, PaginateOptions};
pub use sequence::PaginateSlice;
