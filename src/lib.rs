// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # paging-core
//!
//! Page arithmetic for paginated result sets, independent of any database
//! or web framework.
//!
//! ## Features
//!
//! - **Validated page numbers**: page, per-page and offset values that behave
//!   like plain integers
//! - **Page descriptors**: offsets, page counts and neighbours, with the total
//!   inferred from a short last page when possible
//! - **Paginated finders**: wrap any fetch/count pair with pagination
//! - **Link windows**: which page numbers to show, with gaps for long ranges
//!
//! ## Quick Start
//!
//! ```rust
//! use paging_core::links::visible_pages;
//! use paging_core::pagination::PageDescriptor;
//!
//! # fn main() -> paging_core::Result<()> {
//! // Page 3, ten per page, total unknown until the records arrive
//! let mut pager = PageDescriptor::new("3", 10)?;
//! let records: Vec<u32> = (21..=24).collect();
//! pager.populate(records);
//!
//! assert_eq!(pager.offset(), 20);
//! assert_eq!(pager.total_entries(), Some(24));
//!
//! let total_pages = pager.total_pages().unwrap_or(1);
//! let pages = visible_pages(pager.current_page().value(), total_pages, 4, 1);
//! assert_eq!(pages, vec![1, 2, 3]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │        paginate(options, fetch_page, count_total)            │
//! │        PaginateSlice::paginate(options)                      │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬────────────────────┐
//! │     page     │        pagination        │       links        │
//! ├──────────────┼──────────────────────────┼────────────────────┤
//! │ PageNumber   │ PageDescriptor           │ visible_pages      │
//! │ NumericInput │ total inference          │ with_gaps          │
//! │ PageField    │ PageInfo                 │ WindowOptions      │
//! └──────────────┴──────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types
pub mod types;

/// Validated page numbers
pub mod page;

/// Page descriptors and paginated finders
pub mod pagination;

/// Page link windowing
pub mod links;

/// Pagination settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::PaginationSettings;
pub use links::{visible_pages, PageLink, WindowOptions};
pub use page::{to_page_number, NumericInput, PageField, PageNumber};
pub use pagination::{paginate, PageDescriptor, PageInfo, PaginateOptions, PaginateSlice};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
