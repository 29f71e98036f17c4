//! Page number module
//!
//! Validated page, per-page and offset values.
//!
//! # Overview
//!
//! Every raw value that reaches the pagination layer (a query-string
//! parameter, a config value, a plain integer) passes through [`PageNumber`]
//! first. Validation is eager: an invalid value never becomes a page number,
//! and is never clamped into range.

mod number;
mod types;

pub use number::{to_page_number, IntoPageNumber, PageNumber};
pub use types::{NumericInput, PageField, MAX_BIGINT};

#[cfg(test)]
mod tests;
