//! Validated page number

use super::types::{NumericInput, PageField, MAX_BIGINT};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Deref, Mul, Sub};
use std::str::FromStr;

/// A page, per-page or offset value that passed validation.
///
/// Behaves like the plain integer it wraps: it compares, orders, formats
/// and serializes as that number. The [`PageField`] tag only matters for
/// validation and error messages, so two page numbers with the same value
/// are equal regardless of their tags.
///
/// ```
/// use paging_core::page::{PageField, PageNumber};
///
/// let page = PageNumber::new("12", PageField::Page).unwrap();
/// assert_eq!(page, 12_u64);
/// assert_eq!(page + 1, 13);
/// assert_eq!(serde_json::to_string(&page).unwrap(), "12");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PageNumber {
    value: u64,
    field: PageField,
}

impl PageNumber {
    /// Largest accepted value
    pub const MAX: u64 = MAX_BIGINT;

    /// The first page
    pub const FIRST: PageNumber = PageNumber {
        value: 1,
        field: PageField::Page,
    };

    /// Parse and validate a raw value for the given field
    pub fn new(value: impl Into<NumericInput>, field: PageField) -> Result<Self> {
        let input = value.into();
        let integer = input
            .to_integer()
            .map_err(|message| Error::invalid_page(field, input.to_string(), message))?;

        let minimum = field.minimum();
        if integer < minimum as i128 {
            let message = if field == PageField::Offset {
                format!("must not be negative, got {integer}")
            } else {
                format!("must be at least {minimum}, got {integer}")
            };
            return Err(Error::invalid_page(field, input.to_string(), message));
        }
        if integer > MAX_BIGINT as i128 {
            return Err(Error::invalid_page(
                field,
                input.to_string(),
                format!("must not exceed {MAX_BIGINT}, got {integer}"),
            ));
        }

        Ok(Self {
            value: integer as u64,
            field,
        })
    }

    /// Parse and validate a raw value as a page
    pub fn page(value: impl Into<NumericInput>) -> Result<Self> {
        Self::new(value, PageField::Page)
    }

    /// Turn anything page-like into a page number.
    ///
    /// An existing `PageNumber` comes back untouched, keeping its tag and
    /// skipping validation; raw values are validated for `field`.
    pub fn coerce(value: impl IntoPageNumber, field: PageField) -> Result<Self> {
        value.into_page_number(field)
    }

    /// Underlying integer
    pub const fn value(self) -> u64 {
        self.value
    }

    /// What this number was validated as
    pub const fn field(self) -> PageField {
        self.field
    }

    /// Offset of the first item on this page, validated as an offset
    pub fn to_offset(self, per_page: u64) -> Result<PageNumber> {
        let offset = (self.value as i128 - 1) * per_page as i128;
        PageNumber::new(offset, PageField::Offset)
    }
}

/// Validate a raw value, or pass an existing page number through unchanged
pub fn to_page_number(value: impl IntoPageNumber, field: PageField) -> Result<PageNumber> {
    value.into_page_number(field)
}

/// Conversion into a validated [`PageNumber`]
pub trait IntoPageNumber {
    /// Validate `self` as `field`
    fn into_page_number(self, field: PageField) -> Result<PageNumber>;

    /// Whether `self` carries no value at all
    fn is_unspecified(&self) -> bool {
        false
    }
}

impl IntoPageNumber for PageNumber {
    fn into_page_number(self, _field: PageField) -> Result<PageNumber> {
        Ok(self)
    }
}

impl IntoPageNumber for &PageNumber {
    fn into_page_number(self, _field: PageField) -> Result<PageNumber> {
        Ok(*self)
    }
}

impl IntoPageNumber for NumericInput {
    fn into_page_number(self, field: PageField) -> Result<PageNumber> {
        PageNumber::new(self, field)
    }

    fn is_unspecified(&self) -> bool {
        self.is_null()
    }
}

impl<T: Into<NumericInput>> IntoPageNumber for Option<T> {
    fn into_page_number(self, field: PageField) -> Result<PageNumber> {
        PageNumber::new(self, field)
    }

    fn is_unspecified(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_into_page_number {
    ($($ty:ty),*) => {
        $(
            impl IntoPageNumber for $ty {
                fn into_page_number(self, field: PageField) -> Result<PageNumber> {
                    PageNumber::new(self, field)
                }
            }
        )*
    };
}

impl_into_page_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, &str, String, &String
);

// ============================================================================
// Integer behaviour
// ============================================================================

impl Deref for PageNumber {
    type Target = u64;

    fn deref(&self) -> &u64 {
        &self.value
    }
}

impl From<PageNumber> for u64 {
    fn from(page: PageNumber) -> Self {
        page.value
    }
}

impl PartialEq for PageNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PageNumber {}

impl Hash for PageNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for PageNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PageNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<u64> for PageNumber {
    fn eq(&self, other: &u64) -> bool {
        self.value == *other
    }
}

impl PartialEq<PageNumber> for u64 {
    fn eq(&self, other: &PageNumber) -> bool {
        *self == other.value
    }
}

impl PartialOrd<u64> for PageNumber {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl PartialOrd<PageNumber> for u64 {
    fn partial_cmp(&self, other: &PageNumber) -> Option<Ordering> {
        self.partial_cmp(&other.value)
    }
}

impl Add<u64> for PageNumber {
    type Output = u64;

    fn add(self, rhs: u64) -> u64 {
        self.value + rhs
    }
}

impl Sub<u64> for PageNumber {
    type Output = u64;

    fn sub(self, rhs: u64) -> u64 {
        self.value - rhs
    }
}

impl Mul<u64> for PageNumber {
    type Output = u64;

    fn mul(self, rhs: u64) -> u64 {
        self.value * rhs
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for PageNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PageNumber::page(s)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for PageNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.value)
    }
}

/// Wire shapes accepted when deserializing a page number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageNumber {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for PageNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let input = match RawPageNumber::deserialize(deserializer)? {
            RawPageNumber::Unsigned(value) => NumericInput::from(value),
            RawPageNumber::Signed(value) => NumericInput::from(value),
            RawPageNumber::Text(value) => NumericInput::from(value),
        };
        PageNumber::page(input).map_err(serde::de::Error::custom)
    }
}
