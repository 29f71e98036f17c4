//! Raw page input and field tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value a page or offset may take (signed 64-bit maximum).
pub const MAX_BIGINT: u64 = i64::MAX as u64;

/// Which quantity a [`PageNumber`](super::PageNumber) stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageField {
    /// 1-indexed page number
    #[default]
    Page,
    /// Page size
    PerPage,
    /// 0-indexed item offset
    Offset,
}

impl PageField {
    /// Smallest accepted value for this field
    pub const fn minimum(self) -> u64 {
        match self {
            Self::Offset => 0,
            Self::Page | Self::PerPage => 1,
        }
    }

    /// Field name as used in error messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::PerPage => "per_page",
            Self::Offset => "offset",
        }
    }
}

impl fmt::Display for PageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted numeric input: an integer, a string, or nothing at all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumericInput {
    /// Integer of any width
    Integer(i128),
    /// Text to be parsed as a decimal integer
    Text(String),
    /// Missing value
    #[default]
    Null,
}

impl NumericInput {
    /// Check if no value was given
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Parse the input into an integer.
    ///
    /// Surrounding whitespace in text is ignored. The error is a human
    /// readable reason, turned into a proper error by the caller.
    pub fn to_integer(&self) -> std::result::Result<i128, String> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err("value is empty".to_string());
                }
                trimmed
                    .parse::<i128>()
                    .map_err(|_| format!("{text:?} is not an integer"))
            }
            Self::Null => Err("value is required".to_string()),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Null => f.write_str("null"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumericInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
