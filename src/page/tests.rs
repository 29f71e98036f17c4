//! Tests for page module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use test_case::test_case;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_page_from_integer() {
    let page = PageNumber::new(3, PageField::Page).unwrap();
    assert_eq!(page.value(), 3);
    assert_eq!(page.field(), PageField::Page);
}

#[test]
fn test_page_from_string() {
    let page = PageNumber::page("12").unwrap();
    assert_eq!(page.value(), 12);

    let page = PageNumber::page(" 7 ").unwrap();
    assert_eq!(page.value(), 7);
}

#[test]
fn test_page_at_maximum() {
    let page = PageNumber::page(i64::MAX).unwrap();
    assert_eq!(page.value(), MAX_BIGINT);

    let page = PageNumber::page("9223372036854775807").unwrap();
    assert_eq!(page.value(), MAX_BIGINT);
}

#[test_case(NumericInput::Integer(0) ; "zero")]
#[test_case(NumericInput::Integer(-1) ; "negative")]
#[test_case(NumericInput::Null ; "null")]
#[test_case(NumericInput::from("") ; "empty string")]
#[test_case(NumericInput::from("abc") ; "not a number")]
#[test_case(NumericInput::from("1.5") ; "fraction")]
#[test_case(NumericInput::from("9223372036854775808") ; "past bigint")]
#[test_case(NumericInput::from(u64::MAX) ; "past bigint unsigned")]
fn test_invalid_page(input: NumericInput) {
    let err = PageNumber::new(input, PageField::Page).unwrap_err();
    assert!(err.is_invalid_page());
}

#[test]
fn test_invalid_page_carries_field_and_value() {
    let err = PageNumber::new("-3", PageField::PerPage).unwrap_err();
    match err {
        Error::InvalidPage { field, value, .. } => {
            assert_eq!(field, PageField::PerPage);
            assert_eq!(value, "\"-3\"");
        }
        other => panic!("Expected InvalidPage, got {other:?}"),
    }
}

#[test]
fn test_offset_allows_zero() {
    let offset = PageNumber::new(0, PageField::Offset).unwrap();
    assert_eq!(offset.value(), 0);

    let err = PageNumber::new(-1, PageField::Offset).unwrap_err();
    assert!(err.to_string().contains("must not be negative"));
}

#[test]
fn test_option_input() {
    assert_eq!(PageNumber::page(Some(4)).unwrap().value(), 4);
    assert!(PageNumber::page(None::<u32>).unwrap_err().is_invalid_page());
}

// ============================================================================
// Offset Tests
// ============================================================================

#[test_case(1, 10, 0 ; "first page")]
#[test_case(2, 10, 10 ; "second page")]
#[test_case(5, 3, 12 ; "fifth page")]
fn test_to_offset(page: u64, per_page: u64, expected: u64) {
    let offset = PageNumber::page(page).unwrap().to_offset(per_page).unwrap();
    assert_eq!(offset.value(), expected);
    assert_eq!(offset.field(), PageField::Offset);
}

#[test]
fn test_to_offset_overflow() {
    let page = PageNumber::page(MAX_BIGINT).unwrap();
    let err = page.to_offset(2).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidPage {
            field: PageField::Offset,
            ..
        }
    ));
}

// ============================================================================
// Coercion Tests
// ============================================================================

#[test]
fn test_coerce_passes_page_number_through() {
    // an offset of 0 would be rejected as a page, so getting it back proves
    // the value was not validated again
    let offset = PageNumber::new(0, PageField::Offset).unwrap();
    let coerced = PageNumber::coerce(offset, PageField::Page).unwrap();
    assert_eq!(coerced.field(), PageField::Offset);
    assert_eq!(coerced.value(), 0);

    let again = to_page_number(&coerced, PageField::PerPage).unwrap();
    assert_eq!(again.field(), PageField::Offset);
}

#[test]
fn test_coerce_is_idempotent() {
    let once = to_page_number("8", PageField::Page).unwrap();
    let twice = to_page_number(once, PageField::Page).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once.field(), twice.field());
}

#[test]
fn test_coerce_validates_raw_values() {
    assert!(to_page_number("0", PageField::Page).is_err());
    assert!(to_page_number(String::from("2"), PageField::Page).is_ok());
    assert!(to_page_number(NumericInput::Null, PageField::Page).is_err());
}

// ============================================================================
// Integer Behaviour Tests
// ============================================================================

#[test]
fn test_behaves_like_integer() {
    let page = PageNumber::page("12").unwrap();

    assert!(page == 12_u64);
    assert!(12_u64 == page);
    assert!(page > 11_u64);
    assert!(13_u64 > page);
    assert_eq!(page + 1, 13);
    assert_eq!(page - 2, 10);
    assert_eq!(page * 3, 36);
    assert_eq!(*page, 12);
    assert_eq!(u64::from(page), 12);
    assert_eq!(format!("{page}"), "12");
    assert_eq!(format!("{page:>4}"), "  12");
}

#[test]
fn test_equality_ignores_field() {
    let page = PageNumber::new(5, PageField::Page).unwrap();
    let per_page = PageNumber::new(5, PageField::PerPage).unwrap();
    assert_eq!(page, per_page);

    let set: HashSet<PageNumber> = [page, per_page].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_ordering() {
    let mut pages: Vec<PageNumber> = ["3", "1", "2"]
        .into_iter()
        .map(|s| s.parse().unwrap())
        .collect();
    pages.sort();
    let values: Vec<u64> = pages.into_iter().map(u64::from).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_from_str() {
    let page: PageNumber = "4".parse().unwrap();
    assert_eq!(page.value(), 4);
    assert!("zero".parse::<PageNumber>().is_err());
}

// ============================================================================
// Serde Tests
// ============================================================================

#[test]
fn test_serializes_as_bare_number() {
    let page = PageNumber::page("12").unwrap();
    assert_eq!(serde_json::to_string(&page).unwrap(), "12");
    assert_eq!(serde_json::to_value(page).unwrap(), serde_json::json!(12));
}

#[test]
fn test_deserialize() {
    let page: PageNumber = serde_json::from_str("3").unwrap();
    assert_eq!(page.value(), 3);

    let page: PageNumber = serde_json::from_str("\"6\"").unwrap();
    assert_eq!(page.value(), 6);

    assert!(serde_json::from_str::<PageNumber>("0").is_err());
    assert!(serde_json::from_str::<PageNumber>("-2").is_err());
    assert!(serde_json::from_str::<PageNumber>("\"x\"").is_err());
}

// ============================================================================
// Input Tests
// ============================================================================

#[test]
fn test_numeric_input_display() {
    assert_eq!(NumericInput::from(5).to_string(), "5");
    assert_eq!(NumericInput::from("a").to_string(), "\"a\"");
    assert_eq!(NumericInput::Null.to_string(), "null");
}

#[test]
fn test_page_field_display() {
    assert_eq!(PageField::Page.to_string(), "page");
    assert_eq!(PageField::PerPage.to_string(), "per_page");
    assert_eq!(PageField::Offset.to_string(), "offset");
    assert_eq!(PageField::Offset.minimum(), 0);
    assert_eq!(PageField::PerPage.minimum(), 1);
}
