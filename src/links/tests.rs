//! Tests for links module

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// visible_pages Tests
// ============================================================================

#[test_case(10, 20, 2, 1, &[1, 2, 8, 9, 10, 11, 12, 19, 20] ; "gaps on both sides")]
#[test_case(1, 20, 2, 1, &[1, 2, 3, 4, 5, 19, 20] ; "window slides right at first page")]
#[test_case(20, 20, 2, 1, &[1, 2, 16, 17, 18, 19, 20] ; "window slides left at last page")]
#[test_case(6, 20, 2, 1, &[1, 2, 3, 4, 5, 6, 7, 8, 19, 20] ; "single hidden page is shown")]
#[test_case(10, 20, 0, 0, &[1, 10, 20] ; "zero windows")]
#[test_case(3, 5, 10, 1, &[1, 2, 3, 4, 5] ; "inner window wider than total")]
#[test_case(25, 20, 2, 1, &[1, 2, 16, 17, 18, 19, 20] ; "current page past the end")]
fn test_visible_pages(current: u64, total: u64, inner: u32, outer: u32, expected: &[u64]) {
    assert_eq!(visible_pages(current, total, inner, outer), expected.to_vec());
}

#[test]
fn test_visible_pages_huge_totals() {
    let max = crate::page::MAX_BIGINT;
    assert_eq!(
        visible_pages(5, max, 2, 1),
        vec![1, 2, 3, 4, 5, 6, 7, max - 1, max]
    );
    assert_eq!(
        visible_pages(max / 2, max, 1, 0),
        vec![1, max / 2 - 1, max / 2, max / 2 + 1, max]
    );
    assert_eq!(
        visible_pages(u64::MAX, u64::MAX, 2, 1),
        vec![1, 2, u64::MAX - 4, u64::MAX - 3, u64::MAX - 2, u64::MAX - 1, u64::MAX]
    );
}

#[test]
fn test_visible_pages_small_totals() {
    assert_eq!(visible_pages(1, 0, 4, 1), Vec::<u64>::new());
    assert_eq!(visible_pages(1, 1, 4, 1), vec![1]);
    assert_eq!(visible_pages(2, 2, 4, 1), vec![1, 2]);
}

#[test]
fn test_visible_pages_no_gap_when_everything_fits() {
    // current 5 of 10 with inner 2, outer 1: window 3..=7, left run is empty
    // and the right run holds page 8 alone, so nothing is hidden
    assert_eq!(
        visible_pages(5, 10, 2, 1),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    );
}

#[test]
fn test_visible_pages_keeps_window_width() {
    let pages = visible_pages(1, 100, 3, 0);
    // a full 7-page window starting at page 1, then the last page
    assert_eq!(pages, vec![1, 2, 3, 4, 5, 6, 7, 100]);
}

#[test]
fn test_visible_pages_is_sorted_and_unique() {
    for current in 1..=30 {
        let pages = visible_pages(current, 30, 2, 2);
        assert!(pages.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(pages.contains(&current));
        assert_eq!(pages.first(), Some(&1));
        assert_eq!(pages.last(), Some(&30));
    }
}

// ============================================================================
// Gap Tests
// ============================================================================

#[test]
fn test_with_gaps() {
    let links = with_gaps(&[1, 2, 8, 9, 19, 20]);
    assert_eq!(
        links,
        vec![
            PageLink::Page(1),
            PageLink::Page(2),
            PageLink::Gap,
            PageLink::Page(8),
            PageLink::Page(9),
            PageLink::Gap,
            PageLink::Page(19),
            PageLink::Page(20),
        ]
    );
}

#[test]
fn test_with_gaps_contiguous() {
    let links = with_gaps(&[1, 2, 3]);
    assert!(links.iter().all(|link| !link.is_gap()));
    assert_eq!(with_gaps(&[]), Vec::<PageLink>::new());
}

#[test]
fn test_with_gaps_at_u64_max() {
    assert_eq!(
        with_gaps(&[1, u64::MAX]),
        vec![PageLink::Page(1), PageLink::Gap, PageLink::Page(u64::MAX)]
    );
    assert_eq!(
        with_gaps(&[u64::MAX, u64::MAX]),
        vec![PageLink::Page(u64::MAX), PageLink::Page(u64::MAX)]
    );
}

#[test]
fn test_page_links_display() {
    let rendered: Vec<String> = page_links(10, 20, WindowOptions::new(2, 1))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(rendered.join(" "), "1 2 … 8 9 10 11 12 … 19 20");
}

#[test]
fn test_page_link_accessors() {
    assert_eq!(PageLink::Page(4).page(), Some(4));
    assert_eq!(PageLink::Gap.page(), None);
    assert!(PageLink::Gap.is_gap());
}

#[test]
fn test_page_link_serde() {
    let json = serde_json::to_string(&vec![PageLink::Page(1), PageLink::Gap]).unwrap();
    assert_eq!(json, r#"[{"page":1},"gap"]"#);
}

#[test]
fn test_window_options_default() {
    assert_eq!(WindowOptions::default(), WindowOptions::new(4, 1));
}
