use super::*;

#[test]
fn page_cursor_defaults_to_first_of_one() {
    let cursor = PageCursor::default();
    assert_eq!(cursor.current, 1);
    assert_eq!(cursor.total_pages, 1);
    assert!(!cursor.has_multiple_pages());
}

#[test]
fn go_to_rejects_current_zero_and_out_of_range() {
    let mut cursor = PageCursor { current: 1, total_pages: 3 };
    assert!(!cursor.go_to(1));
    assert!(!cursor.go_to(0));
    assert!(!cursor.go_to(4));
    assert_eq!(cursor.current, 1);

    assert!(cursor.go_to(3));
    assert_eq!(cursor.current, 3);
}

#[test]
fn zero_total_pages_still_allows_page_one() {
    let cursor = PageCursor { current: 1, total_pages: 0 };
    assert_eq!(cursor.last_page(), 1);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.prev(), None);
}

#[test]
fn prev_and_next_stay_in_range() {
    let cursor = PageCursor { current: 2, total_pages: 3 };
    assert_eq!(cursor.prev(), Some(1));
    assert_eq!(cursor.next(), Some(3));

    let last = PageCursor { current: 3, total_pages: 3 };
    assert_eq!(last.next(), None);
}

#[test]
fn reset_returns_to_default() {
    let mut cursor = PageCursor { current: 4, total_pages: 9 };
    cursor.reset();
    assert_eq!(cursor, PageCursor::default());
}
