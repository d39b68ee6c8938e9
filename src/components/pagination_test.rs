use super::*;

#[test]
fn page_window_centers_on_current() {
    let cursor = PageCursor { current: 5, total_pages: 10 };
    assert_eq!(page_window(cursor), vec![3, 4, 5, 6, 7]);
}

#[test]
fn page_window_clips_at_edges() {
    assert_eq!(page_window(PageCursor { current: 1, total_pages: 10 }), vec![1, 2, 3]);
    assert_eq!(page_window(PageCursor { current: 10, total_pages: 10 }), vec![8, 9, 10]);
}

#[test]
fn page_window_for_empty_result_is_single_page() {
    assert_eq!(page_window(PageCursor { current: 1, total_pages: 0 }), vec![1]);
}
