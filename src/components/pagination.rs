//! Previous/next pager with a window of page-number buttons.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::pagination::PageCursor;

/// Page numbers shown on each side of the current page.
const WINDOW_RADIUS: u32 = 2;

/// Page numbers to render as buttons, centered on the current page.
pub fn page_window(cursor: PageCursor) -> Vec<u32> {
    let last = cursor.last_page();
    let current = cursor.current.clamp(1, last);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(last);
    (start..=end).collect()
}

#[component]
pub fn Pagination(#[prop(into)] cursor: Signal<PageCursor>, on_page_change: Callback<u32>) -> impl IntoView {
    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_page_change.run(page);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__prev"
                disabled=move || cursor.get().prev().is_none()
                on:click=move |_| go(cursor.get_untracked().prev())
            >
                "Previous"
            </button>
            {move || {
                let current = cursor.get().current;
                page_window(cursor.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="btn pagination__page"
                                class:pagination__page--current=page == current
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <span class="pagination__status">
                {move || format!("Page {} of {}", cursor.get().current, cursor.get().last_page())}
            </span>
            <button
                class="btn pagination__next"
                disabled=move || cursor.get().next().is_none()
                on:click=move |_| go(cursor.get_untracked().next())
            >
                "Next"
            </button>
        </nav>
    }
}
