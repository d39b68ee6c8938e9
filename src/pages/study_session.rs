//! Study session detail page: session summary, reviewed words, review submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/sessions/:id`. The page owns a `StudySessionState` signal, turns
//! route and pager changes into fetches, and posts buffered review answers.
//!
//! ERROR HANDLING
//! ==============
//! Load failures replace the body with one generic message. Submission
//! failures are only logged; success raises a blocking browser alert. The
//! answer buffer is kept after a successful submit.

#[cfg(test)]
#[path = "study_session_test.rs"]
mod study_session_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::pagination::Pagination;
use crate::components::session_summary::SessionSummary;
use crate::components::words_table::WordsTable;
use crate::config::ApiConfig;
use crate::net::types::{ReviewSubmission, SessionId, WordId};
use crate::routes::{SESSIONS_PATH, parse_session_id};
use crate::state::session::{PageStatus, SessionQuery, StudySessionState};
use crate::state::sort::WordSortKey;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Reviews submitted successfully!";

/// Submit button text, with the pending answer count when there is one.
pub fn submit_label(pending: usize) -> String {
    if pending == 0 {
        "Submit Reviews".to_owned()
    } else {
        format!("Submit Reviews ({pending})")
    }
}

#[component]
pub fn StudySessionPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(StudySessionState::default());
    let params = use_params_map();

    // Route changes do not remount this component, so a new id is handled
    // here as a fresh page.
    Effect::new(move || {
        let id = parse_session_id(params.read().get("id").as_deref());
        if let Some(query) = state.try_update(|s| s.open(id)).flatten() {
            spawn_load(state, config.get_value(), query);
        }
    });

    let status = Memo::new(move |_| state.with(StudySessionState::status));

    view! {
        <div class="session-page">
            <header class="session-page__header">
                <h1 class="session-page__title">"Study Session Details"</h1>
                <a class="btn session-page__back" href=SESSIONS_PATH>
                    "Back to Sessions"
                </a>
            </header>
            {move || match status.get() {
                PageStatus::Loading => view! { <p class="session-page__loading">"Loading..."</p> }.into_any(),
                PageStatus::Failed(message) => view! { <p class="session-page__error">{message}</p> }.into_any(),
                PageStatus::Ready => view! { <SessionBody state=state config=config/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SessionBody(state: RwSignal<StudySessionState>, config: StoredValue<ApiConfig>) -> impl IntoView {
    let session = Memo::new(move |_| state.with(|s| s.session.clone()));
    let words = Memo::new(move |_| state.with(|s| s.words.clone()));
    let sort = Memo::new(move |_| state.with(|s| s.sort));
    let answers = Memo::new(move |_| state.with(|s| s.answers.clone()));
    let cursor = Memo::new(move |_| state.with(|s| s.cursor));
    let total_words = Memo::new(move |_| state.with(|s| s.total_words));

    let on_sort = Callback::new(move |key: WordSortKey| state.update(|s| s.toggle_sort(key)));
    let on_review_change =
        Callback::new(move |(word_id, correct): (WordId, bool)| state.update(|s| s.mark_answer(word_id, correct)));
    let on_page_change = Callback::new(move |page: u32| {
        if let Some(query) = state.try_update(|s| s.set_page(page)).flatten() {
            spawn_load(state, config.get_value(), query);
        }
    });
    let on_submit = move |_| {
        let Some((session_id, body)) = state.with_untracked(StudySessionState::review_submission) else {
            return;
        };
        spawn_submit(config.get_value(), session_id, body);
    };

    view! {
        {move || session.get().map(|session| view! { <SessionSummary session=session/> })}
        <section class="session-page__words">
            <h2 class="session-page__subtitle">
                "Words Reviewed "
                <span class="session-page__count">{move || format!("({})", total_words.get())}</span>
            </h2>
            <WordsTable
                words=words
                sort=sort
                answers=answers
                on_sort=on_sort
                on_review_change=on_review_change
            />
            <Show when=move || cursor.get().has_multiple_pages()>
                <Pagination cursor=cursor on_page_change=on_page_change/>
            </Show>
        </section>
        <div class="session-page__actions">
            <button class="btn btn--primary session-page__submit" on:click=on_submit>
                {move || submit_label(answers.get().len())}
            </button>
        </div>
    }
}

fn spawn_load(state: RwSignal<StudySessionState>, config: ApiConfig, query: SessionQuery) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_study_session(&config, query.session_id, query.page).await;
        if let Err(e) = &result {
            log::warn!("study session {} page {} failed to load: {e}", query.session_id, query.page);
        }
        state.update(|s| {
            if !s.apply_loaded(query, result) {
                log::debug!("dropped stale study session response (seq {})", query.seq);
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, config, query);
    }
}

fn spawn_submit(config: ApiConfig, session_id: SessionId, body: ReviewSubmission) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::submit_reviews(&config, session_id, &body).await {
            Ok(payload) => {
                log::info!("review submitted for session {session_id}: {payload}");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(SUBMIT_SUCCESS_MESSAGE);
                }
            }
            Err(e) => log::error!("error submitting review for session {session_id}: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session_id, body);
    }
}
