//! Study sessions index: a paginated list linking to each session's page.

#[cfg(test)]
#[path = "study_sessions_test.rs"]
mod study_sessions_test;

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::config::ApiConfig;
use crate::net::types::StudySessionSummary;
use crate::routes::{activity_path, group_path, session_path};
use crate::state::sessions::{ListQuery, StudySessionsState};

/// Row label for a session, e.g. `"#12"`.
pub fn session_label(summary: &StudySessionSummary) -> String {
    format!("#{}", summary.id)
}

#[component]
pub fn StudySessionsPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let state = RwSignal::new(StudySessionsState::default());

    Effect::new(move || {
        let query = state.try_update(StudySessionsState::load);
        if let Some(query) = query {
            spawn_list_load(state, config.get_value(), query);
        }
    });

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));
    let cursor = Memo::new(move |_| state.with(|s| s.cursor));
    let on_page_change = Callback::new(move |page: u32| {
        if let Some(query) = state.try_update(|s| s.set_page(page)).flatten() {
            spawn_list_load(state, config.get_value(), query);
        }
    });

    view! {
        <div class="sessions-page">
            <header class="sessions-page__header">
                <h1 class="sessions-page__title">"Study Sessions"</h1>
            </header>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="sessions-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=move || view! { <p class="sessions-page__loading">"Loading..."</p> }
            >
                <table class="sessions-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Activity"</th>
                            <th>"Group"</th>
                            <th>"Start Time"</th>
                            <th>"End Time"</th>
                            <th>"Review Items"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|item| view! { <SessionRow item=item/> }).collect::<Vec<_>>()}
                    </tbody>
                </table>
                <Show when=move || cursor.get().has_multiple_pages()>
                    <Pagination cursor=cursor on_page_change=on_page_change/>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn SessionRow(item: StudySessionSummary) -> impl IntoView {
    let label = session_label(&item);
    view! {
        <tr class="sessions-table__row">
            <td>
                <a href=session_path(item.id)>{label}</a>
            </td>
            <td>
                <a href=activity_path(item.activity_id)>{item.activity_name}</a>
            </td>
            <td>
                <a href=group_path(item.group_id)>{item.group_name}</a>
            </td>
            <td>{item.start_time}</td>
            <td>{item.end_time}</td>
            <td>{item.review_items_count}</td>
        </tr>
    }
}

fn spawn_list_load(state: RwSignal<StudySessionsState>, config: ApiConfig, query: ListQuery) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_study_sessions(&config, query.page).await;
        if let Err(e) = &result {
            log::warn!("study sessions page {} failed to load: {e}", query.page);
        }
        state.update(|s| {
            s.apply_loaded(query, result);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, config, query);
    }
}
