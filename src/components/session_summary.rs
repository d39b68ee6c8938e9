//! Header panel with a session's activity, group, timing and review totals.

#[cfg(test)]
#[path = "session_summary_test.rs"]
mod session_summary_test;

use leptos::prelude::*;

use crate::net::types::StudySession;
use crate::routes::{activity_path, group_path};

/// Accuracy as shown to the user, e.g. `"87.5%"`.
pub fn format_accuracy(accuracy: f64) -> String {
    let rounded = (accuracy * 100.0).round() / 100.0;
    format!("{rounded}%")
}

#[component]
pub fn SessionSummary(session: StudySession) -> impl IntoView {
    let accuracy = format_accuracy(session.accuracy);

    view! {
        <section class="session-summary">
            <div class="session-summary__grid">
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"Activity"</h2>
                    <a class="session-summary__link" href=activity_path(session.activity_id)>
                        {session.activity_name}
                    </a>
                </div>
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"Group"</h2>
                    <a class="session-summary__link" href=group_path(session.group_id)>
                        {session.group_name}
                    </a>
                </div>
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"Start Time"</h2>
                    <p>{session.start_time}</p>
                </div>
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"End Time"</h2>
                    <p>{session.end_time}</p>
                </div>
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"Review Items"</h2>
                    <p>{session.review_items_count}</p>
                </div>
                <div class="session-summary__field">
                    <h2 class="session-summary__label">"Correct / Wrong"</h2>
                    <p>{format!("{} / {}", session.total_correct, session.total_wrong)}</p>
                </div>
            </div>
            <div class="session-summary__score">
                <span class="session-summary__accuracy">{accuracy}</span>
                <span class="session-summary__grade">{session.grade}</span>
                <p class="session-summary__feedback">{session.feedback}</p>
            </div>
        </section>
    }
}
