//! Table of reviewed words with sortable headers and per-row review buttons.
//!
//! DESIGN
//! ======
//! The table is stateless: sort state and buffered answers come in as
//! signals, user intent goes out through callbacks. Rows are sorted locally
//! for display only.

#[cfg(test)]
#[path = "words_table_test.rs"]
mod words_table_test;

use leptos::prelude::*;

use crate::net::types::{Word, WordId};
use crate::state::review::ReviewAnswers;
use crate::state::sort::{SortState, WordSortKey, sort_words};

/// Status text for a word's buffered answer.
pub fn review_label(answer: Option<bool>) -> &'static str {
    match answer {
        Some(true) => "Correct",
        Some(false) => "Incorrect",
        None => "Unmarked",
    }
}

#[component]
pub fn WordsTable(
    #[prop(into)] words: Signal<Vec<Word>>,
    #[prop(into)] sort: Signal<SortState>,
    #[prop(into)] answers: Signal<ReviewAnswers>,
    on_sort: Callback<WordSortKey>,
    on_review_change: Callback<(WordId, bool)>,
) -> impl IntoView {
    let rows = move || sort_words(&words.get(), sort.get());

    view! {
        <table class="words-table">
            <thead>
                <tr>
                    {WordSortKey::ALL
                        .into_iter()
                        .map(|key| {
                            view! {
                                <th class="words-table__header">
                                    <button class="words-table__sort" on:click=move |_| on_sort.run(key)>
                                        {key.label()}
                                        " "
                                        <span class="words-table__arrow">{move || sort.get().indicator(key)}</span>
                                    </button>
                                </th>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <th class="words-table__header">"Review"</th>
                </tr>
            </thead>
            <tbody>
                <Show
                    when=move || !words.get().is_empty()
                    fallback=|| {
                        view! {
                            <tr>
                                <td class="words-table__empty" colspan="6">"No words reviewed in this session."</td>
                            </tr>
                        }
                    }
                >
                    {move || {
                        rows()
                            .into_iter()
                            .map(|word| view! { <WordRow word=word answers=answers on_review_change=on_review_change/> })
                            .collect::<Vec<_>>()
                    }}
                </Show>
            </tbody>
        </table>
    }
}

#[component]
fn WordRow(word: Word, answers: Signal<ReviewAnswers>, on_review_change: Callback<(WordId, bool)>) -> impl IntoView {
    let id = word.id;
    let answer = move || answers.get().get(id);

    view! {
        <tr class="words-table__row">
            <td class="words-table__kanji">{word.kanji}</td>
            <td>{word.romaji}</td>
            <td>{word.french}</td>
            <td class="words-table__count words-table__count--correct">{word.correct_count}</td>
            <td class="words-table__count words-table__count--wrong">{word.wrong_count}</td>
            <td class="words-table__review">
                <button
                    class="review-toggle review-toggle--correct"
                    class:review-toggle--active=move || answer() == Some(true)
                    title="Mark correct"
                    on:click=move |_| on_review_change.run((id, true))
                >
                    "✓"
                </button>
                <button
                    class="review-toggle review-toggle--wrong"
                    class:review-toggle--active=move || answer() == Some(false)
                    title="Mark incorrect"
                    on:click=move |_| on_review_change.run((id, false))
                >
                    "✗"
                </button>
                <span class="review-toggle__status">{move || review_label(answer())}</span>
            </td>
        </tr>
    }
}
