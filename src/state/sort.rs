//! Column sort state for the words table.
//!
//! Sorting only reorders the rows already on screen; it never triggers a
//! fetch.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use crate::net::types::Word;

/// Sortable columns of the words table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordSortKey {
    #[default]
    Kanji,
    Romaji,
    French,
    CorrectCount,
    WrongCount,
}

impl WordSortKey {
    pub const ALL: [WordSortKey; 5] = [
        WordSortKey::Kanji,
        WordSortKey::Romaji,
        WordSortKey::French,
        WordSortKey::CorrectCount,
        WordSortKey::WrongCount,
    ];

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Kanji => "Kanji",
            Self::Romaji => "Romaji",
            Self::French => "French",
            Self::CorrectCount => "# Correct",
            Self::WrongCount => "# Wrong",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: WordSortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Reselecting the active key flips direction; a new key starts ascending.
    pub fn toggle(&mut self, key: WordSortKey) {
        if key == self.key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }

    /// Header arrow for `key`, empty when the column is not the active one.
    pub fn indicator(self, key: WordSortKey) -> &'static str {
        if key != self.key {
            return "";
        }
        match self.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Return `words` ordered by `sort`; ties fall back to word id.
pub fn sort_words(words: &[Word], sort: SortState) -> Vec<Word> {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by_key(a, b, sort.key).then_with(|| a.id.cmp(&b.id));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &Word, b: &Word, key: WordSortKey) -> Ordering {
    match key {
        WordSortKey::Kanji => a.kanji.cmp(&b.kanji),
        WordSortKey::Romaji => a.romaji.cmp(&b.romaji),
        WordSortKey::French => a.french.to_lowercase().cmp(&b.french.to_lowercase()),
        WordSortKey::CorrectCount => a.correct_count.cmp(&b.correct_count),
        WordSortKey::WrongCount => a.wrong_count.cmp(&b.wrong_count),
    }
}
