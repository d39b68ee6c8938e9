//! In-progress review answers for the words of one session.
//!
//! DESIGN
//! ======
//! One entry per word: marking a word again overwrites its previous answer.
//! A `BTreeMap` keeps submission order stable (ascending word id).

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use std::collections::BTreeMap;

use crate::net::types::{ReviewAnswer, ReviewSubmission, WordId};

/// Latest correctness judgment per word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewAnswers {
    answers: BTreeMap<WordId, bool>,
}

impl ReviewAnswers {
    /// Record `correct` for `word_id`, replacing any earlier answer for it.
    pub fn mark(&mut self, word_id: WordId, correct: bool) {
        self.answers.insert(word_id, correct);
    }

    pub fn get(&self, word_id: WordId) -> Option<bool> {
        self.answers.get(&word_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ReviewAnswer> + '_ {
        self.answers
            .iter()
            .map(|(&word_id, &correct)| ReviewAnswer { word_id, correct })
    }

    /// Request body for the buffered answers, or `None` when nothing is marked.
    pub fn to_submission(&self) -> Option<ReviewSubmission> {
        if self.is_empty() {
            return None;
        }
        Some(ReviewSubmission { answers: self.iter().collect() })
    }
}
