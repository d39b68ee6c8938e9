//! Route-scoped state of the study-session detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page component owns one `RwSignal<StudySessionState>`. Event handlers
//! call the transition methods here; any method that needs a fetch returns a
//! `SessionQuery`, and the page performs the request and feeds the result back
//! through `apply_loaded`. Keeping the transitions free of I/O makes the fetch
//! and submit rules testable without a browser.
//!
//! STALE RESPONSES
//! ===============
//! Every issued query carries a sequence number. Only the response to the
//! most recent query is applied.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::{ReviewSubmission, SessionId, StudySession, StudySessionResponse, Word, WordId};
use crate::state::pagination::PageCursor;
use crate::state::review::ReviewAnswers;
use crate::state::sort::{SortState, WordSortKey};

/// Shown for every load failure regardless of cause.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch session data";
pub const NOT_FOUND_MESSAGE: &str = "Session not found";

/// A fetch the page must perform: one session page, tagged with its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionQuery {
    pub session_id: SessionId,
    pub page: u32,
    pub seq: u64,
}

/// What the page body should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Failed(String),
    Ready,
}

#[derive(Clone, Debug)]
pub struct StudySessionState {
    pub session_id: Option<SessionId>,
    pub session: Option<StudySession>,
    pub words: Vec<Word>,
    /// Distinct words in the session across all pages.
    pub total_words: u32,
    pub cursor: PageCursor,
    pub sort: SortState,
    pub answers: ReviewAnswers,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl Default for StudySessionState {
    fn default() -> Self {
        Self {
            session_id: None,
            session: None,
            words: Vec::new(),
            total_words: 0,
            cursor: PageCursor::default(),
            sort: SortState::default(),
            answers: ReviewAnswers::default(),
            loading: true,
            error: None,
            seq: 0,
        }
    }
}

impl StudySessionState {
    /// Point the page at the session named by the route.
    ///
    /// A different id resets everything route-scoped (data, page, sort and the
    /// answer buffer) the same way a fresh mount would. Returns the first fetch
    /// to perform, or `None` when the id is absent or unchanged.
    pub fn open(&mut self, session_id: Option<SessionId>) -> Option<SessionQuery> {
        if session_id == self.session_id && self.seq > 0 {
            return None;
        }
        let seq = self.seq;
        *self = Self { session_id, seq, ..Self::default() };
        if session_id.is_none() {
            self.loading = false;
        }
        self.begin_load()
    }

    /// Select another page of words. Returns the fetch to perform, if any.
    pub fn set_page(&mut self, page: u32) -> Option<SessionQuery> {
        if self.session_id.is_none() || !self.cursor.go_to(page) {
            return None;
        }
        self.begin_load()
    }

    fn begin_load(&mut self) -> Option<SessionQuery> {
        let session_id = self.session_id?;
        self.seq += 1;
        self.loading = true;
        self.error = None;
        Some(SessionQuery { session_id, page: self.cursor.current, seq: self.seq })
    }

    /// Apply the outcome of `query`. Returns `false` if the query was superseded.
    pub fn apply_loaded(&mut self, query: SessionQuery, result: Result<StudySessionResponse, ApiError>) -> bool {
        if query.seq != self.seq || Some(query.session_id) != self.session_id {
            return false;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                self.session = Some(resp.session);
                self.words = resp.words;
                self.total_words = resp.total;
                self.cursor.total_pages = resp.total_pages;
                self.error = None;
            }
            Err(_) => {
                self.session = None;
                self.words.clear();
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        true
    }

    pub fn toggle_sort(&mut self, key: WordSortKey) {
        self.sort.toggle(key);
    }

    pub fn mark_answer(&mut self, word_id: WordId, correct: bool) {
        self.answers.mark(word_id, correct);
    }

    /// Target session and body for a review POST; `None` means nothing to send.
    pub fn review_submission(&self) -> Option<(SessionId, ReviewSubmission)> {
        let session_id = self.session_id?;
        self.answers.to_submission().map(|body| (session_id, body))
    }

    pub fn status(&self) -> PageStatus {
        if self.loading {
            return PageStatus::Loading;
        }
        if let Some(error) = &self.error {
            return PageStatus::Failed(error.clone());
        }
        if self.session.is_none() {
            return PageStatus::Failed(NOT_FOUND_MESSAGE.to_owned());
        }
        PageStatus::Ready
    }
}
