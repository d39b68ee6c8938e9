//! State of the study-sessions index page.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use crate::net::error::ApiError;
use crate::net::types::{StudySessionListResponse, StudySessionSummary};
use crate::state::pagination::PageCursor;

pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch study sessions";

/// Index fetch for one page, tagged with its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct StudySessionsState {
    pub items: Vec<StudySessionSummary>,
    pub total: u32,
    pub cursor: PageCursor,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl StudySessionsState {
    /// Fetch the current page.
    pub fn load(&mut self) -> ListQuery {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        ListQuery { page: self.cursor.current, seq: self.seq }
    }

    pub fn set_page(&mut self, page: u32) -> Option<ListQuery> {
        self.cursor.go_to(page).then(|| self.load())
    }

    /// Apply the outcome of `query`. Returns `false` if the query was superseded.
    pub fn apply_loaded(&mut self, query: ListQuery, result: Result<StudySessionListResponse, ApiError>) -> bool {
        if query.seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                self.items = resp.items;
                self.total = resp.total;
                self.cursor.total_pages = resp.total_pages;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(LIST_FAILED_MESSAGE.to_owned());
            }
        }
        true
    }
}
