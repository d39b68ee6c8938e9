//! Wire DTOs for the study-session REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames.
//! Aggregates (`accuracy`, `grade`, `feedback`) are computed server-side and
//! only ever displayed here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend identifier of a study session.
pub type SessionId = i64;

/// Backend identifier of a word.
pub type WordId = i64;

/// A study session with its review aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: SessionId,
    pub group_id: i64,
    pub group_name: String,
    pub activity_id: i64,
    pub activity_name: String,
    /// Server-formatted timestamp, displayed verbatim.
    pub start_time: String,
    pub end_time: String,
    pub review_items_count: u32,
    #[serde(default)]
    pub total_correct: u32,
    #[serde(default)]
    pub total_wrong: u32,
    /// Percentage in `0..=100`, rounded to two decimals by the server.
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub feedback: String,
}

/// A word reviewed during a session, with per-session counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    pub kanji: String,
    pub romaji: String,
    pub french: String,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub wrong_count: u32,
}

/// Response of `GET /api/study-sessions/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudySessionResponse {
    pub session: StudySession,
    pub words: Vec<Word>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// Row of the sessions index (`GET /api/study-sessions`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySessionSummary {
    pub id: SessionId,
    pub group_id: i64,
    pub group_name: String,
    pub activity_id: i64,
    pub activity_name: String,
    pub start_time: String,
    pub end_time: String,
    pub review_items_count: u32,
}

/// Response of `GET /api/study-sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySessionListResponse {
    pub items: Vec<StudySessionSummary>,
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// One judged word in a review submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAnswer {
    pub word_id: WordId,
    pub correct: bool,
}

/// Body of `POST /study_sessions/{id}/review`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    pub answers: Vec<ReviewAnswer>,
}
