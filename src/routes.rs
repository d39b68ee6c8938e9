//! In-app paths used by links and redirects.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::SessionId;

pub const SESSIONS_PATH: &str = "/sessions";

pub fn session_path(id: SessionId) -> String {
    format!("/sessions/{id}")
}

pub fn activity_path(id: i64) -> String {
    format!("/study-activities/{id}")
}

pub fn group_path(id: i64) -> String {
    format!("/groups/{id}")
}

/// Parse the `:id` route segment. Non-numeric ids are treated as absent.
pub fn parse_session_id(raw: Option<&str>) -> Option<SessionId> {
    raw?.trim().parse().ok()
}
