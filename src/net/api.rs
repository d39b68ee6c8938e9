//! REST API helpers for the study-session backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since the
//! backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. A non-2xx status is an error
//! even when the body is valid JSON; callers decide how much of the failure
//! reaches the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ReviewSubmission, SessionId, StudySessionListResponse, StudySessionResponse};
use crate::config::ApiConfig;

/// `GET` URL for one session and a page of its words.
pub fn study_session_endpoint(config: &ApiConfig, session_id: SessionId, page: u32) -> String {
    format!(
        "{}/api/study-sessions/{session_id}?page={page}&per_page={}",
        config.base_url, config.per_page
    )
}

/// `GET` URL for a page of the sessions index.
pub fn study_sessions_endpoint(config: &ApiConfig, page: u32) -> String {
    format!("{}/api/study-sessions?page={page}&per_page={}", config.base_url, config.per_page)
}

/// `POST` URL for submitting review answers of a session.
pub fn review_endpoint(config: &ApiConfig, session_id: SessionId) -> String {
    format!("{}/study_sessions/{session_id}/review", config.base_url)
}

/// Fetch a session and one page of its reviewed words.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an undecodable body.
pub async fn fetch_study_session(
    config: &ApiConfig,
    session_id: SessionId,
    page: u32,
) -> Result<StudySessionResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&study_session_endpoint(config, session_id, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session_id, page);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the sessions index.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an undecodable body.
pub async fn fetch_study_sessions(config: &ApiConfig, page: u32) -> Result<StudySessionListResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&study_sessions_endpoint(config, page)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, page);
        Err(ApiError::Unavailable)
    }
}

/// Post buffered review answers for a session.
///
/// The success payload has no fixed schema, so it is returned as raw JSON.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or an undecodable body.
pub async fn submit_reviews(
    config: &ApiConfig,
    session_id: SessionId,
    submission: &ReviewSubmission,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&review_endpoint(config, session_id))
            .json(submission)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session_id, submission);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
