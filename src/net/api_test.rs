use super::*;

fn config() -> ApiConfig {
    ApiConfig { base_url: "http://localhost:5000".to_owned(), per_page: 10 }
}

#[test]
fn study_session_endpoint_includes_page_and_per_page() {
    assert_eq!(
        study_session_endpoint(&config(), 42, 3),
        "http://localhost:5000/api/study-sessions/42?page=3&per_page=10"
    );
}

#[test]
fn study_sessions_endpoint_formats_index_query() {
    assert_eq!(
        study_sessions_endpoint(&config(), 1),
        "http://localhost:5000/api/study-sessions?page=1&per_page=10"
    );
}

#[test]
fn review_endpoint_is_scoped_by_session() {
    assert_eq!(review_endpoint(&config(), 42), "http://localhost:5000/study_sessions/42/review");
}

#[test]
fn api_error_status_is_detected() {
    assert!(ApiError::Status(404).is_status());
    assert!(!ApiError::Network("offline".to_owned()).is_status());
    assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
}
