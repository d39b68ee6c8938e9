use super::*;

#[test]
fn default_points_at_local_backend() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "http://localhost:5000");
    assert_eq!(cfg.per_page, 10);
}

#[test]
fn from_raw_trims_trailing_slashes() {
    let cfg = ApiConfig::from_raw(Some("https://portal.example.com//"));
    assert_eq!(cfg.base_url, "https://portal.example.com");
}

#[test]
fn from_raw_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::from_raw(Some("   ")).base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::from_raw(None).base_url, DEFAULT_API_BASE_URL);
}
