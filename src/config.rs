//! Backend API location and paging defaults.
//!
//! The browser bundle has no process environment, so the API base URL is
//! read from `LANG_PORTAL_API_URL` at compile time and baked into the build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Where the REST backend lives and how many rows a page holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host + port, without a trailing slash.
    pub base_url: String,
    pub per_page: u32,
}

impl ApiConfig {
    /// Build config from the `LANG_PORTAL_API_URL` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LANG_PORTAL_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        Self { base_url: normalize_base_url(raw), per_page: DEFAULT_PER_PAGE }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}

fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}
