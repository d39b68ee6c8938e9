//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and the fetches that feed it, and
//! delegates rendering details to `components`.

pub mod study_session;
pub mod study_sessions;
