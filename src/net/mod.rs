//! Networking modules for the study-session REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and
//! `error` is the failure type every call returns.

pub mod api;
pub mod error;
pub mod types;
