//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive data as signals/props and
//! report user intent through callbacks. Pages own the state.

pub mod pagination;
pub mod session_summary;
pub mod words_table;
