//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each route owns one plain state struct held in an `RwSignal`. Transitions
//! are ordinary methods so they can be unit-tested without a reactive runtime.

pub mod pagination;
pub mod review;
pub mod session;
pub mod sessions;
pub mod sort;
