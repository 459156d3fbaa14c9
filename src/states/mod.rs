//! State Layer
//!
//! Persisted gallery preferences. The catalogue itself carries no state.

mod app;

pub use app::*;
