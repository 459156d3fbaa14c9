//! Application Layer
//!
//! App initialization, window management and the one-time root layout.

pub mod application;
pub mod layout;
