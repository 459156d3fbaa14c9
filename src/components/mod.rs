//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O.

pub mod layout;
pub mod primitives;
pub mod tone;
