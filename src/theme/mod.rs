//! Theme - Avicure Design Tokens
//!
//! Colour roles, the showcase palette and typography.

pub mod colors;
pub mod palette;
pub mod typography;
