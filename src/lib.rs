//! Avicure Gallery Library
//!
//! A native showcase of the Avicure mobile design system: design tokens,
//! display primitives and eighteen mockup screens laid out in a scrollable
//! grid.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod features;
pub mod helpers;
pub mod states;
pub mod theme;
