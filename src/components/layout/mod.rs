//! Layout Components
//!
//! Shell, mockup screen frame and bottom navigation.

pub mod bottom_nav;
pub mod screen;
pub mod shell;
