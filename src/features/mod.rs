//! Features - Vertical Feature Slices
//!
//! The home page and the mockup catalogue it lays out.

pub mod home;
pub mod screens;
