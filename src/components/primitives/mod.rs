//! Primitive Components
//!
//! Leaf display building blocks: tags, badges, buttons, cards and pills.

pub mod badge;
pub mod button;
pub mod divider_heading;
pub mod progress_pill;
pub mod stat_card;
pub mod tag;
