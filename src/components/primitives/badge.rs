//! Badge Component
//!
//! Small rounded status chip, the inline counterpart of [`Tag`] with a
//! selectable tone.
//!
//! [`Tag`]: super::tag::Tag

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*};

use crate::components::tone::BadgeTone;

/// A toned status chip
#[derive(IntoElement, Debug, Clone, PartialEq)]
pub struct Badge {
    label: SharedString,
    tone: BadgeTone,
    compact: bool,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            tone: BadgeTone::default(),
            compact: false,
        }
    }

    pub fn tone(mut self, tone: BadgeTone) -> Self {
        self.tone = tone;
        self
    }

    /// Use the narrower horizontal padding
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn soft(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Soft)
    }

    pub fn primary(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Primary)
    }

    pub fn success(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Success)
    }

    pub fn warning(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Warning)
    }

    pub fn error(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Error)
    }

    pub fn solid(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Solid)
    }

    pub fn inverse(label: impl Into<SharedString>) -> Self {
        Self::new(label).tone(BadgeTone::Inverse)
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.tone.style();

        div()
            .flex_none()
            .rounded_full()
            .when(self.compact, |this| this.px_2())
            .when(!self.compact, |this| this.px_3())
            .py_1()
            .bg(style.background)
            .text_color(style.foreground)
            .text_xs()
            .font_weight(FontWeight::SEMIBOLD)
            .child(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors_pick_their_tone() {
        assert_eq!(Badge::soft("a"), Badge::new("a"));
        assert_eq!(Badge::warning("a"), Badge::new("a").tone(BadgeTone::Warning));
        assert_ne!(Badge::success("a"), Badge::error("a"));
    }
}
