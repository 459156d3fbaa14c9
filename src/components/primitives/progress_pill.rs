//! Progress Pill Component

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};
use gpui_component::v_flex;

use crate::components::tone::{PillTone, ToneStyle};

/// Compact two-line metric pill
#[derive(IntoElement, Debug, Clone, PartialEq)]
pub struct ProgressPill {
    label: SharedString,
    value: SharedString,
    tone: PillTone,
}

impl ProgressPill {
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone: PillTone::default(),
        }
    }

    pub fn tone(mut self, tone: PillTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn style(&self) -> ToneStyle {
        self.tone.style()
    }
}

impl RenderOnce for ProgressPill {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.style();

        v_flex()
            .flex_1()
            .gap_1()
            .rounded(px(14.0))
            .px_3()
            .py_2()
            .bg(style.background)
            .text_color(style.foreground)
            .text_xs()
            .font_weight(FontWeight::MEDIUM)
            .child(self.label)
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(self.value),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_tone_equals_explicit_primary() {
        let implicit = ProgressPill::new("Oxygen", "98%");
        let explicit = ProgressPill::new("Oxygen", "98%").tone(PillTone::Primary);
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.style(), explicit.style());
    }

    #[test]
    fn each_tone_resolves_through_the_table() {
        for tone in PillTone::all() {
            let pill = ProgressPill::new("Resting HR", "64 bpm").tone(*tone);
            assert_eq!(pill.style(), tone.style());
        }
    }
}
