//! Stat Card Component

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use crate::components::tone::{StatTone, ToneStyle};
use crate::theme::colors::AvicureColors;

/// Headline metric with an optional toned trend badge
#[derive(IntoElement, Debug, Clone, PartialEq)]
pub struct StatCard {
    title: SharedString,
    value: SharedString,
    trend: Option<SharedString>,
    tone: StatTone,
}

impl StatCard {
    pub fn new(title: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend: None,
            tone: StatTone::default(),
        }
    }

    pub fn trend(mut self, trend: impl Into<SharedString>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    pub fn tone(mut self, tone: StatTone) -> Self {
        self.tone = tone;
        self
    }

    /// Style of the trend badge, `None` when no trend is shown
    pub fn trend_style(&self) -> Option<ToneStyle> {
        self.trend.as_ref().map(|_| self.tone.style())
    }
}

impl RenderOnce for StatCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let trend_style = self.trend_style();

        v_flex()
            .flex_1()
            .gap_2()
            .rounded(px(18.0))
            .bg(AvicureColors::surface())
            .p_4()
            .shadow_md()
            .child(
                div()
                    .text_sm()
                    .text_color(AvicureColors::ink_muted())
                    .child(self.title),
            )
            .child(
                h_flex()
                    .items_end()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(AvicureColors::ink())
                            .child(self.value),
                    )
                    .when_some(self.trend.zip(trend_style), |this, (trend, style)| {
                        this.child(
                            h_flex()
                                .flex_none()
                                .gap_1()
                                .rounded_full()
                                .px_2()
                                .py_1()
                                .bg(style.background)
                                .text_color(style.foreground)
                                .text_xs()
                                .font_weight(FontWeight::SEMIBOLD)
                                .child(div().size(px(6.0)).rounded_full().bg(style.foreground))
                                .child(trend),
                        )
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trend_means_no_badge() {
        let card = StatCard::new("Cardio Score", "82 · Stable").tone(StatTone::Success);
        assert_eq!(card.trend_style(), None);
    }

    #[test]
    fn trend_badge_uses_the_tone_table() {
        for tone in StatTone::all() {
            let card = StatCard::new("Sleep Quality", "7h 42m")
                .trend("• Consistent")
                .tone(*tone);
            assert_eq!(card.trend_style(), Some(tone.style()));
        }
    }

    #[test]
    fn tone_defaults_to_primary() {
        let card = StatCard::new("Blood Pressure", "118 / 76").trend("On track");
        assert_eq!(card.trend_style(), Some(StatTone::Primary.style()));
    }
}
