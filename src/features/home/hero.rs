//! Hero Section
//!
//! Introduces the design system: tag, headline, intro copy, two inert calls to
//! action, then the colour palette and the type scale.

use gpui::{App, Div, FontWeight, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px, relative};
use gpui_component::{h_flex, v_flex};

use crate::components::primitives::button::Button;
use crate::components::primitives::tag::Tag;
use crate::theme::colors::AvicureColors;
use crate::theme::palette::{PALETTE, Swatch};
use crate::theme::typography::{TYPE_SCALE, TypeSample, Typography};

pub const HERO_TAG: &str = "Avicure · Mobile Design System";
pub const HERO_HEADLINE: &str = "Unified care journeys for patients, doctors, labs, and hospitals.";
pub const HERO_INTRO: &str = "Part 1/10 · Overview pack crafted for Avicure's AI-guided healthcare platform. \
    This exploration delivers 18 high-fidelity mobile screens with cohesive typography, color hierarchy, \
    and component design aligned to the Avicure brand language.";

/// Width shares of copy and token panels when side by side (1.5 : 1)
pub const SIDE_BY_SIDE_SHARES: (f32, f32) = (0.6, 0.4);

/// Column shares for the layout, `None` when stacked
pub fn column_shares(stacked: bool) -> Option<(f32, f32)> {
    (!stacked).then_some(SIDE_BY_SIDE_SHARES)
}

/// Hero section at the top of the page
#[derive(IntoElement)]
pub struct Hero {
    stacked: bool,
}

impl Hero {
    pub fn new() -> Self {
        Self { stacked: false }
    }

    /// Put the token panels below the copy instead of beside it
    pub fn stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    fn copy(&self) -> Div {
        v_flex()
            .gap_6()
            .child(h_flex().child(Tag::new(HERO_TAG)))
            .child(
                div()
                    .text_size(px(Typography::TEXT_4XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(AvicureColors::ink())
                    .child(HERO_HEADLINE),
            )
            .child(
                div()
                    .max_w(px(576.0))
                    .text_base()
                    .text_color(AvicureColors::ink_muted())
                    .child(HERO_INTRO),
            )
            .child(
                h_flex()
                    .flex_wrap()
                    .gap_4()
                    .child(Button::primary("hero-explore", "Explore Screens"))
                    .child(Button::outline("hero-download", "Download Spec Sheet")),
            )
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

fn token_panel(title: &'static str, fill: gpui::Rgba) -> Div {
    v_flex()
        .flex_1()
        .gap_3()
        .rounded(px(20.0))
        .bg(fill)
        .p_4()
        .child(
            div()
                .mb_1()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(AvicureColors::primary_dark())
                .child(title),
        )
}

fn swatch_row(swatch: &Swatch) -> Div {
    h_flex()
        .justify_between()
        .rounded(px(14.0))
        .bg(AvicureColors::surface())
        .p_3()
        .shadow_sm()
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(AvicureColors::ink_muted())
                .child(swatch.name),
        )
        .child(
            div()
                .size(px(40.0))
                .flex()
                .items_center()
                .justify_center()
                .rounded_full()
                .bg(swatch.color())
                .text_size(px(Typography::TEXT_MICRO))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(AvicureColors::white())
                .child(swatch.hex_label()),
        )
}

fn type_row(sample: &TypeSample) -> Div {
    h_flex()
        .justify_between()
        .rounded(px(14.0))
        .bg(AvicureColors::surface())
        .px_3()
        .py_2()
        .text_xs()
        .text_color(AvicureColors::ink_muted())
        .shadow_sm()
        .child(
            div()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(AvicureColors::ink())
                .child(sample.label),
        )
        .child(sample.size)
}

impl RenderOnce for Hero {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let tokens = h_flex()
            .items_start()
            .gap_6()
            .child(
                token_panel("Color System", AvicureColors::alpha(AvicureColors::primary(), 0.10))
                    .children(PALETTE.iter().map(swatch_row)),
            )
            .child(
                token_panel("Typography", AvicureColors::alpha(AvicureColors::primary_soft(), 0.30))
                    .children(TYPE_SCALE.iter().map(type_row)),
            );

        let (section, copy, tokens) = match column_shares(self.stacked) {
            Some((copy_share, tokens_share)) => (
                h_flex().items_start(),
                self.copy().flex_basis(relative(copy_share)).flex_shrink(),
                tokens.flex_basis(relative(tokens_share)).flex_shrink(),
            ),
            None => (v_flex(), self.copy().w_full(), tokens.w_full()),
        };

        section
            .w_full()
            .gap_12()
            .rounded(px(28.0))
            .bg(AvicureColors::surface())
            .p_10()
            .shadow_lg()
            .child(copy)
            .child(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_one_and_a_half_times_the_tokens() {
        let (copy, tokens) = column_shares(false).expect("side by side");
        assert!((copy / tokens - 1.5).abs() < 1e-6);
        assert!((copy + tokens - 1.0).abs() < 1e-6);
    }

    #[test]
    fn stacked_hero_has_no_shares() {
        assert_eq!(column_shares(true), None);
    }
}
