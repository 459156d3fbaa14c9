//! Shared building blocks for mockup bodies
//!
//! Recurring markup of the screen bodies: filled banners, surface cards,
//! label/value rows and chat avatars.

use gpui::{Div, FontWeight, IntoElement, ParentElement, Rgba, SharedString, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use crate::theme::colors::AvicureColors;

/// Body column every screen starts from
pub fn body() -> Div {
    v_flex().flex_1().gap_4()
}

/// Small upper-case line above a heading
pub fn overline(text: impl Into<SharedString>, color: Rgba) -> Div {
    div()
        .text_xs()
        .font_weight(FontWeight::MEDIUM)
        .text_color(color)
        .child(text.into())
}

/// Muted secondary text
pub fn caption(text: impl Into<SharedString>) -> Div {
    div()
        .text_xs()
        .text_color(AvicureColors::ink_muted())
        .child(text.into())
}

/// Semibold ink line
pub fn strong(text: impl Into<SharedString>) -> Div {
    div()
        .text_sm()
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(AvicureColors::ink())
        .child(text.into())
}

/// Translucent white used for secondary text on filled surfaces
pub fn white_muted() -> Rgba {
    AvicureColors::alpha(AvicureColors::white(), 0.70)
}

/// Filled banner with an overline and a headline
pub fn banner(fill: Rgba, overline_text: &'static str, title: &'static str) -> Div {
    v_flex()
        .gap_1()
        .rounded(px(18.0))
        .bg(fill)
        .px_5()
        .py_4()
        .text_color(AvicureColors::white())
        .shadow_lg()
        .child(overline(overline_text, white_muted()))
        .child(div().text_lg().font_weight(FontWeight::SEMIBOLD).child(title))
}

/// Primary banner, the most common screen header
pub fn primary_banner(overline_text: &'static str, title: &'static str) -> Div {
    banner(AvicureColors::primary(), overline_text, title)
}

/// White card with a soft shadow
pub fn surface_card() -> Div {
    v_flex()
        .gap_3()
        .rounded(px(18.0))
        .bg(AvicureColors::surface())
        .p_4()
        .shadow_md()
}

/// Primary-soft note card with a heading and body copy
pub fn note_card(title: &'static str, text: &'static str) -> Div {
    v_flex()
        .gap_2()
        .rounded(px(18.0))
        .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.30))
        .p_4()
        .text_color(AvicureColors::primary_dark())
        .child(div().text_sm().font_weight(FontWeight::SEMIBOLD).child(title))
        .child(div().text_xs().child(text))
}

/// Label on the left, arbitrary element on the right
pub fn row(left: impl IntoElement, right: impl IntoElement) -> Div {
    h_flex()
        .w_full()
        .justify_between()
        .gap_2()
        .child(left)
        .child(right)
}

/// Label/value row with muted label and semibold value
pub fn key_value(label: &'static str, value: &'static str) -> Div {
    row(
        div().text_sm().text_color(AvicureColors::ink_muted()).child(label),
        strong(value),
    )
}

/// Round avatar with initials
pub fn avatar(initials: &'static str, diameter: f32, fill: Rgba, text: Rgba) -> Div {
    div()
        .flex_none()
        .size(px(diameter))
        .flex()
        .items_center()
        .justify_center()
        .rounded_full()
        .bg(fill)
        .text_color(text)
        .text_sm()
        .font_weight(FontWeight::SEMIBOLD)
        .child(initials)
}

/// Title with a caption underneath
pub fn titled(title: impl Into<SharedString>, detail: impl Into<SharedString>) -> Div {
    v_flex().child(strong(title)).child(caption(detail))
}

/// Bulleted line
pub fn bullet(text: &'static str) -> Div {
    div().child(format!("• {text}"))
}

/// Small dot in a solid colour
pub fn dot(color: Rgba, diameter: f32) -> Div {
    div().flex_none().size(px(diameter)).rounded_full().bg(color)
}
