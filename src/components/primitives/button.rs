//! Button Component
//!
//! Decorative button. Mockup buttons are inert: they show hover feedback but
//! never carry a click handler.

use gpui::{
    AnyElement, App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::AvicureColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary green
    #[default]
    Primary,
    /// Transparent with a primary outline
    Outline,
    /// Primary-soft wash
    Soft,
    /// White surface with a soft shadow
    Surface,
    /// Filled error red
    Danger,
    /// Bare primary text
    Link,
    /// Translucent white, for use on filled primary surfaces
    Inverse,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Rounded-full chip
    Small,
    /// Regular call to action (default)
    #[default]
    Medium,
    /// Tall 56 px call to action
    Large,
}

/// A styled, inert button
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    leading: Option<AnyElement>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            full_width: false,
            leading: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Element shown before the label
    pub fn leading(mut self, leading: impl IntoElement) -> Self {
        self.leading = Some(leading.into_any_element());
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create a link-style button
    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }

    /// Colours as (background, text, hover background, border)
    fn colors(&self) -> (gpui::Rgba, gpui::Rgba, gpui::Rgba, gpui::Rgba) {
        let clear = AvicureColors::transparent();
        match self.variant {
            ButtonVariant::Primary => (
                AvicureColors::primary(),
                AvicureColors::white(),
                AvicureColors::primary_dark(),
                clear,
            ),
            ButtonVariant::Outline => (
                clear,
                AvicureColors::primary_dark(),
                AvicureColors::alpha(AvicureColors::primary_soft(), 0.20),
                AvicureColors::alpha(AvicureColors::primary(), 0.40),
            ),
            ButtonVariant::Soft => (
                AvicureColors::alpha(AvicureColors::primary_soft(), 0.40),
                AvicureColors::primary_dark(),
                AvicureColors::alpha(AvicureColors::primary_soft(), 0.60),
                clear,
            ),
            ButtonVariant::Surface => (
                AvicureColors::surface(),
                AvicureColors::ink(),
                AvicureColors::sand(),
                clear,
            ),
            ButtonVariant::Danger => (
                AvicureColors::error(),
                AvicureColors::white(),
                AvicureColors::alpha(AvicureColors::error(), 0.85),
                clear,
            ),
            ButtonVariant::Link => (clear, AvicureColors::primary(), clear, clear),
            ButtonVariant::Inverse => (
                AvicureColors::alpha(AvicureColors::white(), 0.15),
                AvicureColors::white(),
                AvicureColors::alpha(AvicureColors::white(), 0.25),
                clear,
            ),
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg, border_color) = self.colors();
        let raised = matches!(
            self.variant,
            ButtonVariant::Primary | ButtonVariant::Surface | ButtonVariant::Danger
        );

        let element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .bg(bg_color)
            .text_color(text_color)
            .font_weight(FontWeight::SEMIBOLD)
            .border_1()
            .border_color(border_color)
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .when(self.full_width, |this| this.w_full())
            .when(raised, |this| this.shadow_md());

        let element = match self.size {
            ButtonSize::Small => element.rounded_full().px_3().py_1().text_xs(),
            ButtonSize::Medium => element.rounded(px(16.0)).px_4().py_3().text_sm(),
            ButtonSize::Large => element.rounded(px(16.0)).h(px(56.0)).px_4().text_sm(),
        };

        element.children(self.leading).child(self.label)
    }
}
