//! Tag Component

use gpui::{AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::theme::colors::AvicureColors;

/// Pill-shaped label with the fixed primary-soft style around any content
#[derive(IntoElement)]
pub struct Tag {
    content: AnyElement,
}

impl Tag {
    pub fn new(content: impl IntoElement) -> Self {
        Self {
            content: content.into_any_element(),
        }
    }
}

impl RenderOnce for Tag {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_none()
            .items_center()
            .gap_1()
            .rounded_full()
            .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.30))
            .px_3()
            .py_1()
            .text_xs()
            .font_weight(FontWeight::MEDIUM)
            .text_color(AvicureColors::primary_dark())
            .child(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui_component::h_flex;

    #[test]
    fn wraps_text_and_elements() {
        let _text = Tag::new("Zoom Auto-Join");
        let _shared = Tag::new(gpui::SharedString::from(format!("Prep time {} mins", 6)));
        let _element = Tag::new(h_flex().gap_1().child("●").child("Live"));
    }
}
