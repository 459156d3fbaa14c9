//! Shell Component
//!
//! The root wrapper around every page: sand background, ink text and the
//! primary font family registered by the root layout.

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::app::layout::RootLayout;
use crate::theme::colors::AvicureColors;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    children: Vec<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let font_family = cx.global::<RootLayout>().font_family().clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .font_family(font_family)
            .bg(AvicureColors::sand())
            .text_color(AvicureColors::ink())
            .children(self.children)
    }
}
