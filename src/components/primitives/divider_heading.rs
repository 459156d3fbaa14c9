//! Divider Heading Component

use gpui::{App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};
use gpui_component::h_flex;

use crate::theme::colors::AvicureColors;

/// Section label followed by a rule that fills the remaining width
#[derive(IntoElement, Debug, Clone, PartialEq)]
pub struct DividerHeading {
    label: SharedString,
}

impl DividerHeading {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &SharedString {
        &self.label
    }

    /// Label as displayed: upper case
    pub fn display_label(&self) -> SharedString {
        self.label.to_uppercase().into()
    }
}

impl RenderOnce for DividerHeading {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_3()
            .py_2()
            .child(
                div()
                    .flex_none()
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(AvicureColors::ink_muted())
                    .child(self.display_label()),
            )
            .child(
                div()
                    .flex_1()
                    .h(px(1.0))
                    .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.40)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_kept_verbatim() {
        assert_eq!(DividerHeading::new("Agenda").label().to_string(), "Agenda");
        assert_eq!(DividerHeading::new("Micro goals").label().to_string(), "Micro goals");
    }

    #[test]
    fn label_is_displayed_upper_case() {
        assert_eq!(DividerHeading::new("Agenda").display_label().to_string(), "AGENDA");
        assert_eq!(DividerHeading::new("Micro goals").display_label().to_string(), "MICRO GOALS");
    }
}
