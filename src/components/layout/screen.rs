//! Screen Component
//!
//! Fixed-width mockup card: a header block above a phone frame that holds a
//! simulated status bar, the body and an optional footer.

use gpui::{
    AnyElement, App, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::constants::{
    PHONE_FRAME_HEIGHT, PHONE_FRAME_PADDING, PHONE_FRAME_RADIUS, SCREEN_CARD_WIDTH,
    STATUS_BAR_TIME,
};
use crate::theme::colors::AvicureColors;

/// Header text of a mockup card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenMeta {
    pub title: SharedString,
    pub description: SharedString,
    pub tag: Option<SharedString>,
}

impl ScreenMeta {
    pub fn new(title: impl Into<SharedString>, description: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tag: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<SharedString>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Sections of the phone frame, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSection {
    StatusBar,
    Body,
    Footer,
}

/// A mockup card
#[derive(IntoElement)]
pub struct Screen {
    id: ElementId,
    meta: ScreenMeta,
    accent: Option<AnyElement>,
    footer: Option<AnyElement>,
    body: Vec<AnyElement>,
}

impl Screen {
    pub fn new(meta: ScreenMeta) -> Self {
        Self {
            id: ElementId::Name(meta.title.clone()),
            meta,
            accent: None,
            footer: None,
            body: Vec::new(),
        }
    }

    /// Element id of the card; scopes the ids of everything inside it
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn element_id(&self) -> &ElementId {
        &self.id
    }

    /// Element shown next to the brand label
    pub fn accent(mut self, accent: impl IntoElement) -> Self {
        self.accent = Some(accent.into_any_element());
        self
    }

    /// Element shown below the body inside the phone frame
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.body.push(child.into_any_element());
        self
    }

    pub fn meta(&self) -> &ScreenMeta {
        &self.meta
    }

    pub fn has_accent(&self) -> bool {
        self.accent.is_some()
    }

    /// Frame layout: the footer, when present, comes once and last
    pub fn sections(&self) -> Vec<FrameSection> {
        let mut sections = vec![FrameSection::StatusBar, FrameSection::Body];
        if self.footer.is_some() {
            sections.push(FrameSection::Footer);
        }
        sections
    }

    fn render_header(meta: ScreenMeta, accent: Option<AnyElement>) -> impl IntoElement {
        v_flex()
            .gap_2()
            .child(
                h_flex()
                    .justify_between()
                    .text_sm()
                    .text_color(AvicureColors::ink_muted())
                    .child(
                        div()
                            .text_xs()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(AvicureColors::alpha(AvicureColors::primary(), 0.80))
                            .child("AVICURE"),
                    )
                    .children(accent),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(AvicureColors::ink())
                            .child(meta.title),
                    )
                    .when_some(meta.tag, |this, tag| {
                        this.child(
                            div()
                                .rounded(px(10.0))
                                .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.30))
                                .px_3()
                                .py_1()
                                .text_xs()
                                .font_weight(FontWeight::SEMIBOLD)
                                .text_color(AvicureColors::primary_dark())
                                .child(tag),
                        )
                    }),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(AvicureColors::ink_muted())
                    .child(meta.description),
            )
    }

    fn render_status_bar() -> impl IntoElement {
        let bar = |width: f32| {
            div()
                .h(px(10.0))
                .w(px(width))
                .rounded_sm()
                .bg(AvicureColors::primary())
        };

        h_flex()
            .justify_between()
            .pb_4()
            .text_xs()
            .text_color(AvicureColors::ink_muted())
            .child(STATUS_BAR_TIME)
            .child(h_flex().gap_1().child(bar(16.0)).child(bar(8.0)).child(bar(8.0)))
    }
}

impl RenderOnce for Screen {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let sections = self.sections();
        let Screen {
            id,
            meta,
            accent,
            mut footer,
            body,
        } = self;
        let mut body = Some(body);

        let frame = sections.into_iter().fold(
            v_flex()
                .relative()
                .overflow_hidden()
                .h(px(PHONE_FRAME_HEIGHT))
                .rounded(px(PHONE_FRAME_RADIUS))
                .border_1()
                .border_color(AvicureColors::alpha(AvicureColors::primary_soft(), 0.50))
                .bg(AvicureColors::sand())
                .p(px(PHONE_FRAME_PADDING))
                .shadow_lg(),
            |frame, section| match section {
                FrameSection::StatusBar => frame.child(Self::render_status_bar()),
                FrameSection::Body => frame.child(
                    v_flex()
                        .flex_1()
                        .overflow_hidden()
                        .children(body.take().unwrap_or_default()),
                ),
                FrameSection::Footer => frame.children(footer.take().map(|f| div().pt_4().child(f))),
            },
        );

        v_flex()
            .id(id)
            .w(px(SCREEN_CARD_WIDTH))
            .flex_none()
            .gap_4()
            .child(Self::render_header(meta, accent))
            .child(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> ScreenMeta {
        ScreenMeta::new("Sign In", "Passwordless sign-in").tag("Auth")
    }

    #[test]
    fn footer_omitted_renders_no_footer_section() {
        let screen = Screen::new(meta()).child(div());
        assert_eq!(screen.sections(), vec![FrameSection::StatusBar, FrameSection::Body]);
    }

    #[test]
    fn footer_appears_once_after_body() {
        let screen = Screen::new(meta()).child(div()).footer(div());
        let sections = screen.sections();
        assert_eq!(
            sections.iter().filter(|s| **s == FrameSection::Footer).count(),
            1
        );
        assert_eq!(sections.last(), Some(&FrameSection::Footer));
        let body = sections.iter().position(|s| *s == FrameSection::Body);
        let footer = sections.iter().position(|s| *s == FrameSection::Footer);
        assert!(body < footer);
    }

    #[test]
    fn card_id_defaults_to_title() {
        let screen = Screen::new(meta());
        assert_eq!(screen.element_id(), &ElementId::Name("Sign In".into()));

        let numbered = Screen::new(meta()).id(("screen", 2usize));
        assert_eq!(numbered.element_id(), &ElementId::from(("screen", 2usize)));
    }

    #[test]
    fn optional_slots_are_presence_checked() {
        let bare = Screen::new(ScreenMeta::new("Community", "Peer stories"));
        assert!(!bare.has_accent());
        assert_eq!(bare.meta().tag, None);

        let accented = Screen::new(meta()).accent(div().child("02"));
        assert!(accented.has_accent());
        assert_eq!(accented.meta().tag.as_ref().map(|t| t.to_string()), Some("Auth".to_string()));
    }
}
