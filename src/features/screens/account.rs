//! Billing, notification inbox and community mockups

use gpui::{AnyElement, Div, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{body, caption, dot, key_value, overline, primary_banner, row, strong, surface_card, titled, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::divider_heading::DividerHeading;
use crate::components::tone::StatTone;
use crate::theme::colors::AvicureColors;

/// One billed service and its coverage outcome
struct BillingLine {
    title: &'static str,
    detail: &'static str,
    tone: StatTone,
}

const BILLING_LINES: [BillingLine; 2] = [
    BillingLine {
        title: "Televisit · Dr. Malik",
        detail: "Covered · $0",
        tone: StatTone::Success,
    },
    BillingLine {
        title: "Lab pickup concierge",
        detail: "Co-pay · $16.80",
        tone: StatTone::Warning,
    },
];

pub fn billing_coverage() -> ScreenEntry {
    ScreenEntry::new(
        "Billing & Coverage",
        "Transparent billing with coverage summary and co-pay automation.",
        "Financial",
        NavKey::Profile,
        billing_coverage_body,
    )
}

fn billing_line(line: &BillingLine) -> Div {
    surface_card().gap_1().child(strong(line.title)).child(
        div()
            .text_xs()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(line.tone.style().foreground)
            .child(line.detail),
    )
}

fn billing_coverage_body() -> AnyElement {
    boxed(
        body()
            .child(
                v_flex()
                    .gap_1()
                    .rounded(px(18.0))
                    .bg(AvicureColors::primary())
                    .px_5()
                    .py_4()
                    .text_color(AvicureColors::white())
                    .shadow_lg()
                    .child(overline("CURRENT BALANCE", white_muted()))
                    .child(div().text_3xl().font_weight(FontWeight::SEMIBOLD).child("$36.80"))
                    .child(
                        div()
                            .text_xs()
                            .text_color(white_muted())
                            .child("Due in 5 days · Auto-pay enabled"),
                    ),
            )
            .child(
                surface_card()
                    .child(DividerHeading::new("Coverage"))
                    .child(key_value("Insurer", "Avicure Blue"))
                    .child(row(
                        div().text_sm().text_color(AvicureColors::ink_muted()).child("Coverage applied"),
                        Badge::primary("80%"),
                    ))
                    .child(row(
                        div().text_sm().text_color(AvicureColors::ink_muted()).child("HSAs compatible"),
                        div()
                            .text_sm()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(AvicureColors::success())
                            .child("Yes"),
                    )),
            )
            .child(v_flex().flex_1().gap_3().children(BILLING_LINES.iter().map(billing_line)))
            .child(Button::primary("billing-invoice", "View detailed invoice").full_width()),
    )
}

/// One inbox item; the tone colours its status dot
struct Notification {
    title: &'static str,
    detail: &'static str,
    tone: StatTone,
}

const NOTIFICATIONS: [Notification; 3] = [
    Notification {
        title: "AI Summary ready for Dr. Malik",
        detail: "Sent to care team · 9m ago",
        tone: StatTone::Primary,
    },
    Notification {
        title: "Lab courier arriving soon",
        detail: "Track courier · ETA 15 min",
        tone: StatTone::Warning,
    },
    Notification {
        title: "Medication refill confirmed",
        detail: "Delivery Friday · Avicure Pharmacy",
        tone: StatTone::Success,
    },
];

pub fn notifications_hub() -> ScreenEntry {
    ScreenEntry::new(
        "Notifications Hub",
        "Smart inbox blending AI insights, care alerts, and administrative reminders.",
        "System",
        NavKey::Home,
        notifications_hub_body,
    )
}

fn notification_card(notification: &Notification) -> Div {
    surface_card()
        .gap_2()
        .child(row(caption(notification.detail), dot(notification.tone.dot(), 8.0)))
        .child(strong(notification.title))
}

fn notifications_hub_body() -> AnyElement {
    boxed(
        body()
            .child(primary_banner("SMART PRIORITIES", "2 actions today"))
            .child(v_flex().flex_1().gap_3().children(NOTIFICATIONS.iter().map(notification_card)))
            .child(
                Button::new("notifications-read", "Mark all as read")
                    .variant(ButtonVariant::Outline)
                    .full_width(),
            ),
    )
}

/// One community post
struct Post {
    author: &'static str,
    content: &'static str,
}

const POSTS: [Post; 3] = [
    Post {
        author: "Lina · Patient",
        content: "Shared how Avicure helped coordinate post-surgery rehab. Detailed her recovery checklist.",
    },
    Post {
        author: "Dr. Alvarez · Cardiologist",
        content: "Weekly QA: How to interpret home BP readings effectively?",
    },
    Post {
        author: "Maya · Caregiver",
        content: "Tips for managing medications while traveling with elderly parents.",
    },
];

pub fn community() -> ScreenEntry {
    ScreenEntry::new(
        "Community",
        "Curated peer stories, moderated Q&A, and physician verified content.",
        "Support",
        NavKey::Home,
        community_body,
    )
}

fn post_card(post: &Post) -> Div {
    v_flex()
        .gap_1()
        .rounded(px(16.0))
        .border_1()
        .border_color(AvicureColors::alpha(AvicureColors::primary_soft(), 0.50))
        .p_3()
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(AvicureColors::primary_dark())
                .child(post.author),
        )
        .child(div().text_sm().text_color(AvicureColors::ink()).child(post.content))
}

fn community_body() -> AnyElement {
    boxed(
        body()
            .child(
                h_flex()
                    .justify_between()
                    .child(titled("Cardio Collective", "24,300 members · Clinician moderated"))
                    .child(Button::primary("community-post", "New post").size(ButtonSize::Small)),
            )
            .child(surface_card().flex_1().children(POSTS.iter().map(post_card)))
            .child(Button::primary("community-topics", "Browse expert topics").full_width()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_dots_follow_tone() {
        let dots: Vec<_> = NOTIFICATIONS.iter().map(|n| n.tone.dot()).collect();
        assert_eq!(
            dots,
            vec![
                AvicureColors::primary(),
                AvicureColors::warning(),
                AvicureColors::success()
            ]
        );
    }

    #[test]
    fn billing_outcomes_are_covered_then_copay() {
        assert_eq!(BILLING_LINES[0].tone, StatTone::Success);
        assert_eq!(BILLING_LINES[1].tone, StatTone::Warning);
        assert_eq!(BILLING_LINES[1].detail, "Co-pay · $16.80");
    }

    #[test]
    fn community_has_three_voices() {
        let authors: Vec<_> = POSTS.iter().map(|p| p.author).collect();
        assert_eq!(
            authors,
            vec!["Lina · Patient", "Dr. Alvarez · Cardiologist", "Maya · Caregiver"]
        );
    }
}
