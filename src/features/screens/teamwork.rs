//! Care team chat, telehealth and care plan mockups

use gpui::{AnyElement, Div, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{avatar, body, bullet, primary_banner, strong, surface_card, titled};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::theme::colors::AvicureColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Speaker {
    Patient,
    Clinician,
}

struct ChatMessage {
    from: Speaker,
    text: &'static str,
}

const THREAD: [ChatMessage; 3] = [
    ChatMessage {
        from: Speaker::Patient,
        text: "“Shared today's vitals. HR spike overnight.”",
    },
    ChatMessage {
        from: Speaker::Clinician,
        text: "“Reviewed. Let's add ECG task tonight.”",
    },
    ChatMessage {
        from: Speaker::Patient,
        text: "“Should we adjust beta blockers?”",
    },
];

pub fn care_team_chat() -> ScreenEntry {
    ScreenEntry::new(
        "Care Team Chat",
        "Conversation with AI summaries, handoff signals, and quick actions.",
        "Collaboration",
        NavKey::Chat,
        care_team_chat_body,
    )
}

fn chat_bubble(message: &ChatMessage) -> Div {
    let bubble = div().max_w(px(240.0)).rounded(px(16.0)).px_3().py_2().text_sm();
    match message.from {
        Speaker::Patient => h_flex().justify_start().child(
            bubble
                .bg(AvicureColors::alpha(AvicureColors::primary(), 0.10))
                .text_color(AvicureColors::ink())
                .child(message.text),
        ),
        Speaker::Clinician => h_flex().justify_end().child(
            bubble
                .bg(AvicureColors::primary())
                .text_color(AvicureColors::white())
                .child(message.text),
        ),
    }
}

fn care_team_chat_body() -> AnyElement {
    boxed(
        body()
            .child(
                h_flex()
                    .justify_between()
                    .child(
                        h_flex()
                            .gap_3()
                            .child(avatar("RM", 40.0, AvicureColors::primary(), AvicureColors::white()))
                            .child(
                                v_flex().child(strong("Dr. Malik · Cardio")).child(
                                    div()
                                        .text_xs()
                                        .text_color(AvicureColors::success())
                                        .child("Online now"),
                                ),
                            ),
                    )
                    .child(Button::primary("chat-start-call", "Start call").size(ButtonSize::Small)),
            )
            .child(surface_card().flex_1().children(THREAD.iter().map(chat_bubble)))
            .child(
                h_flex()
                    .gap_2()
                    .rounded(px(16.0))
                    .bg(AvicureColors::surface())
                    .p_3()
                    .shadow_md()
                    .child(
                        div()
                            .flex_1()
                            .rounded(px(12.0))
                            .bg(AvicureColors::sand())
                            .px_4()
                            .py_3()
                            .text_sm()
                            .text_color(AvicureColors::ink_muted())
                            .child("Share updates or ask Avicure AI..."),
                    )
                    .child(Button::primary("chat-send", "➤").size(ButtonSize::Small)),
            ),
    )
}

const SNAPSHOT: [&str; 3] = [
    "HR trend +6% overnight",
    "Chest tightness episodes: 2",
    "Medication adherence 100%",
];

pub fn telehealth_call() -> ScreenEntry {
    ScreenEntry::new(
        "Telehealth Call",
        "Video interface with shared context cards and emergency escalation.",
        "Visit",
        NavKey::Care,
        telehealth_call_body,
    )
}

fn video_feed() -> Div {
    div()
        .relative()
        .h(px(192.0))
        .overflow_hidden()
        .rounded(px(24.0))
        .bg(AvicureColors::alpha(AvicureColors::primary(), 0.16))
        .child(
            div()
                .absolute()
                .inset_0()
                .flex()
                .items_center()
                .justify_center()
                .text_color(AvicureColors::alpha(AvicureColors::primary_dark(), 0.60))
                .child("Live video feed"),
        )
        .child(div().absolute().left_3().top_3().child(Badge::solid("03:42")))
        .child(
            div()
                .absolute()
                .right_3()
                .bottom_3()
                .child(Badge::soft("Recording consented")),
        )
}

fn telehealth_call_body() -> AnyElement {
    boxed(
        body()
            .child(video_feed())
            .child(
                h_flex()
                    .flex_1()
                    .items_start()
                    .gap_3()
                    .child(
                        surface_card()
                            .flex_1()
                            .child(strong("Shared Snapshot"))
                            .child(
                                v_flex()
                                    .gap_2()
                                    .text_xs()
                                    .text_color(AvicureColors::ink_muted())
                                    .children(SNAPSHOT.iter().copied().map(bullet)),
                            )
                            .child(
                                Button::primary("telehealth-vitals", "View vitals timeline").full_width(),
                            ),
                    )
                    .child(
                        v_flex()
                            .w(px(96.0))
                            .gap_3()
                            .rounded(px(18.0))
                            .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.30))
                            .p_3()
                            .text_xs()
                            .text_color(AvicureColors::primary_dark())
                            .child(div().font_weight(FontWeight::SEMIBOLD).child("Quick Actions"))
                            .child(
                                v_flex()
                                    .gap_2()
                                    .child(quick_action("telehealth-order", "Add Order", ButtonVariant::Surface))
                                    .child(quick_action("telehealth-share", "Share Screen", ButtonVariant::Surface))
                                    .child(quick_action("telehealth-escalate", "Escalate", ButtonVariant::Danger)),
                            ),
                    ),
            )
            .child(
                h_flex()
                    .justify_between()
                    .rounded(px(20.0))
                    .bg(AvicureColors::primary())
                    .px_5()
                    .py_4()
                    .shadow_lg()
                    .child(
                        h_flex()
                            .gap_3()
                            .child(Badge::inverse("Mute"))
                            .child(Badge::inverse("Camera")),
                    )
                    .child(Button::danger("telehealth-end", "End call").size(ButtonSize::Small)),
            ),
    )
}

fn quick_action(id: &'static str, label: &'static str, variant: ButtonVariant) -> Button {
    Button::new(id, label).variant(variant).size(ButtonSize::Small).full_width()
}

struct PlanCard {
    title: &'static str,
    detail: &'static str,
}

const PLAN_CARDS: [PlanCard; 3] = [
    PlanCard {
        title: "Daily Morning Check-in",
        detail: "Patient logs BP & symptoms · 08:00 AM",
    },
    PlanCard {
        title: "Lab Follow-up",
        detail: "Repeat lipid panel · Week 3",
    },
    PlanCard {
        title: "Medication Adjustment Review",
        detail: "AI monitors side effects · Auto escalate",
    },
];

pub fn care_plan_builder() -> ScreenEntry {
    ScreenEntry::new(
        "Care Plan Builder",
        "Doctor side composable plan with tasks, meds, labs, and automation.",
        "Provider",
        NavKey::Care,
        care_plan_builder_body,
    )
}

fn care_plan_builder_body() -> AnyElement {
    boxed(
        body()
            .child(primary_banner("PLAN TEMPLATE", "Post-visit hybrid care · 4 weeks"))
            .child(surface_card().flex_1().children(PLAN_CARDS.iter().map(|card| {
                div()
                    .rounded(px(14.0))
                    .border_1()
                    .border_color(AvicureColors::alpha(AvicureColors::primary_soft(), 0.50))
                    .p_3()
                    .child(titled(card.title, card.detail))
            })))
            .child(Button::primary("plan-publish", "Publish plan to patient").full_width()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_alternates_speakers() {
        let speakers: Vec<_> = THREAD.iter().map(|m| m.from).collect();
        assert_eq!(
            speakers,
            vec![Speaker::Patient, Speaker::Clinician, Speaker::Patient]
        );
    }

    #[test]
    fn plan_has_three_cards() {
        let titles: Vec<_> = PLAN_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Daily Morning Check-in", "Lab Follow-up", "Medication Adjustment Review"]
        );
    }
}
