//! Triage, doctor matching and booking mockups

use gpui::{AnyElement, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{body, caption, key_value, overline, primary_banner, row, surface_card, titled, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::divider_heading::DividerHeading;
use crate::components::primitives::tag::Tag;
use crate::theme::colors::AvicureColors;

pub fn symptom_triage() -> ScreenEntry {
    ScreenEntry::new(
        "AI Symptom Triage",
        "Conversational triage assistant translating inputs to structured clinical data.",
        "AI",
        NavKey::Care,
        symptom_triage_body,
    )
}

fn symptom_triage_body() -> AnyElement {
    boxed(
        body()
            .child(
                v_flex()
                    .gap_3()
                    .rounded(px(20.0))
                    .bg(AvicureColors::alpha(AvicureColors::primary_dark(), 0.90))
                    .p_5()
                    .text_color(AvicureColors::white())
                    .child(overline("AVICURE AI", white_muted()))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child("“Describe what's bothering you today.”"),
                    )
                    .child(
                        div()
                            .rounded(px(16.0))
                            .bg(AvicureColors::alpha(AvicureColors::white(), 0.15))
                            .p_3()
                            .text_sm()
                            .text_color(AvicureColors::alpha(AvicureColors::white(), 0.80))
                            .child(
                                div()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(AvicureColors::white())
                                    .child("Input blueprint:"),
                            )
                            .child(
                                "What you feel, when it started, any recent changes, relevant meds or procedures.",
                            ),
                    )
                    .child(
                        Button::new("triage-speak", "Speak symptoms").variant(ButtonVariant::Inverse),
                    ),
            )
            .child(
                surface_card()
                    .gap_4()
                    .child(DividerHeading::new("Summary"))
                    .child(
                        v_flex()
                            .gap_3()
                            .child(key_value("Pain area", "Chest"))
                            .child(key_value("Onset", "Started 2 hours ago"))
                            .child(row(
                                div().text_sm().text_color(AvicureColors::ink_muted()).child("Alert level"),
                                Badge::warning("Elevated · consult within 2h"),
                            )),
                    )
                    .child(Button::primary("triage-send", "Send to care navigator")),
            ),
    )
}

/// Suggested doctor card
struct Doctor {
    name: &'static str,
    meta: &'static str,
    rating: &'static str,
    fit: &'static str,
    next: &'static str,
}

const DOCTORS: [Doctor; 2] = [
    Doctor {
        name: "Dr. Rashid Malik",
        meta: "Interventional Cardiologist · NY Presbyterian",
        rating: "4.9",
        fit: "92% match",
        next: "Today · 12:40 PM",
    },
    Doctor {
        name: "Dr. Hana Liu",
        meta: "Cardiac Imaging · Mount Sinai",
        rating: "4.8",
        fit: "88% match",
        next: "Tomorrow · 9:10 AM",
    },
];

const MATCH_FILTERS: [&str; 3] = [
    "Insurance: Avicure Blue",
    "Location: Virtual",
    "Language: English + Arabic",
];

pub fn doctor_matching() -> ScreenEntry {
    ScreenEntry::new(
        "Doctor Matching",
        "Smart doctor suggestions blended with availability, insurance, and patient fit score.",
        "Care",
        NavKey::Care,
        doctor_matching_body,
    )
}

fn doctor_card(doctor: &Doctor) -> impl IntoElement {
    surface_card()
        .child(
            row(
                titled(doctor.name, doctor.meta),
                v_flex()
                    .items_end()
                    .gap_1()
                    .child(Badge::success(doctor.fit).compact())
                    .child(caption(format!("⭐️ {}", doctor.rating))),
            )
            .items_start(),
        )
        .child(
            row(caption("Next slot"), Badge::solid(doctor.next))
                .text_xs(),
        )
}

fn doctor_matching_body() -> AnyElement {
    boxed(
        body()
            .child(
                v_flex()
                    .rounded(px(18.0))
                    .bg(AvicureColors::alpha(AvicureColors::primary(), 0.12))
                    .p_4()
                    .child(overline("AI RECOMMENDATION", AvicureColors::primary_dark()))
                    .child(
                        div()
                            .mt_2()
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(AvicureColors::ink())
                            .child("Top cardiologists for your episode"),
                    )
                    .child(
                        h_flex()
                            .mt_4()
                            .flex_wrap()
                            .gap_2()
                            .children(MATCH_FILTERS.iter().map(|f| Tag::new(*f))),
                    ),
            )
            .child(v_flex().gap_3().children(DOCTORS.iter().map(doctor_card))),
    )
}

/// Pre-visit checklist line
struct ChecklistItem {
    task: &'static str,
    status: ChecklistStatus,
}

enum ChecklistStatus {
    Due(&'static str),
    Action(&'static str),
    Chip(&'static str),
}

const PRE_VISIT: [ChecklistItem; 3] = [
    ChecklistItem {
        task: "Upload morning vitals",
        status: ChecklistStatus::Due("Due 08:30"),
    },
    ChecklistItem {
        task: "Attach recent lab results",
        status: ChecklistStatus::Action("Add files"),
    },
    ChecklistItem {
        task: "Note questions for Dr. Malik",
        status: ChecklistStatus::Chip("Checklist"),
    },
];

pub fn appointment_confirmation() -> ScreenEntry {
    ScreenEntry::new(
        "Appointment Confirmation",
        "Coordinated booking with pre-visit checklist, labs, and concierge add-ons.",
        "Scheduling",
        NavKey::Care,
        appointment_confirmation_body,
    )
}

fn checklist_row(item: &ChecklistItem) -> impl IntoElement {
    let status = match item.status {
        ChecklistStatus::Due(text) => caption(text).into_any_element(),
        ChecklistStatus::Action(text) => Badge::soft(text).compact().into_any_element(),
        ChecklistStatus::Chip(text) => Badge::primary(text).into_any_element(),
    };

    row(div().child(item.task), status).items_start()
}

fn appointment_confirmation_body() -> AnyElement {
    boxed(
        body()
            .child(
                primary_banner("CONFIRMED", "Cardio Televisit · Tomorrow 09:30")
                    .rounded(px(20.0))
                    .child(
                        h_flex()
                            .mt_3()
                            .flex_wrap()
                            .gap_2()
                            .child(Tag::new("Zoom Auto-Join"))
                            .child(Tag::new("Prep time 6 mins")),
                    ),
            )
            .child(
                surface_card()
                    .text_sm()
                    .child(DividerHeading::new("Before the visit"))
                    .children(PRE_VISIT.iter().map(checklist_row)),
            )
            .child(
                h_flex()
                    .gap_3()
                    .child(div().flex_1().child(Button::primary("appointment-calendar", "Add to calendar").full_width()))
                    .child(Button::outline("appointment-invite", "Invite caregiver")),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_table_is_ordered_by_fit() {
        let names: Vec<_> = DOCTORS.iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Dr. Rashid Malik", "Dr. Hana Liu"]);
        assert!(DOCTORS.iter().all(|d| d.fit.ends_with("% match")));
    }

    #[test]
    fn checklist_has_one_line_per_task() {
        assert_eq!(PRE_VISIT.len(), 3);
        assert!(matches!(PRE_VISIT[0].status, ChecklistStatus::Due(_)));
    }
}
