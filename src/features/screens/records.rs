//! Timeline and lab results mockups

use gpui::{AnyElement, Div, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{body, caption, note_card, primary_banner, row, strong, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::tone::BadgeTone;
use crate::theme::colors::AvicureColors;

/// One event on the clinical timeline
struct TimelineEvent {
    title: &'static str,
    detail: &'static str,
    time: &'static str,
    tag: &'static str,
}

const TIMELINE: [TimelineEvent; 3] = [
    TimelineEvent {
        title: "Televisit · Cardio",
        detail: "Discussed symptom episode. Adjusted beta blockers.",
        time: "09:30",
        tag: "Doctor Malik",
    },
    TimelineEvent {
        title: "Lab Pickup Scheduled",
        detail: "LabRite courier ETA 6:00 PM · Home collection.",
        time: "08:10",
        tag: "Diagnostics",
    },
    TimelineEvent {
        title: "Medication Refill",
        detail: "Sent to Avicure Pharmacy · ETA Friday",
        time: "Yesterday",
        tag: "Rx",
    },
];

pub fn clinical_timeline() -> ScreenEntry {
    ScreenEntry::new(
        "Clinical Timeline",
        "Vertical timeline aligning doctor notes, labs, and pharmacies across providers.",
        "Journey",
        NavKey::Home,
        clinical_timeline_body,
    )
}

fn timeline_event(event: &TimelineEvent) -> Div {
    h_flex()
        .items_start()
        .gap_4()
        .child(
            div()
                .mt_5()
                .size(px(16.0))
                .rounded_full()
                .border_4()
                .border_color(AvicureColors::surface())
                .bg(AvicureColors::primary()),
        )
        .child(
            v_flex()
                .flex_1()
                .relative()
                .rounded(px(18.0))
                .bg(AvicureColors::surface())
                .p_4()
                .shadow_md()
                .child(
                    row(caption(event.time), Badge::primary(event.tag).compact())
                        .text_xs(),
                )
                .child(strong(event.title).mt_2())
                .child(caption(event.detail)),
        )
}

fn clinical_timeline_body() -> AnyElement {
    boxed(
        body()
            .child(row(strong("Care sequence"), caption("Last sync · 2m")))
            .child(
                div()
                    .relative()
                    .flex_1()
                    .child(
                        div()
                            .absolute()
                            .left(px(7.0))
                            .top_0()
                            .bottom_0()
                            .w(px(1.0))
                            .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.60)),
                    )
                    .child(v_flex().gap_6().children(TIMELINE.iter().map(timeline_event))),
            ),
    )
}

/// One analyte of the lipid panel
struct LabResult {
    metric: &'static str,
    value: &'static str,
    range: &'static str,
    tone: BadgeTone,
}

const LIPID_PANEL: [LabResult; 3] = [
    LabResult {
        metric: "LDL Cholesterol",
        value: "86 mg/dL",
        range: "Optimal",
        tone: BadgeTone::Success,
    },
    LabResult {
        metric: "HDL Cholesterol",
        value: "44 mg/dL",
        range: "Slightly low · +Fiber plan",
        tone: BadgeTone::Warning,
    },
    LabResult {
        metric: "Triglycerides",
        value: "152 mg/dL",
        range: "Monitor",
        tone: BadgeTone::Warning,
    },
];

pub fn lab_results() -> ScreenEntry {
    ScreenEntry::new(
        "Lab Results Vault",
        "Structured results with trending insight, ranges, and doctor annotations.",
        "Labs",
        NavKey::Care,
        lab_results_body,
    )
}

fn lab_result_card(result: &LabResult) -> Div {
    v_flex()
        .rounded(px(18.0))
        .bg(AvicureColors::surface())
        .p_4()
        .shadow_md()
        .child(
            row(
                caption(result.metric),
                Badge::new(result.range).tone(result.tone).compact(),
            )
            .text_xs(),
        )
        .child(
            div()
                .mt_2()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(AvicureColors::ink())
                .child(result.value),
        )
}

fn lab_results_body() -> AnyElement {
    boxed(
        body()
            .child(
                primary_banner("LIPID PANEL", "Collected · Today").child(
                    div()
                        .text_xs()
                        .text_color(white_muted())
                        .child("Annotated by Dr. Malik"),
                ),
            )
            .child(v_flex().gap_3().children(LIPID_PANEL.iter().map(lab_result_card)))
            .child(note_card(
                "Doctor Notes",
                "Maintain current medication. Increase Omega-3 intake and log in nutrition tracker. Repeat panel in 6 weeks.",
            )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_is_newest_first() {
        let times: Vec<_> = TIMELINE.iter().map(|e| e.time).collect();
        assert_eq!(times, vec!["09:30", "08:10", "Yesterday"]);
    }

    #[test]
    fn lab_ranges_are_success_or_warning() {
        let tones: Vec<_> = LIPID_PANEL.iter().map(|r| r.tone).collect();
        assert_eq!(tones, vec![BadgeTone::Success, BadgeTone::Warning, BadgeTone::Warning]);
    }
}
