//! Wearable vitals and medication adherence mockups

use gpui::{AnyElement, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{body, caption, overline, primary_banner, row, strong, surface_card, titled, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::divider_heading::DividerHeading;
use crate::components::primitives::progress_pill::ProgressPill;
use crate::components::tone::PillTone;
use crate::theme::colors::AvicureColors;

/// One wearable reading shown as a progress pill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillDatum {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: PillTone,
}

impl PillDatum {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            tone: PillTone::Primary,
        }
    }

    fn pill(&self) -> ProgressPill {
        ProgressPill::new(self.label, self.value).tone(self.tone)
    }
}

const CARDIO_PILLS: [PillDatum; 2] = [
    PillDatum {
        label: "Resting HR",
        value: "64 bpm",
        tone: PillTone::Success,
    },
    PillDatum::new("Oxygen", "98%"),
];

const ACTIVITY_PILLS: [PillDatum; 3] = [
    PillDatum::new("Steps", "5,430"),
    PillDatum::new("Active minutes", "42 min"),
    PillDatum::new("Calories", "560 kcal"),
];

pub fn vitals_live_sync() -> ScreenEntry {
    ScreenEntry::new(
        "Vitals · Live Sync",
        "Real-time wearable sync with trend spark lines and alert thresholds.",
        "Monitoring",
        NavKey::Home,
        vitals_live_sync_body,
    )
}

fn vitals_live_sync_body() -> AnyElement {
    boxed(
        body()
            .child(row(strong("Avicure Pulseband"), Badge::success("Connected")))
            .child(
                v_flex()
                    .gap_1()
                    .rounded(px(20.0))
                    .bg(AvicureColors::primary())
                    .px_5()
                    .py_4()
                    .text_color(AvicureColors::white())
                    .shadow_lg()
                    .child(overline("HRV · 5 MIN AVG", white_muted()))
                    .child(div().mt_1().text_3xl().font_weight(FontWeight::SEMIBOLD).child("72 ms"))
                    .child(div().text_xs().text_color(white_muted()).child("Resilient · +6% vs avg")),
            )
            .child(
                v_flex()
                    .gap_3()
                    .child(h_flex().gap_3().children(CARDIO_PILLS.iter().map(PillDatum::pill)))
                    .child(h_flex().gap_3().children(ACTIVITY_PILLS.iter().map(PillDatum::pill))),
            )
            .child(
                surface_card()
                    .child(DividerHeading::new("Alerts"))
                    .child(
                        v_flex()
                            .gap_3()
                            .child(row(caption("Nighttime HR spike"), Badge::warning("Cleared")))
                            .child(row(caption("Device battery"), Badge::success("76%"))),
                    ),
            ),
    )
}

/// One scheduled dose and its state on the right
struct Dose {
    period: &'static str,
    medication: &'static str,
    detail: &'static str,
    state: DoseState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoseState {
    Taken,
    Due,
    Reminder,
}

const REGIMEN: [Dose; 3] = [
    Dose {
        period: "Morning",
        medication: "Metoprolol 25mg",
        detail: "Taken · 07:15 AM",
        state: DoseState::Taken,
    },
    Dose {
        period: "Midday",
        medication: "Aspirin 81mg",
        detail: "Due in 45 min · 12:30 PM",
        state: DoseState::Due,
    },
    Dose {
        period: "Evening",
        medication: "Atorvastatin 10mg",
        detail: "Auto reminder · 09:00 PM",
        state: DoseState::Reminder,
    },
];

pub fn medication_adherence() -> ScreenEntry {
    ScreenEntry::new(
        "Medication Adherence",
        "Daily regimen tracker with refill automation & caregiver escalation.",
        "Pharmacy",
        NavKey::Home,
        medication_adherence_body,
    )
}

fn dose_state(index: usize, state: DoseState) -> AnyElement {
    match state {
        DoseState::Taken => Badge::success("✅").into_any_element(),
        DoseState::Due => Button::primary(("dose-take", index), "Take now")
            .size(ButtonSize::Small)
            .into_any_element(),
        DoseState::Reminder => Badge::soft("Snooze").into_any_element(),
    }
}

fn medication_adherence_body() -> AnyElement {
    boxed(
        body()
            .child(primary_banner("TODAY'S MEDICATIONS", "3 doses · On time"))
            .child(surface_card().children(REGIMEN.iter().enumerate().map(|(ix, dose)| {
                v_flex()
                    .gap_2()
                    .child(DividerHeading::new(dose.period))
                    .child(row(titled(dose.medication, dose.detail), dose_state(ix, dose.state)))
            })))
            .child(
                h_flex()
                    .gap_3()
                    .child(div().flex_1().child(Button::primary("medication-refill", "Refill via Avicure").full_width()))
                    .child(Button::new("medication-share", "Share with caregiver").variant(ButtonVariant::Outline)),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_resting_heart_rate_is_success() {
        let success: Vec<_> = CARDIO_PILLS
            .iter()
            .chain(ACTIVITY_PILLS.iter())
            .filter(|p| p.tone == PillTone::Success)
            .map(|p| p.label)
            .collect();
        assert_eq!(success, vec!["Resting HR"]);
    }

    #[test]
    fn untoned_pills_match_default() {
        for datum in ACTIVITY_PILLS {
            assert_eq!(datum.pill(), ProgressPill::new(datum.label, datum.value));
        }
    }

    #[test]
    fn regimen_runs_morning_to_evening() {
        let periods: Vec<_> = REGIMEN.iter().map(|d| d.period).collect();
        assert_eq!(periods, vec!["Morning", "Midday", "Evening"]);
        assert_eq!(REGIMEN[1].state, DoseState::Due);
    }
}
