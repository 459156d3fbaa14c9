//! Emergency escalation and longitudinal insight mockups

use gpui::{AnyElement, ParentElement, Styled, div, prelude::*};
use gpui_component::v_flex;

use super::parts::{banner, body, caption, note_card, primary_banner, row, strong, surface_card, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::divider_heading::DividerHeading;
use crate::components::tone::BadgeTone;
use crate::theme::colors::AvicureColors;

pub fn emergency_mode() -> ScreenEntry {
    ScreenEntry::new(
        "Emergency Mode",
        "Rapid escalation to nearest facility with live response tracking.",
        "Critical",
        NavKey::Home,
        emergency_mode_body,
    )
}

fn emergency_mode_body() -> AnyElement {
    boxed(
        body()
            .child(
                banner(AvicureColors::error(), "EMERGENCY INITIATED", "Routing to nearest ER").child(
                    div()
                        .text_xs()
                        .text_color(white_muted())
                        .child("St. Mary's Hospital · 6 min"),
                ),
            )
            .child(
                surface_card()
                    .child(row(strong("Avicure EMS"), Badge::error("Live")))
                    .child(caption("Verified location shared · ETA 04:21"))
                    .child(Button::danger("emergency-call", "Call emergency line").full_width()),
            )
            .child(note_card(
                "Next steps",
                "Remain calm. Sit or lie down. Avoid consuming food or liquids. Avicure notifying Dr. Malik and designated caregiver.",
            )),
    )
}

/// Progress against one micro goal
struct MicroGoal {
    goal: &'static str,
    status: &'static str,
    tone: BadgeTone,
}

const MICRO_GOALS: [MicroGoal; 3] = [
    MicroGoal {
        goal: "Medication consistency",
        status: "96%",
        tone: BadgeTone::Success,
    },
    MicroGoal {
        goal: "Activity baseline",
        status: "+12% · Keep momentum",
        tone: BadgeTone::Warning,
    },
    MicroGoal {
        goal: "Stress recovery",
        status: "Improving",
        tone: BadgeTone::Primary,
    },
];

pub fn insights_trends() -> ScreenEntry {
    ScreenEntry::new(
        "Insights & Trends",
        "AI-driven longitudinal insights with actionable guidance and progress.",
        "Analytics",
        NavKey::Home,
        insights_trends_body,
    )
}

fn insights_trends_body() -> AnyElement {
    boxed(
        body()
            .child(primary_banner("WEEKLY INSIGHT", "Overall risk · Down 12%"))
            .child(
                surface_card()
                    .child(DividerHeading::new("Micro goals"))
                    .child(v_flex().gap_3().text_sm().children(MICRO_GOALS.iter().map(|goal| {
                        row(div().child(goal.goal), Badge::new(goal.status).tone(goal.tone))
                    }))),
            )
            .child(
                surface_card()
                    .flex_1()
                    .child(strong("AI Recommendation"))
                    .child(caption(
                        "“Shift evening dose earlier by 45 minutes to reduce nocturnal spikes.”",
                    ))
                    .child(Button::primary("insights-apply", "Apply to plan").full_width()),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micro_goals_cover_three_tones() {
        let tones: Vec<_> = MICRO_GOALS.iter().map(|g| g.tone).collect();
        assert_eq!(tones, vec![BadgeTone::Success, BadgeTone::Warning, BadgeTone::Primary]);
    }
}
