//! Welcome, sign-in and dashboard mockups

use gpui::{AnyElement, FontWeight, ParentElement, Styled, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

use super::parts::{avatar, body, caption, overline, row, surface_card, titled, white_muted};
use super::{ScreenEntry, boxed};
use crate::components::layout::bottom_nav::NavKey;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::divider_heading::DividerHeading;
use crate::components::primitives::stat_card::StatCard;
use crate::components::primitives::tag::Tag;
use crate::components::tone::StatTone;
use crate::theme::colors::AvicureColors;

pub fn gentle_onboarding() -> ScreenEntry {
    ScreenEntry::new(
        "Gentle Onboarding",
        "Intro narrative highlighting AI assistance, continuity of care, and multi-provider access.",
        "Welcome",
        NavKey::Home,
        gentle_onboarding_body,
    )
}

fn gentle_onboarding_body() -> AnyElement {
    boxed(
        v_flex()
            .flex_1()
            .gap_6()
            .child(
                v_flex()
                    .rounded(px(20.0))
                    .bg(AvicureColors::alpha(AvicureColors::primary(), 0.12))
                    .p_6()
                    .text_color(AvicureColors::ink())
                    .child(
                        h_flex()
                            .gap_3()
                            .child(avatar("AI", 48.0, AvicureColors::primary(), AvicureColors::white()))
                            .child(
                                v_flex()
                                    .child(
                                        div()
                                            .text_sm()
                                            .font_weight(FontWeight::SEMIBOLD)
                                            .text_color(AvicureColors::primary_dark())
                                            .child("Your AI Health Companion"),
                                    )
                                    .child(caption(
                                        "Evidence-based triage, doctor coordination, proactive alerts.",
                                    )),
                            ),
                    )
                    .child(
                        div()
                            .mt_6()
                            .child(Button::primary("onboarding-create-id", "Create Avicure ID").full_width()),
                    )
                    .child(
                        div()
                            .mt_3()
                            .child(Button::link("onboarding-sign-in", "Already a member? Sign in").full_width()),
                    ),
            )
            .child(
                surface_card()
                    .child(row(caption("What you get"), caption("Trusted by 180k+ families")))
                    .child(
                        v_flex()
                            .gap_3()
                            .text_sm()
                            .text_color(AvicureColors::ink())
                            .child(row(
                                div().child("• Doctor matchmaking by specialty"),
                                Badge::soft("Personalized").compact(),
                            ))
                            .child(div().child("• Lab pick-up scheduling & digital results vault"))
                            .child(div().child("• Remote vitals syncing from wearables")),
                    ),
            ),
    )
}

pub fn sign_in() -> ScreenEntry {
    ScreenEntry::new(
        "Sign In",
        "Passwordless sign-in with biometric emphasis and enterprise SSO for hospital staff.",
        "Auth",
        NavKey::Profile,
        sign_in_body,
    )
}

fn sign_in_body() -> AnyElement {
    let rule = || {
        div()
            .flex_1()
            .h(px(1.0))
            .bg(AvicureColors::alpha(AvicureColors::primary_soft(), 0.40))
    };

    boxed(
        v_flex()
            .flex_1()
            .gap_5()
            .child(
                v_flex()
                    .gap_2()
                    .child(overline("WELCOME BACK", AvicureColors::primary_dark()))
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(AvicureColors::ink())
                            .child("Continue your care plan"),
                    ),
            )
            .child(
                v_flex()
                    .gap_4()
                    .child(
                        v_flex()
                            .gap_2()
                            .text_xs()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(AvicureColors::ink_muted())
                            .child("Email address")
                            .child(
                                div()
                                    .rounded(px(12.0))
                                    .border_1()
                                    .border_color(AvicureColors::alpha(AvicureColors::primary_soft(), 0.60))
                                    .bg(AvicureColors::sand())
                                    .px_4()
                                    .py_3()
                                    .text_sm()
                                    .text_color(AvicureColors::ink())
                                    .child("amira@avicure.health"),
                            ),
                    )
                    .child(
                        Button::primary("sign-in-magic-link", "Continue with Magic Link")
                            .size(ButtonSize::Large),
                    )
                    .child(
                        Button::outline("sign-in-password", "Use password").size(ButtonSize::Large),
                    )
                    .child(
                        h_flex()
                            .gap_3()
                            .text_xs()
                            .text_color(AvicureColors::ink_muted())
                            .child(rule())
                            .child("or")
                            .child(rule()),
                    )
                    .child(
                        Button::new("sign-in-sso", "Hospital SSO")
                            .variant(ButtonVariant::Surface)
                            .size(ButtonSize::Large)
                            .leading(
                                avatar(
                                    "ID",
                                    32.0,
                                    AvicureColors::alpha(AvicureColors::primary_soft(), 0.50),
                                    AvicureColors::primary_dark(),
                                )
                                .text_size(px(11.0)),
                            ),
                    ),
            )
            .child(
                h_flex()
                    .justify_center()
                    .child(caption("Securely backed by Avicure Protect · SOC2 Type II")),
            ),
    )
}

/// Dashboard headline metric
struct StatDatum {
    title: &'static str,
    value: &'static str,
    trend: Option<&'static str>,
    tone: StatTone,
}

const HEADLINE_STAT: StatDatum = StatDatum {
    title: "Cardio Score",
    value: "82 · Stable",
    trend: Some("+4.2% vs last week"),
    tone: StatTone::Success,
};

const PAIRED_STATS: [StatDatum; 2] = [
    StatDatum {
        title: "Blood Pressure",
        value: "118 / 76",
        trend: Some("On track"),
        tone: StatTone::Primary,
    },
    StatDatum {
        title: "Sleep Quality",
        value: "7h 42m",
        trend: Some("• Consistent"),
        tone: StatTone::Warning,
    },
];

impl StatDatum {
    fn card(&self) -> StatCard {
        let card = StatCard::new(self.title, self.value).tone(self.tone);
        match self.trend {
            Some(trend) => card.trend(trend),
            None => card,
        }
    }
}

pub fn command_center() -> ScreenEntry {
    ScreenEntry::new(
        "Patient Command Center",
        "Unified dashboard summarizing today’s care brief, vitals, and upcoming engagements.",
        "Home",
        NavKey::Home,
        command_center_body,
    )
}

fn command_center_body() -> AnyElement {
    boxed(
        body()
            .child(
                h_flex()
                    .justify_between()
                    .rounded(px(18.0))
                    .bg(AvicureColors::primary())
                    .px_5()
                    .py_4()
                    .text_color(AvicureColors::white())
                    .shadow_lg()
                    .child(
                        v_flex()
                            .child(overline("GOOD MORNING AMIRA", white_muted()))
                            .child(
                                div()
                                    .mt_1()
                                    .text_lg()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child("Your care today · 3 actions"),
                            ),
                    )
                    .child(
                        v_flex()
                            .items_end()
                            .text_xs()
                            .child(Badge::inverse("AI overview ready"))
                            .child(
                                div()
                                    .mt_2()
                                    .text_size(px(11.0))
                                    .text_color(white_muted())
                                    .child("Updated 12 mins ago"),
                            ),
                    ),
            )
            .child(
                v_flex()
                    .gap_3()
                    .child(HEADLINE_STAT.card())
                    .child(
                        h_flex()
                            .items_start()
                            .gap_3()
                            .children(PAIRED_STATS.iter().map(StatDatum::card)),
                    ),
            )
            .child(
                surface_card()
                    .child(DividerHeading::new("Agenda"))
                    .child(
                        row(
                            titled("09:30 · Cardio Televisit", "Dr. Malik · Join with Avicure Connect"),
                            Tag::new("Join"),
                        )
                        .items_start(),
                    )
                    .child(
                        row(
                            titled("Blood panel pickup", "LabRite courier today · 6:00 - 6:45 PM"),
                            Badge::soft("Track"),
                        )
                        .items_start(),
                    )
                    .child(
                        row(
                            titled("Update medications log", "Add refill confirmation"),
                            div()
                                .size(px(16.0))
                                .rounded_sm()
                                .border_1()
                                .border_color(AvicureColors::ink_muted())
                                .bg(AvicureColors::surface()),
                        )
                        .items_start(),
                    ),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_stats_keep_their_tones() {
        let tones: Vec<_> = std::iter::once(&HEADLINE_STAT)
            .chain(PAIRED_STATS.iter())
            .map(|s| s.tone)
            .collect();
        assert_eq!(tones, vec![StatTone::Success, StatTone::Primary, StatTone::Warning]);
    }

    #[test]
    fn every_dashboard_stat_shows_a_trend_badge() {
        assert!(HEADLINE_STAT.card().trend_style().is_some());
        for stat in &PAIRED_STATS {
            assert_eq!(stat.card().trend_style(), Some(stat.tone.style()));
        }
    }
}
