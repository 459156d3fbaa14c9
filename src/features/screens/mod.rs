//! Screen Catalogue
//!
//! The eighteen mockups in display order. Each entry pairs literal header
//! text and a bottom-nav key with a body builder; bodies keep their sample
//! data in `const` tables inside their own module.

mod account;
mod care;
mod critical;
mod monitoring;
mod onboarding;
mod records;
mod teamwork;

pub mod parts;

use gpui::{AnyElement, IntoElement, ParentElement, Styled, div};

use crate::components::layout::bottom_nav::{BottomNav, NavKey};
use crate::components::layout::screen::{Screen, ScreenMeta};
use crate::theme::colors::AvicureColors;

/// One mockup of the catalogue
#[derive(Clone)]
pub struct ScreenEntry {
    meta: ScreenMeta,
    nav: NavKey,
    body: fn() -> AnyElement,
}

impl ScreenEntry {
    pub fn new(
        title: &'static str,
        description: &'static str,
        tag: &'static str,
        nav: NavKey,
        body: fn() -> AnyElement,
    ) -> Self {
        Self {
            meta: ScreenMeta::new(title, description).tag(tag),
            nav,
            body,
        }
    }

    pub fn meta(&self) -> &ScreenMeta {
        &self.meta
    }

    pub fn nav(&self) -> NavKey {
        self.nav
    }

    /// Build the card for this entry at 1-based `position`
    pub fn build(&self, position: usize) -> Screen {
        Screen::new(self.meta.clone())
            .id(("screen", position))
            .accent(
                div()
                    .text_xs()
                    .text_color(AvicureColors::ink_muted())
                    .child(accent_label(position)),
            )
            .footer(BottomNav::new(self.nav))
            .child((self.body)())
    }
}

/// Two-digit position shown in a card's accent slot
pub fn accent_label(position: usize) -> String {
    format!("{position:02}")
}

/// All mockups in display order
pub fn catalog() -> Vec<ScreenEntry> {
    vec![
        onboarding::gentle_onboarding(),
        onboarding::sign_in(),
        onboarding::command_center(),
        care::symptom_triage(),
        care::doctor_matching(),
        care::appointment_confirmation(),
        records::clinical_timeline(),
        records::lab_results(),
        monitoring::vitals_live_sync(),
        monitoring::medication_adherence(),
        teamwork::care_team_chat(),
        teamwork::telehealth_call(),
        teamwork::care_plan_builder(),
        account::billing_coverage(),
        account::notifications_hub(),
        account::community(),
        critical::emergency_mode(),
        critical::insights_trends(),
    ]
}

/// Shorthand used by the body builders
fn boxed(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_TITLES: [&str; 18] = [
        "Gentle Onboarding",
        "Sign In",
        "Patient Command Center",
        "AI Symptom Triage",
        "Doctor Matching",
        "Appointment Confirmation",
        "Clinical Timeline",
        "Lab Results Vault",
        "Vitals · Live Sync",
        "Medication Adherence",
        "Care Team Chat",
        "Telehealth Call",
        "Care Plan Builder",
        "Billing & Coverage",
        "Notifications Hub",
        "Community",
        "Emergency Mode",
        "Insights & Trends",
    ];

    fn titles() -> Vec<String> {
        catalog().iter().map(|e| e.meta().title.to_string()).collect()
    }

    #[test]
    fn catalog_has_eighteen_screens_in_fixed_order() {
        assert_eq!(titles(), EXPECTED_TITLES.to_vec());
    }

    #[test]
    fn catalog_is_identical_on_every_build() {
        let first: Vec<_> = catalog().iter().map(|e| (e.meta().clone(), e.nav())).collect();
        let second: Vec<_> = catalog().iter().map(|e| (e.meta().clone(), e.nav())).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn every_screen_has_tag_and_description() {
        for entry in catalog() {
            assert!(entry.meta().tag.is_some(), "{} has no tag", entry.meta().title);
            assert!(!entry.meta().description.to_string().is_empty());
        }
    }

    #[test]
    fn accent_labels_are_two_digits() {
        assert_eq!(accent_label(1), "01");
        assert_eq!(accent_label(9), "09");
        assert_eq!(accent_label(18), "18");
    }

    #[test]
    fn nav_keys_follow_the_screen_context() {
        let navs: Vec<_> = catalog().iter().map(|e| e.nav()).collect();
        assert_eq!(navs[0], NavKey::Home);
        assert_eq!(navs[1], NavKey::Profile);
        assert_eq!(navs[3], NavKey::Care);
        assert_eq!(navs[10], NavKey::Chat);
        assert_eq!(navs[13], NavKey::Profile);
        assert_eq!(navs.iter().filter(|k| **k == NavKey::Chat).count(), 1);
    }

    #[test]
    fn built_cards_have_distinct_element_ids() {
        let ids: std::collections::HashSet<_> = catalog()
            .iter()
            .enumerate()
            .map(|(ix, entry)| entry.build(ix + 1).element_id().clone())
            .collect();
        assert_eq!(ids.len(), EXPECTED_TITLES.len());
    }

    #[test]
    fn built_cards_carry_accent_and_footer() {
        let entries = catalog();
        let card = entries[2].build(3);
        assert!(card.has_accent());
        assert_eq!(card.meta().title.to_string(), "Patient Command Center");
        assert_eq!(
            card.sections().last(),
            Some(&crate::components::layout::screen::FrameSection::Footer)
        );
    }
}
