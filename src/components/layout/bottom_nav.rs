//! Bottom Navigation Component
//!
//! The four-entry tab bar shown under each mockup. Highlighting is purely
//! visual; entries carry no click handler.

use gpui::{
    App, FontWeight, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

use crate::theme::colors::AvicureColors;

/// Navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Home,
    Care,
    Chat,
    Profile,
}

/// One entry of the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub key: NavKey,
    pub label: &'static str,
}

/// Tab bar entries in display order
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { key: NavKey::Home, label: "Home" },
    NavItem { key: NavKey::Care, label: "Care" },
    NavItem { key: NavKey::Chat, label: "Chat" },
    NavItem { key: NavKey::Profile, label: "Profile" },
];

/// Colours of a tab bar entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItemStyle {
    pub background: Rgba,
    pub label: Rgba,
    /// Ring around the icon dot
    pub ring: Rgba,
    pub dot: Rgba,
}

impl NavItemStyle {
    pub fn selected() -> Self {
        Self {
            background: AvicureColors::primary(),
            label: AvicureColors::white(),
            ring: AvicureColors::alpha(AvicureColors::white(), 0.20),
            dot: AvicureColors::white(),
        }
    }

    pub fn unselected() -> Self {
        Self {
            background: AvicureColors::transparent(),
            label: AvicureColors::ink_muted(),
            ring: AvicureColors::alpha(AvicureColors::primary_soft(), 0.40),
            dot: AvicureColors::primary(),
        }
    }
}

/// An entry resolved against the active key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub item: NavItem,
    pub selected: bool,
}

impl NavEntry {
    pub fn style(&self) -> NavItemStyle {
        if self.selected {
            NavItemStyle::selected()
        } else {
            NavItemStyle::unselected()
        }
    }
}

/// Bottom navigation bar
#[derive(IntoElement, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomNav {
    active: NavKey,
}

impl BottomNav {
    pub fn new(active: NavKey) -> Self {
        Self { active }
    }

    /// All four entries, each marked selected when its key is the active one
    pub fn entries(&self) -> [NavEntry; 4] {
        NAV_ITEMS.map(|item| NavEntry {
            item,
            selected: item.key == self.active,
        })
    }

    fn render_entry(entry: NavEntry) -> impl IntoElement {
        let style = entry.style();
        let hover_bg = AvicureColors::alpha(AvicureColors::primary_soft(), 0.40);

        v_flex()
            .id(SharedString::from(format!("nav-{:?}", entry.item.key)))
            .h(px(48.0))
            .w(px(56.0))
            .items_center()
            .justify_center()
            .rounded(px(18.0))
            .bg(style.background)
            .text_color(style.label)
            .text_xs()
            .font_weight(FontWeight::MEDIUM)
            .when(entry.selected, |this| this.shadow_md())
            .when(!entry.selected, |this| {
                this.hover(move |s| s.bg(hover_bg).text_color(AvicureColors::primary_dark()))
            })
            .child(
                div()
                    .mb_1()
                    .size(px(24.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .bg(style.ring)
                    .child(div().size(px(8.0)).rounded_full().bg(style.dot)),
            )
            .child(entry.item.label)
    }
}

impl RenderOnce for BottomNav {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        h_flex()
            .w_full()
            .justify_between()
            .rounded(px(24.0))
            .bg(AvicureColors::sand())
            .px_4()
            .py_3()
            .shadow_md()
            .children(self.entries().into_iter().map(Self::render_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [NavKey; 4] = [NavKey::Home, NavKey::Care, NavKey::Chat, NavKey::Profile];

    #[test]
    fn exactly_one_entry_is_selected_and_it_matches_active() {
        for active in ALL_KEYS {
            let entries = BottomNav::new(active).entries();
            let selected: Vec<_> = entries.iter().filter(|e| e.selected).collect();
            assert_eq!(selected.len(), 1, "active = {active:?}");
            assert_eq!(selected[0].item.key, active);
        }
    }

    #[test]
    fn care_highlights_only_care() {
        let entries = BottomNav::new(NavKey::Care).entries();
        let highlighted: Vec<_> = entries
            .iter()
            .filter(|e| e.style() == NavItemStyle::selected())
            .map(|e| e.item.label)
            .collect();
        assert_eq!(highlighted, vec!["Care"]);
    }

    #[test]
    fn entries_keep_fixed_order() {
        let labels: Vec<_> = BottomNav::new(NavKey::Profile)
            .entries()
            .iter()
            .map(|e| e.item.label)
            .collect();
        assert_eq!(labels, vec!["Home", "Care", "Chat", "Profile"]);
    }

    #[test]
    fn selected_and_unselected_styles_differ() {
        assert_ne!(NavItemStyle::selected(), NavItemStyle::unselected());
    }
}
