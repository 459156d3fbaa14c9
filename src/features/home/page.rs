//! Home Page
//!
//! Root page of the gallery: hero, overview heading and the grid of mockup
//! cards.

use gpui::{
    Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::components::layout::shell::Shell;
use crate::constants::{GRID_GAP, HERO_SPLIT_MIN_WIDTH, PAGE_MAX_WIDTH, SCREEN_CARD_WIDTH};
use crate::features::home::hero::Hero;
use crate::features::screens::{ScreenEntry, catalog};
use crate::states::GalleryPreferences;
use crate::theme::colors::AvicureColors;
use crate::theme::typography::Typography;

pub const OVERVIEW_HEADING: &str = "Mobile experience overview · 18 artboards";
pub const OVERVIEW_DESCRIPTION: &str = "The following flows articulate Avicure's patient-centric experience \
    across onboarding, AI symptom triage, appointment orchestration, remote monitoring, and collaborative care.";

/// Home page view
pub struct HomePage {
    prefs: GalleryPreferences,
    catalog: Vec<ScreenEntry>,
}

impl HomePage {
    pub fn new(prefs: GalleryPreferences, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        let catalog = catalog();
        debug!(screens = catalog.len(), "Home page created");
        Self { prefs, catalog }
    }

    fn render_overview_heading(&self) -> impl IntoElement {
        v_flex()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(AvicureColors::ink())
                    .child(OVERVIEW_HEADING),
            )
            .child(
                div()
                    .max_w(px(768.0))
                    .text_sm()
                    .text_color(AvicureColors::ink_muted())
                    .child(OVERVIEW_DESCRIPTION),
            )
    }

    fn render_grid(&self, columns: usize) -> impl IntoElement {
        let columns = columns.max(1);
        v_flex().gap(px(GRID_GAP)).children(
            self.catalog
                .chunks(columns)
                .enumerate()
                .map(|(row, entries)| {
                    h_flex()
                        .items_start()
                        .justify_center()
                        .gap(px(GRID_GAP))
                        .children(
                            entries
                                .iter()
                                .enumerate()
                                .map(|(col, entry)| entry.build(row * columns + col + 1)),
                        )
                }),
        )
    }
}

/// Width the grid needs for `columns` cards side by side
pub fn grid_width(columns: usize) -> f32 {
    let columns = columns.max(1) as f32;
    columns * SCREEN_CARD_WIDTH + (columns - 1.0) * GRID_GAP
}

impl Render for HomePage {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let viewport_width = f32::from(window.viewport_size().width);
        let columns = self.prefs.grid_columns(viewport_width);

        Shell::new().child(
            div()
                .id("home-page")
                .size_full()
                .overflow_y_scroll()
                .pt_16()
                .pb_24()
                .child(
                    h_flex().w_full().justify_center().child(
                        v_flex()
                            .w_full()
                            .max_w(px(PAGE_MAX_WIDTH))
                            .px_6()
                            .gap_12()
                            .child(Hero::new().stacked(viewport_width < HERO_SPLIT_MIN_WIDTH))
                            .child(
                                v_flex()
                                    .gap_6()
                                    .child(self.render_overview_heading())
                                    .child(
                                        h_flex()
                                            .justify_center()
                                            .child(div().min_w(px(grid_width(columns))).child(self.render_grid(columns))),
                                    ),
                            ),
                    ),
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_width_adds_gaps_between_cards() {
        assert_eq!(grid_width(1), SCREEN_CARD_WIDTH);
        assert_eq!(grid_width(3), 3.0 * SCREEN_CARD_WIDTH + 2.0 * GRID_GAP);
        assert_eq!(grid_width(0), SCREEN_CARD_WIDTH);
    }

    #[test]
    fn heading_counts_every_artboard() {
        assert!(OVERVIEW_HEADING.ends_with(&format!("{} artboards", catalog().len())));
    }
}
