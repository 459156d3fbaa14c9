//! Tones - Closed Style Lookups
//!
//! Each display primitive takes a small tone enum and resolves it through a
//! fixed table to a background/foreground pair.

use gpui::Rgba;

use crate::theme::colors::AvicureColors as C;

/// Resolved colours for a toned element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneStyle {
    pub background: Rgba,
    pub foreground: Rgba,
}

impl ToneStyle {
    const fn new(background: Rgba, foreground: Rgba) -> Self {
        Self { background, foreground }
    }
}

/// Tone of a stat card trend badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatTone {
    #[default]
    Primary,
    Success,
    Warning,
}

impl StatTone {
    pub fn all() -> &'static [StatTone] {
        &[StatTone::Primary, StatTone::Success, StatTone::Warning]
    }

    pub fn style(self) -> ToneStyle {
        match self {
            StatTone::Primary => ToneStyle::new(C::alpha(C::primary(), 0.10), C::primary_dark()),
            StatTone::Success => ToneStyle::new(C::alpha(C::success(), 0.10), C::success()),
            StatTone::Warning => ToneStyle::new(C::alpha(C::warning(), 0.10), C::warning()),
        }
    }

    /// Solid colour of a status dot in this tone
    pub fn dot(self) -> Rgba {
        match self {
            StatTone::Primary => C::primary(),
            StatTone::Success => C::success(),
            StatTone::Warning => C::warning(),
        }
    }
}

/// Tone of a progress pill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PillTone {
    #[default]
    Primary,
    Success,
    Warning,
    Error,
}

impl PillTone {
    pub fn all() -> &'static [PillTone] {
        &[PillTone::Primary, PillTone::Success, PillTone::Warning, PillTone::Error]
    }

    pub fn style(self) -> ToneStyle {
        match self {
            PillTone::Primary => ToneStyle::new(C::alpha(C::primary_soft(), 0.40), C::primary_dark()),
            PillTone::Success => ToneStyle::new(C::alpha(C::success(), 0.20), C::success()),
            PillTone::Warning => ToneStyle::new(C::alpha(C::warning(), 0.20), C::warning()),
            PillTone::Error => ToneStyle::new(C::alpha(C::error(), 0.20), C::error()),
        }
    }
}

/// Tone of an inline status chip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Primary-soft wash, primary-dark text
    #[default]
    Soft,
    /// Faint primary wash, primary-dark text
    Primary,
    Success,
    Warning,
    Error,
    /// Filled primary, white text
    Solid,
    /// Translucent white, for use on filled primary surfaces
    Inverse,
}

impl BadgeTone {
    pub fn style(self) -> ToneStyle {
        match self {
            BadgeTone::Soft => ToneStyle::new(C::alpha(C::primary_soft(), 0.40), C::primary_dark()),
            BadgeTone::Primary => ToneStyle::new(C::alpha(C::primary(), 0.10), C::primary_dark()),
            BadgeTone::Success => ToneStyle::new(C::alpha(C::success(), 0.10), C::success()),
            BadgeTone::Warning => ToneStyle::new(C::alpha(C::warning(), 0.20), C::warning()),
            BadgeTone::Error => ToneStyle::new(C::alpha(C::error(), 0.10), C::error()),
            BadgeTone::Solid => ToneStyle::new(C::primary(), C::white()),
            BadgeTone::Inverse => ToneStyle::new(C::alpha(C::white(), 0.15), C::white()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_tone_table() {
        assert_eq!(
            StatTone::Primary.style(),
            ToneStyle::new(C::alpha(C::primary(), 0.10), C::primary_dark())
        );
        assert_eq!(
            StatTone::Success.style(),
            ToneStyle::new(C::alpha(C::success(), 0.10), C::success())
        );
        assert_eq!(
            StatTone::Warning.style(),
            ToneStyle::new(C::alpha(C::warning(), 0.10), C::warning())
        );
    }

    #[test]
    fn stat_tones_resolve_to_distinct_styles() {
        let styles: Vec<_> = StatTone::all().iter().map(|t| t.style()).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn pill_tone_table() {
        assert_eq!(
            PillTone::Primary.style(),
            ToneStyle::new(C::alpha(C::primary_soft(), 0.40), C::primary_dark())
        );
        assert_eq!(
            PillTone::Success.style(),
            ToneStyle::new(C::alpha(C::success(), 0.20), C::success())
        );
        assert_eq!(
            PillTone::Warning.style(),
            ToneStyle::new(C::alpha(C::warning(), 0.20), C::warning())
        );
        assert_eq!(
            PillTone::Error.style(),
            ToneStyle::new(C::alpha(C::error(), 0.20), C::error())
        );
    }

    #[test]
    fn pill_table_has_one_more_tone_than_stat_table() {
        assert_eq!(PillTone::all().len(), StatTone::all().len() + 1);
    }

    #[test]
    fn defaults_are_primary() {
        assert_eq!(StatTone::default(), StatTone::Primary);
        assert_eq!(PillTone::default(), PillTone::Primary);
    }

    #[test]
    fn notification_dots_use_solid_tone_colors() {
        assert_eq!(StatTone::Primary.dot(), C::primary());
        assert_eq!(StatTone::Success.dot(), C::success());
        assert_eq!(StatTone::Warning.dot(), C::warning());
    }
}
