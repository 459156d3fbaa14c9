//! Palette - Brand Swatches Shown in the Hero Section

use gpui::Rgba;

use crate::theme::colors::AvicureColors;

/// One named brand colour
#[derive(Debug, Clone, Copy)]
pub struct Swatch {
    pub name: &'static str,
    role: fn() -> Rgba,
}

impl Swatch {
    pub fn color(&self) -> Rgba {
        (self.role)()
    }

    /// Hex label without the leading `#`, as printed inside the swatch
    pub fn hex_label(&self) -> String {
        let color = self.color();
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "{:02X}{:02X}{:02X}",
            channel(color.r),
            channel(color.g),
            channel(color.b)
        )
    }
}

/// Brand palette in display order
pub const PALETTE: [Swatch; 6] = [
    Swatch { name: "Primary Green", role: AvicureColors::primary },
    Swatch { name: "Secondary Green", role: AvicureColors::primary_soft },
    Swatch { name: "Accent Brown", role: AvicureColors::accent_brown },
    Swatch { name: "Background", role: AvicureColors::sand },
    Swatch { name: "Ink", role: AvicureColors::ink },
    Swatch { name: "Muted Ink", role: AvicureColors::ink_muted },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_labels_are_six_upper_digits() {
        let labels: Vec<_> = PALETTE.iter().map(Swatch::hex_label).collect();
        assert_eq!(
            labels,
            vec!["2D5F4F", "90B8A8", "6B4E3D", "F5F5F0", "1A1A1A", "6B6B6B"]
        );
    }

    #[test]
    fn accent_brown_swatch_reads_its_color_role() {
        let accent = PALETTE.iter().find(|s| s.name == "Accent Brown");
        assert_eq!(accent.map(Swatch::color), Some(AvicureColors::accent_brown()));
    }
}
