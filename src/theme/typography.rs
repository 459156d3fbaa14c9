//! Typography - Font Family, Sizes and the Showcase Type Scale

/// Primary font family, registered from the embedded assets at start-up
pub const PRIMARY_FONT_FAMILY: &str = "Inter";

/// Platform UI font used when the primary family is not available
pub const FALLBACK_FONT_FAMILY: &str = ".SystemUIFont";

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_MICRO: f32 = 11.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_4XL: f32 = 36.0;
}

/// One row of the type scale shown in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSample {
    pub label: &'static str,
    pub size: &'static str,
}

/// Type scale of the design system, in display order
pub const TYPE_SCALE: [TypeSample; 6] = [
    TypeSample { label: "Heading Large", size: "30px / Bold" },
    TypeSample { label: "Heading Medium", size: "24px / Semibold" },
    TypeSample { label: "Heading Small", size: "18px / Semibold" },
    TypeSample { label: "Body", size: "16px / Regular" },
    TypeSample { label: "Caption", size: "13px / Medium" },
    TypeSample { label: "Button", size: "16px / Semibold" },
];
