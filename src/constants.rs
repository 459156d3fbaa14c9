//! UI Constants
//!
//! Centralized layout constants for the gallery window and mockup cards.

/// Width of one mockup card
pub const SCREEN_CARD_WIDTH: f32 = 360.0;

/// Phone frame dimensions inside a card
pub const PHONE_FRAME_HEIGHT: f32 = 740.0;
pub const PHONE_FRAME_RADIUS: f32 = 36.0;
pub const PHONE_FRAME_PADDING: f32 = 20.0;

/// Gap between cards in the grid
pub const GRID_GAP: f32 = 40.0;

/// Maximum width of the page content
pub const PAGE_MAX_WIDTH: f32 = 1480.0;

/// Viewport width from which the hero shows copy and tokens side by side
pub const HERO_SPLIT_MIN_WIDTH: f32 = 1024.0;

/// Viewport widths at which the grid gains a column
pub const TWO_COLUMN_MIN_WIDTH: f32 = 1280.0;
pub const THREE_COLUMN_MIN_WIDTH: f32 = 1536.0;
pub const MAX_GRID_COLUMNS: usize = 3;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1560.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 960.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Literal time shown in every simulated status bar
pub const STATUS_BAR_TIME: &str = "09:41";

/// Application identifiers for config and data directories
pub const APP_QUALIFIER: &str = "health";
pub const APP_ORGANIZATION: &str = "avicure";
pub const APP_NAME: &str = "avicure-gallery";
