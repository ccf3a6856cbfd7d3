//! Application-wide constants and compile-time configuration.
//!
//! Window geometry, palette, layout metrics and timing all live here so
//! they can be tuned in one place.

// App metadata

pub const APP_NAME: &str = "Random App";
pub const APP_VERSION: &str = "1.0";
pub const APP_ID: &str = "random_app";
pub const APP_CREATOR: &str = "FrankkieNL";
pub const APP_URL: &str = "https://badge.why2025.org";

// Window

/// Drawing surface size in pixels (the badge panel is 720×720).
pub const WINDOW_WIDTH: u32 = 720;
pub const WINDOW_HEIGHT: u32 = 720;

/// Full-screen on the badge, a plain window everywhere else.
pub const WINDOW_FULLSCREEN: bool = cfg!(feature = "badge");

/// Whether attached joysticks are opened. The badge d-pad already
/// arrives as key events.
pub const OPEN_JOYSTICKS: bool = !cfg!(feature = "badge");

// Palette (24-bit RGB, packed to RGB565 when drawn)

pub const BG_COLOR: u32 = 0x9CA0A0;
pub const PANEL_COLOR: u32 = 0xAEB2B2;
pub const BORDER_LIGHT: u32 = 0xFFFFFF;
pub const BORDER_DARK: u32 = 0x636363;
pub const TEXT_COLOR: u32 = 0x000000;
pub const SELECTED_BG: u32 = 0x0078D4;
pub const SELECTED_TEXT: u32 = 0xFFFFFF;
pub const BUTTON_COLOR: u32 = 0xD4D0C8;
pub const TITLE_BG: u32 = 0x808080;
pub const LIST_BG: u32 = 0xFFFFFF;

// Layout

/// Gap between the screen edge and the application panel.
pub const WINDOW_MARGIN: i32 = 30;

/// Height of the title bar inside the panel.
pub const TITLE_HEIGHT: i32 = 45;

/// Thickness of every bevel edge.
pub const BEVEL: i32 = 3;

/// First text line of the simple line-based screens.
pub const CONTENT_TOP: i32 = 120;

/// Extra spacing between consecutive text lines.
pub const LINE_GAP: i32 = 8;

/// Height of one menu row (name, version and description lines).
pub const MENU_ITEM_HEIGHT: i32 = 80;

pub const SCROLLBAR_WIDTH: i32 = 20;
pub const SCROLLBAR_MIN_THUMB: i32 = 30;

/// Upper bound on the rendered menu description length.
pub const MAX_DESCRIPTION_CHARS: usize = 59;

// Timing

/// Welcome prompt blink period (ms).
pub const BLINK_INTERVAL_MS: u64 = 500;

/// Sensor screen refresh period while at least one sensor is present (ms).
pub const SENSOR_REFRESH_MS: u64 = 1000;

/// How long the host loop blocks waiting for input before iterating again
/// (ms). Keeps the blink timer responsive without spinning.
pub const EVENT_WAIT_MS: u32 = 10;
