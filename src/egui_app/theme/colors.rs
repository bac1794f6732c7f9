//! Color constants for the 코드 김밥 theme.
//!
//! Dark seaweed greens with rice-cream text, one warm accent.

use eframe::egui::Color32;

/// Main background - deep seaweed green
pub const BG_DARK: Color32 = Color32::from_rgb(0x16, 0x21, 0x1B);

/// Panel and top-bar background - dark green
pub const PANEL_BG: Color32 = Color32::from_rgb(0x1F, 0x2E, 0x25);

/// Text on dark backgrounds - rice cream
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF4, 0xEF, 0xE4);

/// Secondary text - muted sage
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xA8, 0xB8, 0xA8);

/// Primary action accent - pickled radish yellow
pub const ACCENT: Color32 = Color32::from_rgb(0xE8, 0xC5, 0x4A);

/// Error text
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x6A, 0x6A);

/// Success and confirmation text
pub const SUCCESS: Color32 = Color32::from_rgb(0x7C, 0xC4, 0x7F);
