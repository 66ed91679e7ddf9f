//! GUI-specific constants for layout, palette and intervals

use egui;

/// Main window dimensions (fixed, not resizable)
pub const WINDOW_WIDTH: f32 = 450.0;
pub const WINDOW_HEIGHT: f32 = 550.0;

/// Banner width, centered over the window
pub const BANNER_WIDTH: f32 = 350.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 25.0;
pub const ITEM_SPACING: f32 = 12.0;

/// Menu button dimensions
pub const BUTTON_WIDTH: f32 = 280.0;
pub const BUTTON_HEIGHT: f32 = 44.0;

/// Window and frame backgrounds
pub const COLOR_PRIMARY: egui::Color32 = egui::Color32::from_rgb(0x34, 0x49, 0x5e);
pub const COLOR_SECONDARY: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);

/// Buttons and the banner progress bar
pub const COLOR_ACCENT: egui::Color32 = egui::Color32::from_rgb(0x34, 0x98, 0xdb);
pub const COLOR_ACCENT_DARK: egui::Color32 = egui::Color32::from_rgb(0x29, 0x80, 0xb9);

/// Default text
pub const COLOR_TEXT: egui::Color32 = egui::Color32::from_rgb(0xec, 0xf0, 0xf1);

/// Notice colors per kind
pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0x2e, 0xcc, 0x71);
pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
pub const COLOR_WARNING: egui::Color32 = egui::Color32::from_rgb(0xf3, 0x9c, 0x12);
pub const COLOR_INFO: egui::Color32 = egui::Color32::from_rgb(0x1a, 0xbc, 0x9c);

/// Notice lifetimes
pub const BANNER_DURATION_MS: u64 = 3000;
pub const STATUS_DURATION_MS: u64 = 5000;

/// Repaint cadence while a banner animates its progress bar
pub const BANNER_ANIMATION_INTERVAL_MS: u64 = 50;

/// Child process monitoring
pub const PROCESS_CHECK_INTERVAL_MS: u64 = 500;
