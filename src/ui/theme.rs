// DeedFinder - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Page background (light blue).
pub const PAGE_BG: Color32 = Color32::from_rgb(0xAD, 0xD8, 0xE6);

/// Form title (dark blue).
pub const TITLE_TEXT: Color32 = Color32::from_rgb(0x00, 0x33, 0x66);

/// Diagnostic text (orange-red).
pub const WARNING_TEXT: Color32 = Color32::from_rgb(0xFF, 0x45, 0x00);

/// Fatal error text.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(185, 28, 28); // Red 800

/// Body text on the light page.
pub const BODY_TEXT: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900

/// Status bar colours.
pub const STATUS_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Layout constants.
pub const TITLE_SIZE: f32 = 26.0;
pub const FORM_LABEL_WIDTH: f32 = 170.0;
pub const FOLDER_FIELD_WIDTH: f32 = 420.0;
pub const DIAGNOSTICS_MAX_HEIGHT: f32 = 140.0;
pub const ROW_HEIGHT: f32 = 20.0;

/// Light visuals with the page background applied.
pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = PAGE_BG;
    visuals.override_text_color = Some(BODY_TEXT);
    visuals
}
