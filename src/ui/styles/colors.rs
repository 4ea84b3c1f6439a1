//! Color palette for the client UI
//!
//! Dark chrome around a classic wooden board. Colors are `egui::Color32`
//! for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (nested panels, dialogs)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    /// Panel border
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

    // === Board Colors ===

    /// Light squares
    pub const SQUARE_LIGHT: egui::Color32 = egui::Color32::from_rgb(238, 216, 192);

    /// Dark squares
    pub const SQUARE_DARK: egui::Color32 = egui::Color32::from_rgb(171, 122, 101);

    /// Selected-square border, the original client's "2px solid blue"
    pub const SELECTED: egui::Color32 = egui::Color32::from_rgb(40, 90, 255);

    // === Text Colors ===

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (body text)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(180, 180, 190);

    /// Dim text (placeholders)
    pub const TEXT_DIM: egui::Color32 = egui::Color32::from_rgb(140, 140, 150);

    // === Status Colors ===

    /// Error/danger color (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    /// Accent (gold, for the status banner)
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);
}
