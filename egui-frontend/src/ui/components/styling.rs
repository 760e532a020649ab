//! Shared colors and context styling.

use eframe::egui;

/// Category palette for the spending chart and breakdown list
pub const CATEGORY_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(0xFF, 0x63, 0x84),
    egui::Color32::from_rgb(0x36, 0xA2, 0xEB),
    egui::Color32::from_rgb(0xFF, 0xCE, 0x56),
    egui::Color32::from_rgb(0x4B, 0xC0, 0xC0),
    egui::Color32::from_rgb(0x99, 0x66, 0xFF),
    egui::Color32::from_rgb(0xFF, 0x9F, 0x40),
];

/// Green used for income figures
pub const INCOME_COLOR: egui::Color32 = egui::Color32::from_rgb(0x28, 0xA7, 0x45);
/// Red used for expense figures
pub const EXPENSE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x35, 0x45);
/// Blue used for in-progress status text
pub const INFO_COLOR: egui::Color32 = egui::Color32::from_rgb(0x17, 0xA2, 0xB8);

pub fn color_for_category(index: usize) -> egui::Color32 {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

/// One-time context setup: spacing tuned for a form-and-cards layout
pub fn setup_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}

/// Apply the visuals for the saved theme preference
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
