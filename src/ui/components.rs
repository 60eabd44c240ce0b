//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    /// Brand accent (NIET red).
    pub const PRIMARY: Color32 = Color32::from_rgb(0xC8, 0x10, 0x2E);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(18.0).color(colors::PRIMARY).strong());
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Accent-filled button with an icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", icon, text)
    };
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(110.0, 26.0)),
    )
}

/// Plain button with an icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.button(format!("{} {}", icon, text))
}

/// Label plus single-line text input inside a two-column grid.
pub fn text_row(ui: &mut Ui, label: &str, value: &mut String) -> Response {
    ui.label(format!("{}:", label));
    let response = ui.add(egui::TextEdit::singleline(value).desired_width(200.0));
    ui.end_row();
    response
}

/// Two-column form grid.
pub fn form_grid<R>(ui: &mut Ui, id: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([20.0, 8.0])
        .show(ui, add_contents)
        .inner
}
