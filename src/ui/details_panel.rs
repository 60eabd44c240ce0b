//! View Student Details tab.

use eframe::egui::Ui;
use egui_phosphor::regular::IDENTIFICATION_CARD;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::DetailsForm;
use crate::registry::Registry;

pub fn show(ui: &mut Ui, form: &mut DetailsForm, reg: &Registry) -> Option<Notice> {
    panel_header(ui, "Student Details");

    form_grid(ui, "details_form_grid", |ui| {
        text_row(ui, "Student ID", &mut form.student_id);
    });

    ui.add_space(10.0);
    primary_button_with_icon(ui, IDENTIFICATION_CARD, "Show Details")
        .clicked()
        .then(|| form.submit(reg))
}
