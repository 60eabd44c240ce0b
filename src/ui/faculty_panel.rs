//! Add Faculty tab.

use eframe::egui::Ui;
use egui_phosphor::regular::CHALKBOARD_TEACHER;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::FacultyForm;
use crate::registry::Registry;

pub fn show(ui: &mut Ui, form: &mut FacultyForm, reg: &mut Registry) -> Option<Notice> {
    panel_header(ui, "Add New Faculty");

    form_grid(ui, "faculty_form_grid", |ui| {
        text_row(ui, "Faculty ID", &mut form.id);
        text_row(ui, "Name", &mut form.name);
    });

    ui.add_space(10.0);
    primary_button_with_icon(ui, CHALKBOARD_TEACHER, "Add Faculty")
        .clicked()
        .then(|| form.submit(reg))
}
