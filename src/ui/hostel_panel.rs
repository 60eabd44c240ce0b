//! Hostel Details tab.

use eframe::egui::Ui;
use egui_phosphor::regular::FLOPPY_DISK;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::HostelForm;
use crate::registry::Registry;

pub fn show(ui: &mut Ui, form: &mut HostelForm, reg: &mut Registry) -> Option<Notice> {
    panel_header(ui, "Hostel Info");

    form_grid(ui, "hostel_form_grid", |ui| {
        text_row(ui, "Student ID", &mut form.student_id);
        text_row(ui, "Hostel Name", &mut form.hostel_name);
        text_row(ui, "Room No", &mut form.room_no);
    });

    ui.add_space(10.0);
    primary_button_with_icon(ui, FLOPPY_DISK, "Save")
        .clicked()
        .then(|| form.submit(reg))
}
