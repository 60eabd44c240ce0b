//! Enquiry tab.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::PAPER_PLANE_TILT;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::EnquiryForm;

pub fn show(ui: &mut Ui, form: &mut EnquiryForm) -> Option<Notice> {
    panel_header(ui, "Submit Enquiry");

    form_grid(ui, "enquiry_form_grid", |ui| {
        text_row(ui, "Name", &mut form.name);
        text_row(ui, "Email", &mut form.email);

        ui.label("Query:");
        ui.add(
            egui::TextEdit::multiline(&mut form.query)
                .desired_rows(4)
                .desired_width(300.0),
        );
        ui.end_row();
    });

    ui.add_space(10.0);
    primary_button_with_icon(ui, PAPER_PLANE_TILT, "Submit")
        .clicked()
        .then(|| form.submit())
}
