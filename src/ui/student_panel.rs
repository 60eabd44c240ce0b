//! Add Student tab.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::USER_PLUS;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::StudentForm;
use crate::models::CourseId;
use crate::registry::Registry;

/// Show the add-student form. Returns a notice when the form was submitted.
pub fn show(ui: &mut Ui, form: &mut StudentForm, reg: &mut Registry) -> Option<Notice> {
    panel_header(ui, "Add New Student");

    form_grid(ui, "student_form_grid", |ui| {
        text_row(ui, "Student ID", &mut form.id);
        text_row(ui, "Name", &mut form.name);
        text_row(ui, "Email", &mut form.email);
        text_row(ui, "Phone", &mut form.phone);

        ui.label("Course:");
        egui::ComboBox::from_id_salt("student_course")
            .width(200.0)
            .selected_text(form.course.map(|c| c.code()).unwrap_or(""))
            .show_ui(ui, |ui| {
                for course in CourseId::ALL {
                    ui.selectable_value(
                        &mut form.course,
                        Some(course),
                        format!("{} ({})", course.code(), course.name()),
                    );
                }
            });
        ui.end_row();

        // Derived from the course; not editable
        ui.label("Fees (INR):");
        let fee = form.fee_display();
        ui.add(egui::TextEdit::singleline(&mut fee.as_str()).desired_width(200.0));
        ui.end_row();
    });

    ui.add_space(10.0);
    primary_button_with_icon(ui, USER_PLUS, "Add Student")
        .clicked()
        .then(|| form.submit(reg))
}
