//! Enroll Student tab.

use eframe::egui::Ui;
use egui_phosphor::regular::BOOK_OPEN;

use super::app::Notice;
use super::components::{form_grid, panel_header, primary_button_with_icon, text_row};
use super::forms::EnrollForm;
use crate::models::CourseId;
use crate::registry::Registry;

pub fn show(ui: &mut Ui, form: &mut EnrollForm, reg: &mut Registry) -> Option<Notice> {
    panel_header(ui, "Enroll Student in Course");

    form_grid(ui, "enroll_form_grid", |ui| {
        text_row(ui, "Student ID", &mut form.student_id);
        text_row(ui, "Course ID", &mut form.course_id);
    });

    let codes: Vec<&str> = CourseId::ALL.iter().map(CourseId::code).collect();
    ui.weak(format!("Courses: {}", codes.join(", ")));

    ui.add_space(10.0);
    primary_button_with_icon(ui, BOOK_OPEN, "Enroll")
        .clicked()
        .then(|| form.submit(reg))
}
