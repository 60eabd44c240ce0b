//! Login gate.

use eframe::egui::{self, Key, RichText, Ui};
use egui_phosphor::regular::SIGN_IN;

use super::components::{colors, primary_button_with_icon};
use super::forms::LoginForm;

/// Show the login form.
///
/// Returns `true` when the user submits (button or Enter in the password field).
pub fn show(ui: &mut Ui, form: &mut LoginForm) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new("Login ID:").strong().color(colors::PRIMARY));
        ui.add(egui::TextEdit::singleline(&mut form.login_id).desired_width(180.0));

        ui.add_space(6.0);
        ui.label(RichText::new("Password:").strong().color(colors::PRIMARY));
        let password = ui.add(
            egui::TextEdit::singleline(&mut form.password)
                .password(true)
                .desired_width(180.0),
        );
        if password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }

        ui.add_space(12.0);
        if primary_button_with_icon(ui, SIGN_IN, "Login").clicked() {
            submit = true;
        }
    });

    submit
}
