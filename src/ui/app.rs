//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout, RichText, ScrollArea};
use egui_phosphor::regular::{
    BED, BOOK_OPEN, CHALKBOARD_TEACHER, IDENTIFICATION_CARD, QUESTION, SIGN_OUT, STUDENT, USER_PLUS, USERS,
};

use crate::auth;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::registry::Registry;

use super::components::colors;
use super::forms::{
    DetailsForm, EnquiryForm, EnrollForm, FacultyForm, HostelForm, ListSnapshot, LoginForm, StudentForm,
};
use super::{
    details_panel, enquiry_panel, enroll_panel, faculty_panel, hostel_panel, list_panel, login_panel, student_panel,
};

/// Login window size.
pub const LOGIN_SIZE: [f32; 2] = [300.0, 220.0];
/// Workspace window size.
pub const WORKSPACE_SIZE: [f32; 2] = [780.0, 500.0];

/// Workspace tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    AddStudent,
    AddFaculty,
    Enroll,
    Details,
    Enquiry,
    Hostel,
    ViewFaculty,
    ViewStudents,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::AddStudent,
        Tab::AddFaculty,
        Tab::Enroll,
        Tab::Details,
        Tab::Enquiry,
        Tab::Hostel,
        Tab::ViewFaculty,
        Tab::ViewStudents,
    ];

    /// Get the display name for the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::AddStudent => "Add Student",
            Tab::AddFaculty => "Add Faculty",
            Tab::Enroll => "Enroll Student",
            Tab::Details => "View Student Details",
            Tab::Enquiry => "Enquiry",
            Tab::Hostel => "Hostel Details",
            Tab::ViewFaculty => "View Faculty",
            Tab::ViewStudents => "View Students",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::AddStudent => USER_PLUS,
            Tab::AddFaculty => CHALKBOARD_TEACHER,
            Tab::Enroll => BOOK_OPEN,
            Tab::Details => IDENTIFICATION_CARD,
            Tab::Enquiry => QUESTION,
            Tab::Hostel => BED,
            Tab::ViewFaculty => USERS,
            Tab::ViewStudents => STUDENT,
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Severity of a dialog notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A modal message box.
#[derive(Clone, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(e: &AppError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: e.title().to_string(),
            message: e.to_string(),
        }
    }
}

/// Tabbed workspace shown after login. Dropped on logout.
#[derive(Default)]
pub struct Workspace {
    pub tab: Tab,
    pub student_form: StudentForm,
    pub faculty_form: FacultyForm,
    pub enroll_form: EnrollForm,
    pub details_form: DetailsForm,
    pub enquiry_form: EnquiryForm,
    pub hostel_form: HostelForm,
    pub faculty_list: ListSnapshot,
    pub student_list: ListSnapshot,
}

/// Which screen is open.
pub enum Screen {
    Login(LoginForm),
    Workspace(Box<Workspace>),
}

/// Main application state.
pub struct App {
    pub config: AppConfig,

    /// Lives for the whole process, across logins.
    pub registry: Registry,
    pub screen: Screen,

    // Dialogs
    pub notice: Option<Notice>,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Set on screen change so the next frame retitles and resizes the window
    viewport_dirty: bool,
}

impl App {
    pub fn new(config: AppConfig, initial_error: Option<String>) -> Self {
        let mut app = Self {
            config,
            registry: Registry::new(),
            screen: Screen::Login(LoginForm::default()),
            notice: None,
            log_messages: Vec::new(),
            viewport_dirty: false,
        };

        if let Some(e) = initial_error {
            app.log_warning(format!("Using default configuration: {}", e));
            app.notice = Some(Notice {
                level: NoticeLevel::Error,
                title: "Config Error".to_string(),
                message: format!("{}\n\nDefault settings are in use.", e),
            });
        }

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message.
    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Show a notice and mirror it into the activity log.
    pub fn notify(&mut self, notice: Notice) {
        let level = match notice.level {
            NoticeLevel::Info => LogLevel::Info,
            NoticeLevel::Success => LogLevel::Success,
            NoticeLevel::Error => LogLevel::Error,
        };
        // Detail dumps are multi-line; the log keeps the first line only
        let first_line = notice.message.lines().next().unwrap_or_default().to_string();
        self.log(level, format!("{}: {}", notice.title, first_line));
        self.notice = Some(notice);
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::Workspace(_))
    }

    /// Check the login form and open the workspace on success.
    ///
    /// On failure the typed values stay in the form.
    pub fn attempt_login(&mut self) {
        let Screen::Login(form) = &self.screen else {
            return;
        };

        match auth::check_login(&self.config.auth, &form.login_id, &form.password) {
            Ok(()) => {
                self.screen = Screen::Workspace(Box::default());
                self.viewport_dirty = true;
                self.log_info("Logged in");
            }
            Err(e) => self.notify(Notice::error(&e)),
        }
    }

    /// Drop the workspace and reopen a fresh login gate. The registry is kept.
    pub fn logout(&mut self) {
        if !self.is_logged_in() {
            return;
        }
        self.screen = Screen::Login(LoginForm::default());
        self.notice = None;
        self.viewport_dirty = true;
        tracing::info!("Logged out");
        self.log_info("Logged out");
    }

    /// Run one workspace tab and route its notice, if any.
    fn show_tab(&mut self, ui: &mut egui::Ui) {
        let Screen::Workspace(ws) = &mut self.screen else {
            return;
        };
        let reg = &mut self.registry;

        let notice = match ws.tab {
            Tab::AddStudent => student_panel::show(ui, &mut ws.student_form, reg),
            Tab::AddFaculty => faculty_panel::show(ui, &mut ws.faculty_form, reg),
            Tab::Enroll => enroll_panel::show(ui, &mut ws.enroll_form, reg),
            Tab::Details => details_panel::show(ui, &mut ws.details_form, reg),
            Tab::Enquiry => enquiry_panel::show(ui, &mut ws.enquiry_form),
            Tab::Hostel => hostel_panel::show(ui, &mut ws.hostel_form, reg),
            Tab::ViewFaculty => {
                list_panel::show(ui, list_panel::ListKind::Faculty, &mut ws.faculty_list, reg);
                None
            }
            Tab::ViewStudents => {
                list_panel::show(ui, list_panel::ListKind::Students, &mut ws.student_list, reg);
                None
            }
        };

        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    /// Apply window title and size for the current screen.
    fn sync_viewport(&mut self, ctx: &egui::Context) {
        if !self.viewport_dirty {
            return;
        }
        self.viewport_dirty = false;

        let (title, size) = match self.screen {
            Screen::Login(_) => ("Login".to_string(), LOGIN_SIZE),
            Screen::Workspace(_) => (
                format!("{} - University Management System", self.config.ui.institution),
                WORKSPACE_SIZE,
            ),
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size.into()));
        ctx.request_repaint();
    }

    /// Render header band with institution and record counts.
    fn show_header(&self, ctx: &egui::Context) {
        let ui_config = &self.config.ui;
        let counts = self.registry.counts();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&ui_config.institution).size(28.0).strong().color(colors::PRIMARY));
                ui.label(RichText::new(&ui_config.subtitle).size(14.0).strong().color(colors::PRIMARY));

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&ui_config.tagline).size(12.0).strong().color(colors::PRIMARY));
                        ui.label(RichText::new(&ui_config.contact).size(9.0));
                        ui.label(
                            RichText::new(format!(
                                "{} students | {} faculty | {} hostel",
                                counts.students, counts.faculty, counts.hostel_assignments
                            ))
                            .size(9.0)
                            .weak(),
                        );
                    });
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Render footer with logout, activity log and copyright.
    fn show_footer(&mut self, ctx: &egui::Context, blocked: bool) {
        let mut logout = false;

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                egui::CollapsingHeader::new("Activity")
                    .default_open(false)
                    .show(ui, |ui| {
                        ScrollArea::vertical()
                            .id_salt("activity_scroll")
                            .max_height(90.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for entry in &self.log_messages {
                                    let color = match entry.level {
                                        LogLevel::Info => colors::NEUTRAL,
                                        LogLevel::Success => colors::SUCCESS,
                                        LogLevel::Warning => colors::WARNING,
                                        LogLevel::Error => colors::ERROR,
                                    };
                                    ui.colored_label(
                                        color,
                                        format!("[{}] {}", entry.timestamp.format("%H:%M:%S"), entry.message),
                                    );
                                }
                            });
                    });

                ui.horizontal(|ui| {
                    if ui
                        .add(
                            egui::Button::new(RichText::new(format!("{} Logout", SIGN_OUT)).color(egui::Color32::WHITE))
                                .fill(colors::PRIMARY),
                        )
                        .clicked()
                    {
                        logout = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("© {} University Management System", self.config.ui.institution))
                                .size(9.0)
                                .color(colors::PRIMARY),
                        );
                    });
                });
            });
        });

        if logout {
            self.logout();
        }
    }

    /// Render the tab strip.
    fn show_tab_bar(&mut self, ui: &mut egui::Ui) {
        let Screen::Workspace(ws) = &mut self.screen else {
            return;
        };

        ui.horizontal_wrapped(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut ws.tab, tab, format!("{} {}", tab.icon(), tab.name()));
            }
        });
        ui.separator();
    }

    /// Render the modal notice, if any.
    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("notice_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match notice.level {
                    NoticeLevel::Error => ui.colored_label(colors::ERROR, notice.message.as_str()),
                    NoticeLevel::Success => ui.colored_label(colors::SUCCESS, notice.message.as_str()),
                    NoticeLevel::Info => ui.label(notice.message.as_str()),
                };
                ui.add_space(10.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    dismissed = true;
                }
            });

        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Modal dialog blocks the screen underneath
        let blocked = self.notice.is_some();
        self.show_notice(ctx);

        if let Screen::Login(form) = &mut self.screen {
            let mut submit = false;
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    submit = login_panel::show(ui, form);
                });
            });
            if submit {
                self.attempt_login();
            }
        } else {
            self.show_header(ctx);
            self.show_footer(ctx, blocked);

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    self.show_tab_bar(ui);
                    ScrollArea::vertical().id_salt("tab_scroll").show(ui, |ui| {
                        self.show_tab(ui);
                    });
                });
            });
        }

        // Screen changes made this frame resize the window before the next one
        self.sync_viewport(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::student;

    fn login(app: &mut App, id: &str, password: &str) {
        if let Screen::Login(form) = &mut app.screen {
            form.login_id = id.to_string();
            form.password = password.to_string();
        }
        app.attempt_login();
    }

    fn workspace(app: &mut App) -> &mut Workspace {
        match &mut app.screen {
            Screen::Workspace(ws) => ws,
            Screen::Login(_) => panic!("not logged in"),
        }
    }

    #[test]
    fn test_starts_at_login() {
        let app = App::new(AppConfig::default(), None);
        assert!(!app.is_logged_in());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_failed_login_keeps_input() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "123", "wrong");

        assert!(!app.is_logged_in());
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.title, "Login Failed");
        assert_eq!(notice.message, "Incorrect ID or Password");
        match &app.screen {
            Screen::Login(form) => {
                assert_eq!(form.login_id, "123");
                assert_eq!(form.password, "wrong");
            }
            Screen::Workspace(_) => unreachable!(),
        }
    }

    #[test]
    fn test_empty_login_rejected() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "", "");
        assert!(!app.is_logged_in());
    }

    #[test]
    fn test_login_opens_workspace() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "123", "admin");

        assert!(app.is_logged_in());
        assert!(app.notice.is_none());
        assert_eq!(workspace(&mut app).tab, Tab::AddStudent);
    }

    #[test]
    fn test_registry_survives_logout() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "123", "admin");

        let Screen::Workspace(ws) = &mut app.screen else {
            unreachable!()
        };
        ws.student_form = StudentForm {
            id: "S1".to_string(),
            name: "Ada".to_string(),
            email: "a@x.com".to_string(),
            phone: "555".to_string(),
            course: Some(crate::models::CourseId::Btech),
        };
        ws.faculty_form.id = "half-typed".to_string();
        let notice = ws.student_form.submit(&mut app.registry);
        app.notify(notice);
        let before = student::list_summaries(&app.registry);

        app.logout();
        assert!(!app.is_logged_in());
        match &app.screen {
            Screen::Login(form) => assert!(form.login_id.is_empty() && form.password.is_empty()),
            Screen::Workspace(_) => unreachable!(),
        }

        login(&mut app, "123", "admin");
        assert_eq!(student::list_summaries(&app.registry), before);
        // Form state belongs to the old workspace
        assert!(workspace(&mut app).faculty_form.id.is_empty());
    }

    #[test]
    fn test_logout_dismisses_open_notice() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "123", "admin");
        app.notify(Notice::error(&AppError::duplicate("Student ID already exists.")));

        app.logout();
        assert!(!app.is_logged_in());
        assert!(app.notice.is_none());
        // The activity log still records it
        assert!(
            app.log_messages
                .iter()
                .any(|entry| entry.message == "Error: Student ID already exists.")
        );
    }

    #[test]
    fn test_screen_change_applied_in_same_frame() {
        let mut app = App::new(AppConfig::default(), None);
        login(&mut app, "123", "admin");
        assert!(app.viewport_dirty);

        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| app.sync_viewport(ctx));
        assert!(!app.viewport_dirty);

        let commands = &output.viewport_output[&egui::ViewportId::ROOT].commands;
        assert!(commands.iter().any(|cmd| matches!(
            cmd,
            egui::ViewportCommand::Title(title) if title == "NIET - University Management System"
        )));
        assert!(commands.iter().any(|cmd| matches!(cmd, egui::ViewportCommand::InnerSize(_))));
    }

    #[test]
    fn test_config_error_shown_at_startup() {
        let app = App::new(AppConfig::default(), Some("Failed to parse config".to_string()));
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Failed to parse config"));
        assert_eq!(app.log_messages.len(), 1);
    }

    #[test]
    fn test_activity_log_capped() {
        let mut app = App::new(AppConfig::default(), None);
        for i in 0..150 {
            app.log_info(format!("entry {}", i));
        }
        assert_eq!(app.log_messages.len(), 100);
        assert_eq!(app.log_messages[0].message, "entry 50");
    }

    #[test]
    fn test_notify_logs_first_line() {
        let mut app = App::new(AppConfig::default(), None);
        app.notify(Notice::info("Details", "ID: S1\nName: Ada"));
        let entry = app.log_messages.last().unwrap();
        assert_eq!(entry.message, "Details: ID: S1");
        assert_eq!(entry.level, LogLevel::Info);
    }

    #[test]
    fn test_custom_credentials() {
        let mut config = AppConfig::default();
        config.auth.login_id = "root".to_string();
        config.auth.password = "toor".to_string();
        let mut app = App::new(config, None);

        login(&mut app, "123", "admin");
        assert!(!app.is_logged_in());
        login(&mut app, "root", "toor");
        assert!(app.is_logged_in());
    }
}
