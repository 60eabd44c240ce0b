//! GUI screens, workspace tabs and application state.

pub mod app;
pub mod components;
pub mod details_panel;
pub mod enquiry_panel;
pub mod enroll_panel;
pub mod faculty_panel;
pub mod forms;
pub mod hostel_panel;
pub mod list_panel;
pub mod login_panel;
pub mod student_panel;

pub use app::{App, LOGIN_SIZE};
