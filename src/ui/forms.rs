//! Form state for each workspace tab and the handlers that submit it.
//!
//! Handlers take the registry explicitly and return the notice to show. On
//! success the form is cleared; on failure its input is kept for correction.

use crate::models::{AssignHostel, CourseId, CreateFaculty, CreateStudent, Enquiry, format_fee};
use crate::registry::{self, EnrollOutcome, Registry};

use super::app::Notice;

/// Login gate input.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub login_id: String,
    pub password: String,
}

/// Add Student tab.
#[derive(Default, Clone)]
pub struct StudentForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: Option<CourseId>,
}

impl StudentForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fee for the selected course, comma grouped. Empty when none is picked.
    pub fn fee_display(&self) -> String {
        self.course.map(|c| format_fee(c.fee())).unwrap_or_default()
    }

    pub fn submit(&mut self, reg: &mut Registry) -> Notice {
        let result = CreateStudent::new(&self.id, &self.name, &self.email, &self.phone, self.course)
            .and_then(|data| registry::student::create(reg, data).map(|s| s.name.clone()));

        match result {
            Ok(name) => {
                self.reset();
                Notice::success("Success", format!("Student {} added.", name))
            }
            Err(e) => Notice::error(&e),
        }
    }
}

/// Add Faculty tab.
#[derive(Default, Clone)]
pub struct FacultyForm {
    pub id: String,
    pub name: String,
}

impl FacultyForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self, reg: &mut Registry) -> Notice {
        let result =
            CreateFaculty::new(&self.id, &self.name).and_then(|data| registry::faculty::create(reg, data).map(|_| ()));

        match result {
            Ok(()) => {
                self.reset();
                Notice::success("Success", "Faculty added.")
            }
            Err(e) => Notice::error(&e),
        }
    }
}

/// Enroll Student tab. The course is typed, not picked.
#[derive(Default, Clone)]
pub struct EnrollForm {
    pub student_id: String,
    pub course_id: String,
}

impl EnrollForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self, reg: &mut Registry) -> Notice {
        match registry::student::enroll(reg, &self.student_id, &self.course_id) {
            Ok(EnrollOutcome::Enrolled) => {
                let message = format!("Enrolled {} in {}.", self.student_id.trim(), self.course_id.trim());
                self.reset();
                Notice::success("Success", message)
            }
            Ok(EnrollOutcome::AlreadyEnrolled) => Notice::info("Info", "Already enrolled."),
            Err(e) => Notice::error(&e),
        }
    }
}

/// View Student Details tab.
#[derive(Default, Clone)]
pub struct DetailsForm {
    pub student_id: String,
}

impl DetailsForm {
    /// Render the student's details. Read only; the input is kept.
    pub fn submit(&self, reg: &Registry) -> Notice {
        match registry::student::details(reg, &self.student_id) {
            Ok(details) => Notice::info("Details", details.to_string()),
            Err(e) => Notice::error(&e),
        }
    }
}

/// Enquiry tab.
#[derive(Default, Clone)]
pub struct EnquiryForm {
    pub name: String,
    pub email: String,
    pub query: String,
}

impl EnquiryForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self) -> Notice {
        match Enquiry::new(&self.name, &self.email, &self.query) {
            Ok(enquiry) => {
                enquiry.submit();
                self.reset();
                Notice::success("Received", "Enquiry submitted.")
            }
            Err(e) => Notice::error(&e),
        }
    }
}

/// Hostel Details tab.
#[derive(Default, Clone)]
pub struct HostelForm {
    pub student_id: String,
    pub hostel_name: String,
    pub room_no: String,
}

impl HostelForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn submit(&mut self, reg: &mut Registry) -> Notice {
        let result = AssignHostel::new(&self.student_id, &self.hostel_name, &self.room_no)
            .and_then(|data| registry::hostel::assign(reg, data).map(|_| ()));

        match result {
            Ok(()) => {
                self.reset();
                Notice::success("Saved", "Hostel details saved.")
            }
            Err(e) => Notice::error(&e),
        }
    }
}

/// Snapshot of a list view, taken on explicit refresh.
#[derive(Default, Clone)]
pub struct ListSnapshot {
    /// `None` until the first refresh.
    pub lines: Option<Vec<String>>,
}

impl ListSnapshot {
    pub fn refresh(&mut self, lines: Vec<String>) {
        tracing::debug!("List refreshed ({} entries)", lines.len());
        self.lines = Some(lines);
    }
}
