//! Data models for students, faculty, courses, hostel assignments and enquiries.

pub mod course;
pub mod enquiry;
pub mod faculty;
pub mod hostel;
pub mod student;

pub use course::{Course, CourseId, ParseCourseError, format_fee};
pub use enquiry::Enquiry;
pub use faculty::{CreateFaculty, Faculty};
pub use hostel::{AssignHostel, HostelAssignment};
pub use student::{CreateStudent, Student};

/// Trim every value and report whether all of them are non-empty.
pub(crate) fn all_filled(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}
