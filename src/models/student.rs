//! Student record and create DTO.

use super::all_filled;
use super::course::CourseId;
use crate::error::{AppError, Result};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Enrolled courses in enrolment order, no duplicates.
    pub courses: Vec<CourseId>,
}

/// DTO for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: CourseId,
}

impl CreateStudent {
    /// Build from raw form input. Text fields are trimmed; all are required.
    pub fn new(id: &str, name: &str, email: &str, phone: &str, course: Option<CourseId>) -> Result<Self> {
        match course {
            Some(course) if all_filled(&[id, name, email, phone]) => Ok(Self {
                id: id.trim().to_string(),
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                phone: phone.trim().to_string(),
                course,
            }),
            _ => Err(AppError::validation("Fill all fields!")),
        }
    }
}

impl From<CreateStudent> for Student {
    fn from(data: CreateStudent) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            courses: vec![data.course],
        }
    }
}
