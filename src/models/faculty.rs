//! Faculty record and create DTO.

use super::all_filled;
use super::course::CourseId;
use crate::error::{AppError, Result};

/// A faculty member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: String,
    pub name: String,
    /// Assigned courses. No operation populates this yet.
    pub courses: Vec<CourseId>,
}

/// DTO for creating a faculty member.
#[derive(Debug, Clone)]
pub struct CreateFaculty {
    pub id: String,
    pub name: String,
}

impl CreateFaculty {
    pub fn new(id: &str, name: &str) -> Result<Self> {
        if !all_filled(&[id, name]) {
            return Err(AppError::validation("Fill all fields!"));
        }
        Ok(Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
        })
    }
}

impl From<CreateFaculty> for Faculty {
    fn from(data: CreateFaculty) -> Self {
        Self {
            id: data.id,
            name: data.name,
            courses: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_faculty() {
        let faculty = Faculty::from(CreateFaculty::new(" F1", "Grace ").unwrap());
        assert_eq!(faculty.id, "F1");
        assert_eq!(faculty.name, "Grace");
        assert!(faculty.courses.is_empty());
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(CreateFaculty::new("", "Grace"), Err(AppError::Validation(_))));
    }
}
