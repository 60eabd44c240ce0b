//! Faculty operations.

use super::Registry;
use crate::error::{AppError, Result};
use crate::models::{CreateFaculty, Faculty};

/// Create a faculty member with no assigned courses.
pub fn create(reg: &mut Registry, data: CreateFaculty) -> Result<&Faculty> {
    let faculty = reg
        .faculty
        .insert(Faculty::from(data))
        .map_err(|_| AppError::duplicate("Faculty ID exists."))?;
    tracing::info!("Faculty {} added", faculty.id);
    Ok(faculty)
}

/// All faculty in insertion order.
pub fn list_all(reg: &Registry) -> impl Iterator<Item = &Faculty> {
    reg.faculty.iter()
}

/// `ID: <id> | Name: <name>` lines for the faculty list.
pub fn list_summaries(reg: &Registry) -> Vec<String> {
    list_all(reg)
        .map(|f| format!("ID: {} | Name: {}", f.id, f.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut reg = Registry::new();
        create(&mut reg, CreateFaculty::new("F1", "Grace").unwrap()).unwrap();

        let faculty = reg.faculty.get("F1").unwrap();
        assert_eq!(faculty.name, "Grace");
        assert!(faculty.courses.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut reg = Registry::new();
        create(&mut reg, CreateFaculty::new("F1", "Grace").unwrap()).unwrap();

        let result = create(&mut reg, CreateFaculty::new("F1", "Alan").unwrap());
        assert!(matches!(result, Err(AppError::DuplicateIdentifier(_))));
        assert_eq!(reg.faculty.get("F1").unwrap().name, "Grace");
        assert_eq!(reg.counts().faculty, 1);
    }

    #[test]
    fn test_faculty_ids_independent_of_students() {
        use crate::models::{CourseId, CreateStudent};
        use crate::registry::student;

        let mut reg = Registry::new();
        let student = CreateStudent::new("X1", "Ada", "a@x.com", "555", Some(CourseId::Btech)).unwrap();
        student::create(&mut reg, student).unwrap();

        assert!(create(&mut reg, CreateFaculty::new("X1", "Grace").unwrap()).is_ok());
    }

    #[test]
    fn test_list_summaries() {
        let mut reg = Registry::new();
        create(&mut reg, CreateFaculty::new("F2", "Alan").unwrap()).unwrap();
        create(&mut reg, CreateFaculty::new("F1", "Grace").unwrap()).unwrap();

        assert_eq!(list_summaries(&reg), ["ID: F2 | Name: Alan", "ID: F1 | Name: Grace"]);
    }
}
