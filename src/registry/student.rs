//! Student operations: create, enroll, lookup, details and listing.

use std::fmt;

use super::Registry;
use crate::error::{AppError, Result};
use super::hostel;
use crate::models::{CourseId, CreateStudent, HostelAssignment, Student};

/// Result of an enroll request that referenced valid IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

/// A student with their hostel assignment, rendered for the details dialog.
#[derive(Debug, Clone, Copy)]
pub struct StudentDetails<'a> {
    pub student: &'a Student,
    pub hostel: Option<&'a HostelAssignment>,
}

impl fmt::Display for StudentDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.student;
        let courses: Vec<&str> = s.courses.iter().map(CourseId::code).collect();
        write!(
            f,
            "ID: {}\nName: {}\nEmail: {}\nPhone: {}\nCourses: {}",
            s.id,
            s.name,
            s.email,
            s.phone,
            courses.join(", ")
        )?;
        if let Some(h) = self.hostel {
            write!(f, "\nHostel: {} Room: {}", h.hostel_name, h.room_no)?;
        }
        Ok(())
    }
}

/// Create a student and enroll them in their initial course.
pub fn create(reg: &mut Registry, data: CreateStudent) -> Result<&Student> {
    let course = data.course;
    let id = data.id.clone();

    let student = reg
        .students
        .insert(Student::from(data))
        .map_err(|_| AppError::duplicate("Student ID already exists."))?;

    reg.courses[course.index()].students.push(id);
    tracing::info!("Student {} added to {}", student.id, course);

    Ok(student)
}

/// Get student by ID.
pub fn get<'a>(reg: &'a Registry, id: &str) -> Option<&'a Student> {
    reg.students.get(id)
}

/// All students in insertion order.
pub fn list_all(reg: &Registry) -> impl Iterator<Item = &Student> {
    reg.students.iter()
}

/// Enroll an existing student in a catalog course.
///
/// Both IDs are trimmed. An unknown student or course yields one combined
/// `NotFound`; re-enrolling is a no-op reported as `AlreadyEnrolled`.
pub fn enroll(reg: &mut Registry, student_id: &str, course_id: &str) -> Result<EnrollOutcome> {
    let student_id = student_id.trim();
    let course = course_id.trim().parse::<CourseId>().ok();

    let (Some(course), Some(student)) = (course, reg.students.get_mut(student_id)) else {
        return Err(AppError::not_found("Invalid IDs."));
    };

    if student.courses.contains(&course) {
        return Ok(EnrollOutcome::AlreadyEnrolled);
    }

    student.courses.push(course);
    reg.courses[course.index()].students.push(student_id.to_string());
    tracing::info!("Enrolled {} in {}", student_id, course);

    Ok(EnrollOutcome::Enrolled)
}

/// Look up a student with their hostel assignment.
pub fn details<'a>(reg: &'a Registry, id: &str) -> Result<StudentDetails<'a>> {
    let id = id.trim();
    let student = reg.students.get(id).ok_or_else(|| AppError::not_found("Not found."))?;
    tracing::debug!("Details requested for {}", id);

    Ok(StudentDetails {
        student,
        hostel: hostel::get(reg, id),
    })
}

/// `ID: <id> | Name: <name>` lines for the student list.
pub fn list_summaries(reg: &Registry) -> Vec<String> {
    list_all(reg)
        .map(|s| format!("ID: {} | Name: {}", s.id, s.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(reg: &mut Registry, id: &str, course: CourseId) {
        let data = CreateStudent::new(id, "Name", "n@x.com", "1", Some(course)).unwrap();
        create(reg, data).unwrap();
    }

    #[test]
    fn test_create_enrolls_initial_course() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Btech);

        let student = get(&reg, "S1").unwrap();
        assert_eq!(student.courses, vec![CourseId::Btech]);
        assert_eq!(reg.course(CourseId::Btech).students, vec!["S1".to_string()]);
        assert!(reg.course(CourseId::Mba).students.is_empty());
    }

    #[test]
    fn test_duplicate_leaves_registry_unchanged() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Btech);

        let dup = CreateStudent::new("S1", "Other", "o@x.com", "2", Some(CourseId::Mba)).unwrap();
        let result = create(&mut reg, dup);
        assert!(matches!(result, Err(AppError::DuplicateIdentifier(_))));

        assert_eq!(reg.counts().students, 1);
        assert_eq!(get(&reg, "S1").unwrap().name, "Name");
        assert!(reg.course(CourseId::Mba).students.is_empty());
        assert_eq!(reg.course(CourseId::Btech).students.len(), 1);
    }

    #[test]
    fn test_enroll_new_course() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Btech);

        assert_eq!(enroll(&mut reg, " S1 ", "MBA ").unwrap(), EnrollOutcome::Enrolled);
        assert_eq!(get(&reg, "S1").unwrap().courses, vec![CourseId::Btech, CourseId::Mba]);
        assert_eq!(reg.course(CourseId::Mba).students, vec!["S1".to_string()]);
    }

    #[test]
    fn test_enroll_twice_is_idempotent() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Btech);

        assert_eq!(enroll(&mut reg, "S1", "BTECH").unwrap(), EnrollOutcome::AlreadyEnrolled);
        assert_eq!(get(&reg, "S1").unwrap().courses, vec![CourseId::Btech]);
        assert_eq!(reg.course(CourseId::Btech).students, vec!["S1".to_string()]);
    }

    #[test]
    fn test_enroll_unknown_ids() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Btech);

        assert!(matches!(enroll(&mut reg, "S2", "MBA"), Err(AppError::NotFound(_))));
        assert!(matches!(enroll(&mut reg, "S1", "PHD"), Err(AppError::NotFound(_))));
        assert!(matches!(enroll(&mut reg, "S1", "mba"), Err(AppError::NotFound(_))));
        assert!(matches!(enroll(&mut reg, "", ""), Err(AppError::NotFound(_))));

        assert_eq!(get(&reg, "S1").unwrap().courses, vec![CourseId::Btech]);
        assert!(reg.course(CourseId::Mba).students.is_empty());
    }

    #[test]
    fn test_details_without_hostel() {
        let mut reg = Registry::new();
        add(&mut reg, "S1", CourseId::Bca);

        let text = details(&reg, "S1").unwrap().to_string();
        assert_eq!(text, "ID: S1\nName: Name\nEmail: n@x.com\nPhone: 1\nCourses: BCA");
    }

    #[test]
    fn test_details_not_found() {
        let reg = Registry::new();
        assert!(matches!(details(&reg, "S1"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_summaries_in_insertion_order() {
        let mut reg = Registry::new();
        add(&mut reg, "S2", CourseId::Btech);
        add(&mut reg, "S1", CourseId::Mba);

        assert_eq!(
            list_summaries(&reg),
            vec!["ID: S2 | Name: Name".to_string(), "ID: S1 | Name: Name".to_string()]
        );
    }
}
