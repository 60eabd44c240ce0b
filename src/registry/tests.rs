//! Cross-entity registry scenarios.

use super::{EnrollOutcome, Registry, faculty, hostel, student};
use crate::error::AppError;
use crate::models::{AssignHostel, CourseId, CreateFaculty, CreateStudent};

fn ada() -> CreateStudent {
    CreateStudent::new("S1", "Ada", "a@x.com", "555", Some(CourseId::Btech)).unwrap()
}

#[test]
fn test_details_with_hostel() {
    let mut reg = Registry::new();
    student::create(&mut reg, ada()).unwrap();
    hostel::assign(&mut reg, AssignHostel::new("S1", "North Hall", "12").unwrap()).unwrap();

    let text = student::details(&reg, "S1").unwrap().to_string();
    for value in ["S1", "Ada", "a@x.com", "555", "Courses: BTECH", "Hostel: North Hall Room: 12"] {
        assert!(text.contains(value), "missing {:?} in {:?}", value, text);
    }
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_student_and_course_lists_stay_consistent() {
    let mut reg = Registry::new();
    student::create(&mut reg, ada()).unwrap();
    let bob = CreateStudent::new("S2", "Bob", "b@x.com", "556", Some(CourseId::Mba)).unwrap();
    student::create(&mut reg, bob).unwrap();

    assert_eq!(student::enroll(&mut reg, "S1", "MBA").unwrap(), EnrollOutcome::Enrolled);
    assert_eq!(student::enroll(&mut reg, "S2", "BCA").unwrap(), EnrollOutcome::Enrolled);
    assert_eq!(student::enroll(&mut reg, "S2", "MBA").unwrap(), EnrollOutcome::AlreadyEnrolled);

    for course in CourseId::ALL {
        for sid in &reg.course(course).students {
            let s = student::get(&reg, sid).unwrap();
            assert_eq!(s.courses.iter().filter(|&&c| c == course).count(), 1);
        }
    }
    for s in student::list_all(&reg) {
        for course in &s.courses {
            let enrolled = &reg.course(*course).students;
            assert_eq!(enrolled.iter().filter(|id| **id == s.id).count(), 1);
        }
    }
    assert_eq!(reg.course(CourseId::Mba).students, ["S2", "S1"]);
}

#[test]
fn test_failed_operations_write_nothing() {
    let mut reg = Registry::new();
    student::create(&mut reg, ada()).unwrap();
    let before = reg.clone();

    assert!(matches!(student::create(&mut reg, ada()), Err(AppError::DuplicateIdentifier(_))));
    assert!(matches!(student::enroll(&mut reg, "S9", "BTECH"), Err(AppError::NotFound(_))));
    assert!(matches!(
        hostel::assign(&mut reg, AssignHostel::new("S9", "North Hall", "1").unwrap()),
        Err(AppError::NotFound(_))
    ));

    assert_eq!(student::list_summaries(&reg), student::list_summaries(&before));
    assert_eq!(reg.counts(), before.counts());
    for course in CourseId::ALL {
        assert_eq!(reg.course(course), before.course(course));
    }
}

#[test]
fn test_counts() {
    let mut reg = Registry::new();
    assert_eq!(reg.counts().students, 0);

    student::create(&mut reg, ada()).unwrap();
    faculty::create(&mut reg, CreateFaculty::new("F1", "Grace").unwrap()).unwrap();
    hostel::assign(&mut reg, AssignHostel::new("S1", "North Hall", "12").unwrap()).unwrap();

    let counts = reg.counts();
    assert_eq!((counts.students, counts.faculty, counts.hostel_assignments), (1, 1, 1));
}

#[test]
fn test_catalog_has_no_faculty_or_prerequisites() {
    let reg = Registry::new();
    for course in CourseId::ALL {
        assert!(reg.course(course).faculty.is_none());
        assert!(reg.course(course).prerequisites.is_empty());
    }
}

#[test]
fn test_catalog_complete_from_start() {
    let mut reg = Registry::new();
    for course in CourseId::ALL {
        assert_eq!(reg.course(course).id, course);
    }

    let bca = CreateStudent::new("S3", "Cy", "c@x.com", "557", Some(CourseId::Bca)).unwrap();
    student::create(&mut reg, bca).unwrap();
    student::enroll(&mut reg, "S3", "BUSINESS").unwrap();

    assert_eq!(reg.course(CourseId::Bca).students, ["S3"]);
    assert_eq!(reg.course(CourseId::Business).students, ["S3"]);
    assert!(reg.course(CourseId::Btech).students.is_empty());
}
