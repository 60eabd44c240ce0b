//! In-memory registry of students, faculty, courses and hostel assignments.
//!
//! The registry lives for the whole process and is owned by the application
//! state. Operations are grouped per entity like repository modules: each
//! takes `&mut Registry` (or `&Registry`) plus a validated DTO.

pub mod faculty;
pub mod hostel;
pub mod student;
mod table;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::models::{Course, CourseId, Faculty, HostelAssignment, Student};

pub use student::{EnrollOutcome, StudentDetails};
use table::{Keyed, Table};

/// Record counts for the workspace header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryCounts {
    pub students: usize,
    pub faculty: usize,
    pub hostel_assignments: usize,
}

/// Process-lifetime record store.
#[derive(Debug, Clone)]
pub struct Registry {
    students: Table<Student>,
    faculty: Table<Faculty>,
    /// Always the full catalog, indexed by `CourseId::index`.
    courses: [Course; CourseId::COUNT],
    hostel: HashMap<String, HostelAssignment>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry with the full course catalog.
    pub fn new() -> Self {
        Self {
            students: Table::default(),
            faculty: Table::default(),
            courses: CourseId::ALL.map(Course::new),
            hostel: HashMap::new(),
        }
    }

    /// Catalog course state.
    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.index()]
    }

    /// Get record counts.
    pub fn counts(&self) -> RegistryCounts {
        RegistryCounts {
            students: self.students.len(),
            faculty: self.faculty.len(),
            hostel_assignments: self.hostel.len(),
        }
    }
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Faculty {
    fn key(&self) -> &str {
        &self.id
    }
}
