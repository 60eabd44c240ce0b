//! Fixed course catalog and per-course enrolment state.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the six catalog courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CourseId {
    Btech,
    Bpharma,
    Mba,
    Business,
    Bcom,
    Bca,
}

/// Course tag did not match any catalog entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown course: {0}")]
pub struct ParseCourseError(pub String);

impl CourseId {
    /// Number of catalog courses.
    pub const COUNT: usize = 6;

    /// Catalog in picker order.
    pub const ALL: [CourseId; Self::COUNT] = [
        CourseId::Btech,
        CourseId::Bpharma,
        CourseId::Mba,
        CourseId::Business,
        CourseId::Bcom,
        CourseId::Bca,
    ];

    /// Tag used as the course key.
    pub fn code(&self) -> &'static str {
        match self {
            CourseId::Btech => "BTECH",
            CourseId::Bpharma => "BPHARMA",
            CourseId::Mba => "MBA",
            CourseId::Business => "BUSINESS",
            CourseId::Bcom => "BCOM",
            CourseId::Bca => "BCA",
        }
    }

    /// Human-readable course name.
    pub fn name(&self) -> &'static str {
        match self {
            CourseId::Btech => "B.Tech",
            CourseId::Bpharma => "B.Pharmacy",
            CourseId::Mba => "MBA",
            CourseId::Business => "Business",
            CourseId::Bcom => "B.Com",
            CourseId::Bca => "BCA",
        }
    }

    /// Annual fee in INR.
    /// Position in [`CourseId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn fee(&self) -> u32 {
        match self {
            CourseId::Btech => 180_000,
            CourseId::Bpharma => 120_000,
            CourseId::Mba => 300_000,
            CourseId::Business => 160_000,
            CourseId::Bcom => 125_000,
            CourseId::Bca => 130_000,
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CourseId {
    type Err = ParseCourseError;

    /// Exact, case-sensitive match against the catalog tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseId::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| ParseCourseError(s.to_string()))
    }
}

/// Format a fee with comma thousands separators (e.g. `180,000`).
pub fn format_fee(fee: u32) -> String {
    let digits = fee.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Enrolment state of a catalog course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    /// Enrolled student IDs, in enrolment order.
    pub students: Vec<String>,
    /// Assigned faculty ID. Nothing assigns this yet.
    pub faculty: Option<String>,
    /// Nothing populates this yet.
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(id: CourseId) -> Self {
        Self {
            id,
            students: Vec::new(),
            faculty: None,
            prerequisites: Vec::new(),
        }
    }
}
