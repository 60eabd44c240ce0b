//! Hostel assignment and assign DTO.

use super::all_filled;
use crate::error::{AppError, Result};

/// Hostel and room held by one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostelAssignment {
    pub hostel_name: String,
    pub room_no: String,
}

/// DTO for assigning (or reassigning) a student's hostel.
#[derive(Debug, Clone)]
pub struct AssignHostel {
    pub student_id: String,
    pub hostel_name: String,
    pub room_no: String,
}

impl AssignHostel {
    pub fn new(student_id: &str, hostel_name: &str, room_no: &str) -> Result<Self> {
        if !all_filled(&[student_id, hostel_name, room_no]) {
            return Err(AppError::validation("Fill all fields."));
        }
        Ok(Self {
            student_id: student_id.trim().to_string(),
            hostel_name: hostel_name.trim().to_string(),
            room_no: room_no.trim().to_string(),
        })
    }
}
