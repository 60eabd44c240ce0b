//! Hostel assignment operations.

use super::{Registry, student};
use crate::error::{AppError, Result};
use crate::models::{AssignHostel, HostelAssignment};

/// Assign or reassign a student's hostel room.
///
/// The student must already exist. A later assignment replaces the earlier one.
pub fn assign(reg: &mut Registry, data: AssignHostel) -> Result<&HostelAssignment> {
    if student::get(reg, &data.student_id).is_none() {
        return Err(AppError::not_found("Invalid Student ID."));
    }

    tracing::info!("Hostel {} room {} assigned to {}", data.hostel_name, data.room_no, data.student_id);

    let assignment = HostelAssignment {
        hostel_name: data.hostel_name,
        room_no: data.room_no,
    };
    reg.hostel.insert(data.student_id.clone(), assignment);
    Ok(&reg.hostel[&data.student_id])
}

/// Get a student's hostel assignment.
pub fn get<'a>(reg: &'a Registry, student_id: &str) -> Option<&'a HostelAssignment> {
    reg.hostel.get(student_id)
}
