use crate::domain::models::{attendance::AttendanceRecord, student::Student};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminProfile {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub admin: AdminProfile,
}

/// Attendance record with its student reference expanded. `student_id` stays
/// the plain id so consumers keep a stable key; `student` is None when the
/// referent no longer exists (orphaned record).
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedAttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub is_present: bool,
    pub student: Option<Student>,
}

impl PopulatedAttendanceRecord {
    pub fn from_record(record: AttendanceRecord, student: Option<Student>) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            date: record.date,
            is_present: record.is_present,
            student,
        }
    }
}
