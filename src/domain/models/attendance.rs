use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One presence decision for one student on one date. Multiple records may
/// exist for the same (student, date) pair; submission appends, never
/// overwrites.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub is_present: bool,
}

impl AttendanceRecord {
    pub fn new(student_id: String, date: NaiveDate, is_present: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id,
            date,
            is_present,
        }
    }
}
