use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub roll_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
}

/// An attendance record as submitted by a client; the server assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceRecord {
    pub student_id: String,
    pub date: NaiveDate,
    pub is_present: bool,
}

/// The attendance endpoint accepts either a whole batch or a lone record.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum AttendancePayload {
    Batch(Vec<NewAttendanceRecord>),
    Single(NewAttendanceRecord),
}
