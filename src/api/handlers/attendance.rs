use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AttendancePayload, NewAttendanceRecord};
use crate::api::dtos::responses::PopulatedAttendanceRecord;
use crate::domain::models::attendance::AttendanceRecord;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_attendance(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.attendance_repo.list().await?;
    let students = state.student_repo.list().await?;

    let by_id: HashMap<&str, usize> = students
        .iter()
        .enumerate()
        .map(|(idx, s)| (s.id.as_str(), idx))
        .collect();

    let populated: Vec<PopulatedAttendanceRecord> = records
        .into_iter()
        .map(|record| {
            let student = by_id
                .get(record.student_id.as_str())
                .map(|&idx| students[idx].clone());
            PopulatedAttendanceRecord::from_record(record, student)
        })
        .collect();

    Ok(Json(populated))
}

pub async fn create_attendance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AttendancePayload>,
) -> Result<Response, AppError> {
    match payload {
        AttendancePayload::Batch(items) => {
            let records = to_records(&items);
            let created = state.attendance_repo.create_batch(&records).await?;
            info!("Stored {} attendance records", created.len());
            Ok((StatusCode::CREATED, Json(created)).into_response())
        }
        AttendancePayload::Single(item) => {
            let records = to_records(std::slice::from_ref(&item));
            let created = state.attendance_repo.create_batch(&records).await?;
            let record = created.into_iter().next().ok_or(AppError::Internal)?;
            info!("Stored attendance record {}", record.id);
            Ok((StatusCode::CREATED, Json(record)).into_response())
        }
    }
}

fn to_records(items: &[NewAttendanceRecord]) -> Vec<AttendanceRecord> {
    items
        .iter()
        .map(|item| AttendanceRecord::new(item.student_id.clone(), item.date, item.is_present))
        .collect()
}
