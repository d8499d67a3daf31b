use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateStudentRequest;
use crate::api::dtos::responses::MessageResponse;
use crate::domain::models::student::Student;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let students = state.student_repo.list().await?;
    Ok(Json(students))
}

pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    let roll_number = payload.roll_number.trim();
    let class_name = payload.class_name.trim();

    if name.is_empty() || roll_number.is_empty() || class_name.is_empty() {
        return Err(AppError::Validation(
            "Name, roll number and class are required".to_string(),
        ));
    }

    if state
        .student_repo
        .find_duplicate(name, roll_number)
        .await?
        .is_some()
    {
        return Err(AppError::Validation(
            "A student with this name or roll number already exists".to_string(),
        ));
    }

    let student = Student::new(
        name.to_string(),
        roll_number.to_string(),
        class_name.to_string(),
    );
    let created = state.student_repo.create(&student).await?;

    info!("Registered student {} ({})", created.name, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Deletes the student and cascades to their attendance rows. Idempotent:
/// deleting an unknown id still answers 200 with the cascade a no-op.
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.student_repo.delete(&id).await?;
    let removed = state.attendance_repo.delete_by_student(&id).await?;

    info!("Deleted student {} and {} attendance records", id, removed);

    Ok(Json(MessageResponse {
        message: "Student deleted".to_string(),
    }))
}
