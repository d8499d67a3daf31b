use reqwest::{Client, StatusCode};
use std::path::PathBuf;
use tracing::warn;

use crate::api::dtos::requests::{CreateStudentRequest, NewAttendanceRecord};
use crate::api::dtos::responses::LoginResponse;
use crate::client::cache::CacheStore;
use crate::domain::models::{attendance::AttendanceRecord, student::Student};
use crate::error::AppError;

pub const STUDENTS_KEY: &str = "students";
pub const ATTENDANCE_KEY: &str = "attendance";

/// Admin-console client for the AttenEase API. Reads degrade to the local
/// cache when the backend is unreachable; the attendance write degrades to
/// an optimistic local append with synthesized ids. There is no retry and no
/// reconciliation when connectivity returns — last writer wins between the
/// cache and the server.
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache: CacheStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            cache: CacheStore::new(cache_dir),
        }
    }

    /// One-shot credential check. No fallback: an unreachable backend is a
    /// login failure.
    pub async fn login(
        &self,
        email_or_username: &str,
        password: &str,
    ) -> Result<LoginResponse, AppError> {
        let resp = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&serde_json::json!({
                "emailOrUsername": email_or_username,
                "password": password,
            }))
            .send()
            .await?;

        if resp.status() == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }

        Ok(resp.error_for_status()?.json().await?)
    }

    pub async fn get_students(&self) -> Vec<Student> {
        match self.fetch_students().await {
            Ok(students) => {
                self.cache.save(STUDENTS_KEY, &students);
                students
            }
            Err(e) => {
                warn!("Error fetching students from API, using cache: {}", e);
                self.cache.load(STUDENTS_KEY)
            }
        }
    }

    pub async fn create_student(
        &self,
        name: &str,
        roll_number: &str,
        class_name: &str,
    ) -> Result<Student, AppError> {
        let cached: Vec<Student> = self.cache.load(STUDENTS_KEY);
        if cached.iter().any(|s| {
            s.name.eq_ignore_ascii_case(name) || s.roll_number.eq_ignore_ascii_case(roll_number)
        }) {
            return Err(AppError::Validation(
                "A student with this name or roll number already exists".to_string(),
            ));
        }

        let resp = self
            .http
            .post(format!("{}/api/students", self.base_url))
            .json(&CreateStudentRequest {
                name: name.to_string(),
                roll_number: roll_number.to_string(),
                class_name: class_name.to_string(),
            })
            .send()
            .await?;

        if resp.status() == StatusCode::BAD_REQUEST {
            return Err(AppError::Validation(extract_message(resp).await));
        }

        let created: Student = resp.error_for_status()?.json().await?;

        let mut students = cached;
        students.push(created.clone());
        self.cache.save(STUDENTS_KEY, &students);

        Ok(created)
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        self.http
            .delete(format!("{}/api/students/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;

        let students: Vec<Student> = self.cache.load(STUDENTS_KEY);
        let students: Vec<Student> = students.into_iter().filter(|s| s.id != id).collect();
        self.cache.save(STUDENTS_KEY, &students);

        // Mirror the server-side cascade locally.
        let attendance: Vec<AttendanceRecord> = self.cache.load(ATTENDANCE_KEY);
        let attendance: Vec<AttendanceRecord> =
            attendance.into_iter().filter(|r| r.student_id != id).collect();
        self.cache.save(ATTENDANCE_KEY, &attendance);

        Ok(())
    }

    pub async fn get_attendance(&self) -> Vec<AttendanceRecord> {
        match self.fetch_attendance().await {
            Ok(records) => {
                self.cache.save(ATTENDANCE_KEY, &records);
                records
            }
            Err(e) => {
                warn!("Error fetching attendance from API, using cache: {}", e);
                self.cache.load(ATTENDANCE_KEY)
            }
        }
    }

    /// Submits a marking batch. On success the server-assigned records are
    /// appended to the cache; on failure ids are synthesized locally and the
    /// records appended anyway, so the caller's view proceeds optimistically
    /// even though the authoritative store was not updated.
    pub async fn mark_attendance(&self, records: &[NewAttendanceRecord]) -> Vec<AttendanceRecord> {
        match self.submit_attendance(records).await {
            Ok(created) => {
                self.append_to_attendance_cache(&created);
                created
            }
            Err(e) => {
                warn!("Error marking attendance, storing locally: {}", e);
                let synthesized: Vec<AttendanceRecord> = records
                    .iter()
                    .map(|r| AttendanceRecord::new(r.student_id.clone(), r.date, r.is_present))
                    .collect();
                self.append_to_attendance_cache(&synthesized);
                synthesized
            }
        }
    }

    async fn fetch_students(&self) -> Result<Vec<Student>, AppError> {
        let resp = self
            .http
            .get(format!("{}/api/students", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn fetch_attendance(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        let resp = self
            .http
            .get(format!("{}/api/attendance", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn submit_attendance(
        &self,
        records: &[NewAttendanceRecord],
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let resp = self
            .http
            .post(format!("{}/api/attendance", self.base_url))
            .json(records)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    fn append_to_attendance_cache(&self, records: &[AttendanceRecord]) {
        let mut attendance: Vec<AttendanceRecord> = self.cache.load(ATTENDANCE_KEY);
        attendance.extend(records.iter().cloned());
        self.cache.save(ATTENDANCE_KEY, &attendance);
    }
}

async fn extract_message(resp: reqwest::Response) -> String {
    resp.json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| "Invalid request".to_string())
}
