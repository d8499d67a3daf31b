use crate::domain::models::{admin::Admin, attendance::AttendanceRecord, student::Student};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: &Student) -> Result<Student, AppError>;
    /// Case-insensitive match on name OR roll number, the authoritative
    /// duplicate check behind student registration.
    async fn find_duplicate(&self, name: &str, roll_number: &str) -> Result<Option<Student>, AppError>;
    async fn list(&self) -> Result<Vec<Student>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Inserts the whole batch in one transaction; either every record is
    /// persisted or none is.
    async fn create_batch(&self, records: &[AttendanceRecord]) -> Result<Vec<AttendanceRecord>, AppError>;
    async fn list(&self) -> Result<Vec<AttendanceRecord>, AppError>;
    /// Cascade cleanup on student deletion. Returns the number of rows
    /// removed. There is no foreign key; callers own referential integrity.
    async fn delete_by_student(&self, student_id: &str) -> Result<u64, AppError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError>;
    async fn find_by_email_or_username(&self, needle: &str) -> Result<Option<Admin>, AppError>;
}
