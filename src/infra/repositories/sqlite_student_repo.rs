use crate::domain::{models::student::Student, ports::StudentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteStudentRepo {
    pool: SqlitePool,
}

impl SqliteStudentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, roll_number, class_name, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, name, roll_number, class_name, created_at",
        )
            .bind(&student.id)
            .bind(&student.name)
            .bind(&student.roll_number)
            .bind(&student.class_name)
            .bind(student.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_duplicate(&self, name: &str, roll_number: &str) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, roll_number, class_name, created_at FROM students WHERE LOWER(name) = LOWER(?) OR LOWER(roll_number) = LOWER(?)",
        )
            .bind(name)
            .bind(roll_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, roll_number, class_name, created_at FROM students ORDER BY name ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite student deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
