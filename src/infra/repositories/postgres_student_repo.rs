use crate::domain::{models::student::Student, ports::StudentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

pub struct PostgresStudentRepo {
    pool: PgPool,
}

impl PostgresStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, roll_number, class_name, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, name, roll_number, class_name, created_at",
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
            "SELECT id, name, roll_number, class_name, created_at FROM students WHERE LOWER(name) = LOWER($1) OR LOWER(roll_number) = LOWER($2)",
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
        let _result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Postgres student deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
