use crate::domain::{models::attendance::AttendanceRecord, ports::AttendanceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

pub struct PostgresAttendanceRepo {
    pool: PgPool,
}

impl PostgresAttendanceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PostgresAttendanceRepo {
    async fn create_batch(&self, records: &[AttendanceRecord]) -> Result<Vec<AttendanceRecord>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let mut created = Vec::with_capacity(records.len());

        for record in records {
            let row = sqlx::query_as::<_, AttendanceRecord>(
                "INSERT INTO attendance (id, student_id, date, is_present) VALUES ($1, $2, $3, $4) RETURNING id, student_id, date, is_present",
            )
                .bind(&record.id)
                .bind(&record.student_id)
                .bind(record.date)
                .bind(record.is_present)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            created.push(row);
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<AttendanceRecord>, AppError> {
        sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, student_id, date, is_present FROM attendance ORDER BY date ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_by_student(&self, student_id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM attendance WHERE student_id = $1")
            .bind(student_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Postgres attendance cascade failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(result.rows_affected())
    }
}
