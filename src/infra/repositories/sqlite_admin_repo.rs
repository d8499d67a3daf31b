use crate::domain::{models::admin::Admin, ports::AdminRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteAdminRepo {
    pool: SqlitePool,
}

impl SqliteAdminRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepo {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, username, email, password, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, username, email, password, created_at",
        )
            .bind(&admin.id)
            .bind(&admin.username)
            .bind(&admin.email)
            .bind(&admin.password)
            .bind(admin.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email_or_username(&self, needle: &str) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>(
            "SELECT id, username, email, password, created_at FROM admins WHERE email = ? OR username = ?",
        )
            .bind(needle)
            .bind(needle)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
