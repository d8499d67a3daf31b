use crate::domain::{models::admin::Admin, ports::AdminRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAdminRepo {
    pool: PgPool,
}

impl PostgresAdminRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepo {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, username, email, password, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING id, username, email, password, created_at",
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
            "SELECT id, username, email, password, created_at FROM admins WHERE email = $1 OR username = $1",
        )
            .bind(needle)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
