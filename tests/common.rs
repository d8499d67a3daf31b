use attenease::{
    api::router::create_router,
    config::Config,
    domain::models::admin::Admin,
    infra::repositories::{
        sqlite_admin_repo::SqliteAdminRepo, sqlite_attendance_repo::SqliteAttendanceRepo,
        sqlite_student_repo::SqliteStudentRepo,
    },
    state::AppState,
};
use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            student_repo: Arc::new(SqliteStudentRepo::new(pool.clone())),
            attendance_repo: Arc::new(SqliteAttendanceRepo::new(pool.clone())),
            admin_repo: Arc::new(SqliteAdminRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Admins are created out-of-band in production; tests seed them
    /// straight through the repository.
    #[allow(dead_code)]
    pub async fn seed_admin(&self, username: &str, email: &str, password: &str) -> Admin {
        let admin = Admin::new(
            username.to_string(),
            email.to_string(),
            password.to_string(),
        );
        self.state
            .admin_repo
            .create(&admin)
            .await
            .expect("Failed to seed admin")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
