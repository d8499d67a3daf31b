use crate::config::Config;
use crate::domain::ports::{AdminRepository, AttendanceRepository, StudentRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub student_repo: Arc<dyn StudentRepository>,
    pub attendance_repo: Arc<dyn AttendanceRepository>,
    pub admin_repo: Arc<dyn AdminRepository>,
}
