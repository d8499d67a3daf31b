pub mod postgres_admin_repo;
pub mod postgres_attendance_repo;
pub mod postgres_student_repo;
pub mod sqlite_admin_repo;
pub mod sqlite_attendance_repo;
pub mod sqlite_student_repo;
