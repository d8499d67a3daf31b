mod common;

use attenease::api::dtos::requests::NewAttendanceRecord;
use attenease::client::api_client::ApiClient;
use attenease::error::AppError;
use common::TestApp;
use std::path::PathBuf;
use uuid::Uuid;

struct CacheDirGuard(PathBuf);

impl CacheDirGuard {
    fn new() -> Self {
        Self(std::env::temp_dir().join(format!("test_cache_{}", Uuid::new_v4())))
    }
}

impl Drop for CacheDirGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Serves the app on a real socket so the reqwest-based client can talk to
/// it; aborting the task takes the backend "offline".
async fn spawn_server(app: &TestApp) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app.router.clone();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn login_has_no_offline_fallback() {
    let app = TestApp::new().await;
    app.seed_admin("principal", "principal@school.test", "letmein").await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    let ok = client.login("principal", "letmein").await.unwrap();
    assert_eq!(ok.message, "Login successful");
    assert_eq!(ok.admin.email, "principal@school.test");

    let err = client.login("principal", "wrong").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    server.abort();
    let _ = server.await;

    let err = client.login("principal", "letmein").await.unwrap_err();
    assert!(matches!(err, AppError::Http(_)));
}

#[tokio::test]
async fn reads_fall_back_to_the_cache_when_offline() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    let amy = client.create_student("Amy", "R1", "10A").await.unwrap();
    let online = client.get_students().await;
    assert_eq!(online.len(), 1);

    server.abort();
    let _ = server.await;

    let offline = client.get_students().await;
    assert_eq!(offline.len(), 1);
    assert_eq!(offline[0].id, amy.id);
    assert_eq!(offline[0].name, "Amy");
}

#[tokio::test]
async fn offline_marking_appends_locally_with_synthesized_ids() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    let amy = client.create_student("Amy", "R1", "10A").await.unwrap();

    server.abort();
    let _ = server.await;

    let batch = vec![NewAttendanceRecord {
        student_id: amy.id.clone(),
        date: "2024-03-05".parse().unwrap(),
        is_present: true,
    }];
    let stored = client.mark_attendance(&batch).await;

    assert_eq!(stored.len(), 1);
    assert!(!stored[0].id.is_empty());
    assert_eq!(stored[0].student_id, amy.id);
    assert!(stored[0].is_present);

    // Offline read serves the optimistic append.
    let cached = client.get_attendance().await;
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].id, stored[0].id);
}

#[tokio::test]
async fn online_marking_stores_server_assigned_records() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    let amy = client.create_student("Amy", "R1", "10A").await.unwrap();

    let batch = vec![NewAttendanceRecord {
        student_id: amy.id.clone(),
        date: "2024-03-05".parse().unwrap(),
        is_present: true,
    }];
    let stored = client.mark_attendance(&batch).await;
    assert_eq!(stored.len(), 1);

    // The server copy and the cache agree.
    let fetched = client.get_attendance().await;
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, stored[0].id);

    server.abort();
}

#[tokio::test]
async fn client_side_duplicate_check_works_from_the_cache() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    client.create_student("Amy", "R1", "10A").await.unwrap();

    server.abort();
    let _ = server.await;

    // Rejected from the cached roster alone, before any network call.
    let err = client.create_student("AMY", "R9", "10A").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn offline_student_creation_propagates_the_failure() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    client.create_student("Amy", "R1", "10A").await.unwrap();

    server.abort();
    let _ = server.await;

    let err = client.create_student("Bob", "R2", "10A").await.unwrap_err();
    assert!(matches!(err, AppError::Http(_)));

    // No optimistic append for registrations.
    let students = client.get_students().await;
    assert_eq!(students.len(), 1);
}

#[tokio::test]
async fn deleting_a_student_prunes_the_local_cache() {
    let app = TestApp::new().await;
    let (base_url, server) = spawn_server(&app).await;
    let cache_dir = CacheDirGuard::new();
    let client = ApiClient::new(base_url, &cache_dir.0);

    let amy = client.create_student("Amy", "R1", "10A").await.unwrap();
    let bob = client.create_student("Bob", "R2", "10A").await.unwrap();
    client
        .mark_attendance(&[
            NewAttendanceRecord {
                student_id: amy.id.clone(),
                date: "2024-03-05".parse().unwrap(),
                is_present: true,
            },
            NewAttendanceRecord {
                student_id: bob.id.clone(),
                date: "2024-03-05".parse().unwrap(),
                is_present: false,
            },
        ])
        .await;

    client.delete_student(&amy.id).await.unwrap();

    server.abort();
    let _ = server.await;

    // The cache mirrors the cascade: Amy and her records are gone.
    let students = client.get_students().await;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, bob.id);

    let attendance = client.get_attendance().await;
    assert_eq!(attendance.len(), 1);
    assert_eq!(attendance[0].student_id, bob.id);
}
