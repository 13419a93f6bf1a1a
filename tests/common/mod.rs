// Shared setup for integration tests: a throw-away SQLite database migrated
// with the real migrations, local image storage in a temp dir, and helpers
// for building requests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use actix_web::dev::ServiceResponse;
use actix_web::test;
use migration::{Migrator, MigratorTrait};
use serde_json::Value;
use tempfile::TempDir;

use parlor_backend::AppState;
use parlor_backend::auth::AdminUser;
use parlor_backend::config::{AdminCredentials, AppConfig, StorageBackend};
use parlor_backend::create_pool;

pub const ADMIN_EMAIL: &str = "owner@honeyherbal.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Test context holding app state and the temp dir backing it.
pub struct TestContext {
    pub state: AppState,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestContext {
    /// A valid admin bearer token for this context's session store.
    pub fn admin_token(&self) -> String {
        let user = AdminUser::from(&self.state.config.admin);
        self.state
            .sessions
            .issue(user)
            .expect("Failed to issue test session")
            .token
    }

    /// Number of files written below the upload dir.
    pub fn stored_files(&self) -> usize {
        fn count(dir: &std::path::Path) -> usize {
            std::fs::read_dir(dir)
                .map(|entries| {
                    entries
                        .flatten()
                        .map(|e| {
                            let path = e.path();
                            if path.is_dir() { count(&path) } else { 1 }
                        })
                        .sum()
                })
                .unwrap_or(0)
        }
        count(&self.upload_dir)
    }
}

pub fn test_config(temp_dir: &TempDir) -> AppConfig {
    let db_path = temp_dir.path().join("parlor.db");
    AppConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        port: 0,
        jwt_secret: "integration-test-secret-xxxxxxxxxxxxxxxxxxxxxxxx".to_string(),
        admin: AdminCredentials {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            name: "Owner".to_string(),
        },
        session_ttl: Duration::from_secs(60 * 60),
        storage: StorageBackend::Local {
            upload_dir: temp_dir.path().join("uploads"),
        },
        run_migrations: true,
    }
}

/// Create an isolated, migrated database and the app state around it.
pub async fn setup() -> TestContext {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&temp_dir);
    let upload_dir = temp_dir.path().join("uploads");
    std::fs::create_dir_all(&upload_dir).expect("Failed to create upload dir");

    let db = create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    TestContext {
        state: AppState::new(db, config),
        upload_dir,
        _temp_dir: temp_dir,
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Read a response as `(status, envelope)`.
pub async fn envelope(resp: ServiceResponse) -> (u16, Value) {
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}
