pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod storage;

pub use db::create_pool;

use actix_web::web;
use sea_orm::DatabaseConnection;

use auth::session::SessionStore;
use config::AppConfig;
use storage::ImageStorage;

/// Shared application data, cloned into every worker.
#[derive(Clone)]
pub struct AppState {
    pub db: web::Data<DatabaseConnection>,
    pub config: web::Data<AppConfig>,
    pub sessions: web::Data<SessionStore>,
    pub storage: web::Data<ImageStorage>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        let sessions = SessionStore::new(&config.jwt_secret, config.session_ttl);
        let storage = ImageStorage::from_config(&config.storage);

        Self {
            db: web::Data::new(db),
            config: web::Data::new(config),
            sessions: web::Data::new(sessions),
            storage: web::Data::new(storage),
        }
    }

    /// Registers app data, extractor configs, `/api` routes and, for local
    /// storage, the `/uploads` file service.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.db.clone())
            .app_data(self.config.clone())
            .app_data(self.sessions.clone())
            .app_data(self.storage.clone())
            .app_data(response::json_config())
            .app_data(response::path_config())
            .app_data(response::query_config())
            .service(web::scope("/api").configure(handlers::init_routes));

        if let ImageStorage::Local(local) = self.storage.get_ref() {
            cfg.service(actix_files::Files::new(
                storage::local::PUBLIC_PREFIX,
                local.root(),
            ));
        }
    }
}
