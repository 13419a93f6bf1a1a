use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use parlor_backend::config::{AppConfig, StorageBackend};
use parlor_backend::{AppState, create_pool};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let db = create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        tracing::info!("Migrations applied");
    }

    if let StorageBackend::Local { upload_dir } = &config.storage {
        std::fs::create_dir_all(upload_dir)?;
        tracing::info!("Storing uploads in {}", upload_dir.display());
    } else {
        tracing::info!("Storing uploads in Supabase Storage");
    }

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(db, config);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let state = state.clone();
        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
