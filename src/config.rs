use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where uploaded images end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Written under `UPLOAD_DIR` and served from `/uploads`.
    Local { upload_dir: PathBuf },
    /// Supabase Storage buckets.
    Supabase { url: String, service_key: String },
}

/// The single admin login. There is no user table.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub admin: AdminCredentials,
    pub session_ttl: Duration,
    pub storage: StorageBackend,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Build the configuration from environment variables (after `dotenv`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = match env_or("STORAGE_BACKEND", "local").as_str() {
            "local" => StorageBackend::Local {
                upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "./uploads")),
            },
            "supabase" => StorageBackend::Supabase {
                url: required("SUPABASE_URL")?.trim_end_matches('/').to_string(),
                service_key: required("SUPABASE_SERVICE_KEY")?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or("PORT", 8080)?,
            jwt_secret: required("JWT_SECRET")?,
            admin: AdminCredentials {
                email: required("ADMIN_EMAIL")?,
                password: required("ADMIN_PASSWORD")?,
                name: env_or("ADMIN_NAME", "Admin"),
            },
            session_ttl: Duration::from_secs(parse_or("SESSION_TTL_SECS", 8 * 60 * 60)?),
            storage,
            run_migrations: parse_or("RUN_MIGRATIONS", false)?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
