use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub store_backend: StoreBackend,
    pub run_migrations: bool,
    pub port: u16,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub db_acquire_timeout: Duration,
    pub otel_endpoint: String,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let store_backend = match env_or("STORE_BACKEND", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(anyhow!(
                    "STORE_BACKEND must be 'postgres' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let database_url = std::env::var("DATABASE_URL").ok();
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("Missing environment variable: DATABASE_URL"));
        }

        let run_migrations = match env_or("RUN_MIGRATIONS", "true").as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = env_or("PORT", "5000")
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn: u32 = env_or("DB_MAX_CONNECTION", "5")
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = env_or("DB_MIN_CONNECTION", "1")
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        let db_acquire_timeout = env_or("DB_ACQUIRE_TIMEOUT_SECS", "5")
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("Unable to parse DB_ACQUIRE_TIMEOUT_SECS as u64")?;

        let otel_endpoint = env_or("OTEL_ENDPOINT", "http://otel-collector:4317");

        let is_dev = std::env::var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = std::env::var("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            store_backend,
            run_migrations,
            port,
            db_max_conn,
            db_min_conn,
            db_acquire_timeout,
            otel_endpoint,
            is_dev,
            enable_file_log,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
