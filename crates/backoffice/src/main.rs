use anyhow::{Context, Result};
use backoffice::{
    handler::AppRouter,
    repository::{Repositories, memory::MemoryStore},
    state::AppState,
};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager, StoreBackend},
    utils::{Telemetry, init_logger},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let mut telemetry = Telemetry::new("backoffice", config.otel_endpoint.clone());

    let logger_provider = telemetry
        .init_logger()
        .context("Failed to initialize log exporter")?;
    let _meter_provider = telemetry
        .init_meter()
        .context("Failed to initialize meter provider")?;
    let _tracer_provider = telemetry
        .init_tracer()
        .context("Failed to initialize tracer provider")?;

    init_logger(
        logger_provider,
        "backoffice",
        config.is_dev,
        config.enable_file_log,
    );

    let repos = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = ConnectionManager::new_pool(
                database_url,
                config.db_min_conn,
                config.db_max_conn,
                config.db_acquire_timeout,
            )
            .await
            .context("Failed to connect to database")?;

            if config.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("✅ Database migrations applied");
            }

            Repositories::postgres(pool)
        }
        StoreBackend::Memory => {
            info!("🧠 Using in-memory store");
            Repositories::memory(MemoryStore::new())
        }
    };

    let state = AppState::new(repos);

    info!("🚀 Back-office API starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    telemetry.shutdown().await?;

    Ok(())
}
