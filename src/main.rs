use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use savesora_backend::domain::download::RecordingHandoff;
use savesora_backend::domain::shared::SystemClock;
use savesora_backend::infrastructure::config::{Config, LogFormat};
use savesora_backend::infrastructure::db::{check_connection, create_pool, ensure_schema};
use savesora_backend::infrastructure::http::{build_app, start_http_server, AppDependencies};
use savesora_backend::infrastructure::repositories::{
    HttpVideoMetadataRepository, SqliteKeyValueRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting SaveSora Backend on {}:{}",
        config.host,
        config.port
    );

    // Open the local store
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    ensure_schema(&pool).await?;
    tracing::info!("Key-value store ready");

    tracing::info!(
        backend = %config.metadata_backend_url,
        simulate = config.simulate_backend,
        verification = ?config.verification_mode,
        "Download flow configured"
    );

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let deps = AppDependencies {
        store: Arc::new(SqliteKeyValueRepository::new(pool.clone())),
        clock: Arc::new(SystemClock),
        metadata_repo: Arc::new(HttpVideoMetadataRepository::new(
            config.metadata_backend_url.clone(),
            config.simulate_backend,
        )),
        handoff: Arc::new(RecordingHandoff::new()),
    };
    let app = build_app(&config, deps).await;

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "savesora_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "savesora_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
