use anyhow::Result;
use chrono::{TimeZone, Utc};
use savesora_backend::domain::download::RecordingHandoff;
use savesora_backend::domain::shared::ManualClock;
use savesora_backend::infrastructure::config::{
    Config, Environment, LogFormat, VerificationModeSetting,
};
use savesora_backend::infrastructure::http::{build_app, AppDependencies};
use savesora_backend::infrastructure::repositories::InMemoryKeyValueRepository;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub mod api_client;
pub mod assertions;
pub mod fixtures;

use api_client::TestClient;
use fixtures::StubMetadataRepository;

pub const ADMIN_EMAIL: &str = "admin@savesora.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
    pub clock: Arc<ManualClock>,
    pub handoff: Arc<RecordingHandoff>,
    #[allow(dead_code)]
    pub store: Arc<InMemoryKeyValueRepository>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: Config) -> Result<Self> {
        let store = Arc::new(InMemoryKeyValueRepository::new());
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        ));
        let handoff = Arc::new(RecordingHandoff::new());

        let app = build_app(
            &config,
            AppDependencies {
                store: store.clone(),
                clock: clock.clone(),
                metadata_repo: Arc::new(StubMetadataRepository),
                handoff: handoff.clone(),
            },
        )
        .await;

        // Start server
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&base_url),
            config,
            clock,
            handoff,
            store,
        })
    }

    /// Log in as the configured admin and return the bearer token
    pub async fn admin_token(&self) -> Result<String> {
        let response = self
            .client
            .post(
                "/admin/login",
                &serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
            )
            .await?;
        response.assert_status(hyper::StatusCode::OK);

        let token = response
            .body
            .as_ref()
            .and_then(|b| b.get("token"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| anyhow::anyhow!("login response has no token"))?;
        Ok(token.to_string())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        admin_jwt_secret: "test-admin-secret-for-testing-only".to_string(),
        admin_session_hours: 24,
        verification_mode: VerificationModeSetting::Simulated,
        verification_delay_ms: 20,
        verification_timeout_secs: 5,
        metadata_backend_url: "http://127.0.0.1:9/unused".to_string(),
        simulate_backend: false,
        metadata_cache_enabled: false, // Disable cache in tests to avoid test pollution
        progress_tick_ms: 5,
    }
}

/// Retry `check` until it holds, failing the test after about two seconds
pub async fn eventually<F, Fut>(what: &str, mut check: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for _ in 0..100 {
        if check().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting for {}", what);
}
