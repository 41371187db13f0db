use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    admin::AdminController, download::DownloadController, health, identity::IdentityController,
    settings::SettingsController, verification::VerificationController, video::VideoController,
};
use crate::domain::{
    admin::{AdminAuthService, AdminCredentials, AdminTokenManager},
    download::{DownloadService, FileHandoff, ProgressProfile},
    identity::IdentityService,
    quota::QuotaGate,
    settings::{SettingsStore, SiteSurfaces},
    shared::Clock,
    verification::{VerificationGate, VerificationMode},
    video::VideoService,
};
use crate::infrastructure::auth::{admin_auth_middleware, request_id_middleware};
use crate::infrastructure::config::{Config, VerificationModeSetting};
use crate::infrastructure::repositories::{
    AdminSessionRepository, IdentityRepository, KeyValueRepository, UsageRepository,
    VideoMetadataRepository,
};

/// Collaborators the application is assembled from.
pub struct AppDependencies {
    pub store: Arc<dyn KeyValueRepository>,
    pub clock: Arc<dyn Clock>,
    pub metadata_repo: Arc<dyn VideoMetadataRepository>,
    pub handoff: Arc<dyn FileHandoff>,
}

/// Instantiate repositories, services and controllers, and build the router
pub async fn build_app(config: &Config, deps: AppDependencies) -> Router {
    let AppDependencies {
        store,
        clock,
        metadata_repo,
        handoff,
    } = deps;

    // 1. Repositories
    let usage_repo = Arc::new(UsageRepository::new(store.clone(), clock.clone()));
    let identity_repo = Arc::new(IdentityRepository::new(store.clone()));
    let admin_session_repo = Arc::new(AdminSessionRepository::new(store.clone()));

    // 2. Services
    let identity_service = Arc::new(IdentityService::new(identity_repo));
    let quota = Arc::new(QuotaGate::new(usage_repo.clone(), clock.clone()));
    let verification = Arc::new(VerificationGate::new(verification_mode(config)));
    let download_service = Arc::new(DownloadService::new(
        identity_service.clone(),
        quota.clone(),
        usage_repo,
        verification.clone(),
        handoff,
        ProgressProfile::with_tick(config.progress_tick()),
    ));
    let video_service = Arc::new(VideoService::new(
        metadata_repo,
        config.metadata_cache_enabled,
    ));
    let settings_store = Arc::new(SettingsStore::new(store.clone()));
    let surfaces = Arc::new(SiteSurfaces::mount(settings_store.clone()).await);
    let admin_service = Arc::new(AdminAuthService::new(
        admin_session_repo,
        AdminTokenManager::new(config.admin_jwt_secret.clone(), config.admin_session_hours),
        AdminCredentials {
            email: config.admin_email.clone(),
            password: config.admin_password.clone(),
        },
        clock,
    ));

    // 3. Controllers
    let identity_controller = Arc::new(IdentityController::new(identity_service, quota));
    let video_controller = Arc::new(VideoController::new(
        video_service,
        download_service.clone(),
    ));
    let download_controller = Arc::new(DownloadController::new(download_service));
    let verification_controller = Arc::new(VerificationController::new(verification));
    let settings_controller = Arc::new(SettingsController::new(settings_store, surfaces));
    let admin_controller = Arc::new(AdminController::new(admin_service.clone()));

    // Identity and usage routes (public)
    let identity_routes = Router::new()
        .route("/api/me", get(IdentityController::get_me))
        .route("/api/me/plan", post(IdentityController::change_plan))
        .route("/api/usage", get(IdentityController::get_usage))
        .route("/auth/login", post(IdentityController::login))
        .route("/auth/logout", post(IdentityController::logout))
        .with_state(identity_controller);

    let video_routes = Router::new()
        .route("/api/videos/resolve", post(VideoController::resolve))
        .with_state(video_controller);

    let download_routes = Router::new()
        .route("/api/downloads", get(DownloadController::list))
        .route("/api/downloads/reset", post(DownloadController::reset))
        .route("/api/downloads/:index", post(DownloadController::trigger))
        .with_state(download_controller);

    let verification_routes = Router::new()
        .route("/api/verification", get(VerificationController::status))
        .route(
            "/api/verification/signal",
            post(VerificationController::signal),
        )
        .with_state(verification_controller);

    // Public settings routes
    let settings_routes = Router::new()
        .route("/api/settings", get(SettingsController::get_settings))
        .route("/api/site", get(SettingsController::get_site))
        .with_state(settings_controller.clone());

    // Admin settings routes (require an admin session)
    let admin_settings_routes = Router::new()
        .route(
            "/api/admin/settings",
            axum::routing::put(SettingsController::replace_settings)
                .patch(SettingsController::update_field),
        )
        .with_state(settings_controller)
        .layer(middleware::from_fn_with_state(
            admin_service.clone(),
            admin_auth_middleware,
        ));

    let admin_public_routes = Router::new()
        .route("/admin/login", post(AdminController::login))
        .with_state(admin_controller.clone());

    let admin_routes = Router::new()
        .route("/admin/logout", post(AdminController::logout))
        .route("/api/admin/session", get(AdminController::get_session))
        .with_state(admin_controller)
        .layer(middleware::from_fn_with_state(
            admin_service,
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(store)
        .merge(identity_routes)
        .merge(video_routes)
        .merge(download_routes)
        .merge(verification_routes)
        .merge(settings_routes)
        .merge(admin_settings_routes)
        .merge(admin_public_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn verification_mode(config: &Config) -> VerificationMode {
    match config.verification_mode {
        VerificationModeSetting::Simulated => VerificationMode::Simulated {
            delay: config.verification_delay(),
        },
        VerificationModeSetting::External => VerificationMode::External {
            timeout: config.verification_timeout(),
        },
    }
}

/// Start the HTTP server on the configured address
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
