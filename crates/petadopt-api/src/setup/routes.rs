//! Route configuration and setup

use crate::constants::{API_PREFIX, HTTP_CONCURRENCY_LIMIT, MULTIPART_OVERHEAD_BYTES};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use petadopt_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    config.validate()?;
    let cors = setup_cors(config)?;

    let api = Router::new()
        .route("/pets", get(handlers::pets::list_pets))
        .route(
            "/registerPet",
            post(handlers::pets::register_pet)
                .layer(DefaultBodyLimit::max(config.pet_photo_max_bytes)),
        )
        .route("/adopt", post(handlers::adoption::submit_adoption_request))
        .route("/partner", post(handlers::partner::register_partner))
        .route("/register", post(handlers::users::register_user))
        .route("/login", post(handlers::users::login))
        .route(
            "/placeholder/{width}/{height}",
            get(handlers::placeholder::placeholder_image),
        );

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest(API_PREFIX, api)
        .nest_service(&config.upload_base_url, ServeDir::new(&config.upload_dir));

    if let Some(static_dir) = &config.static_dir {
        tracing::info!(static_dir = %static_dir, "Serving static files");
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    tracing::info!(
        http_concurrency_limit = HTTP_CONCURRENCY_LIMIT,
        "HTTP concurrency limit layer enabled"
    );

    let app = app
        .layer(ConcurrencyLimitLayer::new(HTTP_CONCURRENCY_LIMIT))
        .layer(RequestBodyLimitLayer::new(
            config.pet_photo_max_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS_ORIGINS entry: {}", e))?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
