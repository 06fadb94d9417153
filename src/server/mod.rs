pub mod handlers;
mod types;

pub use types::*;

use crate::{Result, config::Config, gemini::GeminiClient};
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::post,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the application router: the two API routes plus CORS and
/// request tracing.
pub fn router(state: handlers::AppState, cors_origins: &[String]) -> Result<Router> {
    let origins = cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| crate::Error::config(format!("Invalid CORS origin: '{}'", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/api/generate-plan", post(handlers::generate_plan))
        .route("/api/generate-image", post(handlers::generate_image))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn run(config: Config) -> Result<()> {
    let gemini = GeminiClient::new(config.gemini.clone());

    let app_state = handlers::AppState {
        gemini: Arc::new(gemini),
    };

    let app = router(app_state, &config.server.cors_origins)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
