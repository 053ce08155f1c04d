//! GeneralPhones Static Host
//!
//! Axum server that serves the built WASM frontend. The catalog itself is
//! compiled into the frontend; this server never serves product data.

mod config;
mod handlers;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    if !config.static_dir.is_dir() {
        tracing::warn!("⚠ Static directory {} not found - only /health will respond", config.static_dir.display());
        tracing::warn!("  Build the frontend into it or set STATIC_DIR in .env");
    }

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("📱 GeneralPhones running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /*      - Files from {}", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("catalog-server-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = build_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_serves_frontend_files() {
        let dir = scratch_dir("static");
        std::fs::write(dir.join("index.html"), "<html>GeneralPhones</html>").unwrap();

        let app = build_router(&ServerConfig {
            static_dir: dir.clone(),
            ..ServerConfig::default()
        });

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("GeneralPhones"));

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let dir = scratch_dir("empty");
        let app = build_router(&ServerConfig {
            static_dir: dir.clone(),
            ..ServerConfig::default()
        });

        let response = app
            .oneshot(Request::get("/images/phone-9.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(dir).ok();
    }
}
