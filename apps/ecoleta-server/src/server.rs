use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use collection_points::CollectionPointsModule;
use ecoleta_db::Db;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::{AppConfig, CorsConfig};
use crate::cors::build_cors_layer;
use crate::signals::wait_for_shutdown;

/// Full HTTP surface: module routes plus the liveness endpoint, wrapped in
/// request tracing and CORS.
pub fn build_router(module: &CollectionPointsModule, cors: &CorsConfig) -> Router {
    module
        .router()
        .route("/health", get(|| async { "ok" }))
        .layer(build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Builds the app and serves it until a shutdown signal arrives.
///
/// # Errors
/// Fails if the database, the upload directory or the listener cannot be set up.
pub async fn run(config: AppConfig) -> Result<()> {
    let app = build_app(&config).await?;

    let listener = TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.server.bind_addr))?;
    info!(addr = %listener.local_addr()?, "Ecoleta server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Ecoleta server stopped");
    Ok(())
}

async fn build_app(config: &AppConfig) -> Result<Router> {
    info!(dsn = %config.database.redacted_dsn(), "Initializing storage");
    let db = Db::connect(&config.database)
        .await
        .context("cannot connect to the database")?;
    let module = CollectionPointsModule::init(db, config.collection_points.clone()).await?;

    Ok(build_router(&module, &config.server.cors))
}

async fn shutdown_signal() {
    match wait_for_shutdown().await {
        Ok(signal) => info!(%signal, "Draining connections"),
        Err(e) => error!(error = %e, "Signal handling failed, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use collection_points::CollectionPointsConfig;
    use ecoleta_db::DbConfig;
    use tower::ServiceExt;

    async fn module(dir: &tempfile::TempDir) -> CollectionPointsModule {
        let db = Db::connect(&DbConfig::in_memory()).await.unwrap();
        let config = CollectionPointsConfig {
            uploads_dir: dir.path().to_path_buf(),
            ..CollectionPointsConfig::default()
        };
        CollectionPointsModule::init(db, config).await.unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_answers_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(&module(&dir).await, &CorsConfig::default());

        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn cross_origin_requests_are_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(&module(&dir).await, &CorsConfig::default());

        let resp = app
            .oneshot(
                Request::get("/items")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn app_is_built_from_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.database = DbConfig::in_memory();
        config.collection_points.uploads_dir = dir.path().join("uploads");

        let app = build_app(&config).await.unwrap();
        let resp = app
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(dir.path().join("uploads").is_dir());
    }
}
