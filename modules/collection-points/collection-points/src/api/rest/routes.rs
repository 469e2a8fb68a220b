use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tower_http::services::ServeDir;
use utoipa::OpenApi;

use super::context::ApiContext;
use super::handlers;
use super::openapi::ApiDoc;

/// Routes of the collection-points module, including static serving of
/// uploaded images under `/uploads`.
pub fn router(ctx: Arc<ApiContext>, body_limit: usize) -> Router {
    let doc = Arc::new(ApiDoc::openapi());
    let uploads = ServeDir::new(ctx.images.dir());

    Router::new()
        .route("/items", get(handlers::list_items))
        .route(
            "/points",
            get(handlers::list_points).post(handlers::create_point),
        )
        .route("/points/{id}", get(handlers::get_point))
        .route(
            "/openapi.json",
            get(move || {
                let doc = Arc::clone(&doc);
                async move { Json(doc.as_ref().clone()) }
            }),
        )
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(Extension(ctx))
}
