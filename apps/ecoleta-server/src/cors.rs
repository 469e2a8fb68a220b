use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// One configured CORS list: `"*"` anywhere in it means any value.
#[derive(Debug, PartialEq, Eq)]
enum Allowed<T> {
    Any,
    Only(Vec<T>),
}

fn allowed<T: FromStr>(entries: &[String]) -> Allowed<T> {
    if entries.iter().any(|e| e == "*") {
        return Allowed::Any;
    }
    Allowed::Only(entries.iter().filter_map(|e| e.parse().ok()).collect())
}

/// Build the CORS layer for the browser front-end. Entries that do not
/// parse are skipped; an empty list leaves that aspect unset.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    match allowed::<HeaderValue>(&cfg.allowed_origins) {
        Allowed::Any => {
            warn!("CORS allows any origin; list explicit origins for production deployments");
            layer = layer.allow_origin(Any);
        }
        Allowed::Only(origins) if !origins.is_empty() => layer = layer.allow_origin(origins),
        Allowed::Only(_) => {}
    }

    match allowed::<Method>(&cfg.allowed_methods) {
        Allowed::Any => layer = layer.allow_methods(Any),
        Allowed::Only(methods) if !methods.is_empty() => layer = layer.allow_methods(methods),
        Allowed::Only(_) => {}
    }

    match allowed::<HeaderName>(&cfg.allowed_headers) {
        Allowed::Any => layer = layer.allow_headers(Any),
        Allowed::Only(headers) if !headers.is_empty() => layer = layer.allow_headers(headers),
        Allowed::Only(_) => {}
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    layer
}
