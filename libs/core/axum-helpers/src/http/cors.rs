use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// CORS for an explicit list of origins.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Used when no origins are configured.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated).
///
/// Unset falls back to [`create_permissive_cors_layer`]. Set but empty, or
/// containing an invalid header value, is a startup error.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(create_permissive_cors_layer());
    };

    let origins = parse_origins(&raw)?;
    info!(origins = %raw, "CORS configured");
    Ok(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN is set but contains no origins",
        ));
    }

    Ok(origins)
}
