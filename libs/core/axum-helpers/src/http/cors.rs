use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the CORS layer for the configured origins.
///
/// An empty list allows any origin (`Access-Control-Allow-Origin: *`), which
/// is what a public read-mostly API wants by default. A non-empty list
/// restricts responses to exactly those origins.
///
/// # Errors
/// Returns `InvalidInput` when an origin is not a valid header value.
pub fn create_cors_layer(allowed_origins: &[String]) -> io::Result<CorsLayer> {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    tracing::info!("CORS configured with allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}
