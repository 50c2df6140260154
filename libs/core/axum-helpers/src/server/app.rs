use super::shutdown::ShutdownCoordinator;
use crate::errors::{ErrorCode, INTERNAL_ERROR_MESSAGE, error_response, handlers::not_found};
use crate::http::create_cors_layer;
use axum::{Json, Router, http::StatusCode, response::Response, routing::get};
use core_config::server::ServerConfig;
use std::any::Any;
use std::io;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wraps the application routes with documentation and cross-cutting layers.
///
/// Adds:
/// - the OpenAPI document at `/api-docs/openapi.json`, Scalar at `/api-docs`,
///   ReDoc at `/redoc` and RapiDoc at `/rapidoc`
/// - a JSON 404 (`Route not found`) for unknown paths and unsupported methods
/// - a JSON 500 for handler panics
/// - request tracing, CORS (see [`create_cors_layer`]) and response compression
///
/// `apis` is merged at the root, with state already applied.
///
/// # Errors
/// Returns `InvalidInput` when `cors_allowed_origins` holds an invalid origin.
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let cors_layer = create_cors_layer(&server_config.cors_allowed_origins)?;
    let openapi = T::openapi();

    let router = Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get({
                let doc = openapi.clone();
                move || async move { Json(doc) }
            }),
        )
        .merge(Scalar::with_url("/api-docs", openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!(error_code = ErrorCode::Panic.code(), "Handler panicked: {}", detail);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

/// Server with coordinated shutdown: on SIGINT/SIGTERM new connections stop,
/// in-flight requests drain, then `cleanup` runs under `shutdown_timeout`.
///
/// ```ignore
/// let cleanup = async move { close_database(db, "main").await };
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}
