use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors::cors_layer_from_env, security::security_headers};
use axum::{Router, middleware};
use core_config::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Wraps fully-stated API routes with documentation UIs and the shared
/// middleware stack.
///
/// Routes are mounted at the root. Adds:
/// - Swagger UI (`/swagger-ui`), ReDoc (`/redoc`), RapiDoc (`/rapidoc`), Scalar (`/scalar`)
/// - JSON 404 and 405 fallbacks
/// - request tracing, security headers, CORS (see [`cors_layer_from_env`]) and compression
///
/// Fails when `CORS_ALLOWED_ORIGIN` is set to something unusable.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_layer_from_env()?;
    let doc = T::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, doc.clone()))
        .merge(Redoc::with_url("/redoc", doc.clone()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", doc))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, waits for in-flight requests to
/// finish, then runs `cleanup` bounded by `server_config.shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let coordinator = ShutdownCoordinator::new();
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!(address = %listener.local_addr()?, "Server listening");

    serve_then_cleanup(
        listener,
        router,
        async move { coordinator.wait().await },
        cleanup,
        server_config.shutdown_timeout,
    )
    .await
}

/// Cleanup starts only after `axum::serve` has returned, so resources such as
/// the database pool outlive every request. It also runs when serving fails.
async fn serve_then_cleanup<S, F>(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: S,
    cleanup: F,
    cleanup_timeout: Duration,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Server error"));

    info!(timeout = ?cleanup_timeout, "Requests drained, running cleanup");
    match tokio::time::timeout(cleanup_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?cleanup_timeout, "Cleanup timed out, forcing shutdown"),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn app() -> Router {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<EmptyDoc>(Router::new().route("/ping", get(|| async { "pong" }))).unwrap()
        })
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_api_routes_are_mounted_at_root() {
        assert_eq!(status_of("GET", "/ping").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_uses_json_fallback() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        assert_eq!(status_of("DELETE", "/ping").await, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        assert_eq!(status_of("GET", OPENAPI_JSON_PATH).await, StatusCode::OK);
    }

    #[test]
    fn test_invalid_cors_setting_fails_startup() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            assert!(create_router::<EmptyDoc>(Router::new()).is_err());
        });
    }

    async fn listener() -> (tokio::net::TcpListener, std::net::SocketAddr) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        (listener, addr)
    }

    #[tokio::test]
    async fn test_cleanup_waits_for_in_flight_requests() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::sync::{Notify, oneshot};

        let started = Arc::new(Notify::new());
        let finished = Arc::new(AtomicBool::new(false));
        let finished_before_cleanup = Arc::new(AtomicBool::new(false));

        let slow = {
            let started = Arc::clone(&started);
            let finished = Arc::clone(&finished);
            move || {
                let started = Arc::clone(&started);
                let finished = Arc::clone(&finished);
                async move {
                    started.notify_one();
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    finished.store(true, Ordering::SeqCst);
                    "done"
                }
            }
        };
        let router = Router::new().route("/slow", get(slow));

        let (listener, addr) = listener().await;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let cleanup = {
            let finished = Arc::clone(&finished);
            let finished_before_cleanup = Arc::clone(&finished_before_cleanup);
            async move {
                finished_before_cleanup.store(finished.load(Ordering::SeqCst), Ordering::SeqCst);
            }
        };
        let server = tokio::spawn(serve_then_cleanup(
            listener,
            router,
            async move {
                stop_rx.await.ok();
            },
            cleanup,
            Duration::from_secs(5),
        ));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /slow HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        started.notified().await;
        stop_tx.send(()).unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        server.await.unwrap().unwrap();

        assert!(response.starts_with(b"HTTP/1.1 200"));
        assert!(finished_before_cleanup.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_stuck_cleanup_is_cut_off() {
        let (listener, _) = listener().await;

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve_then_cleanup(
                listener,
                Router::new(),
                async {},
                std::future::pending::<()>(),
                Duration::from_millis(50),
            ),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
    }
}
