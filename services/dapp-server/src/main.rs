mod config;
mod networks;
mod shell;

use axum::{
    Json, Router,
    http::StatusCode,
    response::Redirect,
    routing::get,
};
use config::ServerConfig;
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    error: String,
}

pub(crate) type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").is_file() {
        warn!(
            "no index.html in {}; page requests will 404 until the front-end is built",
            config.dist_dir.display()
        );
    }

    let app = app(&config);

    info!(
        "dapp-server listening on {} (base {}, dist {})",
        config.bind_addr,
        config.base_path,
        config.dist_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the HTTP surface: JSON endpoints at the root and the compiled
/// front-end under the base path, where any unknown path falls back to the
/// page shell so the client router can take over.
pub(crate) fn app(config: &ServerConfig) -> Router {
    let page = shell::page(shell::load(&config.dist_dir, &config.base_path));
    let spa = Router::new()
        .route("/", page.clone())
        .route("/index.html", page.clone())
        .fallback_service(
            ServeDir::new(&config.dist_dir)
                .append_index_html_on_directories(false)
                .fallback(page),
        );

    let router = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/networks", get(networks::list_networks))
        .route("/networks/{key}", get(networks::get_network));

    let router = if config.base_path == "/" {
        router.merge(spa)
    } else {
        let base = config.base_path.clone();
        router
            .route(
                "/",
                get(move || {
                    let target = base.clone();
                    async move { Redirect::permanent(&target) }
                }),
            )
            .nest(config.base_path.trim_end_matches('/'), spa)
    };

    router.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", err);
    }
    info!("shutting down");
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "dapp-server",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "dapp-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub(crate) fn not_found(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}
