use std::{net::SocketAddr, path::PathBuf};

use axum::{Router, routing::get};
use log::info;
use meetup_server_domain::event::ArcEventService;
use tower_http::services::ServeDir;

use crate::html::ASSETS_ROUTE;

mod detail;
mod list;

#[derive(Clone)]
pub struct AppState {
    pub event_service: ArcEventService,
}

pub fn router(state: AppState, assets_dir: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/", get(list::list_page))
        .route("/events/{id}", get(detail::detail_page))
        .route("/health", get(health))
        .nest_service(ASSETS_ROUTE, ServeDir::new(assets_dir.into()))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

pub async fn run(
    state: AppState,
    addr: SocketAddr,
    assets_dir: PathBuf,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Web server listening on {}", addr);
    axum::serve(listener, router(state, assets_dir))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Web server shut down gracefully");
    Ok(())
}
