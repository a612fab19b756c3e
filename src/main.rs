use std::{process::ExitCode, sync::Arc};

use log::{error, info};
use meetup_events_http::HttpEventRepository;
use meetup_server_api::AppState;
use meetup_server_domain::event::{ArcEventRepository, ArcEventService, EventServiceImpl};

mod config;
mod logs;

use config::Config;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = logs::init_logger() {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let repository = match HttpEventRepository::new(&config.events_api_url, config.upstream_timeout)
    {
        Ok(repository) => repository,
        Err(e) => {
            error!("Failed to create events client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let event_repository: ArcEventRepository = Arc::new(Box::new(repository));
    let event_service: ArcEventService =
        Arc::new(Box::new(EventServiceImpl::new(event_repository)));

    info!(
        "Starting application against events service {}",
        config.events_api_url
    );

    let state = AppState { event_service };
    if let Err(e) = meetup_server_api::run(
        state,
        config.http_addr,
        config.assets_dir.clone(),
        shutdown_signal(),
    )
    .await
    {
        error!("Web server failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
