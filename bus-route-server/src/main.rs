use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bus_route_server::config::ServerConfig;
use bus_route_server::service::RouteService;
use bus_route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Loading is CPU bound and parallel, keep it off the async workers
    let load_config = config.clone();
    let routes = match tokio::task::spawn_blocking(move || RouteService::from_config(&load_config))
        .await
    {
        Ok(Ok(routes)) => routes,
        Ok(Err(e)) => {
            error!(error = %e, "failed to load route data");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "route loading task failed");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(routes));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "bus route server listening");
    info!("  GET /health                             - Health check");
    info!("  GET /api/stats                          - Route and station counts");
    info!("  GET /api/direct?dep_sid=<id>&arr_sid=<id> - Direct connection query");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for shutdown signal");
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
