use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use journey_ranker::config::ServerConfig;
use journey_ranker::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "journey_ranker=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let addr = config.addr;

    let state = AppState::from_config(config)?;
    info!(
        algorithms = ?state.registry.names(),
        default = %state.config.default_algorithm,
        stop_ratio = %state.config.stop_ratio,
        "strategy registry ready"
    );

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Journey ranker listening on http://{addr}");
    info!("  GET  /health                      - Health check");
    info!("  GET  /algorithms                  - Registered algorithms");
    info!("  POST /journeyplanner/desirability - Rank journeys");

    axum::serve(listener, app).await?;
    Ok(())
}
