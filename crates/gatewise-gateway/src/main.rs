//! Gatewise gateway entry point.
//!
//! Loads [`ServiceConfig`] (see [`gatewise_gateway::config`] for the file and
//! environment variables it reads) and starts the HTTP service.

use gatewise_gateway::config::ServiceConfig;
use gatewise_gateway::server::GateServer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialise structured logging.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gatewise_gateway=info,gatewise_foundation=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServiceConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        port = config.port,
        routes_url = %config.provider.routes_url,
        call_timeout_ms = config.ranking.call_timeout_ms,
        "gatewise configuration loaded"
    );

    if let Err(e) = GateServer::new(config).start().await {
        error!(error = %e, "gateway stopped");
        std::process::exit(1);
    }
}
