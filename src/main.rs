//! Antique Marketplace Gateway binary.
//!
//! Usage: `antique-gateway [config.toml]`
//!
//! With no argument, configuration is built from defaults plus the
//! `GATEWAY_*` environment variables. The signing key always comes from
//! `GATEWAY_PRIVATE_KEY`.

use std::path::Path;
use tokio::net::TcpListener;

use antique_gateway::blockchain::{BlockchainClient, Wallet};
use antique_gateway::config;
use antique_gateway::http::{AppState, HttpServer};
use antique_gateway::lifecycle::Shutdown;
use antique_gateway::marketplace::MarketplaceGateway;
use antique_gateway::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => config::load_from_env()?,
    };

    observability::init_logging(&config.observability.log_level);

    tracing::info!("antique-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        rpc_url = %config.blockchain.rpc_url,
        contract = %config.contract.address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Single signing identity for all mutating calls.
    let wallet = Wallet::from_env()?;
    let from = wallet.address();

    let client = BlockchainClient::new(config.blockchain.clone(), wallet).await?;
    let gateway = MarketplaceGateway::new(client.clone(), from, &config.contract.address)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, AppState { gateway, client });
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
