//! Shared utilities for integration testing.

use std::time::Duration;
use tokio::net::TcpListener;

use antique_gateway::blockchain::{BlockchainClient, Wallet};
use antique_gateway::config::GatewayConfig;
use antique_gateway::http::{AppState, HttpServer};
use antique_gateway::lifecycle::Shutdown;
use antique_gateway::marketplace::MarketplaceGateway;

/// Well-known test private key (Anvil's first account).
pub const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Default Anvil deployment address; no contract actually lives there in
/// these tests, the RPC endpoint is unreachable by design.
pub const TEST_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Boot the real gateway on an ephemeral loopback port against an
/// unreachable RPC endpoint. Returns the base URL and the shutdown
/// coordinator (dropping it would stop the server).
pub async fn spawn_gateway() -> (String, Shutdown) {
    let mut config = GatewayConfig::default();
    config.blockchain.rpc_url = "http://127.0.0.1:1".to_string();
    config.blockchain.rpc_timeout_secs = 2;
    config.contract.address = TEST_CONTRACT.to_string();
    config.observability.metrics_enabled = false;
    config.timeouts.request_secs = 10;

    let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
    let from = wallet.address();
    let client = BlockchainClient::new(config.blockchain.clone(), wallet)
        .await
        .unwrap();
    let gateway = MarketplaceGateway::new(client.clone(), from, TEST_CONTRACT).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config, AppState { gateway, client });

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    // Give the server a moment to start accepting.
    tokio::time::sleep(Duration::from_millis(100)).await;

    (format!("http://{}", addr), shutdown)
}
