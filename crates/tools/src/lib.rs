//! # Lumen Tools
//!
//! Exposes the reservation API as tools for language-model clients over a
//! stdio JSON-RPC transport. Stdout carries protocol frames only; logs go to
//! stderr.

pub mod client;
pub mod config;
pub mod server;
pub mod tools;

use eyre::Result;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

use crate::{client::HttpApiClient, config::ToolsConfig, server::ToolServer};

/// Serves tools on stdin/stdout until stdin closes.
pub async fn run(config: ToolsConfig) -> Result<()> {
    info!("Starting {} against {}", server::SERVER_NAME, config.api_url);

    let server = ToolServer::new(HttpApiClient::from_config(&config));
    server.serve(BufReader::new(stdin()), stdout()).await
}
