//! # Quorum Gateway Runtime
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use gateway_runtime::handlers::processor::DEFAULT_QUEUE_CAPACITY;
use gateway_runtime::handlers::requests::malformed_request;
use gateway_runtime::{
    init_logging, log_registry_events, spawn_processor, GatewayConfig, GatewayContainer,
    GatewayRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env().context("loading configuration")?;
    init_logging(&config)?;

    let container = GatewayContainer::new(config).context("invalid gateway configuration")?;
    let gateway = Arc::clone(&container.gateway);

    // Registry change notifications
    tokio::spawn(log_registry_events(gateway.events().subscribe()));

    let (handle, processor) = spawn_processor(gateway, DEFAULT_QUEUE_CAPACITY);
    info!("serving requests on stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<GatewayRequest>(&line) {
            Ok(request) => handle.submit(request).await?,
            Err(e) => {
                warn!(error = %e, "malformed request");
                malformed_request(&e.to_string())
            }
        };

        stdout.write_all(response.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    drop(handle);
    processor.await?;
    info!("stdin closed; shutting down");
    Ok(())
}
