//! # Quorum Gateway Runtime
//!
//! Host process around the quorum gateway library.
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and gateway construction
//! - `handlers/` - Wire requests and the single-writer request processor
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then `QG_*` environment variables)
//! 2. Install logging (`RUST_LOG` overrides the configured level)
//! 3. Validate the signer set and threshold, build the gateway
//! 4. Start the registry event logger and the request processor
//! 5. Serve newline-delimited JSON on stdin/stdout until EOF

pub mod container;
pub mod handlers;

use anyhow::Result;
use quorum_gateway::RegistryEvent;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub use container::{ConfigError, GatewayConfig, GatewayContainer, RuntimeGateway};
pub use handlers::{spawn_processor, GatewayHandle, GatewayRequest};

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout carries protocol responses.
pub fn init_logging(config: &GatewayConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

/// Log registry changes until the event channel closes.
///
/// A lagging receiver skips the dropped events and keeps going.
///
/// # Returns
/// The number of events logged.
pub async fn log_registry_events(mut events: broadcast::Receiver<RegistryEvent>) -> u64 {
    let mut logged = 0;
    loop {
        match events.recv().await {
            Ok(event) => {
                info!(?event, "registry changed");
                logged += 1;
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event logger lagged; registry events dropped");
            }
            Err(RecvError::Closed) => return logged,
        }
    }
}
