//! # Gateway Container
//!
//! Builds the gateway service and its adapters from configuration.

pub mod config;

pub use config::{ConfigError, GatewayConfig};

use quorum_gateway::{BroadcastEventSink, InMemoryCallRouter, QuorumGatewayService};
use std::sync::Arc;
use tracing::info;

/// Gateway wired to the in-process router and broadcast event sink.
pub type RuntimeGateway = QuorumGatewayService<InMemoryCallRouter, BroadcastEventSink>;

/// Initialized runtime components.
pub struct GatewayContainer {
    /// Configuration the container was built from.
    pub config: GatewayConfig,
    /// The gateway service.
    pub gateway: Arc<RuntimeGateway>,
}

impl GatewayContainer {
    /// Validate `config` and build the gateway.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        let registry = config.registry()?;
        let gateway = QuorumGatewayService::new(
            config.gateway_address,
            registry,
            InMemoryCallRouter::new(),
            BroadcastEventSink::with_capacity(config.event_capacity),
        );
        info!(
            gateway = %hex::encode(config.gateway_address),
            "gateway container ready"
        );

        Ok(Self {
            config,
            gateway: Arc::new(gateway),
        })
    }
}
