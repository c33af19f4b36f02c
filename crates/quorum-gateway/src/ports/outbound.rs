//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the gateway calls out to.

use crate::domain::entities::{Address, RegistryEvent};
use thiserror::Error;

/// Failure of a forwarded call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Forwarded call reverted: {reason}")]
pub struct ForwardError {
    /// Human-readable cause
    pub reason: String,
    /// Diagnostic data returned by the callee, passed through verbatim
    pub data: Vec<u8>,
}

impl ForwardError {
    /// Failure carrying raw return data.
    pub fn revert(reason: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            reason: reason.into(),
            data,
        }
    }
}

/// Delivers an approved call to its target.
pub trait CallForwarder: Send + Sync {
    /// Invoke `target` with `payload`.
    ///
    /// # Returns
    /// The callee's return data on success.
    fn forward(&self, target: Address, payload: &[u8]) -> Result<Vec<u8>, ForwardError>;
}

/// Receives registry change notifications.
pub trait RegistryEventSink: Send + Sync {
    /// Publish an event.
    ///
    /// Called after the registry lock is released, so a subscriber may call
    /// back into the gateway.
    ///
    /// # Returns
    /// The number of active subscribers that received the event.
    fn publish(&self, event: RegistryEvent) -> usize;
}
