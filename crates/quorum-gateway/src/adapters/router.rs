//! # In-Memory Call Router
//!
//! `CallForwarder` that dispatches to handlers registered per address.
//! A call to an address with no handler succeeds with empty return data,
//! the same as calling an account that has no code.

use crate::domain::entities::Address;
use crate::ports::outbound::{CallForwarder, ForwardError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Handler invoked with the forwarded payload.
pub type CallHandler = Arc<dyn Fn(&[u8]) -> Result<Vec<u8>, ForwardError> + Send + Sync>;

/// Address-keyed call dispatcher.
#[derive(Default)]
pub struct InMemoryCallRouter {
    handlers: RwLock<HashMap<Address, CallHandler>>,
}

impl InMemoryCallRouter {
    /// Router with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or replace the handler for `target`.
    pub fn route<H>(&self, target: Address, handler: H)
    where
        H: Fn(&[u8]) -> Result<Vec<u8>, ForwardError> + Send + Sync + 'static,
    {
        self.handlers.write().insert(target, Arc::new(handler));
    }

    /// Whether `target` has a handler.
    pub fn is_routed(&self, target: &Address) -> bool {
        self.handlers.read().contains_key(target)
    }
}

impl CallForwarder for InMemoryCallRouter {
    fn forward(&self, target: Address, payload: &[u8]) -> Result<Vec<u8>, ForwardError> {
        // Clone the handler out so it runs without the map lock held.
        let handler = self.handlers.read().get(&target).cloned();
        match handler {
            Some(handler) => handler(payload),
            None => {
                trace!(callee = %hex::encode(target), "no handler routed; call is a no-op");
                Ok(Vec::new())
            }
        }
    }
}
