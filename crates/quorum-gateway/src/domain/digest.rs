//! # Digest Schemes
//!
//! Each entry point authenticates a different byte layout. The two schemes
//! are kept as separate named strategies so one is never mistaken for the
//! other.

use super::ecdsa::keccak256;
use super::entities::{Address, Hash};

/// How the message digest is derived from an action's inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigestScheme {
    /// `keccak256(target ‖ payload)`: binds destination and call payload.
    Gateway {
        /// Call destination
        target: Address,
    },
    /// `keccak256(payload)`: binds the payload only, no destination.
    Adapter,
}

impl DigestScheme {
    /// Compute the digest signers must sign for `payload`.
    pub fn digest(&self, payload: &[u8]) -> Hash {
        match self {
            DigestScheme::Gateway { target } => gateway_digest(target, payload),
            DigestScheme::Adapter => adapter_digest(payload),
        }
    }
}

/// Digest authorizing a forwarded call to `target` with `payload`.
pub fn gateway_digest(target: &Address, payload: &[u8]) -> Hash {
    let mut message = Vec::with_capacity(target.len() + payload.len());
    message.extend_from_slice(target);
    message.extend_from_slice(payload);
    keccak256(&message)
}

/// Digest attesting to `payload` alone.
pub fn adapter_digest(payload: &[u8]) -> Hash {
    keccak256(payload)
}
