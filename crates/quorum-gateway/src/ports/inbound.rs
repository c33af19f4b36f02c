//! # Inbound Ports (Driving Ports / API)
//!
//! The externally callable surface of the gateway.

use crate::domain::capability::CallOrigin;
use crate::domain::entities::{Address, Hash};
use crate::domain::errors::GatewayError;
use crate::domain::proof::Proof;

/// Quorum Gateway API.
///
/// Implementations must be thread-safe (`Send + Sync`) and must process each
/// call as one serialized unit with respect to the signer registry.
pub trait QuorumGatewayApi: Send + Sync {
    // =========================================================================
    // Entry Points
    // =========================================================================

    /// Verify a quorum over `target ‖ payload` and forward the call.
    ///
    /// `packed_signatures` is a flat buffer of 65-byte `r ‖ s ‖ v` records.
    /// When `target` is the gateway's own address the payload is applied as
    /// an administrative call.
    ///
    /// # Errors
    /// - `InvalidSignatures` wrapping the specific quorum failure
    /// - the administrative call's own error for self-targeted payloads
    /// - `ForwardedCallFailed` when the downstream call fails
    fn execute(
        &self,
        target: Address,
        payload: &[u8],
        packed_signatures: &[u8],
    ) -> Result<(), GatewayError>;

    /// Check a packed batch against an arbitrary digest.
    fn verify(&self, digest: &Hash, packed_signatures: &[u8]) -> Result<bool, GatewayError>;

    /// Attest to `payload` using a structured proof and return it unchanged.
    ///
    /// The digest covers `payload` only. `network_hint` and any proof
    /// metadata are not bound, so a proof is not scoped to one consumer.
    fn decode_and_verify(
        &self,
        network_hint: u64,
        payload: &[u8],
        proof: &Proof,
    ) -> Result<Vec<u8>, GatewayError>;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Current signers. Order is unspecified.
    fn signers(&self) -> Vec<Address>;

    /// Current threshold.
    fn threshold(&self) -> usize;

    // =========================================================================
    // Administration (self-call only)
    // =========================================================================

    /// Add a signer. Fails with `Unauthorized` unless `origin` is the gateway.
    fn add_signer(&self, origin: &CallOrigin, signer: Address) -> Result<(), GatewayError>;

    /// Remove a signer. Fails with `Unauthorized` unless `origin` is the gateway.
    fn remove_signer(&self, origin: &CallOrigin, signer: Address) -> Result<(), GatewayError>;

    /// Swap a signer. Fails with `Unauthorized` unless `origin` is the gateway.
    fn swap_signer(
        &self,
        origin: &CallOrigin,
        old: Address,
        new: Address,
    ) -> Result<(), GatewayError>;
}
