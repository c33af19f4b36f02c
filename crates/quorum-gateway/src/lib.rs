//! # Quorum Gateway
//!
//! Authorizes an action only when a quorum of registered signers has signed
//! a well-defined digest of it.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Digest schemes, signer recovery, the quorum check, the registry
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Execution gateway and proof adapter
//! - **Adapters Layer** (`adapters/`): In-process call router and event sink
//!
//! ## Entry Points
//!
//! - `execute(target, payload, packed)`: verify `keccak256(target ‖ payload)` and forward
//! - `verify(digest, packed)`: check a packed batch against any digest
//! - `decode_and_verify(network, payload, proof)`: attest `keccak256(payload)`, return payload
//!
//! ## Security Notes
//!
//! - **Self-Administration**: registry mutators require a `SelfCall` token only the
//!   gateway can mint, after a quorum approves a call targeting the gateway itself
//! - **Malleability Prevention (EIP-2)**: Signatures with high S values never recover
//! - **Unbound Attestation**: adapter proofs cover the payload only, not a destination

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{BroadcastEventSink, InMemoryCallRouter};
pub use domain::admin::AdminCall;
pub use domain::capability::{CallOrigin, SelfCall};
pub use domain::digest::{adapter_digest, gateway_digest, DigestScheme};
pub use domain::ecdsa::{address_from_pubkey, keccak256, recover_signer};
pub use domain::entities::{
    pack_signatures, parse_packed_signatures, Address, EcdsaSignature, Hash, RegistryEvent,
    PACKED_SIGNATURE_LEN,
};
pub use domain::errors::GatewayError;
pub use domain::proof::Proof;
pub use domain::quorum::verify_quorum;
pub use domain::registry::SignerRegistry;
pub use ports::inbound::QuorumGatewayApi;
pub use ports::outbound::{CallForwarder, ForwardError, RegistryEventSink};
pub use service::QuorumGatewayService;
