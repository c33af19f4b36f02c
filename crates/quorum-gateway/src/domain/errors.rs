//! # Gateway Errors
//!
//! Error taxonomy shared by the registry, the quorum check and both entry
//! points. Every variant aborts the enclosing operation as a whole.

use super::entities::Address;
use thiserror::Error;

/// Errors surfaced by the quorum gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Construction-time invariant violation (empty signer list, bad threshold).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Administrative call that did not come through the gateway's own verified path
    #[error("Unauthorized: registry mutation must originate from the gateway itself")]
    Unauthorized,

    /// Signer is already registered
    #[error("Signer 0x{} is already a member", hex::encode(.0))]
    AlreadyMember(Address),

    /// Signer is not registered
    #[error("Signer 0x{} is not a member", hex::encode(.0))]
    NotMember(Address),

    /// Batch is smaller than the threshold
    #[error("Insufficient signatures: {provided} provided, {required} required")]
    InsufficientSignatures {
        /// Signatures in the batch
        provided: usize,
        /// Current threshold
        required: usize,
    },

    /// Recovered identity is not a registered signer.
    ///
    /// `signer` is `None` when the signature did not recover to any identity.
    #[error("Unauthorized signer at position {index}: {}", fmt_signer(.signer))]
    UnauthorizedSigner {
        /// Position of the offending signature in the batch
        index: usize,
        /// Recovered identity, if any
        signer: Option<Address>,
    },

    /// The same identity signed twice within one batch
    #[error("Duplicate signer 0x{} at position {index}", hex::encode(.signer))]
    DuplicateSigner {
        /// Position of the repeated signature in the batch
        index: usize,
        /// The repeated identity
        signer: Address,
    },

    /// Aggregate verification failure at the execution gateway
    #[error("Invalid signatures: {0}")]
    InvalidSignatures(#[source] Box<GatewayError>),

    /// Empty payload or empty proof
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    /// Self-targeted payload does not name a known administrative call
    #[error("Unsupported call selector 0x{}", hex::encode(.0))]
    UnsupportedCall([u8; 4]),

    /// The forwarded downstream call failed; `data` is its diagnostic payload verbatim
    #[error("Forwarded call to 0x{} failed ({} bytes of return data)", hex::encode(.target), .data.len())]
    ForwardedCallFailed {
        /// Call destination
        target: Address,
        /// Diagnostic data returned by the failing call
        data: Vec<u8>,
    },
}

fn fmt_signer(signer: &Option<Address>) -> String {
    match signer {
        Some(address) => format!("0x{}", hex::encode(address)),
        None => "unrecoverable signature".to_string(),
    }
}

impl GatewayError {
    /// The specific reason behind an aggregate failure.
    ///
    /// Returns `self` for errors that are not wrapped.
    pub fn root_cause(&self) -> &GatewayError {
        match self {
            GatewayError::InvalidSignatures(inner) => inner.root_cause(),
            other => other,
        }
    }
}
