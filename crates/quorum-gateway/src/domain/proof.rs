//! # Attestation Proof
//!
//! Structured form of a signature batch for cross-chain attestation. Fields
//! other than `signatures` are accepted and carried, but they are not part of
//! the signed digest.

use super::entities::EcdsaSignature;
use super::errors::GatewayError;
use serde::{Deserialize, Serialize};

/// Quorum signatures over a caller-supplied payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Signature triples, in submission order
    pub signatures: Vec<EcdsaSignature>,
    /// Originating network, if the relayer supplies one. Not bound by the digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u64>,
}

impl Proof {
    /// Proof without network metadata.
    pub fn new(signatures: Vec<EcdsaSignature>) -> Self {
        Self {
            signatures,
            network_id: None,
        }
    }

    /// Decode the self-describing JSON encoding.
    ///
    /// Unknown fields are ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Self, GatewayError> {
        serde_json::from_slice(bytes).map_err(|_| GatewayError::InvalidInput("malformed proof"))
    }
}
