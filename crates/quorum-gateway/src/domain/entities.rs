//! # Domain Entities
//!
//! Identities, digests and the signature triple, plus the packed 65-byte
//! signature codec used by the execution gateway.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use tracing::debug;

/// Ethereum-style address derived from public key (last 20 bytes of keccak256(pubkey))
pub type Address = [u8; 20];

/// 32-byte message digest
pub type Hash = [u8; 32];

/// Length of one packed signature record: r (32) ‖ s (32) ‖ v (1)
pub const PACKED_SIGNATURE_LEN: usize = 65;

/// ECDSA signature on the secp256k1 curve.
///
/// Both the packed and the structured encodings decode to this triple.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes, big-endian)
    #[serde_as(as = "Hex")]
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian)
    #[serde_as(as = "Hex")]
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    #[serde(alias = "recovery_id", alias = "recoveryId")]
    pub v: u8,
}

impl EcdsaSignature {
    /// Decode one packed record.
    pub fn from_packed(record: &[u8; PACKED_SIGNATURE_LEN]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&record[..32]);
        s.copy_from_slice(&record[32..64]);
        Self { r, s, v: record[64] }
    }

    /// Encode as one packed record.
    pub fn to_packed(&self) -> [u8; PACKED_SIGNATURE_LEN] {
        let mut record = [0u8; PACKED_SIGNATURE_LEN];
        record[..32].copy_from_slice(&self.r);
        record[32..64].copy_from_slice(&self.s);
        record[64] = self.v;
        record
    }
}

/// Parse a flat buffer of packed signature records.
///
/// Yields `floor(len / 65)` signatures. Trailing bytes that do not form a
/// full record are ignored.
pub fn parse_packed_signatures(bytes: &[u8]) -> Vec<EcdsaSignature> {
    let chunks = bytes.chunks_exact(PACKED_SIGNATURE_LEN);
    let trailing = chunks.remainder().len();
    if trailing != 0 {
        debug!(trailing, "ignoring trailing bytes after last packed signature");
    }

    chunks
        .map(|chunk| {
            let mut record = [0u8; PACKED_SIGNATURE_LEN];
            record.copy_from_slice(chunk);
            EcdsaSignature::from_packed(&record)
        })
        .collect()
}

/// Concatenate signatures into the packed wire form.
pub fn pack_signatures(signatures: &[EcdsaSignature]) -> Vec<u8> {
    signatures
        .iter()
        .flat_map(|signature| signature.to_packed())
        .collect()
}

/// Registry change notification.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A signer joined the registry
    SignerAdded {
        /// The new member
        #[serde_as(as = "Hex")]
        signer: Address,
    },
    /// A signer left the registry
    SignerRemoved {
        /// The former member
        #[serde_as(as = "Hex")]
        signer: Address,
    },
}
