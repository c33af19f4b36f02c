//! # Quorum Check
//!
//! The one recovery/membership/duplicate loop both entry points share. The
//! caller decides which digest scheme produced `digest`.

use super::ecdsa::recover_signer;
use super::entities::{Address, EcdsaSignature, Hash};
use super::errors::GatewayError;
use super::registry::SignerRegistry;
use tracing::debug;

/// Verify that `signatures` form a quorum over `digest`.
///
/// Fails on the first violation:
/// 1. `InsufficientSignatures` if the batch is smaller than the threshold
/// 2. `UnauthorizedSigner` if a signature recovers to no member
/// 3. `DuplicateSigner` if an identity was already accepted in this batch
///
/// Extra valid signatures beyond the threshold are accepted. On success the
/// accepted identities are returned in batch order.
pub fn verify_quorum(
    registry: &SignerRegistry,
    digest: &Hash,
    signatures: &[EcdsaSignature],
) -> Result<Vec<Address>, GatewayError> {
    let required = registry.threshold();
    if signatures.len() < required {
        return Err(GatewayError::InsufficientSignatures {
            provided: signatures.len(),
            required,
        });
    }

    let mut accepted: Vec<Address> = Vec::with_capacity(signatures.len());

    for (index, signature) in signatures.iter().enumerate() {
        let signer = match recover_signer(digest, signature) {
            Some(signer) if registry.contains(&signer) => signer,
            recovered => {
                return Err(GatewayError::UnauthorizedSigner {
                    index,
                    signer: recovered,
                })
            }
        };

        // Pairwise against everything accepted so far; batches are quorum-sized.
        if accepted.iter().any(|prior| *prior == signer) {
            return Err(GatewayError::DuplicateSigner { index, signer });
        }

        debug!(index, signer = %hex::encode(signer), "signature accepted");
        accepted.push(signer);
    }

    Ok(accepted)
}
