//! # Signer Registry
//!
//! The authorized signer set and the quorum threshold.
//!
//! Mutations do not re-check `threshold <= |signers|`. After enough removals
//! the threshold can exceed the member count, at which point no batch can
//! reach quorum. This is kept as-is and reported through
//! [`SignerRegistry::is_quorum_reachable`] and a `warn!` on the removal path.

use super::capability::SelfCall;
use super::entities::Address;
use super::errors::GatewayError;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Authorized signer identities plus the quorum threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerRegistry {
    signers: BTreeSet<Address>,
    threshold: usize,
}

impl SignerRegistry {
    /// Create a registry.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `signers` is empty, `threshold` is zero, or
    /// `threshold` exceeds the number of signers.
    pub fn new(signers: &[Address], threshold: usize) -> Result<Self, GatewayError> {
        if signers.is_empty() {
            return Err(GatewayError::InvalidConfiguration(
                "signer list is empty".to_string(),
            ));
        }
        if threshold == 0 {
            return Err(GatewayError::InvalidConfiguration(
                "threshold must be at least 1".to_string(),
            ));
        }
        if threshold > signers.len() {
            return Err(GatewayError::InvalidConfiguration(format!(
                "threshold {} exceeds {} signers",
                threshold,
                signers.len()
            )));
        }

        Ok(Self {
            signers: signers.iter().copied().collect(),
            threshold,
        })
    }

    /// Current signers. Order is not part of the contract.
    pub fn list(&self) -> Vec<Address> {
        self.signers.iter().copied().collect()
    }

    /// Membership test.
    pub fn contains(&self, signer: &Address) -> bool {
        self.signers.contains(signer)
    }

    /// Current quorum threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of registered signers.
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Whether the registry has no signers left.
    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Whether enough members remain for any batch to reach the threshold.
    pub fn is_quorum_reachable(&self) -> bool {
        self.threshold <= self.signers.len()
    }

    /// Add a signer.
    pub(crate) fn add(&mut self, _gate: &SelfCall, signer: Address) -> Result<(), GatewayError> {
        if !self.signers.insert(signer) {
            return Err(GatewayError::AlreadyMember(signer));
        }
        info!(signer = %hex::encode(signer), "signer added");
        Ok(())
    }

    /// Remove a signer.
    pub(crate) fn remove(&mut self, _gate: &SelfCall, signer: Address) -> Result<(), GatewayError> {
        if !self.signers.remove(&signer) {
            return Err(GatewayError::NotMember(signer));
        }
        info!(signer = %hex::encode(signer), "signer removed");
        self.warn_if_unreachable();
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// `new` is inserted unconditionally; if it is already a member the swap
    /// simply removes `old`.
    pub(crate) fn swap(
        &mut self,
        _gate: &SelfCall,
        old: Address,
        new: Address,
    ) -> Result<(), GatewayError> {
        if !self.signers.remove(&old) {
            return Err(GatewayError::NotMember(old));
        }
        self.signers.insert(new);
        info!(
            old = %hex::encode(old),
            new = %hex::encode(new),
            "signer swapped"
        );
        self.warn_if_unreachable();
        Ok(())
    }

    fn warn_if_unreachable(&self) {
        if !self.is_quorum_reachable() {
            warn!(
                threshold = self.threshold,
                signers = self.signers.len(),
                "threshold exceeds signer count; quorum is unreachable"
            );
        }
    }
}
