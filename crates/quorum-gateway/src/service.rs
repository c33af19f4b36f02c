//! # Quorum Gateway Service
//!
//! Application service layer that implements the `QuorumGatewayApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`QuorumGatewayApi`)
//! - Uses the outbound ports (`CallForwarder`, `RegistryEventSink`)
//! - Delegates digest construction and the quorum check to the domain layer
//!
//! ## Serialization
//!
//! The registry sits behind one mutex. Quorum verification and any
//! self-administration it authorizes run inside a single critical section.
//! The lock is released before an external call is forwarded and before
//! registry events are published, so downstream handlers and event
//! subscribers may call back into the gateway.
//!
//! A signed request is checked against the registry as it is when the request
//! is processed, not as it was when the request was signed.

use crate::domain::admin::AdminCall;
use crate::domain::capability::{CallOrigin, SelfCall};
use crate::domain::digest::DigestScheme;
use crate::domain::entities::{parse_packed_signatures, Address, Hash, RegistryEvent};
use crate::domain::errors::GatewayError;
use crate::domain::proof::Proof;
use crate::domain::quorum::verify_quorum;
use crate::domain::registry::SignerRegistry;
use crate::ports::inbound::QuorumGatewayApi;
use crate::ports::outbound::{CallForwarder, RegistryEventSink};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Quorum Gateway Service.
///
/// Holds the signer registry and the gateway's own address, which is the
/// target a quorum uses to administer the registry.
pub struct QuorumGatewayService<F: CallForwarder, E: RegistryEventSink> {
    address: Address,
    registry: Mutex<SignerRegistry>,
    forwarder: F,
    events: E,
}

impl<F: CallForwarder, E: RegistryEventSink> QuorumGatewayService<F, E> {
    /// Create a new gateway service.
    ///
    /// # Arguments
    /// * `address` - The gateway's own identity; calls targeting it are administrative
    /// * `registry` - Initial signers and threshold
    /// * `forwarder` - Delivers approved calls to other targets
    /// * `events` - Receives signer added/removed notifications
    pub fn new(address: Address, registry: SignerRegistry, forwarder: F, events: E) -> Self {
        info!(
            gateway = %hex::encode(address),
            signers = registry.len(),
            threshold = registry.threshold(),
            "quorum gateway initialized"
        );
        Self {
            address,
            registry: Mutex::new(registry),
            forwarder,
            events,
        }
    }

    /// The gateway's own address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Whether the current threshold can still be met by the current members.
    pub fn is_quorum_reachable(&self) -> bool {
        self.registry.lock().is_quorum_reachable()
    }

    /// The outbound call forwarder.
    pub fn forwarder(&self) -> &F {
        &self.forwarder
    }

    /// The registry event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Copy of the current registry state.
    pub fn registry_snapshot(&self) -> SignerRegistry {
        self.registry.lock().clone()
    }

    /// Apply an administrative call to an already-locked registry.
    ///
    /// Returns the events to publish once the registry lock is released.
    fn apply_admin(
        registry: &mut SignerRegistry,
        gate: &SelfCall,
        call: AdminCall,
    ) -> Result<Vec<RegistryEvent>, GatewayError> {
        let events = match call {
            AdminCall::AddSigner(signer) => {
                registry.add(gate, signer)?;
                vec![RegistryEvent::SignerAdded { signer }]
            }
            AdminCall::RemoveSigner(signer) => {
                registry.remove(gate, signer)?;
                vec![RegistryEvent::SignerRemoved { signer }]
            }
            AdminCall::SwapSigner { old, new } => {
                registry.swap(gate, old, new)?;
                vec![
                    RegistryEvent::SignerRemoved { signer: old },
                    RegistryEvent::SignerAdded { signer: new },
                ]
            }
        };
        Ok(events)
    }

    fn publish_all(&self, events: Vec<RegistryEvent>) {
        for event in events {
            self.events.publish(event);
        }
    }

    /// Administrative entry used by the public mutators.
    fn administer(&self, origin: &CallOrigin, call: AdminCall) -> Result<(), GatewayError> {
        let gate = origin.authorize().inspect_err(|_| {
            warn!(?call, "administrative call refused: not a self-call");
        })?;
        let events = {
            let mut registry = self.registry.lock();
            Self::apply_admin(&mut registry, gate, call)?
        };
        self.publish_all(events);
        Ok(())
    }
}

impl<F: CallForwarder, E: RegistryEventSink> QuorumGatewayApi for QuorumGatewayService<F, E> {
    fn execute(
        &self,
        target: Address,
        payload: &[u8],
        packed_signatures: &[u8],
    ) -> Result<(), GatewayError> {
        let signatures = parse_packed_signatures(packed_signatures);
        let digest = DigestScheme::Gateway { target }.digest(payload);

        let mut registry = self.registry.lock();
        let approvers = verify_quorum(&registry, &digest, &signatures).map_err(|reason| {
            warn!(callee = %hex::encode(target), %reason, "execution rejected");
            GatewayError::InvalidSignatures(Box::new(reason))
        })?;

        if target == self.address {
            let call = AdminCall::decode(payload)?;
            debug!(?call, approvals = approvers.len(), "applying self-call");
            let origin = CallOrigin::Gateway(SelfCall::new());
            let gate = origin.authorize()?;
            let events = Self::apply_admin(&mut registry, gate, call)?;
            drop(registry);
            self.publish_all(events);
            return Ok(());
        }
        drop(registry);

        let returned = self.forwarder.forward(target, payload).map_err(|err| {
            warn!(callee = %hex::encode(target), reason = %err.reason, "forwarded call failed");
            GatewayError::ForwardedCallFailed {
                target,
                data: err.data,
            }
        })?;

        info!(
            callee = %hex::encode(target),
            approvals = approvers.len(),
            returned = returned.len(),
            "call executed"
        );
        Ok(())
    }

    fn verify(&self, digest: &Hash, packed_signatures: &[u8]) -> Result<bool, GatewayError> {
        let signatures = parse_packed_signatures(packed_signatures);
        let registry = self.registry.lock();
        verify_quorum(&registry, digest, &signatures)?;
        Ok(true)
    }

    fn decode_and_verify(
        &self,
        network_hint: u64,
        payload: &[u8],
        proof: &Proof,
    ) -> Result<Vec<u8>, GatewayError> {
        if payload.is_empty() {
            return Err(GatewayError::InvalidInput("empty payload"));
        }
        if proof.signatures.is_empty() {
            return Err(GatewayError::InvalidInput("empty proof"));
        }

        let digest = DigestScheme::Adapter.digest(payload);
        let registry = self.registry.lock();
        let approvers = verify_quorum(&registry, &digest, &proof.signatures)?;

        debug!(
            network_hint,
            network_id = ?proof.network_id,
            approvals = approvers.len(),
            "payload attested"
        );
        Ok(payload.to_vec())
    }

    fn signers(&self) -> Vec<Address> {
        self.registry.lock().list()
    }

    fn threshold(&self) -> usize {
        self.registry.lock().threshold()
    }

    fn add_signer(&self, origin: &CallOrigin, signer: Address) -> Result<(), GatewayError> {
        self.administer(origin, AdminCall::AddSigner(signer))
    }

    fn remove_signer(&self, origin: &CallOrigin, signer: Address) -> Result<(), GatewayError> {
        self.administer(origin, AdminCall::RemoveSigner(signer))
    }

    fn swap_signer(
        &self,
        origin: &CallOrigin,
        old: Address,
        new: Address,
    ) -> Result<(), GatewayError> {
        self.administer(origin, AdminCall::SwapSigner { old, new })
    }
}

// =============================================================================
// TESTS
// =============================================================================
