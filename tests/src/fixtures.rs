//! # Test Fixtures
//!
//! A gateway with three fresh signers (A, B, C) and threshold 2, wired to the
//! in-memory router and broadcast sink.

use k256::ecdsa::SigningKey;
use quorum_gateway::domain::ecdsa::test_helpers::{generate_key, sign, signer_address};
use quorum_gateway::{
    adapter_digest, gateway_digest, pack_signatures, Address, BroadcastEventSink, EcdsaSignature,
    Hash, InMemoryCallRouter, Proof, QuorumGatewayService, SignerRegistry,
};
use std::sync::Arc;

/// The gateway's own address in every fixture.
pub const GATEWAY: Address = [0x6A; 20];

/// A downstream contract address.
pub const VAULT: Address = [0x7B; 20];

/// Gateway type used by the suite.
pub type TestGateway = QuorumGatewayService<InMemoryCallRouter, BroadcastEventSink>;

/// Signers A, B, C and the gateway built over them.
pub struct Committee {
    pub a: SigningKey,
    pub b: SigningKey,
    pub c: SigningKey,
    pub gateway: Arc<TestGateway>,
}

impl Committee {
    /// Three signers, threshold 2.
    pub fn new() -> Self {
        Self::with_threshold(2)
    }

    /// Three signers, custom threshold.
    pub fn with_threshold(threshold: usize) -> Self {
        let (a, b, c) = (generate_key(), generate_key(), generate_key());
        let members = [address(&a), address(&b), address(&c)];
        let gateway = QuorumGatewayService::new(
            GATEWAY,
            SignerRegistry::new(&members, threshold).expect("valid committee"),
            InMemoryCallRouter::new(),
            BroadcastEventSink::new(),
        );

        Self {
            a,
            b,
            c,
            gateway: Arc::new(gateway),
        }
    }
}

impl Default for Committee {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of a key.
pub fn address(key: &SigningKey) -> Address {
    signer_address(key)
}

/// A key outside any committee.
pub fn outsider() -> SigningKey {
    generate_key()
}

/// Sign `digest` with each key, in order.
pub fn signatures(digest: &Hash, keys: &[&SigningKey]) -> Vec<EcdsaSignature> {
    keys.iter().map(|key| sign(digest, key)).collect()
}

/// Packed approval of a forwarded call.
pub fn approve_call(target: &Address, payload: &[u8], keys: &[&SigningKey]) -> Vec<u8> {
    pack_signatures(&signatures(&gateway_digest(target, payload), keys))
}

/// Structured proof attesting `payload`.
pub fn attest(payload: &[u8], keys: &[&SigningKey]) -> Proof {
    Proof::new(signatures(&adapter_digest(payload), keys))
}
