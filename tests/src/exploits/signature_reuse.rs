//! # Signature Reuse
//!
//! Gateway approvals bind the target; adapter proofs bind only the payload.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use quorum_gateway::{AdminCall, GatewayError, Proof, QuorumGatewayApi};

    /// Approval for one contract cannot be redirected to another.
    #[test]
    fn approval_cannot_be_redirected() {
        let committee = Committee::new();
        let payload = b"withdraw(all)";
        let packed = approve_call(&VAULT, payload, &[&committee.a, &committee.b]);

        let err = committee
            .gateway
            .execute([0x01; 20], payload, &packed)
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidSignatures(_)));
    }

    /// An approval for a downstream call cannot be turned into a registry change.
    #[test]
    fn downstream_approval_cannot_target_gateway() {
        let committee = Committee::new();
        let payload = AdminCall::AddSigner(address(&outsider())).encode();
        let packed = approve_call(&VAULT, &payload, &[&committee.a, &committee.b]);

        assert!(committee.gateway.execute(GATEWAY, &payload, &packed).is_err());
        assert_eq!(committee.gateway.signers().len(), 3);
    }

    /// Gateway approvals do not verify as adapter proofs for the same payload.
    #[test]
    fn gateway_approval_is_not_an_attestation() {
        let committee = Committee::new();
        let payload = b"mint(100)";
        let packed = approve_call(&VAULT, payload, &[&committee.a, &committee.b]);
        let proof = Proof::new(quorum_gateway::parse_packed_signatures(&packed));

        assert!(matches!(
            committee.gateway.decode_and_verify(1, payload, &proof),
            Err(GatewayError::UnauthorizedSigner { .. })
        ));
    }

    /// Adapter proofs are not scoped to a network: the same proof verifies
    /// under any hint. Consumers must bind their own context into the payload.
    #[test]
    fn attestation_is_not_bound_to_network() {
        let committee = Committee::new();
        let payload = b"message".to_vec();
        let proof = attest(&payload, &[&committee.a, &committee.b]);

        for network in [1, 56, 137] {
            assert_eq!(
                committee.gateway.decode_and_verify(network, &payload, &proof),
                Ok(payload.clone())
            );
        }
    }

    /// Adapter proofs do not authorize forwarded calls.
    #[test]
    fn attestation_is_not_an_approval() {
        let committee = Committee::new();
        let payload = b"withdraw(all)";
        let proof = attest(payload, &[&committee.a, &committee.b]);
        let packed = quorum_gateway::pack_signatures(&proof.signatures);

        assert!(committee.gateway.execute(VAULT, payload, &packed).is_err());
    }
}
