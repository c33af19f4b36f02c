//! # Stale Approvals
//!
//! A signed request is judged against the registry at processing time. A
//! registry change between signing and submission can invalidate it.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use quorum_gateway::{AdminCall, GatewayError, QuorumGatewayApi};

    #[test]
    fn approval_from_removed_signer_fails_later() {
        let committee = Committee::new();

        // B and C approve a payout while both are members
        let payout = approve_call(&VAULT, b"payout", &[&committee.b, &committee.c]);

        // A and B then remove C
        let removal = AdminCall::RemoveSigner(address(&committee.c)).encode();
        let packed = approve_call(&GATEWAY, &removal, &[&committee.a, &committee.b]);
        committee.gateway.execute(GATEWAY, &removal, &packed).unwrap();

        let err = committee
            .gateway
            .execute(VAULT, b"payout", &payout)
            .unwrap_err();
        assert_eq!(
            err.root_cause(),
            &GatewayError::UnauthorizedSigner {
                index: 1,
                signer: Some(address(&committee.c))
            }
        );
    }

    #[test]
    fn approvals_are_replayable_without_nonces() {
        let committee = Committee::new();
        let packed = approve_call(&VAULT, b"ping", &[&committee.a, &committee.b]);

        // No nonce is bound into the digest; each submission is accepted
        assert_eq!(committee.gateway.execute(VAULT, b"ping", &packed), Ok(()));
        assert_eq!(committee.gateway.execute(VAULT, b"ping", &packed), Ok(()));
    }

    #[test]
    fn replayed_self_call_fails_on_precondition() {
        let committee = Committee::new();
        let d = address(&outsider());
        let payload = AdminCall::AddSigner(d).encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a, &committee.b]);

        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        assert_eq!(
            committee.gateway.execute(GATEWAY, &payload, &packed),
            Err(GatewayError::AlreadyMember(d))
        );
    }
}
