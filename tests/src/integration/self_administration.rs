//! # Self-Administration Flows
//!
//! The registry changes only through quorum-approved calls whose target is
//! the gateway itself.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use quorum_gateway::{AdminCall, CallOrigin, GatewayError, QuorumGatewayApi, RegistryEvent};
    use std::collections::BTreeSet;

    fn set(addresses: &[[u8; 20]]) -> BTreeSet<[u8; 20]> {
        addresses.iter().copied().collect()
    }

    /// Target = self, payload = addSigner(D), signed by A and B.
    #[tokio::test]
    async fn scenario_c_add_signer_via_gateway() {
        let committee = Committee::new();
        let mut events = committee.gateway.events().subscribe();
        let d = address(&outsider());

        let payload = AdminCall::AddSigner(d).encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a, &committee.b]);
        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        assert_eq!(
            set(&committee.gateway.signers()),
            set(&[
                address(&committee.a),
                address(&committee.b),
                address(&committee.c),
                d
            ])
        );
        assert_eq!(
            events.recv().await.unwrap(),
            RegistryEvent::SignerAdded { signer: d }
        );
    }

    #[test]
    fn new_signer_counts_toward_quorum() {
        let committee = Committee::new();
        let d = outsider();

        let payload = AdminCall::AddSigner(address(&d)).encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a, &committee.c]);
        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        let digest = [0x44; 32];
        let batch = quorum_gateway::pack_signatures(&signatures(&digest, &[&d, &committee.b]));
        assert_eq!(committee.gateway.verify(&digest, &batch), Ok(true));
    }

    #[test]
    fn removed_signer_no_longer_counts() {
        let committee = Committee::new();

        let payload = AdminCall::RemoveSigner(address(&committee.c)).encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a, &committee.b]);
        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        let digest = [0x45; 32];
        let batch = quorum_gateway::pack_signatures(&signatures(&digest, &[&committee.a, &committee.c]));
        assert_eq!(
            committee.gateway.verify(&digest, &batch),
            Err(GatewayError::UnauthorizedSigner {
                index: 1,
                signer: Some(address(&committee.c))
            })
        );
    }

    #[test]
    fn swap_replaces_member() {
        let committee = Committee::new();
        let replacement = outsider();
        let call = AdminCall::SwapSigner {
            old: address(&committee.b),
            new: address(&replacement),
        };

        let payload = call.encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a, &committee.b]);
        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        let signers = set(&committee.gateway.signers());
        assert!(!signers.contains(&address(&committee.b)));
        assert!(signers.contains(&address(&replacement)));
        assert_eq!(signers.len(), 3);
    }

    #[test]
    fn direct_mutators_always_unauthorized() {
        let committee = Committee::new();
        let caller = CallOrigin::External(address(&committee.a));
        let member = address(&committee.b);
        let stranger = address(&outsider());

        assert_eq!(
            committee.gateway.add_signer(&caller, stranger),
            Err(GatewayError::Unauthorized)
        );
        assert_eq!(
            committee.gateway.remove_signer(&caller, member),
            Err(GatewayError::Unauthorized)
        );
        assert_eq!(
            committee.gateway.swap_signer(&caller, member, stranger),
            Err(GatewayError::Unauthorized)
        );
        assert_eq!(committee.gateway.signers().len(), 3);
    }

    #[test]
    fn self_call_without_quorum_changes_nothing() {
        let committee = Committee::new();
        let payload = AdminCall::RemoveSigner(address(&committee.a)).encode();
        let packed = approve_call(&GATEWAY, &payload, &[&committee.a]);

        let err = committee
            .gateway
            .execute(GATEWAY, &payload, &packed)
            .unwrap_err();

        assert!(matches!(
            err.root_cause(),
            GatewayError::InsufficientSignatures { .. }
        ));
        assert_eq!(committee.gateway.signers().len(), 3);
    }

    #[test]
    fn removing_below_threshold_strands_quorum() {
        let committee = Committee::with_threshold(3);

        let payload = AdminCall::RemoveSigner(address(&committee.c)).encode();
        let packed = approve_call(
            &GATEWAY,
            &payload,
            &[&committee.a, &committee.b, &committee.c],
        );
        committee.gateway.execute(GATEWAY, &payload, &packed).unwrap();

        assert_eq!(committee.gateway.threshold(), 3);
        assert!(!committee.gateway.is_quorum_reachable());

        // Nothing can be approved any more, including a fix
        let fix = AdminCall::AddSigner(address(&outsider())).encode();
        let packed = approve_call(&GATEWAY, &fix, &[&committee.a, &committee.b]);
        assert!(committee.gateway.execute(GATEWAY, &fix, &packed).is_err());
    }
}
