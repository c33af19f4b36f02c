//! # Quorum Inflation
//!
//! One signer trying to stand in for several.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use k256::elliptic_curve::PrimeField;
    use k256::{FieldBytes, Scalar};
    use quorum_gateway::{pack_signatures, EcdsaSignature, GatewayError, QuorumGatewayApi};

    /// s' = n - s with the recovery parity flipped: the same key, a different encoding.
    fn malleate(signature: &EcdsaSignature) -> EcdsaSignature {
        let s = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::from(signature.s)))
            .expect("valid scalar");
        let mut high_s = [0u8; 32];
        high_s.copy_from_slice(&(-s).to_repr());

        EcdsaSignature {
            r: signature.r,
            s: high_s,
            v: if signature.v == 27 { 28 } else { 27 },
        }
    }

    #[test]
    fn repeated_signature_rejected() {
        let committee = Committee::new();
        let digest = [0xA1; 32];
        let single = signatures(&digest, &[&committee.a]);
        let packed = pack_signatures(&[single[0].clone(), single[0].clone()]);

        assert!(matches!(
            committee.gateway.verify(&digest, &packed),
            Err(GatewayError::DuplicateSigner { index: 1, .. })
        ));
    }

    #[test]
    fn malleated_copy_does_not_count() {
        let committee = Committee::new();
        let digest = [0xA2; 32];
        let original = signatures(&digest, &[&committee.a]).remove(0);
        let packed = pack_signatures(&[original.clone(), malleate(&original)]);

        assert_eq!(
            committee.gateway.verify(&digest, &packed),
            Err(GatewayError::UnauthorizedSigner {
                index: 1,
                signer: None
            })
        );
    }

    #[test]
    fn duplicate_hidden_among_valid_signers() {
        let committee = Committee::new();
        let digest = [0xA3; 32];
        let packed = pack_signatures(&signatures(
            &digest,
            &[&committee.b, &committee.a, &committee.c, &committee.b],
        ));

        assert_eq!(
            committee.gateway.verify(&digest, &packed),
            Err(GatewayError::DuplicateSigner {
                index: 3,
                signer: address(&committee.b)
            })
        );
    }

    #[test]
    fn unknown_recovery_id_does_not_count() {
        let committee = Committee::new();
        let digest = [0xA4; 32];
        let mut batch = signatures(&digest, &[&committee.a, &committee.b]);
        batch[1].v = 29;

        assert_eq!(
            committee.gateway.verify(&digest, &pack_signatures(&batch)),
            Err(GatewayError::UnauthorizedSigner {
                index: 1,
                signer: None
            })
        );
    }
}
