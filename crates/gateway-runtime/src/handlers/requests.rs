//! # Wire Requests
//!
//! One JSON object per request, tagged by `"op"`. Byte fields are hex
//! strings without a `0x` prefix.

use quorum_gateway::{Address, GatewayError, Hash, Proof, QuorumGatewayApi};
use serde::Deserialize;
use serde_json::{json, Value};
use serde_with::{hex::Hex, serde_as};

/// A request to the gateway.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GatewayRequest {
    /// Verify a quorum over `target ‖ payload` and forward the call
    Execute {
        /// Call destination
        #[serde_as(as = "Hex")]
        target: Address,
        /// Call payload
        #[serde_as(as = "Hex")]
        payload: Vec<u8>,
        /// Packed 65-byte signature records
        #[serde_as(as = "Hex")]
        signatures: Vec<u8>,
    },
    /// Check packed signatures against a digest
    Verify {
        /// Signed digest
        #[serde_as(as = "Hex")]
        digest: Hash,
        /// Packed 65-byte signature records
        #[serde_as(as = "Hex")]
        signatures: Vec<u8>,
    },
    /// Attest to a payload with a structured proof
    DecodeAndVerify {
        /// Network hint, not bound by the digest
        #[serde(default)]
        network: u64,
        /// Attested payload
        #[serde_as(as = "Hex")]
        payload: Vec<u8>,
        /// Structured proof
        proof: Proof,
    },
    /// List signers
    Signers,
    /// Current threshold
    Threshold,
}

/// Apply one request and render the response object.
pub fn handle_request<G: QuorumGatewayApi + ?Sized>(gateway: &G, request: GatewayRequest) -> Value {
    match request {
        GatewayRequest::Execute {
            target,
            payload,
            signatures,
        } => respond(gateway.execute(target, &payload, &signatures), |()| json!({})),
        GatewayRequest::Verify { digest, signatures } => {
            respond(gateway.verify(&digest, &signatures), |valid| {
                json!({ "valid": valid })
            })
        }
        GatewayRequest::DecodeAndVerify {
            network,
            payload,
            proof,
        } => respond(
            gateway.decode_and_verify(network, &payload, &proof),
            |payload| json!({ "payload": hex::encode(payload) }),
        ),
        GatewayRequest::Signers => {
            let signers: Vec<String> = gateway.signers().iter().map(hex::encode).collect();
            json!({ "ok": true, "signers": signers })
        }
        GatewayRequest::Threshold => json!({ "ok": true, "threshold": gateway.threshold() }),
    }
}

/// Response for a line that is not a valid request.
pub fn malformed_request(reason: &str) -> Value {
    json!({ "ok": false, "error": format!("malformed request: {reason}") })
}

fn respond<T>(result: Result<T, GatewayError>, render: impl FnOnce(T) -> Value) -> Value {
    match result {
        Ok(value) => {
            let mut body = render(value);
            body["ok"] = Value::Bool(true);
            body
        }
        Err(err) => {
            let mut body = json!({ "ok": false, "error": err.to_string() });
            if let GatewayError::ForwardedCallFailed { data, .. } = err.root_cause() {
                body["data"] = Value::String(hex::encode(data));
            }
            body
        }
    }
}
