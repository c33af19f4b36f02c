//! # Administrative Calls
//!
//! Payloads a quorum signs when the gateway is its own target.
//!
//! Layout: `selector (4) ‖ word (32) [‖ word (32)]`, where each word is an
//! address left-padded with 12 zero bytes and the selector is the first four
//! bytes of keccak256 of the call signature.

use super::ecdsa::keccak256;
use super::entities::Address;
use super::errors::GatewayError;

const SELECTOR_LEN: usize = 4;
const WORD_LEN: usize = 32;
const ADDRESS_PADDING: usize = WORD_LEN - 20;

/// Signature string of the add call.
pub const ADD_SIGNER_SIGNATURE: &str = "addSigner(address)";
/// Signature string of the remove call.
pub const REMOVE_SIGNER_SIGNATURE: &str = "removeSigner(address)";
/// Signature string of the swap call.
pub const SWAP_SIGNER_SIGNATURE: &str = "swapSigner(address,address)";

/// First four bytes of keccak256 of a call signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// A registry mutation carried in a self-targeted payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminCall {
    /// Add a signer
    AddSigner(Address),
    /// Remove a signer
    RemoveSigner(Address),
    /// Replace `old` with `new`
    SwapSigner {
        /// Member being replaced
        old: Address,
        /// Replacement
        new: Address,
    },
}

impl AdminCall {
    /// Encode into the payload a quorum signs.
    pub fn encode(&self) -> Vec<u8> {
        let (signature, words): (&str, Vec<&Address>) = match self {
            AdminCall::AddSigner(signer) => (ADD_SIGNER_SIGNATURE, vec![signer]),
            AdminCall::RemoveSigner(signer) => (REMOVE_SIGNER_SIGNATURE, vec![signer]),
            AdminCall::SwapSigner { old, new } => (SWAP_SIGNER_SIGNATURE, vec![old, new]),
        };

        let mut payload = Vec::with_capacity(SELECTOR_LEN + words.len() * WORD_LEN);
        payload.extend_from_slice(&selector(signature));
        for address in words {
            payload.extend_from_slice(&[0u8; ADDRESS_PADDING]);
            payload.extend_from_slice(address);
        }
        payload
    }

    /// Decode a self-targeted payload.
    ///
    /// # Errors
    /// - `InvalidInput` if the payload is shorter than a selector or its
    ///   argument words are truncated or not zero-padded
    /// - `UnsupportedCall` for an unknown selector
    pub fn decode(payload: &[u8]) -> Result<Self, GatewayError> {
        if payload.len() < SELECTOR_LEN {
            return Err(GatewayError::InvalidInput("call payload shorter than selector"));
        }
        let mut call_selector = [0u8; SELECTOR_LEN];
        call_selector.copy_from_slice(&payload[..SELECTOR_LEN]);
        let args = &payload[SELECTOR_LEN..];

        if call_selector == selector(ADD_SIGNER_SIGNATURE) {
            Ok(AdminCall::AddSigner(address_word(args, 0)?))
        } else if call_selector == selector(REMOVE_SIGNER_SIGNATURE) {
            Ok(AdminCall::RemoveSigner(address_word(args, 0)?))
        } else if call_selector == selector(SWAP_SIGNER_SIGNATURE) {
            Ok(AdminCall::SwapSigner {
                old: address_word(args, 0)?,
                new: address_word(args, 1)?,
            })
        } else {
            Err(GatewayError::UnsupportedCall(call_selector))
        }
    }
}

fn address_word(args: &[u8], position: usize) -> Result<Address, GatewayError> {
    let start = position * WORD_LEN;
    let word = args
        .get(start..start + WORD_LEN)
        .ok_or(GatewayError::InvalidInput("call argument truncated"))?;

    if word[..ADDRESS_PADDING].iter().any(|byte| *byte != 0) {
        return Err(GatewayError::InvalidInput("address argument is not zero-padded"));
    }

    let mut address = [0u8; 20];
    address.copy_from_slice(&word[ADDRESS_PADDING..]);
    Ok(address)
}
