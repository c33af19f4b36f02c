//! # Self-Administration Gate
//!
//! Registry mutators take a [`SelfCall`] token. Only the execution gateway can
//! mint one, and only after a quorum has approved a call whose target is the
//! gateway itself. Code outside this crate can name the type but never
//! construct it.

use super::entities::Address;
use super::errors::GatewayError;

/// Proof that the current call is the gateway forwarding a verified request to itself.
#[derive(Debug)]
pub struct SelfCall {
    _private: (),
}

impl SelfCall {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Who is invoking an administrative operation.
#[derive(Debug)]
pub enum CallOrigin {
    /// Any caller other than the gateway's own verified path
    External(Address),
    /// The gateway forwarding a quorum-approved call to itself
    Gateway(SelfCall),
}

impl CallOrigin {
    /// Open the gate, or fail with `Unauthorized`.
    pub fn authorize(&self) -> Result<&SelfCall, GatewayError> {
        match self {
            CallOrigin::Gateway(token) => Ok(token),
            CallOrigin::External(_) => Err(GatewayError::Unauthorized),
        }
    }
}
