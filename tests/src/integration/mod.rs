//! # Integration Flows
//!
//! - `scenarios` - quorum verification, execution and attestation end to end
//! - `self_administration` - registry changes through self-targeted calls
//! - `runtime_flow` - JSON requests through the runtime's request processor

pub mod self_administration;
