//! # Quorum Gateway Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Signer sets, approvals, recording adapters
//! ├── integration/      # End-to-end flows through the gateway and runtime
//! └── exploits/         # Attack simulations against the quorum check
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qg-tests
//!
//! # By category
//! cargo test -p qg-tests integration::
//! cargo test -p qg-tests exploits::
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
