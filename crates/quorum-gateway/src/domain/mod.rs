//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod admin;
pub mod capability;
pub mod digest;
pub mod ecdsa;
pub mod entities;
pub mod errors;
pub mod proof;
pub mod quorum;
pub mod registry;
