//! # Adapters Layer
//!
//! In-process implementations of the outbound ports.

pub mod events;
pub mod router;

pub use events::BroadcastEventSink;
pub use router::InMemoryCallRouter;
