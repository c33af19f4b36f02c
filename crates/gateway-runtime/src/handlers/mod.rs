//! # Request Handlers
//!
//! - `requests` - wire types and dispatch onto the gateway API
//! - `processor` - single-writer queue that serializes all requests

pub mod processor;
pub mod requests;

pub use processor::{spawn_processor, GatewayHandle};
pub use requests::{handle_request, GatewayRequest};
