//! # Gateway Configuration
//!
//! Signer set, threshold and runtime parameters, with environment overrides.
//!
//! ## Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `QG_SIGNERS` | comma-separated hex addresses |
//! | `QG_THRESHOLD` | quorum threshold |
//! | `QG_GATEWAY_ADDRESS` | the gateway's own address (self-call target) |
//! | `QG_EVENT_CAPACITY` | registry event buffer per subscriber |
//! | `QG_LOG_LEVEL` | default log filter when `RUST_LOG` is unset |

use quorum_gateway::adapters::events::DEFAULT_EVENT_CAPACITY;
use quorum_gateway::{keccak256, Address, GatewayError, SignerRegistry};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An address value is not 20 bytes of hex.
    #[error("{var}: invalid address {value:?}")]
    InvalidAddress {
        /// Variable that held the value
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// A numeric value failed to parse.
    #[error("{var}: invalid number {value:?}")]
    InvalidNumber {
        /// Variable that held the value
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// Signer set and threshold violate the registry invariant.
    #[error(transparent)]
    Registry(#[from] GatewayError),
}

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Initial signer identities.
    pub signers: Vec<Address>,
    /// Quorum threshold.
    pub threshold: usize,
    /// The gateway's own address; quorum-approved calls to it administer the registry.
    pub gateway_address: Address,
    /// Registry event buffer per subscriber.
    pub event_capacity: usize,
    /// Default log filter.
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            signers: Vec::new(),
            threshold: 1,
            gateway_address: default_gateway_address(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

/// Address used when none is configured: last 20 bytes of keccak256("quorum-gateway").
pub fn default_gateway_address() -> Address {
    let hash = keccak256(b"quorum-gateway");
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

impl GatewayConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup("QG_SIGNERS") {
            config.signers = list
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(|entry| parse_address("QG_SIGNERS", entry))
                .collect::<Result<_, _>>()?;
        }
        if let Some(value) = lookup("QG_THRESHOLD") {
            config.threshold = parse_number("QG_THRESHOLD", &value)?;
        }
        if let Some(value) = lookup("QG_GATEWAY_ADDRESS") {
            config.gateway_address = parse_address("QG_GATEWAY_ADDRESS", &value)?;
        }
        if let Some(value) = lookup("QG_EVENT_CAPACITY") {
            config.event_capacity = parse_number("QG_EVENT_CAPACITY", &value)?;
        }
        if let Some(value) = lookup("QG_LOG_LEVEL") {
            config.log_level = value;
        }

        Ok(config)
    }

    /// Check the registry invariant without building anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry().map(|_| ())
    }

    /// Initial registry described by this configuration.
    pub fn registry(&self) -> Result<SignerRegistry, ConfigError> {
        Ok(SignerRegistry::new(&self.signers, self.threshold)?)
    }
}

fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    let invalid = || ConfigError::InvalidAddress {
        var,
        value: value.to_string(),
    };
    hex::decode(digits)
        .map_err(|_| invalid())?
        .try_into()
        .map_err(|_| invalid())
}

fn parse_number(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
