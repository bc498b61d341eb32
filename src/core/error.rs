// src/core/error.rs

use crate::core::bootstrap_params::Network;
use std::fmt::Display;
use thiserror::Error;

/// Fehler beim Auflösen des Trust-Bootstraps.
///
/// Jede Variante ist für den jeweiligen Aufruf endgültig und enthält die
/// fehlerhafte Eingabe unverändert.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid peer address {input:?}: {reason}")]
    InvalidAddressFormat { input: String, reason: String },
    #[error("peer address {input:?} carries no /p2p peer id")]
    MissingPeerIdentity { input: String },
    #[error("no bootstrap parameters registered for network {0}")]
    UnknownNetwork(Network),
    #[error("invalid hex checkpoint {input:?}: {reason}")]
    InvalidHexEncoding { input: String, reason: String },
    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl BootstrapError {
    pub fn invalid_address(input: &str, reason: impl Display) -> Self {
        BootstrapError::InvalidAddressFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_hex(input: &str, reason: impl Display) -> Self {
        BootstrapError::InvalidHexEncoding {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
