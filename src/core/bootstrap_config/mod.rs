// src/core/bootstrap_config/mod.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use log::debug;
use crate::core::error::BootstrapError;

pub mod bootstrap_config_discovery;

pub use bootstrap_config_discovery::*;

/// Konfiguration für den Trust-Bootstrap des Header-Syncs.
///
/// Es findet keine Validierung beim Erzeugen oder Laden statt; die Resolver
/// prüfen die Werte erst, wenn sie gebraucht werden.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Hex-kodierter Block-/Header-Hash als Startpunkt des Syncs. Leer = Genesis des Netzwerks.
    pub trusted_hash: String,
    /// Multiaddrs mit `/p2p/<peer-id>`, von denen Header geholt werden. Leer = Bootstrapper.
    pub trusted_peers: Vec<String>,
    pub peers_limit: u32,
    pub discovery_interval_secs: u64,
    pub advertise_interval_secs: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            trusted_hash: String::new(),
            trusted_peers: Vec::new(),
            peers_limit: DEFAULT_PEERS_LIMIT,
            discovery_interval_secs: DEFAULT_DISCOVERY_INTERVAL_SECS,
            advertise_interval_secs: DEFAULT_ADVERTISE_INTERVAL_SECS,
        }
    }
}

impl BootstrapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BootstrapError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BootstrapError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&data)?;
        debug!("Loaded bootstrap config from {}: {}", path.display(), cfg);
        Ok(cfg)
    }

    pub fn discovery_interval(&self) -> Duration {
        Duration::from_secs(self.discovery_interval_secs)
    }

    pub fn advertise_interval(&self) -> Duration {
        Duration::from_secs(self.advertise_interval_secs)
    }
}

impl fmt::Display for BootstrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hash: &str = if self.trusted_hash.is_empty() { "<genesis>" } else { &self.trusted_hash };
        write!(
            f,
            "trusted_hash: {}, trusted_peers: {}, peers_limit: {}, discovery: {:?}, advertise: {:?}",
            hash,
            self.trusted_peers.len(),
            self.peers_limit,
            self.discovery_interval(),
            self.advertise_interval()
        )
    }
}
