// src/core/bootstrap_config/bootstrap_config_discovery.rs

/// Anzahl der Peers, die während einer Discovery-Runde hinzugefügt werden.
pub const DEFAULT_PEERS_LIMIT: u32 = 3;
/// Abstand zwischen Discovery-Runden in Sekunden.
pub const DEFAULT_DISCOVERY_INTERVAL_SECS: u64 = 30;
/// Abstand zwischen Advertise-Runden in Sekunden (nur Full- und Bridge-Nodes).
pub const DEFAULT_ADVERTISE_INTERVAL_SECS: u64 = 30;
