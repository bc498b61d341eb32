// src/core/bootstrap_resolver/bootstrap_resolver_hash.rs

use crate::core::bootstrap_config::BootstrapConfig;
use crate::core::bootstrap_params::{Network, NetworkParams};
use crate::core::bootstrap_types::CheckpointHash;
use crate::core::error::BootstrapError;
use log::debug;

/// Bestimmt den Checkpoint-Hash, mit dem der Header-Sync startet.
///
/// Ein gesetzter `trusted_hash` hat Vorrang, das Netzwerk wird dann nicht
/// befragt. Sonst gilt der Genesis-Eintrag des Netzwerks.
pub fn trusted_hash(
    cfg: &BootstrapConfig,
    params: &NetworkParams,
    net: &Network,
) -> Result<CheckpointHash, BootstrapError> {
    if cfg.trusted_hash.is_empty() {
        let genesis = params.genesis_for(net)?;
        debug!("No trusted hash in config, using genesis of {}", net);
        return CheckpointHash::from_hex(genesis);
    }
    CheckpointHash::from_hex(&cfg.trusted_hash)
}
