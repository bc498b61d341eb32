// src/core/bootstrap_resolver/bootstrap_resolver_peers.rs

use crate::core::bootstrap_config::BootstrapConfig;
use crate::core::bootstrap_resolver::NoticeSink;
use crate::core::bootstrap_types::PeerIdentity;
use crate::core::error::BootstrapError;
use log::debug;

pub const DEFAULT_PEERS_NOTICE: &str =
    "No trusted peers in config, initializing with default bootstrappers as trusted peers";

/// Bestimmt die vertrauenswürdigen Peers für den initialen Header-Abruf.
///
/// Ohne konfigurierte Peers werden `defaults` unverändert übernommen. Sonst
/// wird jeder Eintrag in Reihenfolge geparst, die Defaults werden ignoriert
/// und der erste fehlerhafte Eintrag bricht alles ab.
pub fn trusted_peers(
    cfg: &BootstrapConfig,
    defaults: Vec<PeerIdentity>,
    sink: &dyn NoticeSink,
) -> Result<Vec<PeerIdentity>, BootstrapError> {
    if cfg.trusted_peers.is_empty() {
        sink.notice(DEFAULT_PEERS_NOTICE);
        return Ok(defaults);
    }

    let peers = cfg
        .trusted_peers
        .iter()
        .map(|text| text.parse::<PeerIdentity>())
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Resolved {} trusted peers from config", peers.len());
    Ok(peers)
}
