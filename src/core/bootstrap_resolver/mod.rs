// src/core/bootstrap_resolver/mod.rs

use crate::core::bootstrap_config::BootstrapConfig;
use crate::core::bootstrap_params::{Network, NetworkParams};
use crate::core::bootstrap_types::{CheckpointHash, PeerIdentity};
use crate::core::error::BootstrapError;
use log::info;
use std::fmt;

pub mod bootstrap_resolver_notice;
pub mod bootstrap_resolver_peers;
pub mod bootstrap_resolver_hash;

pub use bootstrap_resolver_notice::{LogNoticeSink, NoticeSink};
pub use bootstrap_resolver_peers::trusted_peers;
pub use bootstrap_resolver_hash::trusted_hash;

/// Ergebnis des Trust-Bootstraps, wird an den Header-Sync übergeben.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustBootstrap {
    pub network: Network,
    pub hash: CheckpointHash,
    pub peers: Vec<PeerIdentity>,
}

/// Löst Checkpoint-Hash und vertrauenswürdige Peers für `net` auf.
///
/// Die Bootstrapper-Tabelle wird nur gelesen, wenn die Konfiguration keine
/// eigenen Peers nennt.
pub fn resolve_trust_bootstrap(
    cfg: &BootstrapConfig,
    params: &NetworkParams,
    net: &Network,
    sink: &dyn NoticeSink,
) -> Result<TrustBootstrap, BootstrapError> {
    let hash = trusted_hash(cfg, params, net)?;
    let defaults = if cfg.trusted_peers.is_empty() {
        params.bootstrappers_for(net)?
    } else {
        Vec::new()
    };
    let peers = trusted_peers(cfg, defaults, sink)?;

    info!("Trust bootstrap for {}: hash={}, trusted_peers={}", net, hash, peers.len());
    Ok(TrustBootstrap {
        network: net.clone(),
        hash,
        peers,
    })
}

impl fmt::Display for TrustBootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "network: {}", self.network)?;
        writeln!(f, "trusted hash: {}", self.hash)?;
        write!(f, "trusted peers: {}", self.peers.len())?;
        for peer in &self.peers {
            write!(f, "\n  {}", peer)?;
        }
        Ok(())
    }
}
