// src/lib.rs
pub mod core;

pub use crate::core::{
    initialize_core,
    BootstrapConfig,
    BootstrapError,
    CheckpointHash,
    Network,
    NetworkParams,
    PeerIdentity,
    TrustBootstrap,
};

/// Startet den Trust-Bootstrap mit den eingebauten Netzwerk-Parametern.
pub fn start_node_bootstrap(cfg: &BootstrapConfig, net: &Network) -> Result<TrustBootstrap, BootstrapError> {
    let bootstrap = initialize_core(cfg, net)?;
    log::info!("Node bootstrap ready for header sync on {}", net);
    Ok(bootstrap)
}
