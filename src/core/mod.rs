// src/core/mod.rs
pub mod bootstrap_config;
pub mod bootstrap_params;
pub mod bootstrap_types;
pub mod bootstrap_resolver;
pub mod error;
pub mod testutils;

pub use bootstrap_config::BootstrapConfig;
pub use bootstrap_params::{Network, NetworkParams};
pub use bootstrap_types::{CheckpointHash, PeerIdentity};
pub use bootstrap_resolver::{
    resolve_trust_bootstrap, trusted_hash, trusted_peers, LogNoticeSink, NoticeSink, TrustBootstrap,
};
pub use error::BootstrapError;

pub fn initialize_core(cfg: &BootstrapConfig, net: &Network) -> Result<TrustBootstrap, BootstrapError> {
    log::info!("Trust bootstrap core initialized with config: {}", cfg);
    resolve_trust_bootstrap(cfg, &NetworkParams::builtin(), net, &LogNoticeSink)
}
