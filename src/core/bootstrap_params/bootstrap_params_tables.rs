// src/core/bootstrap_params/bootstrap_params_tables.rs

use crate::core::bootstrap_params::Network;
use crate::core::bootstrap_types::PeerIdentity;
use crate::core::error::BootstrapError;
use log::debug;
use std::collections::HashMap;

const MAINNET_GENESIS: &str = "6BE39EFD10BA412A9DB5288488303F5DD32CF386707A5BEF33617F4C43301872";
const ARABICA_GENESIS: &str = "27122593765E07329BC348E8D16E92DCB4C75B34CCCB35C640FD7A4484D4C711";
const MOCHA_GENESIS: &str = "831B81ADDF4C94D2C4B1A8D4B4EEE5CDCC5D42F2D4F0D2F4E7C7CF7D0F3E0E24";

const MAINNET_BOOTSTRAPPERS: &[&str] = &[
    "/dns4/da-bootstrapper-1.mainnet.inferno.network/tcp/2121/p2p/QmNnooDu7bfjPFoTZYxMNLWUQJyrVwtbZg5gBMjTezGAJN",
    "/dns4/da-bootstrapper-2.mainnet.inferno.network/tcp/2121/p2p/QmQCU2EcMqAqQPR2i9bChDtGNJchTbq5TbXJJ16u19uLTa",
];
const ARABICA_BOOTSTRAPPERS: &[&str] = &[
    "/dns4/da-bootstrapper-1.arabica.inferno.network/tcp/2121/p2p/QmbLHAnMoJPWSCR5Zhtx6BHJX9KiKNN6tpvbUcqanj75Nb",
];
const MOCHA_BOOTSTRAPPERS: &[&str] = &[
    "/dns4/da-bootstrapper-1.mocha.inferno.network/tcp/2121/p2p/QmcZf59bWwK5XFi76CZX8cbJ4BhTzzA3gU1ZjYZcYW3dwt",
    "/ip4/104.131.131.82/tcp/2121/p2p/QmaCpDMGvV2BGHeYERUEnRQAwe3N8SzbUtfsmvsqQLuvuJ",
];

/// Netzwerk-Parameter: Genesis-Checkpoint und Standard-Bootstrapper je Netzwerk.
///
/// Einträge werden als Text gehalten und erst bei der Abfrage geparst.
#[derive(Debug, Clone, Default)]
pub struct NetworkParams {
    genesis: HashMap<Network, String>,
    bootstrappers: HashMap<Network, Vec<String>>,
}

impl NetworkParams {
    /// Eingebaute Tabellen für alle öffentlich registrierten Netzwerke.
    pub fn builtin() -> Self {
        let tables = [
            (Network::MAINNET, MAINNET_GENESIS, MAINNET_BOOTSTRAPPERS),
            (Network::ARABICA, ARABICA_GENESIS, ARABICA_BOOTSTRAPPERS),
            (Network::MOCHA, MOCHA_GENESIS, MOCHA_BOOTSTRAPPERS),
        ];
        tables
            .into_iter()
            .fold(NetworkParams::default(), |params, (net, genesis, peers)| {
                params
                    .with_genesis(net.clone(), genesis)
                    .with_bootstrappers(net, peers.iter().copied())
            })
    }

    pub fn with_genesis(mut self, net: Network, genesis: impl Into<String>) -> Self {
        self.genesis.insert(net, genesis.into());
        self
    }

    pub fn with_bootstrappers<I, S>(mut self, net: Network, addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bootstrappers
            .insert(net, addrs.into_iter().map(Into::into).collect());
        self
    }

    pub fn genesis_for(&self, net: &Network) -> Result<&str, BootstrapError> {
        self.genesis
            .get(net)
            .map(String::as_str)
            .ok_or_else(|| BootstrapError::UnknownNetwork(net.clone()))
    }

    pub fn bootstrappers_for(&self, net: &Network) -> Result<Vec<PeerIdentity>, BootstrapError> {
        let addrs = self
            .bootstrappers
            .get(net)
            .ok_or_else(|| BootstrapError::UnknownNetwork(net.clone()))?;
        debug!("Parsing {} default bootstrappers for {}", addrs.len(), net);
        addrs.iter().map(|addr| addr.parse::<PeerIdentity>()).collect()
    }
}
