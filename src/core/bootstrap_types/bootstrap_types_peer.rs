// src/core/bootstrap_types/bootstrap_types_peer.rs

use crate::core::error::BootstrapError;
use libp2p::multiaddr::Protocol;
use libp2p::{Multiaddr, PeerId};
use std::fmt;
use std::str::FromStr;

/// Aufgelöste Peer-Identität: Peer-ID plus erreichbare Adressen.
///
/// Wird einmalig aus der Textform `/<transport...>/p2p/<peer-id>` geparst;
/// nachgelagerter Code arbeitet nur noch mit diesem Wert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerIdentity {
    pub peer_id: PeerId,
    pub addrs: Vec<Multiaddr>,
}

impl PeerIdentity {
    pub fn new(peer_id: PeerId, addrs: Vec<Multiaddr>) -> Self {
        PeerIdentity { peer_id, addrs }
    }

    /// Adressen mit wieder angehängtem `/p2p/<peer-id>`, direkt wählbar.
    pub fn p2p_addrs(&self) -> Vec<Multiaddr> {
        if self.addrs.is_empty() {
            return vec![Multiaddr::empty().with(Protocol::P2p(self.peer_id))];
        }
        self.addrs
            .iter()
            .map(|addr| addr.clone().with(Protocol::P2p(self.peer_id)))
            .collect()
    }
}

impl FromStr for PeerIdentity {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(BootstrapError::invalid_address(s, "empty address"));
        }
        // Ein abschließender Slash ist erlaubt
        let text = match s.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => s,
        };
        let mut addr: Multiaddr = text
            .parse()
            .map_err(|e: libp2p::multiaddr::Error| BootstrapError::invalid_address(s, e))?;
        if addr.is_empty() {
            return Err(BootstrapError::invalid_address(s, "address has no components"));
        }

        match addr.pop() {
            Some(Protocol::P2p(peer_id)) => {
                let addrs = if addr.is_empty() { Vec::new() } else { vec![addr] };
                Ok(PeerIdentity::new(peer_id, addrs))
            }
            _ => Err(BootstrapError::MissingPeerIdentity { input: s.to_string() }),
        }
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.peer_id)?;
        if !self.addrs.is_empty() {
            let addrs: Vec<String> = self.addrs.iter().map(|a| a.to_string()).collect();
            write!(f, " {}", addrs.join(","))?;
        }
        Ok(())
    }
}
