// src/core/testutils.rs
use crate::core::bootstrap_params::{Network, NetworkParams};
use crate::core::bootstrap_resolver::NoticeSink;
use libp2p::PeerId;
use std::sync::Mutex;

/// Sammelt Hinweise der Resolver, statt sie zu loggen.
#[derive(Debug, Default)]
pub struct RecordingNoticeSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingNoticeSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl NoticeSink for RecordingNoticeSink {
    fn notice(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

pub fn peer_address(peer_id: &PeerId, port: u16) -> String {
    format!("/ip4/127.0.0.1/tcp/{}/p2p/{}", port, peer_id)
}

const BASE_PORT: u16 = 2121;

/// Erzeugt `count` gültige Peer-Adressen mit zufälligen Peer-IDs.
/// Jede Adresse bekommt einen eigenen Port ab 2121; mehr als 63415 Adressen passen nicht.
pub fn generate_peer_addresses(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let port = u16::try_from(i)
                .ok()
                .and_then(|offset| BASE_PORT.checked_add(offset))
                .unwrap_or_else(|| panic!("no free port for peer address {} (max {})", i, u16::MAX - BASE_PORT));
            peer_address(&PeerId::random(), port)
        })
        .collect()
}

/// Testnetz mit Genesis `genesis` und `bootstrappers` zufälligen Bootstrappern.
pub fn testnet_params(genesis: &str, bootstrappers: usize) -> (Network, NetworkParams) {
    let net = Network::from("testnet");
    let params = NetworkParams::default()
        .with_genesis(net.clone(), genesis)
        .with_bootstrappers(net.clone(), generate_peer_addresses(bootstrappers));
    (net, params)
}
