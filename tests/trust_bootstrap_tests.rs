// tests/trust_bootstrap_tests.rs
use std::sync::Arc;
use trust_bootstrap::core::bootstrap_resolver::bootstrap_resolver_peers::DEFAULT_PEERS_NOTICE;
use trust_bootstrap::core::testutils::{generate_peer_addresses, testnet_params, RecordingNoticeSink};
use trust_bootstrap::core::{resolve_trust_bootstrap, trusted_hash, trusted_peers};
use trust_bootstrap::{BootstrapConfig, BootstrapError, CheckpointHash, Network, NetworkParams, PeerIdentity};

fn with_peers(peers: Vec<String>) -> BootstrapConfig {
    BootstrapConfig { trusted_peers: peers, ..BootstrapConfig::default() }
}

#[test]
fn scenario_a_defaults_for_registered_testnet() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (net, params) = testnet_params("ab12", 3);
    let sink = RecordingNoticeSink::default();

    let bootstrap = resolve_trust_bootstrap(&BootstrapConfig::default(), &params, &net, &sink).unwrap();
    assert_eq!(bootstrap.hash.as_bytes(), &[0xab, 0x12]);
    assert_eq!(bootstrap.peers, params.bootstrappers_for(&net).unwrap());
    assert_eq!(sink.messages(), vec![DEFAULT_PEERS_NOTICE.to_string()]);
}

#[test]
fn scenario_b_bad_trusted_hash() {
    let (net, params) = testnet_params("ab12", 1);
    let cfg = BootstrapConfig { trusted_hash: "zz".into(), ..BootstrapConfig::default() };
    let err = trusted_hash(&cfg, &params, &net).unwrap_err();
    assert!(matches!(err, BootstrapError::InvalidHexEncoding { ref input, .. } if input == "zz"));
}

#[test]
fn scenario_c_bad_trusted_peer_skips_defaults() {
    let cfg = with_peers(vec!["not-a-valid-address".into()]);
    // Unregistrierte Defaults dürfen nicht gelesen werden
    let err = resolve_trust_bootstrap(
        &BootstrapConfig { trusted_hash: "ab12".into(), ..cfg },
        &NetworkParams::default(),
        &Network::PRIVATE,
        &RecordingNoticeSink::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BootstrapError::InvalidAddressFormat { ref input, .. } if input == "not-a-valid-address"));
}

#[test]
fn empty_trusted_peers_returns_defaults_in_order() {
    let (net, params) = testnet_params("ab12", 5);
    let defaults = params.bootstrappers_for(&net).unwrap();
    let peers = trusted_peers(&BootstrapConfig::default(), defaults.clone(), &RecordingNoticeSink::default()).unwrap();
    assert_eq!(peers, defaults);
}

#[test]
fn malformed_entry_at_any_position_fails_without_partial_result() {
    let bad_entries = ["/ip4/10.0.0.1/tcp/2121", "garbage", ""];
    for bad in bad_entries {
        for k in 0..4 {
            let mut addrs = generate_peer_addresses(3);
            addrs.insert(k, bad.to_string());
            let result = trusted_peers(&with_peers(addrs), Vec::new(), &RecordingNoticeSink::default());
            match result {
                Err(BootstrapError::MissingPeerIdentity { input }) => assert_eq!(input, bad),
                Err(BootstrapError::InvalidAddressFormat { input, .. }) => assert_eq!(input, bad),
                other => panic!("entry {:?} at {} was accepted: {:?}", bad, k, other),
            }
        }
    }
}

#[test]
fn valid_entries_keep_length_and_order() {
    let addrs = generate_peer_addresses(6);
    let peers = trusted_peers(&with_peers(addrs.clone()), Vec::new(), &RecordingNoticeSink::default()).unwrap();
    assert_eq!(peers.len(), addrs.len());
    for (peer, text) in peers.iter().zip(&addrs) {
        assert_eq!(peer.p2p_addrs()[0].to_string(), *text);
    }
}

#[test]
fn explicit_trusted_hash_ignores_network_default() {
    let (net, params) = testnet_params("ab12", 1);
    let cfg = BootstrapConfig { trusted_hash: "DEADbeef".into(), ..BootstrapConfig::default() };
    let hash = trusted_hash(&cfg, &params, &net).unwrap();
    assert_eq!(hash.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);

    let again = CheckpointHash::from_hex(&hash.to_hex()).unwrap();
    assert_eq!(again, hash);
    assert_eq!(CheckpointHash::from_hex(&hash.to_string()).unwrap(), hash);
}

#[test]
fn builtin_networks_resolve() {
    let params = NetworkParams::builtin();
    for net in ["mainnet", "arabica", "mocha"] {
        let net: Network = net.parse().unwrap();
        let bootstrap =
            resolve_trust_bootstrap(&BootstrapConfig::default(), &params, &net, &RecordingNoticeSink::default())
                .unwrap();
        assert_eq!(bootstrap.hash.to_string(), params.genesis_for(&net).unwrap());
    }
}

#[test]
fn resolution_is_idempotent() {
    let (net, params) = testnet_params("ab12", 2);
    let cfg = with_peers(generate_peer_addresses(2));
    let sink = RecordingNoticeSink::default();
    let first = resolve_trust_bootstrap(&cfg, &params, &net, &sink).unwrap();
    let second = resolve_trust_bootstrap(&cfg, &params, &net, &sink).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_resolution_shares_config() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (net, params) = testnet_params("ab12", 2);
    let cfg = Arc::new(with_peers(generate_peer_addresses(4)));
    let params = Arc::new(params);
    let sink = Arc::new(RecordingNoticeSink::default());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let (cfg, params, net, sink) = (cfg.clone(), params.clone(), net.clone(), sink.clone());
        handles.push(tokio::task::spawn_blocking(move || {
            resolve_trust_bootstrap(&cfg, &params, &net, sink.as_ref())
        }));
    }

    let expected: Vec<PeerIdentity> = cfg.trusted_peers.iter().map(|a| a.parse().unwrap()).collect();
    for handle in handles {
        let bootstrap = handle.await.unwrap().unwrap();
        assert_eq!(bootstrap.peers, expected);
        assert_eq!(bootstrap.hash.as_bytes(), &[0xab, 0x12]);
    }
    assert!(sink.messages().is_empty());
}
