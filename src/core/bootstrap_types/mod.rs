// src/core/bootstrap_types/mod.rs
pub mod bootstrap_types_peer;
pub mod bootstrap_types_checkpoint;

pub use bootstrap_types_peer::PeerIdentity;
pub use bootstrap_types_checkpoint::CheckpointHash;
