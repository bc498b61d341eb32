// src/core/bootstrap_params/mod.rs
pub mod bootstrap_params_network;
pub mod bootstrap_params_tables;

pub use bootstrap_params_network::Network;
pub use bootstrap_params_tables::NetworkParams;
