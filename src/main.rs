// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use trust_bootstrap::{start_node_bootstrap, BootstrapConfig, Network};

#[derive(Parser, Debug)]
#[command(name = "trust-bootstrap", about = "Resolve the trusted checkpoint hash and trusted peers for header sync")]
struct Args {
    /// Network to bootstrap into
    #[arg(long, default_value = "mainnet")]
    network: Network,
    /// JSON config file; built-in defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialisiere den Logger
    env_logger::init();
    let args = Args::parse();

    let cfg = match args.config {
        Some(path) => match BootstrapConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => BootstrapConfig::default(),
    };

    match start_node_bootstrap(&cfg, &args.network) {
        Ok(bootstrap) => println!("{}", bootstrap),
        Err(e) => {
            eprintln!("Failed to resolve trust bootstrap: {}", e);
            std::process::exit(1);
        }
    }
}
