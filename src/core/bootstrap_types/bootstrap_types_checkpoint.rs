// src/core/bootstrap_types/bootstrap_types_checkpoint.rs

use crate::core::error::BootstrapError;
use std::fmt;

/// Checkpoint-Hash, der beim ersten Header-Sync als Vertrauensanker dient.
/// Länge und Existenz on-chain werden hier nicht geprüft.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckpointHash(Vec<u8>);

impl CheckpointHash {
    pub fn from_hex(text: &str) -> Result<Self, BootstrapError> {
        hex::decode(text)
            .map(CheckpointHash)
            .map_err(|e| BootstrapError::invalid_hex(text, e))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for CheckpointHash {
    fn from(bytes: Vec<u8>) -> Self {
        CheckpointHash(bytes)
    }
}

impl AsRef<[u8]> for CheckpointHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Großbuchstaben, wie Header-Hashes sonst im Node ausgegeben werden.
impl fmt::Display for CheckpointHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}
