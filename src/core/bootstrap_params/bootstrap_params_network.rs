// src/core/bootstrap_params/bootstrap_params_network.rs

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Bezeichner des logischen Netzwerks (z. B. mainnet oder ein Testnetz).
/// Dient nur als Schlüssel für Genesis- und Bootstrapper-Tabellen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct Network(Cow<'static, str>);

impl Network {
    pub const MAINNET: Network = Network(Cow::Borrowed("mainnet"));
    pub const ARABICA: Network = Network(Cow::Borrowed("arabica"));
    pub const MOCHA: Network = Network(Cow::Borrowed("mocha"));
    /// Private Deployments haben keine eingebauten Parameter.
    pub const PRIVATE: Network = Network(Cow::Borrowed("private"));

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Network {
    fn from(name: &str) -> Self {
        Network(Cow::Owned(name.trim().to_ascii_lowercase()))
    }
}

impl From<String> for Network {
    fn from(name: String) -> Self {
        Network::from(name.as_str())
    }
}

impl From<Network> for String {
    fn from(net: Network) -> Self {
        net.0.into_owned()
    }
}

impl FromStr for Network {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Network::from(s))
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::MAINNET
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
