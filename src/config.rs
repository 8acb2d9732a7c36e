// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use clap::Parser;
use hedera::Hbar;
use url::Url;

use crate::account::FlowOptions;
use crate::Error;

/// Runtime configuration for `create-account`.
///
/// Every flag can also be given through the environment (or a `.env` file).
/// Operator credentials are intentionally not flags, see [`OperatorCredentials`](crate::OperatorCredentials).
#[derive(Parser, Debug, Clone)]
#[clap(name = "create-account", about, version)]
pub struct Config {
    /// Name of the Hedera network to connect to.
    #[clap(long, env, default_value = "testnet")]
    pub hedera_network: String,

    /// Base URL of the Mirror Node REST API; derived from the network when unset.
    #[clap(long, env)]
    pub mirror_node_url: Option<Url>,

    /// Amount to fund the new account with.
    #[clap(long, env, default_value = "20 ℏ")]
    pub initial_balance: Hbar,

    /// How long to wait for the Mirror Node to catch up before the first balance query.
    #[clap(long, env, default_value = "6s", value_parser = humantime::parse_duration)]
    pub mirror_delay: Duration,

    /// Number of balance queries to make while the Mirror Node has no balance yet.
    #[clap(long, env, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub mirror_attempts: u32,
}

impl Config {
    /// Returns the Mirror Node base URL, either configured or the public one for the network.
    ///
    /// # Errors
    /// - [`Error::Config`] if no URL is configured and the network has no known Mirror Node.
    pub fn mirror_node_url(&self) -> crate::Result<Url> {
        if let Some(url) = &self.mirror_node_url {
            return Ok(url.clone());
        }

        let url = match self.hedera_network.as_str() {
            "mainnet" => "https://mainnet-public.mirrornode.hedera.com",
            "testnet" => "https://testnet.mirrornode.hedera.com",
            "previewnet" => "https://previewnet.mirrornode.hedera.com",
            "localhost" => "http://127.0.0.1:5551",
            other => {
                return Err(Error::Config(format!(
                    "no known mirror node for network `{other}`, set `MIRROR_NODE_URL`"
                )))
            }
        };

        Url::parse(url).map_err(|e| Error::Config(e.to_string()))
    }

    /// The flow options described by this configuration.
    #[must_use]
    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            initial_balance: self.initial_balance,
            mirror_delay: self.mirror_delay,
            mirror_attempts: self.mirror_attempts,
        }
    }
}
