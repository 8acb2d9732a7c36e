// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hedera_account_demo::{
    Config as RunConfig,
    OperatorClient,
    OperatorCredentials,
};
use once_cell::sync::Lazy;

pub(crate) struct Config {
    pub(crate) run: RunConfig,
    pub(crate) operator: Option<OperatorCredentials>,
    pub(crate) run_nonfree_tests: bool,
}

impl Config {
    fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let run = RunConfig::try_parse_from(["e2e"]).expect("invalid e2e configuration");

        let operator = match OperatorCredentials::from_env() {
            Ok(it) => Some(it),
            Err(e) => {
                log::warn!("no usable operator: {e}");
                None
            }
        };

        let run_nonfree_tests = matches!(
            std::env::var("TEST_RUN_NONFREE").as_deref(),
            Ok("1" | "true" | "yes")
        );

        Self { run, operator, run_nonfree_tests }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

pub(crate) struct TestEnvironment {
    pub(crate) config: &'static Config,
    pub(crate) client: OperatorClient,
}

/// Returns a connected environment, or `None` if tests that cost hbars shouldn't run.
pub(crate) fn setup_nonfree() -> Option<TestEnvironment> {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = &*CONFIG;

    if !config.run_nonfree_tests {
        log::debug!("skipping non-free test");
        return None;
    }

    let Some(operator) = config.operator.clone() else {
        log::debug!("skipping non-free test due to missing operator");
        return None;
    };

    let client = OperatorClient::connect(&config.run.hedera_network, operator)
        .expect("failed to connect to the configured network");

    Some(TestEnvironment { config, client })
}
