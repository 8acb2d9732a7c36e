// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hedera_account_demo::{
    create_funded_account,
    Config,
    MirrorNodeClient,
    OperatorClient,
    OperatorCredentials,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    /*
     * Step 1: Load the operator credentials
     */
    let credentials = OperatorCredentials::from_env()?;
    let mirror = MirrorNodeClient::new(config.mirror_node_url()?)?;

    /*
     * Step 2: Create and configure the client
     */
    let client = OperatorClient::connect(&config.hedera_network, credentials)?;

    /*
     * Steps 3-5: Generate a key, create the account, and read its balance back.
     * The client is released on every path out of here.
     */
    let created =
        create_funded_account(&client, &mirror, &config.flow_options(), &mut std::io::stdout())
            .await;

    client.close();

    let created = created?;

    log::debug!("done: {created:?}");

    Ok(())
}
