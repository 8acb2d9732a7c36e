// SPDX-License-Identifier: Apache-2.0

use hedera::{
    AccountBalanceQuery,
    Hbar,
};
use hedera_account_demo::{
    create_funded_account,
    BalanceReport,
    FlowOptions,
    MirrorNodeClient,
};

use crate::common::{
    setup_nonfree,
    TestEnvironment,
};

#[tokio::test]
async fn create_fund_and_report() -> anyhow::Result<()> {
    let Some(TestEnvironment { config, client }) = setup_nonfree() else {
        return Ok(());
    };

    let mirror = MirrorNodeClient::new(config.run.mirror_node_url()?)?;
    let options =
        FlowOptions { initial_balance: Hbar::new(1), mirror_attempts: 5, ..FlowOptions::default() };
    let mut out = Vec::new();

    let created = create_funded_account(&client, &mirror, &options, &mut out).await?;

    assert_ne!(created.account_id, client.operator_account_id());

    let out = String::from_utf8(out)?;
    assert!(out.contains(&format!("Hedera account created: {}", created.account_id)));
    assert!(out.contains(&format!("EVM Address: {}", created.evm_address)));

    // the mirror node may lag behind even after retrying.
    if let BalanceReport::Available { tinybars } = created.balance {
        assert_eq!(tinybars, Hbar::new(1).to_tinybars());
    }

    let balance =
        AccountBalanceQuery::new().account_id(created.account_id).execute(client.client()).await?;

    assert_eq!(balance.hbars, Hbar::new(1));

    Ok(())
}
