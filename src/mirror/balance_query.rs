// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use backoff::backoff::Backoff;
use backoff::{
    ExponentialBackoff,
    ExponentialBackoffBuilder,
};
use hedera::AccountId;

use super::{
    BalanceReport,
    BalanceSource,
};

fn default_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(500))
        .with_max_interval(Duration::from_secs(8))
        .with_max_elapsed_time(None)
        .build()
}

/// Query `source` for the balance of `account_id`, making at most `attempts` queries.
///
/// Only an empty balance list is retried, with exponential backoff between queries;
/// any error is returned immediately. With `attempts == 1` this is a single query.
/// The last report is returned as is, even if it is still [`BalanceReport::NotYetAvailable`].
///
/// # Errors
/// - Any error returned by [`BalanceSource::fetch_balances`].
pub async fn query_balance<S>(
    source: &S,
    account_id: AccountId,
    attempts: u32,
) -> crate::Result<BalanceReport>
where
    S: BalanceSource + ?Sized,
{
    query_balance_with(source, account_id, attempts, default_backoff()).await
}

pub(crate) async fn query_balance_with<S, B>(
    source: &S,
    account_id: AccountId,
    attempts: u32,
    mut backoff: B,
) -> crate::Result<BalanceReport>
where
    S: BalanceSource + ?Sized,
    B: Backoff,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let response = source.fetch_balances(account_id).await?;
        let report = BalanceReport::from_response(&response);

        if report.is_available() || attempt >= attempts {
            return Ok(report);
        }

        let Some(delay) = backoff.next_backoff() else {
            return Ok(report);
        };

        log::info!(
            "balance of `{account_id}` not yet available (attempt {attempt}/{attempts}), retrying in {delay:?}"
        );

        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
