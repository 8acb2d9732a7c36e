// SPDX-License-Identifier: Apache-2.0

//! Reading account balances back from a Mirror Node.

mod balance_query;
mod balance_report;
mod balances_response;
mod mirror_node_client;

use hedera::AccountId;

pub use balance_query::query_balance;
pub use balance_report::{
    format_tinybars,
    BalanceReport,
};
pub use balances_response::{
    BalanceEntry,
    BalancesResponse,
};
pub use mirror_node_client::MirrorNodeClient;

use crate::BoxFuture;

/// Somewhere account balances can be read from.
///
/// Implemented by [`MirrorNodeClient`] over the Mirror Node REST API.
pub trait BalanceSource: Send + Sync {
    /// Fetch the balances document for `account_id`.
    fn fetch_balances(&self, account_id: AccountId) -> BoxFuture<'_, crate::Result<BalancesResponse>>;
}

impl<S: BalanceSource + ?Sized> BalanceSource for &S {
    fn fetch_balances(&self, account_id: AccountId) -> BoxFuture<'_, crate::Result<BalancesResponse>> {
        (**self).fetch_balances(account_id)
    }
}
