// SPDX-License-Identifier: Apache-2.0

mod account_create_flow;

use hedera::{
    AccountId,
    Hbar,
};

pub use account_create_flow::{
    create_funded_account,
    CreatedAccount,
    FlowOptions,
};

use crate::{
    AliasKey,
    BoxFuture,
};

/// The ledger that accounts get created on.
///
/// Implemented by [`OperatorClient`](crate::OperatorClient) for the Hedera network.
pub trait Ledger: Send + Sync {
    /// Create an account keyed (and aliased) by `key`, funded with `initial_balance`,
    /// and wait for its receipt.
    ///
    /// Returns the id of the new account.
    fn create_account<'a>(
        &'a self,
        key: &'a AliasKey,
        initial_balance: Hbar,
    ) -> BoxFuture<'a, crate::Result<AccountId>>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    fn create_account<'a>(
        &'a self,
        key: &'a AliasKey,
        initial_balance: Hbar,
    ) -> BoxFuture<'a, crate::Result<AccountId>> {
        (**self).create_account(key, initial_balance)
    }
}
