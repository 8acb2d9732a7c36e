// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::time::Duration;

use hedera::{
    AccountId,
    EvmAddress,
    Hbar,
};

use super::Ledger;
use crate::mirror::{
    query_balance,
    BalanceReport,
    BalanceSource,
};
use crate::AliasKey;

/// Knobs for [`create_funded_account`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions {
    /// Amount the new account is funded with.
    pub initial_balance: Hbar,

    /// Fixed wait between the receipt and the first Mirror Node query.
    pub mirror_delay: Duration,

    /// Maximum number of Mirror Node queries while no balance is available.
    pub mirror_attempts: u32,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            initial_balance: Hbar::new(20),
            mirror_delay: Duration::from_secs(6),
            mirror_attempts: 1,
        }
    }
}

/// The outcome of [`create_funded_account`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatedAccount {
    /// Id of the new account, taken from the receipt.
    pub account_id: AccountId,

    /// EVM address the account is aliased by.
    pub evm_address: EvmAddress,

    /// Balance as seen by the Mirror Node.
    pub balance: BalanceReport,
}

/// Create a new account keyed by a fresh ECDSA key, fund it, and report its Mirror Node balance.
///
/// Progress and results are written to `out` as they happen:
///
/// ```text
/// Hedera account created: 0.0.12345
/// EVM Address: 0x…
/// Waiting for Mirror Node to update...
///
/// Account balance: 20.00000000 ℏ
/// ```
///
/// The generated private key is dropped when this returns.
///
/// # Errors
/// - [`Error::UnsupportedAliasKey`](crate::Error::UnsupportedAliasKey) if key generation fails.
/// - Any error from [`Ledger::create_account`], before anything is queried.
/// - Any error from [`BalanceSource::fetch_balances`].
/// - [`Error::Output`](crate::Error::Output) if writing to `out` fails.
pub async fn create_funded_account<L, M, W>(
    ledger: &L,
    mirror: &M,
    options: &FlowOptions,
    out: &mut W,
) -> crate::Result<CreatedAccount>
where
    L: Ledger + ?Sized,
    M: BalanceSource + ?Sized,
    W: Write,
{
    let key = AliasKey::generate()?;
    let evm_address = key.evm_address();

    log::debug!("generated alias key for {evm_address}");

    let account_id = ledger.create_account(&key, options.initial_balance).await?;

    writeln!(out, "Hedera account created: {account_id}")?;
    writeln!(out, "EVM Address: {evm_address}")?;
    writeln!(out, "Waiting for Mirror Node to update...")?;
    writeln!(out)?;
    out.flush()?;

    if !options.mirror_delay.is_zero() {
        tokio::time::sleep(options.mirror_delay).await;
    }

    let balance = query_balance(mirror, account_id, options.mirror_attempts).await?;

    writeln!(out, "{balance}")?;

    Ok(CreatedAccount { account_id, evm_address, balance })
}
