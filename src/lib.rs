// SPDX-License-Identifier: Apache-2.0

//! Create a Hedera account keyed by a fresh ECDSA alias, fund it, and read the
//! resulting balance back from a Mirror Node.
//!
//! The library owns every step; `create-account` only wires configuration,
//! credentials and output together.

use std::future::Future;
use std::pin::Pin;

pub mod account;
mod client;
mod config;
mod error;
pub mod key;
pub mod mirror;
mod operator;

pub use account::{
    create_funded_account,
    CreatedAccount,
    FlowOptions,
    Ledger,
};
pub use client::OperatorClient;
pub use config::Config;
pub use error::Error;
pub use key::AliasKey;
pub use mirror::{
    format_tinybars,
    query_balance,
    BalanceEntry,
    BalanceReport,
    BalanceSource,
    BalancesResponse,
    MirrorNodeClient,
};
pub use operator::{
    OperatorCredentials,
    OPERATOR_ID,
    OPERATOR_KEY,
};

/// Boxed future returned by the [`Ledger`] and [`BalanceSource`] seams.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
