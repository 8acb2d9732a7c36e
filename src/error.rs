// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Represents any possible error from creating the account or reading its balance back.
///
/// Every variant is fatal for the flow; an empty balance list from the Mirror Node is
/// not an error and is reported through [`BalanceReport`](crate::BalanceReport) instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required credential was not present in the environment, or was blank.
    #[error("`{name}` is not set")]
    MissingCredential { name: &'static str },

    /// A credential was present but failed to parse.
    #[error("`{name}` is malformed: {source}")]
    MalformedCredential {
        name: &'static str,
        #[source]
        source: hedera::Error,
    },

    /// The runtime configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The ledger client could not be created or configured.
    #[error("failed to initialize client: {0}")]
    Client(#[source] hedera::Error),

    /// The key cannot be used as an account alias (only ECDSA(secp256k1) keys can).
    #[error("key cannot be used as an EVM address alias: {0}")]
    UnsupportedAliasKey(String),

    /// The account create transaction failed before reaching consensus.
    #[error("failed to submit account create transaction: {0}")]
    Submit(#[source] hedera::Error),

    /// The receipt for the submitted transaction could not be retrieved.
    #[error("failed to get transaction receipt: {0}")]
    Receipt(#[source] hedera::Error),

    /// The receipt succeeded but carries no account id.
    #[error("transaction receipt is missing the new account id")]
    MissingAccountId,

    /// The Mirror Node request failed at the transport level.
    #[error("mirror node request failed: {0}")]
    MirrorRequest(#[source] reqwest::Error),

    /// The Mirror Node answered with a non-success status.
    #[error("mirror node responded with status {status}: {body}")]
    MirrorStatus { status: StatusCode, body: String },

    /// The Mirror Node response body was not the expected JSON document.
    #[error("failed to decode mirror node response: {0}")]
    MirrorDecode(#[source] serde_json::Error),

    /// Writing the report to the output failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
