// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use hedera::{
    AccountId,
    PrivateKey,
};

use crate::Error;

/// Environment variable holding the operator's account id, e.g. `0.0.1234`.
pub const OPERATOR_ID: &str = "OPERATOR_ID";

/// Environment variable holding the operator's private key.
pub const OPERATOR_KEY: &str = "OPERATOR_KEY";

/// The account that pays for, and signs, the account create transaction.
#[derive(Clone)]
pub struct OperatorCredentials {
    /// The operator's account id.
    pub account_id: AccountId,

    /// The operator's private key.
    pub private_key: PrivateKey,
}

impl OperatorCredentials {
    /// Load the operator credentials from `OPERATOR_ID` and `OPERATOR_KEY`.
    ///
    /// # Errors
    /// - [`Error::MissingCredential`] if either variable is unset or blank.
    /// - [`Error::MalformedCredential`] if either value fails to parse.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the operator credentials through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account_id = required(&lookup, OPERATOR_ID)?;
        let private_key = required(&lookup, OPERATOR_KEY)?;

        Self::parse(&account_id, &private_key)
    }

    /// Parse already-read credential strings.
    ///
    /// # Errors
    /// - [`Error::MalformedCredential`] if either value fails to parse.
    pub fn parse(account_id: &str, private_key: &str) -> crate::Result<Self> {
        let account_id = AccountId::from_str(account_id.trim())
            .map_err(|source| Error::MalformedCredential { name: OPERATOR_ID, source })?;

        let private_key = PrivateKey::from_str(private_key.trim())
            .map_err(|source| Error::MalformedCredential { name: OPERATOR_KEY, source })?;

        Ok(Self { account_id, private_key })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> crate::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingCredential { name }),
    }
}

// the private key never makes it into logs or panic messages.
impl fmt::Debug for OperatorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorCredentials")
            .field("account_id", &self.account_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
