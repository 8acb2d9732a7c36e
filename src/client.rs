// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use hedera::{
    AccountCreateTransaction,
    AccountId,
    Client,
    Hbar,
};

use crate::account::Ledger;
use crate::{
    AliasKey,
    BoxFuture,
    Error,
    OperatorCredentials,
};

/// A [`Client`] with an operator set, that pays for and signs everything it submits.
///
/// The connection is released when this is dropped, so any early return through `?`
/// releases it too. [`close`](Self::close) does the same, explicitly.
pub struct OperatorClient {
    client: Client,
    network: String,
    operator_account_id: AccountId,
}

impl OperatorClient {
    /// Connect to the named network (`mainnet`, `testnet`, `previewnet` or `localhost`)
    /// with `credentials` as the operator.
    ///
    /// # Errors
    /// - [`Error::Client`] if the network name is unknown.
    /// - [`Error::MalformedCredential`] if the operator account id carries a checksum that
    ///   doesn't match the network.
    pub fn connect(network: &str, credentials: OperatorCredentials) -> crate::Result<Self> {
        let client = Client::for_name(network).map_err(Error::Client)?;

        let OperatorCredentials { account_id, private_key } = credentials;

        account_id.validate_checksum(&client).map_err(|source| Error::MalformedCredential {
            name: crate::OPERATOR_ID,
            source,
        })?;

        client.set_operator(account_id, private_key);

        log::info!("connected to `{network}` as operator `{account_id}`");

        Ok(Self { client, network: network.to_owned(), operator_account_id: account_id })
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the name of the network this client is connected to.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Returns the operator's account id.
    #[must_use]
    pub fn operator_account_id(&self) -> AccountId {
        self.operator_account_id
    }

    /// Release the connection.
    pub fn close(self) {
        drop(self);
    }

    async fn execute_account_create(
        &self,
        key: &AliasKey,
        initial_balance: Hbar,
    ) -> crate::Result<AccountId> {
        let mut transaction = AccountCreateTransaction::new();

        transaction
            .key(key.public_key())
            .alias(key.evm_address())
            .initial_balance(initial_balance);

        let response = transaction.execute(&self.client).await.map_err(Error::Submit)?;

        log::debug!("submitted account create transaction `{}`", response.transaction_id);

        let receipt = response.get_receipt(&self.client).await.map_err(Error::Receipt)?;

        let account_id = receipt.account_id.ok_or(Error::MissingAccountId)?;

        log::info!("created account `{account_id}` funded with {initial_balance}");

        Ok(account_id)
    }
}

impl Ledger for OperatorClient {
    fn create_account<'a>(
        &'a self,
        key: &'a AliasKey,
        initial_balance: Hbar,
    ) -> BoxFuture<'a, crate::Result<AccountId>> {
        Box::pin(self.execute_account_create(key, initial_balance))
    }
}

impl fmt::Debug for OperatorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorClient")
            .field("network", &self.network)
            .field("operator_account_id", &self.operator_account_id)
            .finish_non_exhaustive()
    }
}

impl Drop for OperatorClient {
    fn drop(&mut self) {
        log::debug!("closing client for `{}`", self.network);
    }
}
