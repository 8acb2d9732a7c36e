// SPDX-License-Identifier: Apache-2.0

use hedera::AccountId;
use url::Url;

use super::{
    BalanceSource,
    BalancesResponse,
};
use crate::{
    BoxFuture,
    Error,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated client for a Mirror Node's REST API.
#[derive(Debug, Clone)]
pub struct MirrorNodeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MirrorNodeClient {
    /// Create a client for the Mirror Node at `base_url`, e.g. `https://testnet.mirrornode.hedera.com`.
    ///
    /// # Errors
    /// - [`Error::Config`] if `base_url` can't be a base (`mailto:` and friends).
    /// - [`Error::MirrorRequest`] if the HTTP client fails to initialize.
    pub fn new(mut base_url: Url) -> crate::Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("`{base_url}` cannot be a mirror node base url")));
        }

        // keep any path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http =
            reqwest::Client::builder().user_agent(USER_AGENT).build().map_err(Error::MirrorRequest)?;

        Ok(Self { http, base_url })
    }

    /// Returns the base URL of the Mirror Node.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the balances endpoint for `account_id`:
    /// `<base>/api/v1/balances?account.id=<account_id>`.
    ///
    /// # Errors
    /// - [`Error::Config`] if the endpoint can't be joined onto the base URL.
    pub fn balances_url(&self, account_id: AccountId) -> crate::Result<Url> {
        let mut url =
            self.base_url.join("api/v1/balances").map_err(|e| Error::Config(e.to_string()))?;

        url.query_pairs_mut().append_pair("account.id", &account_id.to_string());

        Ok(url)
    }

    async fn get_balances(&self, account_id: AccountId) -> crate::Result<BalancesResponse> {
        let url = self.balances_url(account_id)?;

        log::debug!("GET {url}");

        let response = self.http.get(url).send().await.map_err(Error::MirrorRequest)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::MirrorRequest)?;

        if !status.is_success() {
            return Err(Error::MirrorStatus { status, body });
        }

        let response: BalancesResponse = serde_json::from_str(&body).map_err(Error::MirrorDecode)?;

        log::debug!(
            "mirror node returned {} balance entries as of {}",
            response.balances.len(),
            response.timestamp.as_deref().unwrap_or("<unknown>")
        );

        Ok(response)
    }
}

impl BalanceSource for MirrorNodeClient {
    fn fetch_balances(&self, account_id: AccountId) -> BoxFuture<'_, crate::Result<BalancesResponse>> {
        Box::pin(self.get_balances(account_id))
    }
}
