// SPDX-License-Identifier: Apache-2.0

use serde_derive::Deserialize;

/// Response of `GET /api/v1/balances`.
///
/// Only `balances` is required; the Mirror Node also sends pagination `links`, which are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalancesResponse {
    /// Consensus timestamp the balances are as of, e.g. `1712345678.000000000`.
    #[serde(default)]
    pub timestamp: Option<String>,

    /// Balance entries, in the order the Mirror Node returned them.
    pub balances: Vec<BalanceEntry>,
}

/// A single account's balance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalanceEntry {
    /// The account the balance belongs to.
    #[serde(default)]
    pub account: Option<String>,

    /// The balance in tinybars.
    pub balance: i64,
}

#[cfg(test)]
mod tests {
    use super::{
        BalanceEntry,
        BalancesResponse,
    };

    #[test]
    fn decode_minimal() {
        let response: BalancesResponse =
            serde_json::from_str(r#"{"balances":[{"balance":2000000000}]}"#).unwrap();

        assert_eq!(
            response,
            BalancesResponse {
                timestamp: None,
                balances: vec![BalanceEntry { account: None, balance: 2_000_000_000 }],
            }
        );
    }

    #[test]
    fn decode_full_document() {
        let response: BalancesResponse = serde_json::from_str(
            r#"{
                "timestamp": "1712345678.000000000",
                "balances": [
                    {"account": "0.0.12345", "balance": 5, "tokens": []},
                    {"account": "0.0.12346", "balance": 7, "tokens": []}
                ],
                "links": {"next": null}
            }"#,
        )
        .unwrap();

        assert_eq!(response.timestamp.as_deref(), Some("1712345678.000000000"));
        assert_eq!(response.balances.len(), 2);
        assert_eq!(response.balances[0].account.as_deref(), Some("0.0.12345"));
        assert_eq!(response.balances[1].balance, 7);
    }

    #[test]
    fn decode_empty() {
        let response: BalancesResponse =
            serde_json::from_str(r#"{"timestamp":null,"balances":[],"links":{"next":null}}"#)
                .unwrap();

        assert!(response.balances.is_empty());
    }

    #[test]
    fn missing_balances_is_an_error() {
        assert!(serde_json::from_str::<BalancesResponse>(r#"{"links":{}}"#).is_err());
    }

    #[test]
    fn non_integer_balance_is_an_error() {
        assert!(serde_json::from_str::<BalancesResponse>(r#"{"balances":[{"balance":"1"}]}"#)
            .is_err());
    }
}
