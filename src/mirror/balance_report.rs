// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use hedera::Hbar;

use super::BalancesResponse;

const TINYBARS_PER_HBAR: u64 = 100_000_000;

/// What the Mirror Node knows about an account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceReport {
    /// The first balance entry, in tinybars.
    Available { tinybars: i64 },

    /// The Mirror Node returned no entries; it hasn't caught up with consensus yet.
    NotYetAvailable,
}

impl BalanceReport {
    /// Report on the first entry of `response`.
    ///
    /// The presence of an entry decides availability, a zero balance is still `Available`.
    #[must_use]
    pub fn from_response(response: &BalancesResponse) -> Self {
        match response.balances.first() {
            Some(entry) => Self::Available { tinybars: entry.balance },
            None => Self::NotYetAvailable,
        }
    }

    /// Returns `true` if the Mirror Node had a balance entry.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Returns the balance as [`Hbar`], if available.
    #[must_use]
    pub fn hbars(&self) -> Option<Hbar> {
        match *self {
            Self::Available { tinybars } => Some(Hbar::from_tinybars(tinybars)),
            Self::NotYetAvailable => None,
        }
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Available { tinybars } => {
                write!(f, "Account balance: {} ℏ", format_tinybars(tinybars))
            }
            Self::NotYetAvailable => f.write_str("Account balance not yet available in Mirror Node"),
        }
    }
}

/// Render `tinybars` as hbars with exactly 8 decimal places, e.g. `2000000000` as `20.00000000`.
#[must_use]
pub fn format_tinybars(tinybars: i64) -> String {
    let sign = if tinybars < 0 { "-" } else { "" };
    let abs = tinybars.unsigned_abs();

    format!("{sign}{}.{:08}", abs / TINYBARS_PER_HBAR, abs % TINYBARS_PER_HBAR)
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use hedera::Hbar;

    use super::{
        format_tinybars,
        BalanceReport,
    };
    use crate::mirror::{
        BalanceEntry,
        BalancesResponse,
    };

    fn response(balances: &[i64]) -> BalancesResponse {
        BalancesResponse {
            timestamp: None,
            balances: balances
                .iter()
                .map(|&balance| BalanceEntry { account: None, balance })
                .collect(),
        }
    }

    #[test]
    fn format() {
        assert_eq!(format_tinybars(2_000_000_000), "20.00000000");
        assert_eq!(format_tinybars(0), "0.00000000");
        assert_eq!(format_tinybars(1), "0.00000001");
        assert_eq!(format_tinybars(123_456_789), "1.23456789");
        assert_eq!(format_tinybars(100_000_000), "1.00000000");
        assert_eq!(format_tinybars(-150_000_000), "-1.50000000");
    }

    #[test]
    fn format_extremes() {
        assert_eq!(format_tinybars(i64::MAX), "92233720368.54775807");
        assert_eq!(format_tinybars(i64::MIN), "-92233720368.54775808");
    }

    #[test]
    fn first_entry_is_reported() {
        let report = BalanceReport::from_response(&response(&[2_000_000_000, 5]));

        assert_eq!(report, BalanceReport::Available { tinybars: 2_000_000_000 });
        assert_eq!(report.hbars(), Some(Hbar::new(20)));
    }

    #[test]
    fn zero_balance_is_available() {
        let report = BalanceReport::from_response(&response(&[0]));

        assert!(report.is_available());
        expect!["Account balance: 0.00000000 ℏ"].assert_eq(&report.to_string());
    }

    #[test]
    fn empty_is_not_yet_available() {
        let report = BalanceReport::from_response(&response(&[]));

        assert_eq!(report, BalanceReport::NotYetAvailable);
        assert_eq!(report.hbars(), None);
        expect!["Account balance not yet available in Mirror Node"].assert_eq(&report.to_string());
    }

    #[test]
    fn display_available() {
        let report = BalanceReport::Available { tinybars: 2_000_000_000 };

        expect!["Account balance: 20.00000000 ℏ"].assert_eq(&report.to_string());
    }
}
