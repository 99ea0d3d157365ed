//! Merchant balance.

use serde::{Deserialize, Serialize};

/// Balance of the merchant account, one wallet per currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub livemode: bool,
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

/// Funds held in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// ISO currency code in lowercase, e.g. `dzd`
    pub currency: String,
    pub balance: i64,
    #[serde(default)]
    pub ready_for_payout: i64,
    #[serde(default)]
    pub on_hold: i64,
}

impl Balance {
    /// Returns the wallet for `currency`, compared case-insensitively.
    #[must_use]
    pub fn wallet(&self, currency: &str) -> Option<&Wallet> {
        self.wallets
            .iter()
            .find(|w| w.currency.eq_ignore_ascii_case(currency))
    }
}
