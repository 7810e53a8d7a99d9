use serde::{Deserialize, Serialize};

/// Confirmations after which a transaction is shown as settled.
pub const REQUIRED_CONFIRMATIONS: u64 = 3;

/// Fiat currency for which the value at transaction time is looked up
/// instead of being derived from the cached current rate.
pub const HISTORIC_PRICE_CURRENCY: &str = "USD";

pub const DEFAULT_FIAT_CURRENCY: &str = "USD";

pub const SATOSHIS_PER_BTC: u64 = 100_000_000;

/// Display denomination for BTC amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BtcUnit {
    #[default]
    Btc,
    MilliBtc,
    Bits,
}

/// A denomination with its label and scale.
#[derive(Clone, Debug)]
pub struct UnitSpec {
    pub unit: BtcUnit,
    pub label: &'static str,
    pub satoshis_per_unit: u64,
    /// Maximum fraction digits shown
    pub max_decimals: usize,
}

impl UnitSpec {
    pub const fn new(unit: BtcUnit, label: &'static str, satoshis_per_unit: u64, max_decimals: usize) -> Self {
        Self {
            unit,
            label,
            satoshis_per_unit,
            max_decimals,
        }
    }
}

/// Supported denominations, in the order the settings screen lists them.
pub const UNITS: &[UnitSpec] = &[
    UnitSpec::new(BtcUnit::Btc, "BTC", SATOSHIS_PER_BTC, 8),
    UnitSpec::new(BtcUnit::MilliBtc, "mBTC", 100_000, 5),
    UnitSpec::new(BtcUnit::Bits, "bits", 100, 2),
];

impl BtcUnit {
    pub fn spec(&self) -> &'static UnitSpec {
        // UNITS has one entry per variant
        UNITS
            .iter()
            .find(|u| u.unit == *self)
            .unwrap_or(&UNITS[0])
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Find a unit by its display label (case-insensitive)
    pub fn from_label(label: &str) -> Option<BtcUnit> {
        UNITS
            .iter()
            .find(|u| u.label.eq_ignore_ascii_case(label.trim()))
            .map(|u| u.unit)
    }
}

/// Currency symbol for a fiat code, falling back to the code itself.
pub fn fiat_symbol(code: &str) -> &str {
    match code {
        "USD" | "AUD" | "CAD" | "NZD" | "SGD" | "HKD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "RUB" => "₽",
        "BRL" => "R$",
        "CHF" => "CHF",
        _ => code,
    }
}

/// Base URL of the block explorer used for transaction links
pub const BLOCK_EXPLORER_URL: &str = "https://www.blockchain.com/btc";

/// Get the full URL to view a transaction on the block explorer
pub fn get_tx_explorer_url(tx_hash: &str) -> String {
    format!("{}/tx/{}", BLOCK_EXPLORER_URL, tx_hash)
}
