//! JSON-backed wallet snapshot.
//!
//! Holds an exported transaction history plus the labels, contacts, notes
//! and prices needed to render it, and serves them through the `sources`
//! traits.

use crate::sources::{AddressBook, ContactDirectory, ExchangeRates, NotesStore, TransactionRepository};
use crate::types::TransactionSummary;
use crate::utils::satoshis_to_btc;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

/// A recorded price of one BTC at a point in time.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricPrice {
    pub currency: String,
    pub time_ms: i64,
    pub price: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotFile {
    transactions: Vec<TransactionSummary>,
    labels: HashMap<String, String>,
    contacts: HashMap<String, String>,
    notes: HashMap<String, String>,
    last_prices: HashMap<String, f64>,
    historic_prices: Vec<HistoricPrice>,
}

#[derive(Debug, Default)]
pub struct WalletSnapshot {
    transactions: Vec<TransactionSummary>,
    labels: HashMap<String, String>,
    contacts: HashMap<String, String>,
    notes: RwLock<HashMap<String, String>>,
    last_prices: HashMap<String, f64>,
    historic_prices: Vec<HistoricPrice>,
}

impl From<SnapshotFile> for WalletSnapshot {
    fn from(file: SnapshotFile) -> Self {
        let mut historic_prices = file.historic_prices;
        historic_prices.sort_by_key(|p| p.time_ms);
        Self {
            transactions: file.transactions,
            labels: file.labels,
            contacts: file.contacts,
            notes: RwLock::new(file.notes),
            last_prices: file.last_prices,
            historic_prices,
        }
    }
}

impl WalletSnapshot {
    pub fn from_json(content: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(content)?;
        Ok(file.into())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {:?}", path))?;
        let snapshot = Self::from_json(&content)
            .with_context(|| format!("Failed to parse snapshot {:?}", path))?;
        tracing::info!(
            "Loaded snapshot from {:?} ({} transactions)",
            path,
            snapshot.transactions.len()
        );
        Ok(snapshot)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Latest recorded price at or before `time_ms`
    fn price_at(&self, currency: &str, time_ms: i64) -> Option<f64> {
        self.historic_prices
            .iter()
            .filter(|p| p.currency.eq_ignore_ascii_case(currency) && p.time_ms <= time_ms)
            .last()
            .map(|p| p.price)
    }
}

impl AddressBook for WalletSnapshot {
    fn label_for(&self, address: &str) -> String {
        self.labels
            .get(address)
            .filter(|l| !l.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| address.to_string())
    }
}

impl ContactDirectory for WalletSnapshot {
    fn contact_for_transaction(&self, tx_hash: &str) -> Option<String> {
        self.contacts.get(tx_hash).cloned()
    }
}

impl ExchangeRates for WalletSnapshot {
    fn last_price(&self, currency: &str) -> f64 {
        self.last_prices.get(currency).copied().unwrap_or(0.0)
    }

    async fn historic_value(&self, satoshis: u64, currency: &str, time_ms: i64) -> Result<f64> {
        let price = self
            .price_at(currency, time_ms)
            .ok_or_else(|| anyhow!("No {} price recorded before {}", currency, time_ms))?;
        Ok(price * satoshis_to_btc(satoshis))
    }
}

impl TransactionRepository for WalletSnapshot {
    fn transaction_at(&self, position: usize) -> Option<TransactionSummary> {
        self.transactions.get(position).cloned()
    }

    async fn transaction_by_hash(&self, hash: &str) -> Result<TransactionSummary> {
        self.transactions
            .iter()
            .find(|tx| tx.hash.eq_ignore_ascii_case(hash))
            .cloned()
            .ok_or_else(|| anyhow!("Transaction {} is not in the snapshot", hash))
    }
}

impl NotesStore for WalletSnapshot {
    fn note_for(&self, tx_hash: &str) -> Option<String> {
        let notes = self.notes.read().ok()?;
        notes.get(tx_hash).cloned()
    }

    async fn update_note(&self, tx_hash: &str, note: &str) -> Result<bool> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| anyhow!("Notes lock poisoned"))?;
        if note.trim().is_empty() {
            notes.remove(tx_hash);
        } else {
            notes.insert(tx_hash.to_string(), note.to_string());
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "transactions": [
            {
                "hash": "aa11",
                "direction": "RECEIVED",
                "total": 500000000,
                "fee": 10000,
                "time": 1487775840,
                "confirmations": 5,
                "inputs": {"1Sender": 500010000},
                "outputs": {"1Mine": 500000000}
            }
        ],
        "labels": {"1Mine": "Savings", "1Blank": "  "},
        "contacts": {"aa11": "Alice"},
        "notes": {"aa11": "rent"},
        "last_prices": {"EUR": 900.0},
        "historic_prices": [
            {"currency": "USD", "time_ms": 2000, "price": 2000.0},
            {"currency": "USD", "time_ms": 1000, "price": 1000.0}
        ]
    }"#;

    fn snapshot() -> WalletSnapshot {
        WalletSnapshot::from_json(SNAPSHOT).unwrap()
    }

    #[test]
    fn test_label_falls_back_to_address() {
        let snap = snapshot();
        assert_eq!(snap.label_for("1Mine"), "Savings");
        assert_eq!(snap.label_for("1Unknown"), "1Unknown");
        assert_eq!(snap.label_for("1Blank"), "1Blank");
    }

    #[test]
    fn test_transaction_at_position() {
        let snap = snapshot();
        assert_eq!(snap.transaction_count(), 1);
        assert_eq!(snap.transaction_at(0).unwrap().hash, "aa11");
        assert!(snap.transaction_at(1).is_none());
    }

    #[test]
    fn test_last_price_unknown_currency_is_zero() {
        let snap = snapshot();
        assert_eq!(snap.last_price("EUR"), 900.0);
        assert_eq!(snap.last_price("GBP"), 0.0);
    }

    #[test]
    fn test_empty_snapshot_parses() {
        let snap = WalletSnapshot::from_json("{}").unwrap();
        assert_eq!(snap.transaction_count(), 0);
    }

    #[tokio::test]
    async fn test_historic_value_uses_latest_price_before_time() {
        let snap = snapshot();
        let value = snap.historic_value(50_000_000, "USD", 1500).await.unwrap();
        assert_eq!(value, 500.0);
        let value = snap.historic_value(100_000_000, "USD", 5000).await.unwrap();
        assert_eq!(value, 2000.0);
    }

    #[tokio::test]
    async fn test_historic_value_missing_price_fails() {
        let snap = snapshot();
        assert!(snap.historic_value(1, "USD", 10).await.is_err());
    }

    #[tokio::test]
    async fn test_transaction_by_hash() {
        let snap = snapshot();
        assert!(snap.transaction_by_hash("AA11").await.is_ok());
        assert!(snap.transaction_by_hash("bb22").await.is_err());
    }

    #[tokio::test]
    async fn test_update_note_overwrites_and_clears() {
        let snap = snapshot();
        assert_eq!(snap.note_for("aa11").as_deref(), Some("rent"));
        assert!(snap.update_note("aa11", "groceries").await.unwrap());
        assert_eq!(snap.note_for("aa11").as_deref(), Some("groceries"));
        assert!(snap.update_note("aa11", "").await.unwrap());
        assert!(snap.note_for("aa11").is_none());
    }
}
