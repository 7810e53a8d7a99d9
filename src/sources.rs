//! Collaborators the detail view reads from.
//!
//! These are implemented by the wallet (payload, contacts, price service,
//! history cache). `snapshot::WalletSnapshot` implements all of them from a
//! JSON file.
#![allow(async_fn_in_trait)]

use crate::types::TransactionSummary;
use anyhow::Result;

/// Address labels from the wallet payload.
pub trait AddressBook {
    /// Label for an address, or the address itself when it has none
    fn label_for(&self, address: &str) -> String;
}

/// Contact names attached to transactions (payment requests).
pub trait ContactDirectory {
    fn contact_for_transaction(&self, tx_hash: &str) -> Option<String>;
}

pub trait ExchangeRates {
    /// Cached price of one BTC in `currency`, `0.0` if unknown
    fn last_price(&self, currency: &str) -> f64;

    /// Fiat value of `satoshis` at `time_ms` (epoch milliseconds)
    async fn historic_value(&self, satoshis: u64, currency: &str, time_ms: i64) -> Result<f64>;
}

/// Transaction history, as listed on the balance screen.
pub trait TransactionRepository {
    fn transaction_at(&self, position: usize) -> Option<TransactionSummary>;

    async fn transaction_by_hash(&self, hash: &str) -> Result<TransactionSummary>;
}

/// Per-transaction notes stored in the wallet payload.
pub trait NotesStore {
    fn note_for(&self, tx_hash: &str) -> Option<String>;

    /// Persist a note. `Ok(false)` means the remote save was refused.
    async fn update_note(&self, tx_hash: &str, note: &str) -> Result<bool>;
}
