//! Common types shared across modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which way value moved relative to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Sent,
    Received,
    /// Moved between the wallet's own addresses.
    Transferred,
}

/// Transaction summary as produced by the wallet's history sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub hash: String,
    pub direction: Direction,
    /// Net amount in satoshis, negative for outgoing value.
    pub total: i64,
    /// Fee in satoshis
    #[serde(default)]
    pub fee: u64,
    /// Block time in epoch seconds
    pub time: i64,
    #[serde(default)]
    pub confirmations: u64,
    /// Input address to amount (satoshis)
    #[serde(default)]
    pub inputs: BTreeMap<String, u64>,
    /// Output address to amount (satoshis)
    #[serde(default)]
    pub outputs: BTreeMap<String, u64>,
    #[serde(default)]
    pub double_spend: bool,
}

/// One row in the "To" section of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientView {
    pub label: String,
    pub amount: String,
    pub unit: String,
}

/// Colour resource for the transaction header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorToken {
    SentConfirmed,
    SentPending,
    ReceivedConfirmed,
    ReceivedPending,
    TransferredConfirmed,
    TransferredPending,
}

impl ColorToken {
    pub fn for_transaction(direction: Direction, pending: bool) -> Self {
        match (direction, pending) {
            (Direction::Sent, false) => ColorToken::SentConfirmed,
            (Direction::Sent, true) => ColorToken::SentPending,
            (Direction::Received, false) => ColorToken::ReceivedConfirmed,
            (Direction::Received, true) => ColorToken::ReceivedPending,
            (Direction::Transferred, false) => ColorToken::TransferredConfirmed,
            (Direction::Transferred, true) => ColorToken::TransferredPending,
        }
    }

    /// Resource name understood by the host's theme.
    pub fn resource_name(&self) -> &'static str {
        match self {
            ColorToken::SentConfirmed => "product_red_sent",
            ColorToken::SentPending => "product_red_sent_50",
            ColorToken::ReceivedConfirmed => "product_green_received",
            ColorToken::ReceivedPending => "product_green_received_50",
            ColorToken::TransferredConfirmed => "product_gray_transferred",
            ColorToken::TransferredPending => "product_gray_transferred_50",
        }
    }
}

/// Everything the detail screen shows for one transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub direction: Direction,
    pub color: ColorToken,
    /// Absolute amount in the display unit, with unit suffix
    pub value_btc: String,
    /// Fiat equivalent; `None` until the historic lookup (USD) resolves
    pub value_fiat: Option<String>,
    pub recipients: Vec<RecipientView>,
    pub from_label: String,
    pub status: String,
    pub hash: String,
    pub explorer_url: String,
    pub fee: String,
    pub date: String,
    pub note: Option<String>,
    pub double_spend: bool,
}
