//! Transaction detail presentation for a Bitcoin wallet.
//!
//! ## Module Structure
//!
//! - `presenter` - Formats a `TransactionSummary` into a `DisplayModel`
//! - `view` - Detail screen controller: navigation, note edits, sink updates
//! - `lifecycle` - Teardown tracking so late lookups never reach a closed view
//! - `sources` - Traits for the wallet data the view reads
//! - `snapshot` - JSON wallet snapshot implementing those traits
//! - `event_service` / `event_log` - Log-once analytics events
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use txlens::snapshot::WalletSnapshot;
//! use txlens::user_settings::SettingsStore;
//! use txlens::view::{PageRequest, TransactionDetailView, ViewUpdate};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let wallet = Arc::new(WalletSnapshot::load("wallet.json")?);
//! let prefs = SettingsStore::open_default().settings().display_preferences(wallet.as_ref());
//! let mut view = TransactionDetailView::new(wallet.clone(), wallet, prefs, Vec::<ViewUpdate>::new());
//! view.on_view_ready(Some(PageRequest::Position(0))).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod event_log;
pub mod event_service;
pub mod lifecycle;
pub mod notifications;
pub mod presenter;
pub mod snapshot;
pub mod sources;
pub mod strings;
pub mod types;
pub mod user_settings;
pub mod utils;
pub mod view;

pub use error::DetailError;
pub use presenter::TransactionPresenter;
pub use types::{ColorToken, Direction, DisplayModel, RecipientView, TransactionSummary};
pub use user_settings::{DisplayPreferences, SettingsStore, UserSettings};
pub use view::{DisplaySink, PageRequest, TransactionDetailView, ViewUpdate};
