//! Analytics events that are reported at most once per install.
//!
//! Whether an event has been reported is kept in a persisted flag set.
//! `SettingsStore` stores it as `UserSettings::logged_events` and writes it
//! back whenever a flag is marked. Address input events are not gated and
//! are reported every time.
#![allow(async_fn_in_trait)]

use anyhow::Result;

pub const EVENT_2ND_PW: &str = "wallet_login_second_password_";
pub const EVENT_LEGACY: &str = "wallet_login_legacy_use_";
pub const EVENT_BACKUP: &str = "wallet_login_recovery_phrase_";

pub const EVENT_TX_INPUT_FROM_QR: &str = "wallet_tx_input_from_qr";
pub const EVENT_TX_INPUT_FROM_PASTE: &str = "wallet_tx_input_from_paste";
pub const EVENT_TX_INPUT_FROM_URI: &str = "wallet_tx_input_from_uri";
pub const EVENT_TX_INPUT_FROM_DROPDOWN: &str = "wallet_tx_input_from_dropdown";
pub const EVENT_TX_INPUT_FROM_CONTACTS: &str = "wallet_tx_input_from_contacts";

pub const KEY_EVENT_2ND_PW: &str = "event_2nd_pw";
pub const KEY_EVENT_LEGACY: &str = "event_legacy";
pub const KEY_EVENT_BACKUP: &str = "event_backup";

/// Destination for analytics events.
pub trait EventReporter {
    /// Report `event`; `Ok(true)` when it was accepted
    async fn log_event(&self, event: &str) -> Result<bool>;
}

/// Persisted "already reported" flags.
pub trait EventFlags {
    fn is_logged(&self, key: &str) -> bool;
    fn mark_logged(&mut self, key: &str);
}

pub struct EventService<R, F> {
    reporter: R,
    flags: F,
}

impl<R: EventReporter, F: EventFlags> EventService<R, F> {
    pub fn new(reporter: R, flags: F) -> Self {
        Self { reporter, flags }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn flags(&self) -> &F {
        &self.flags
    }

    pub fn into_parts(self) -> (R, F) {
        (self.reporter, self.flags)
    }

    /// Whether the wallet uses a second password.
    pub async fn log_second_password_event(&mut self, enabled: bool) {
        self.log_once(KEY_EVENT_2ND_PW, EVENT_2ND_PW, enabled).await;
    }

    /// Whether the wallet holds legacy (imported) addresses.
    pub async fn log_legacy_event(&mut self, enabled: bool) {
        self.log_once(KEY_EVENT_LEGACY, EVENT_LEGACY, enabled).await;
    }

    /// Whether the recovery phrase has been backed up.
    pub async fn log_backup_event(&mut self, enabled: bool) {
        self.log_once(KEY_EVENT_BACKUP, EVENT_BACKUP, enabled).await;
    }

    /// How a send address was entered. Reported every time.
    pub async fn log_address_input_event(&self, event: &str) {
        if let Err(e) = self.reporter.log_event(event).await {
            tracing::warn!("Failed to log event {}: {}", event, e);
        }
    }

    async fn log_once(&mut self, key: &str, event_prefix: &str, enabled: bool) {
        if self.flags.is_logged(key) {
            return;
        }
        let event = format!("{}{}", event_prefix, if enabled { "1" } else { "0" });
        match self.reporter.log_event(&event).await {
            Ok(true) => self.flags.mark_logged(key),
            Ok(false) => tracing::debug!("Event {} was not accepted", event),
            Err(e) => tracing::warn!("Failed to log event {}: {}", event, e),
        }
    }
}
