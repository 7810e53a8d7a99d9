//! Formatting of a transaction summary into the detail screen's display model.

use crate::config::{fiat_symbol, get_tx_explorer_url, HISTORIC_PRICE_CURRENCY, REQUIRED_CONFIRMATIONS};
use crate::sources::{AddressBook, ContactDirectory, ExchangeRates, NotesStore};
use crate::strings::DetailStrings;
use crate::types::{ColorToken, Direction, DisplayModel, RecipientView, TransactionSummary};
use crate::user_settings::DisplayPreferences;
use crate::utils::{format_display_amount, format_fiat, format_transaction_date, satoshis_to_btc};
use std::sync::Arc;

/// Turns transaction summaries into display models.
///
/// `W` supplies address labels, contact names and notes; `R` supplies
/// exchange rates. Preferences are passed into every call so a single pass
/// always uses one unit/currency pair.
pub struct TransactionPresenter<W, R> {
    wallet: Arc<W>,
    rates: Arc<R>,
    strings: DetailStrings,
}

impl<W, R> TransactionPresenter<W, R>
where
    W: AddressBook + ContactDirectory + NotesStore,
    R: ExchangeRates,
{
    pub fn new(wallet: Arc<W>, rates: Arc<R>) -> Self {
        Self {
            wallet,
            rates,
            strings: DetailStrings::default(),
        }
    }

    pub fn with_strings(mut self, strings: DetailStrings) -> Self {
        self.strings = strings;
        self
    }

    pub fn strings(&self) -> &DetailStrings {
        &self.strings
    }

    /// Full display model, including the fiat value when it needs a lookup.
    pub async fn present(&self, summary: &TransactionSummary, prefs: &DisplayPreferences) -> DisplayModel {
        let mut model = self.format(summary, prefs);
        if model.value_fiat.is_none() {
            model.value_fiat = self.fiat_value(summary, prefs).await;
        }
        model
    }

    /// Every field that can be computed without waiting on a collaborator.
    ///
    /// `value_fiat` is left empty when the currency needs a historic lookup.
    pub fn format(&self, summary: &TransactionSummary, prefs: &DisplayPreferences) -> DisplayModel {
        let value_fiat = if needs_historic_price(prefs) {
            None
        } else {
            Some(self.current_fiat_value(summary, prefs))
        };

        DisplayModel {
            direction: summary.direction,
            color: transaction_color(summary.direction, summary.confirmations),
            value_btc: self.format_amount(summary.total.unsigned_abs(), prefs),
            value_fiat,
            recipients: self.recipients(summary, prefs),
            from_label: self.sender_label(summary),
            status: self.confirmation_status(summary.confirmations),
            hash: summary.hash.clone(),
            explorer_url: get_tx_explorer_url(&summary.hash),
            fee: self.format_amount(summary.fee, prefs),
            date: format_transaction_date(summary.time, prefs.utc_offset_minutes).unwrap_or_default(),
            note: self.wallet.note_for(&summary.hash),
            double_spend: summary.double_spend,
        }
    }

    /// Fiat equivalent of the transaction.
    ///
    /// USD is valued at the price when the transaction happened; every other
    /// currency uses the cached current rate. A failed historic lookup yields
    /// `None`.
    pub async fn fiat_value(&self, summary: &TransactionSummary, prefs: &DisplayPreferences) -> Option<String> {
        if !needs_historic_price(prefs) {
            return Some(self.current_fiat_value(summary, prefs));
        }

        let satoshis = summary.total.unsigned_abs();
        let time_ms = summary.time.saturating_mul(1000);
        match self
            .rates
            .historic_value(satoshis, &prefs.fiat_currency, time_ms)
            .await
        {
            Ok(value) => {
                let label = match summary.direction {
                    Direction::Sent => &self.strings.value_at_time_sent,
                    Direction::Received => &self.strings.value_at_time_received,
                    Direction::Transferred => &self.strings.value_at_time_transferred,
                };
                Some(format!(
                    "{}{}{}",
                    label,
                    fiat_symbol(&prefs.fiat_currency),
                    format_fiat(value)
                ))
            }
            Err(e) => {
                tracing::warn!(
                    "Historic {} price lookup failed for {}: {}",
                    prefs.fiat_currency,
                    summary.hash,
                    e
                );
                None
            }
        }
    }

    pub fn confirmation_status(&self, confirmations: u64) -> String {
        if confirmations >= REQUIRED_CONFIRMATIONS {
            self.strings.confirmed.clone()
        } else {
            self.strings.pending_status(confirmations, REQUIRED_CONFIRMATIONS)
        }
    }

    /// Input labels, one per line, or the coinbase text when there are none.
    pub fn sender_label(&self, summary: &TransactionSummary) -> String {
        let labels: Vec<String> = summary
            .inputs
            .keys()
            .map(|address| self.wallet.label_for(address))
            .collect();
        let joined = labels.join("\n");
        if joined.is_empty() {
            self.strings.coinbase.clone()
        } else {
            joined
        }
    }

    pub fn recipients(&self, summary: &TransactionSummary, prefs: &DisplayPreferences) -> Vec<RecipientView> {
        let contact = self.wallet.contact_for_transaction(&summary.hash);
        summary
            .outputs
            .iter()
            .map(|(address, amount)| RecipientView {
                label: contact
                    .clone()
                    .unwrap_or_else(|| self.wallet.label_for(address)),
                amount: format_display_amount(*amount, prefs.unit),
                unit: prefs.unit.label().to_string(),
            })
            .collect()
    }

    fn format_amount(&self, satoshis: u64, prefs: &DisplayPreferences) -> String {
        format!(
            "{} {}",
            format_display_amount(satoshis, prefs.unit),
            prefs.unit.label()
        )
    }

    fn current_fiat_value(&self, summary: &TransactionSummary, prefs: &DisplayPreferences) -> String {
        let value = prefs.last_price * satoshis_to_btc(summary.total.unsigned_abs());
        format!(
            "{}{}{}",
            self.strings.value,
            fiat_symbol(&prefs.fiat_currency),
            format_fiat(value)
        )
    }
}

/// Header colour for a direction and confirmation count.
pub fn transaction_color(direction: Direction, confirmations: u64) -> ColorToken {
    ColorToken::for_transaction(direction, confirmations < REQUIRED_CONFIRMATIONS)
}

// TODO: decide with product whether every currency should use the
// historic price; until then only USD does.
fn needs_historic_price(prefs: &DisplayPreferences) -> bool {
    prefs.fiat_currency == HISTORIC_PRICE_CURRENCY
}
