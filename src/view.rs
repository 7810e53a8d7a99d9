//! Transaction detail screen controller.
//!
//! Resolves which transaction to show, runs a presentation pass, pushes the
//! result to a [`DisplaySink`] and handles note edits. Every await races the
//! view's lifecycle so nothing reaches the sink after teardown.

use crate::error::{DetailError, Result};
use crate::lifecycle::{LifecycleHandle, ViewLifecycle};
use crate::notifications::Toast;
use crate::presenter::TransactionPresenter;
use crate::sources::{AddressBook, ContactDirectory, ExchangeRates, NotesStore, TransactionRepository};
use crate::strings::DetailStrings;
use crate::types::{DisplayModel, TransactionSummary};
use crate::user_settings::DisplayPreferences;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How the host asked for a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// Index into the cached transaction list; negative means "none"
    Position(i64),
    Hash(String),
}

/// One change for the display to apply.
#[derive(Debug, Clone)]
pub enum ViewUpdate {
    Model(DisplayModel),
    /// Fiat value that arrived after the model
    FiatValue(String),
    Note(Option<String>),
    Toast(Toast),
    /// The view has nothing to show and should close
    Finish,
}

/// Receiver of view updates, typically the UI layer.
pub trait DisplaySink {
    fn render(&mut self, update: ViewUpdate);
}

impl DisplaySink for Vec<ViewUpdate> {
    fn render(&mut self, update: ViewUpdate) {
        self.push(update);
    }
}

/// Reject blank hashes; anything else is left to the repository.
fn require_hash(hash: &str) -> Result<()> {
    if hash.trim().is_empty() {
        return Err(DetailError::InvalidHash(hash.to_string()));
    }
    Ok(())
}

pub struct TransactionDetailView<W, R, S> {
    presenter: TransactionPresenter<W, R>,
    wallet: Arc<W>,
    prefs: DisplayPreferences,
    sink: S,
    lifecycle: ViewLifecycle,
    transaction: Option<TransactionSummary>,
}

impl<W, R, S> TransactionDetailView<W, R, S>
where
    W: AddressBook + ContactDirectory + NotesStore + TransactionRepository,
    R: ExchangeRates,
    S: DisplaySink,
{
    pub fn new(wallet: Arc<W>, rates: Arc<R>, prefs: DisplayPreferences, sink: S) -> Self {
        Self {
            presenter: TransactionPresenter::new(wallet.clone(), rates),
            wallet,
            prefs,
            sink,
            lifecycle: ViewLifecycle::new(),
            transaction: None,
        }
    }

    pub fn with_strings(mut self, strings: DetailStrings) -> Self {
        self.presenter = self.presenter.with_strings(strings);
        self
    }

    /// Handle the host uses to tear the view down
    pub fn lifecycle_handle(&self) -> LifecycleHandle {
        self.lifecycle.handle()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn transaction_hash(&self) -> Option<&str> {
        self.transaction.as_ref().map(|tx| tx.hash.as_str())
    }

    pub fn transaction_note(&self) -> Option<String> {
        self.transaction
            .as_ref()
            .and_then(|tx| self.wallet.note_for(&tx.hash))
    }

    /// Load the requested transaction and render it.
    ///
    /// Any navigation or lookup failure closes the view with
    /// [`ViewUpdate::Finish`].
    pub async fn on_view_ready(&mut self, request: Option<PageRequest>) -> Result<()> {
        match self.resolve(request).await {
            Ok(summary) => {
                self.show(summary).await;
                Ok(())
            }
            Err(DetailError::Cancelled) => Err(DetailError::Cancelled),
            Err(e) => {
                warn!("Closing transaction detail: {}", e);
                self.emit(ViewUpdate::Finish);
                Err(e)
            }
        }
    }

    /// Save a note for the loaded transaction and echo it on success.
    pub async fn update_note(&mut self, note: &str) -> Result<()> {
        let hash = self
            .transaction
            .as_ref()
            .map(|tx| tx.hash.clone())
            .ok_or(DetailError::NoTransaction)?;

        let outcome = self
            .lifecycle
            .run(self.wallet.update_note(&hash, note))
            .await
            .ok_or(DetailError::Cancelled)?;

        match outcome {
            Ok(true) => {
                info!("Saved note for {}", hash);
                let saved = self.presenter.strings().remote_save_ok.clone();
                self.emit(ViewUpdate::Toast(Toast::ok(saved)));
                self.emit(ViewUpdate::Note(Some(note.to_string())));
                Ok(())
            }
            Ok(false) => {
                warn!("Notes store refused note for {}", hash);
                self.show_unexpected_error();
                Err(DetailError::NoteRejected)
            }
            Err(e) => {
                warn!("Failed to save note for {}: {}", hash, e);
                self.show_unexpected_error();
                Err(DetailError::Lookup(e))
            }
        }
    }

    async fn resolve(&self, request: Option<PageRequest>) -> Result<TransactionSummary> {
        match request.ok_or(DetailError::MissingNavigation)? {
            PageRequest::Position(position) => {
                let index = usize::try_from(position).map_err(|_| DetailError::InvalidPosition(position))?;
                self.wallet
                    .transaction_at(index)
                    .ok_or(DetailError::InvalidPosition(position))
            }
            PageRequest::Hash(hash) => {
                require_hash(&hash)?;
                let lookup = self
                    .lifecycle
                    .run(self.wallet.transaction_by_hash(&hash))
                    .await
                    .ok_or(DetailError::Cancelled)?;
                lookup.map_err(|e| {
                    debug!("Hash lookup for {} failed: {}", hash, e);
                    DetailError::TransactionNotFound(hash)
                })
            }
        }
    }

    async fn show(&mut self, summary: TransactionSummary) {
        let model = self.presenter.format(&summary, &self.prefs);
        let needs_lookup = model.value_fiat.is_none();
        self.transaction = Some(summary.clone());
        self.emit(ViewUpdate::Model(model));

        if needs_lookup {
            let fiat = self
                .lifecycle
                .run(self.presenter.fiat_value(&summary, &self.prefs))
                .await
                .flatten();
            if let Some(fiat) = fiat {
                self.emit(ViewUpdate::FiatValue(fiat));
            }
        }
    }

    fn show_unexpected_error(&mut self) {
        let message = self.presenter.strings().unexpected_error.clone();
        self.emit(ViewUpdate::Toast(Toast::error(message)));
    }

    fn emit(&mut self, update: ViewUpdate) {
        if self.lifecycle.is_torn_down() {
            debug!("View torn down, dropping {:?}", update);
            return;
        }
        self.sink.render(update);
    }
}
