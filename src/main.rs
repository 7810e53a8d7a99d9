use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::sync::Arc;
use txlens::config::BtcUnit;
use txlens::snapshot::WalletSnapshot;
use txlens::user_settings::SettingsStore;
use txlens::view::{DisplaySink, PageRequest, TransactionDetailView, ViewUpdate};

/// Prints view updates to stdout.
struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn render(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::Model(model) => {
                println!("Type:      {:?} ({})", model.direction, model.color.resource_name());
                println!("Amount:    {}", model.value_btc);
                if let Some(fiat) = &model.value_fiat {
                    println!("Fiat:      {}", fiat);
                }
                println!("From:      {}", model.from_label.replace('\n', ", "));
                for recipient in &model.recipients {
                    println!("To:        {} {} {}", recipient.label, recipient.amount, recipient.unit);
                }
                println!("Fee:       {}", model.fee);
                println!("Date:      {}", model.date);
                println!("Status:    {}", model.status);
                println!("Hash:      {}", model.hash);
                println!("Explorer:  {}", model.explorer_url);
                if let Some(note) = &model.note {
                    println!("Note:      {}", note);
                }
                if model.double_spend {
                    println!("WARNING:   possible double spend");
                }
            }
            ViewUpdate::FiatValue(fiat) => println!("Fiat:      {}", fiat),
            ViewUpdate::Note(note) => println!("Note:      {}", note.unwrap_or_default()),
            ViewUpdate::Toast(toast) => println!("{}", toast),
            ViewUpdate::Finish => println!("Nothing to show."),
        }
    }
}

/// Render one wallet transaction from a JSON snapshot.
#[derive(Parser, Debug)]
#[command(name = "txlens", version, about)]
#[command(group(ArgGroup::new("transaction").args(["position", "hash"])))]
struct Args {
    /// Wallet snapshot file
    snapshot: PathBuf,

    /// Index of the transaction in the wallet's list
    #[arg(long, short, allow_negative_numbers = true)]
    position: Option<i64>,

    /// Transaction hash
    #[arg(long)]
    hash: Option<String>,

    /// Replace the transaction note
    #[arg(long, short)]
    note: Option<String>,

    /// Display unit: BTC, mBTC or bits
    #[arg(long, short, value_parser = parse_unit)]
    unit: Option<BtcUnit>,

    /// Fiat currency code, e.g. EUR
    #[arg(long, short)]
    fiat: Option<String>,
}

impl Args {
    fn request(&self) -> Option<PageRequest> {
        match (self.position, &self.hash) {
            (Some(position), _) => Some(PageRequest::Position(position)),
            (None, Some(hash)) => Some(PageRequest::Hash(hash.clone())),
            (None, None) => None,
        }
    }
}

fn parse_unit(label: &str) -> Result<BtcUnit, String> {
    BtcUnit::from_label(label).ok_or_else(|| format!("unknown unit '{}' (expected BTC, mBTC or bits)", label))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut store = SettingsStore::open_default();
    let settings = store.settings_mut();
    if let Some(unit) = args.unit {
        settings.btc_unit = unit;
    }
    if let Some(fiat) = &args.fiat {
        settings.set_fiat_currency(fiat);
    }

    let wallet = Arc::new(WalletSnapshot::load(&args.snapshot)?);
    let prefs = settings.display_preferences(wallet.as_ref());
    let mut view = TransactionDetailView::new(wallet.clone(), wallet, prefs, ConsoleSink);

    view.on_view_ready(args.request()).await?;
    if let Some(note) = &args.note {
        view.update_note(note).await?;
    }

    Ok(())
}
