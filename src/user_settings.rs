use crate::config::{BtcUnit, DEFAULT_FIAT_CURRENCY};
use crate::event_service::EventFlags;
use crate::sources::ExchangeRates;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "txlens_settings.json";

fn default_fiat_currency() -> String {
    DEFAULT_FIAT_CURRENCY.to_string()
}

fn default_utc_offset_minutes() -> i32 {
    0
}

/// User settings that persist between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    /// Denomination used for every BTC amount
    #[serde(default)]
    pub btc_unit: BtcUnit,
    /// ISO code of the fiat currency shown next to BTC amounts
    #[serde(default = "default_fiat_currency")]
    pub fiat_currency: String,
    /// Time zone for transaction dates, in minutes east of UTC
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    /// Analytics events that have already been reported once
    #[serde(default)]
    pub logged_events: BTreeSet<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            btc_unit: BtcUnit::default(),
            fiat_currency: default_fiat_currency(),
            utc_offset_minutes: default_utc_offset_minutes(),
            logged_events: BTreeSet::new(),
        }
    }
}

/// The preference values one presentation pass is formatted with.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPreferences {
    pub unit: BtcUnit,
    pub fiat_currency: String,
    /// Cached current price of one BTC in `fiat_currency`
    pub last_price: f64,
    pub utc_offset_minutes: i32,
}

impl DisplayPreferences {
    pub fn new(unit: BtcUnit, fiat_currency: impl Into<String>, last_price: f64) -> Self {
        Self {
            unit,
            fiat_currency: fiat_currency.into(),
            last_price,
            utc_offset_minutes: 0,
        }
    }

    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("txlens");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir.join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Load settings from `path`, or return defaults if it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Set the fiat currency (stored upper-case; blank resets to the default)
    pub fn set_fiat_currency(&mut self, code: &str) {
        let code = code.trim();
        if code.is_empty() {
            self.fiat_currency = default_fiat_currency();
        } else {
            self.fiat_currency = code.to_ascii_uppercase();
        }
    }

    /// Snapshot the display preferences, reading the cached rate once.
    pub fn display_preferences<R: ExchangeRates>(&self, rates: &R) -> DisplayPreferences {
        DisplayPreferences {
            unit: self.btc_unit,
            fiat_currency: self.fiat_currency.clone(),
            last_price: rates.last_price(&self.fiat_currency),
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}

/// Settings bound to the file they were loaded from.
///
/// Event flags are written back as soon as they are marked, so a flag set in
/// one session is seen by the next.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: UserSettings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = UserSettings::load_from(&path);
        Self { path, settings }
    }

    /// Open the settings file in the app config directory
    pub fn open_default() -> Self {
        Self::open(UserSettings::settings_path())
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut UserSettings {
        &mut self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        self.settings.save_to(&self.path)
    }
}

impl EventFlags for SettingsStore {
    fn is_logged(&self, key: &str) -> bool {
        self.settings.logged_events.contains(key)
    }

    fn mark_logged(&mut self, key: &str) {
        if !self.settings.logged_events.insert(key.to_string()) {
            return;
        }
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist event flag {}: {}", key, e);
        }
    }
}
