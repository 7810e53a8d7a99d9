//! User-visible text for the detail screen.
//!
//! Defaults are English; a host can deserialize a translated set from JSON.
//! Missing keys fall back to the English defaults.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetailStrings {
    pub confirmed: String,
    /// Placeholders: `{confirmations}`, `{required}`
    pub pending: String,
    pub coinbase: String,
    pub value: String,
    pub value_at_time_sent: String,
    pub value_at_time_received: String,
    pub value_at_time_transferred: String,
    pub remote_save_ok: String,
    pub unexpected_error: String,
}

impl Default for DetailStrings {
    fn default() -> Self {
        Self {
            confirmed: "Confirmed".to_string(),
            pending: "Pending ({confirmations}/{required} Confirmations)".to_string(),
            coinbase: "Newly Generated Coins".to_string(),
            value: "Value: ".to_string(),
            value_at_time_sent: "Value when sent: ".to_string(),
            value_at_time_received: "Value when received: ".to_string(),
            value_at_time_transferred: "Value when transferred: ".to_string(),
            remote_save_ok: "Saved".to_string(),
            unexpected_error: "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

impl DetailStrings {
    pub fn pending_status(&self, confirmations: u64, required: u64) -> String {
        self.pending
            .replace("{confirmations}", &confirmations.to_string())
            .replace("{required}", &required.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_status_default_template() {
        let strings = DetailStrings::default();
        assert_eq!(strings.pending_status(1, 3), "Pending (1/3 Confirmations)");
    }

    #[test]
    fn test_partial_translation_keeps_defaults() {
        let strings: DetailStrings =
            serde_json::from_str(r#"{"confirmed": "Bestätigt"}"#).unwrap();
        assert_eq!(strings.confirmed, "Bestätigt");
        assert_eq!(strings.coinbase, "Newly Generated Coins");
    }

    #[test]
    fn test_custom_pending_template() {
        let strings = DetailStrings {
            pending: "{confirmations} of {required}".to_string(),
            ..Default::default()
        };
        assert_eq!(strings.pending_status(2, 3), "2 of 3");
    }
}
