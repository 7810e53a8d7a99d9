use crate::config::BtcUnit;
use chrono::{DateTime, FixedOffset, Utc};

/// Insert a comma between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a satoshi amount in the given unit, without the unit label.
///
/// Uses grouped whole digits and between one and the unit's maximum number
/// of fraction digits, e.g. `500000000` sat as BTC is `5.0`.
pub fn format_display_amount(satoshis: u64, unit: BtcUnit) -> String {
    let spec = unit.spec();
    let whole = satoshis / spec.satoshis_per_unit;
    let frac = satoshis % spec.satoshis_per_unit;

    let mut frac_digits = format!("{:0width$}", frac, width = spec.max_decimals);
    while frac_digits.len() > 1 && frac_digits.ends_with('0') {
        frac_digits.pop();
    }

    format!("{}.{}", group_thousands(whole), frac_digits)
}

/// Format a fiat value with two decimals and grouped thousands.
pub fn format_fiat(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Convert satoshis to whole coins for fiat arithmetic.
pub fn satoshis_to_btc(satoshis: u64) -> f64 {
    satoshis as f64 / crate::config::SATOSHIS_PER_BTC as f64
}

/// Long-form date plus 12-hour time, e.g. `October 19, 2026 @ 03:04 PM`.
///
/// Returns `None` if the timestamp is outside chrono's range.
pub fn format_transaction_date(epoch_secs: i64, utc_offset_minutes: i32) -> Option<String> {
    let millis = epoch_secs.checked_mul(1000)?;
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(millis)?;
    let offset = FixedOffset::east_opt(utc_offset_minutes.checked_mul(60)?)?;
    let local = utc.with_timezone(&offset);
    Some(format!(
        "{} @ {}",
        local.format("%B %-d, %Y"),
        local.format("%I:%M %p")
    ))
}
