//! Display formatters for dates, prices and locations.
//!
//! None of these fail: partial or malformed input degrades to a readable
//! placeholder so a screen never breaks on bad backend data.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use roost_shared::LocationInput;
use tracing::debug;

pub const DATES_NOT_AVAILABLE: &str = "Dates not available";
pub const INVALID_DATE: &str = "Invalid date";
pub const PRICE_NOT_AVAILABLE: &str = "Price not available";
pub const LOCATION_NOT_AVAILABLE: &str = "Location not available";
pub const DEFAULT_CURRENCY: &str = "INR";

/// Parse the date part of an ISO-8601 string.
///
/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or a full
/// RFC 3339 timestamp (its own offset is kept, not converted).
pub fn parse_display_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `"2025-06-15"` -> `"Jun 15"`. Empty input gives an empty string.
pub fn format_short_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    match parse_display_date(input) {
        Some(date) => short(date),
        None => {
            debug!(input, "unparseable date in format_short_date");
            INVALID_DATE.to_string()
        }
    }
}

/// `"Jun 15 - Jun 18, 2025"`; only the start when there is no check-out.
pub fn format_date_range(check_in: Option<&str>, check_out: Option<&str>) -> String {
    let check_in = match check_in.filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => return DATES_NOT_AVAILABLE.to_string(),
    };

    let Some(start) = parse_display_date(check_in) else {
        debug!(check_in, "unparseable check-in date");
        return INVALID_DATE.to_string();
    };

    match check_out.filter(|s| !s.is_empty()) {
        None => short(start),
        Some(raw) => match parse_display_date(raw) {
            Some(end) => format!("{} - {}", short(start), end.format("%b %-d, %Y")),
            None => {
                debug!(check_out = raw, "unparseable check-out date");
                INVALID_DATE.to_string()
            }
        },
    }
}

/// Price in the default currency (INR).
pub fn format_price(amount: Option<f64>) -> String {
    format_currency(amount, DEFAULT_CURRENCY)
}

/// en-US currency formatting, e.g. `format_currency(Some(1500.0), "USD")`
/// gives `"$1,500.00"`.
///
/// A missing, zero or NaN amount is "Price not available". A currency code
/// that is not three ASCII letters falls back to the bare number.
pub fn format_currency(amount: Option<f64>, currency_code: &str) -> String {
    let amount = match amount {
        Some(a) if a != 0.0 && !a.is_nan() => a,
        _ => return PRICE_NOT_AVAILABLE.to_string(),
    };

    let code = currency_code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) || !amount.is_finite() {
        debug!(currency_code, amount, "falling back to raw amount");
        return raw_amount(amount);
    }
    let code = code.to_ascii_uppercase();

    let (prefix, digits) = currency_style(&code);
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, prefix, group_thousands(amount.abs(), digits))
}

fn currency_style(code: &str) -> (String, usize) {
    match code {
        "INR" => ("₹".into(), 2),
        "USD" => ("$".into(), 2),
        "EUR" => ("€".into(), 2),
        "GBP" => ("£".into(), 2),
        "JPY" => ("¥".into(), 0),
        "KRW" => ("₩".into(), 0),
        other => (format!("{} ", other), 2),
    }
}

fn group_thousands(value: f64, fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", fraction_digits, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

fn raw_amount(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    amount.to_string()
}

/// Joins `address, city, state`, skipping empty parts. A plain string
/// location passes through unchanged.
pub fn format_location(location: Option<&LocationInput>) -> Option<String> {
    match location? {
        LocationInput::Text(text) if text.is_empty() => None,
        LocationInput::Text(text) => Some(text.clone()),
        LocationInput::Structured(loc) => {
            let parts: Vec<&str> = [&loc.address, &loc.city, &loc.state]
                .into_iter()
                .filter_map(|part| part.as_deref())
                .filter(|part| !part.is_empty())
                .collect();

            if parts.is_empty() {
                Some(LOCATION_NOT_AVAILABLE.to_string())
            } else {
                Some(parts.join(", "))
            }
        }
    }
}
