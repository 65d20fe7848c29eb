//! Display formatting for prices, billing periods and dates (en-US style).

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

use crate::net::types::Interval;

/// ISO codes Stripe treats as having no minor unit.
const ZERO_DECIMAL: &[&str] = &["JPY", "KRW", "VND", "CLP", "ISK", "UGX"];

fn symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "VND" => Some("₫"),
        _ => None,
    }
}

/// Formats an amount in minor units, e.g. `29999, "usd"` → `"$299.99"`.
pub fn format_money(amount_minor: i64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();

    let body = if ZERO_DECIMAL.contains(&code.as_str()) {
        group_thousands(abs)
    } else {
        format!("{}.{:02}", group_thousands(abs / 100), abs % 100)
    };

    match symbol(&code) {
        Some(sym) => format!("{sign}{sym}{body}"),
        None => format!("{sign}{code} {body}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"month"` for a single period, `"3 months"` otherwise.
pub fn billing_interval(interval: Interval, count: u32) -> String {
    if count <= 1 {
        interval.as_str().to_owned()
    } else {
        format!("{count} {}s", interval.as_str())
    }
}

/// Long US date for a Unix timestamp, e.g. `"January 15, 2026"`.
pub fn format_date(unix_secs: i64) -> Option<String> {
    DateTime::from_timestamp(unix_secs, 0).map(|dt| dt.format("%B %-d, %Y").to_string())
}
