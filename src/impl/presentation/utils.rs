use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> usize {
    currency.exponent().unwrap_or(0) as usize
}

/// Format an amount with currency symbol, the currency's number of decimal
/// places and thousands separators (en locale, ex. 1,000.00 $).
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    // Round first so 0.999 becomes 1.00 rather than 0.00.
    let rounded = format!("{:.decimal_places$}", amount.abs());
    let (integer_part, fractional_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };
    let integer_part = integer_part
        .parse::<u64>()
        .map(|i| i.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| integer_part.to_string());
    let sign = if amount < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    match fractional_part {
        Some(f) => format!("{sign}{integer_part}.{f} {}", currency.symbol()),
        None => format!("{sign}{integer_part} {}", currency.symbol()),
    }
}
