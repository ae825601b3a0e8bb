use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::entities::{FieldRule, ValidationError};

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("hardcoded regex should be valid"));
// Plain decimal notation only, no sign or exponent.
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("hardcoded regex should be valid")
});

pub(crate) const MAX_PRICE_DECIMALS: usize = 2;

/// Checks a raw field value against `rule`.
///
/// Required-ness is checked first (on the trimmed value). An empty optional
/// value always passes; otherwise the type rule decides.
pub fn validate(value: &str, rule: FieldRule, required: bool) -> Result<(), ValidationError> {
    if required && value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }
    match rule {
        FieldRule::Date => parse_calendar_date(value)
            .map(|_| ())
            .ok_or(ValidationError::InvalidDate),
        FieldRule::Number => parse_non_negative(value).map(|_| ()),
        FieldRule::Integer => validate_positive_integer(value),
        FieldRule::Price => validate_price(value),
        FieldRule::Text { max_len } => {
            if value.chars().count() > max_len {
                Err(ValidationError::TooLong { max: max_len })
            } else {
                Ok(())
            }
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub(crate) fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let s = value.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.date_naive()))
}

/// Parses a finite, non-negative real number.
pub(crate) fn parse_non_negative(value: &str) -> Result<f64, ValidationError> {
    let n = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber)?;
    if n < 0.0 {
        return Err(ValidationError::Negative);
    }
    Ok(n)
}

fn validate_positive_integer(value: &str) -> Result<(), ValidationError> {
    let s = value.trim();
    // Digits only, so "at least 1" just means "not all zeros". Avoids overflow
    // on absurdly long inputs.
    if INTEGER_PATTERN.is_match(s) && s.bytes().any(|b| b != b'0') {
        Ok(())
    } else {
        Err(ValidationError::NotPositiveInteger)
    }
}

fn validate_price(value: &str) -> Result<(), ValidationError> {
    parse_non_negative(value)?;
    let s = value.trim();
    if !PRICE_PATTERN.is_match(s) {
        return Err(ValidationError::NotADecimal);
    }
    match s.split_once('.') {
        Some((_, fraction)) if fraction.chars().count() > MAX_PRICE_DECIMALS => {
            Err(ValidationError::TooManyDecimals {
                max: MAX_PRICE_DECIMALS,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rule() {
        for ok in ["1", "42", "007"] {
            assert_eq!(validate(ok, FieldRule::Integer, true), Ok(()), "{ok}");
        }
        for bad in ["0", "-1", "3.5", "abc", "1e3", "000"] {
            assert_eq!(
                validate(bad, FieldRule::Integer, true),
                Err(ValidationError::NotPositiveInteger),
                "{bad}"
            );
        }
        assert_eq!(
            validate("", FieldRule::Integer, true),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn price_rule() {
        for ok in ["0", "12.5", "12.50", "12", "0.99"] {
            assert_eq!(validate(ok, FieldRule::Price, true), Ok(()), "{ok}");
        }
        assert_eq!(
            validate("12.345", FieldRule::Price, true),
            Err(ValidationError::TooManyDecimals { max: 2 })
        );
        assert_eq!(
            validate("-1", FieldRule::Price, true),
            Err(ValidationError::Negative)
        );
        assert_eq!(
            validate("abc", FieldRule::Price, true),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn price_rule_rejects_exponent_notation() {
        for bad in ["1e-5", "5e-3", "1e2", "1.5e1"] {
            assert_eq!(
                validate(bad, FieldRule::Price, true),
                Err(ValidationError::NotADecimal),
                "{bad}"
            );
        }
        assert_eq!(validate(".5", FieldRule::Price, true), Ok(()));
        assert_eq!(validate("12.", FieldRule::Price, true), Ok(()));
    }

    #[test]
    fn number_rule() {
        assert_eq!(validate("0", FieldRule::Number, true), Ok(()));
        assert_eq!(validate("150.75", FieldRule::Number, true), Ok(()));
        assert_eq!(
            validate("-0.01", FieldRule::Number, true),
            Err(ValidationError::Negative)
        );
        for bad in ["inf", "NaN", "ten"] {
            assert_eq!(
                validate(bad, FieldRule::Number, true),
                Err(ValidationError::NotANumber),
                "{bad}"
            );
        }
    }

    #[test]
    fn text_rule_counts_characters() {
        let rule = FieldRule::Text { max_len: 255 };
        assert_eq!(validate(&"a".repeat(255), rule, true), Ok(()));
        assert_eq!(
            validate(&"a".repeat(256), rule, true),
            Err(ValidationError::TooLong { max: 255 })
        );
        // Multi-byte characters count once.
        assert_eq!(validate(&"é".repeat(255), rule, true), Ok(()));
    }

    #[test]
    fn optional_empty_always_passes() {
        for rule in [
            FieldRule::Text { max_len: 255 },
            FieldRule::Integer,
            FieldRule::Price,
            FieldRule::Number,
            FieldRule::Date,
        ] {
            assert_eq!(validate("", rule, false), Ok(()));
        }
    }

    #[test]
    fn required_checks_trimmed_value() {
        assert_eq!(
            validate("   ", FieldRule::Text { max_len: 255 }, true),
            Err(ValidationError::Required)
        );
    }

    #[test]
    fn date_rule() {
        assert_eq!(validate("2024-01-01", FieldRule::Date, true), Ok(()));
        assert_eq!(validate("2024-01-01T10:00:00Z", FieldRule::Date, true), Ok(()));
        assert_eq!(
            validate("2024-02-30", FieldRule::Date, true),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            validate("yesterday", FieldRule::Date, true),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(validate("", FieldRule::Date, true), Err(ValidationError::Required));
    }
}
