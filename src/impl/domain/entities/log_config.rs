use chrono::TimeDelta;
use iso_currency::Currency;

pub const DEFAULT_DEBOUNCE_INTERVAL_MS: u32 = 2000;
pub const DEFAULT_DOCUMENT_TITLE: &str = "Shopping Log";

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Minimum time between two accepted saves.
    pub debounce_interval: TimeDelta,
    pub document_title: String,
    /// When set, the goal is printed as an amount in this currency in
    /// exported documents.
    pub currency: Option<Currency>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debounce_interval: TimeDelta::milliseconds(DEFAULT_DEBOUNCE_INTERVAL_MS.into()),
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            currency: None,
        }
    }
}
