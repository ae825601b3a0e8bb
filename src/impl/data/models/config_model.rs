use std::str::FromStr;

use chrono::TimeDelta;
use fractic_server_error::ServerError;
use iso_currency::Currency;
use serde_derive::Deserialize;

use crate::{
    entities::{LogConfig, DEFAULT_DEBOUNCE_INTERVAL_MS, DEFAULT_DOCUMENT_TITLE},
    errors::{InvalidConfig, InvalidIsoCurrencyCode},
};

/// RON config file. Every field is optional.
///
/// ```text
/// (
///     debounce_interval_ms: 2000,
///     document_title: "Shopping Log",
///     currency: Some("USD"),
/// )
/// ```
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfigModel {
    debounce_interval_ms: u32,
    document_title: String,
    currency: Option<String>,
}

impl Default for LogConfigModel {
    fn default() -> Self {
        Self {
            debounce_interval_ms: DEFAULT_DEBOUNCE_INTERVAL_MS,
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            currency: None,
        }
    }
}

impl FromStr for LogConfigModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }
}

impl TryFrom<LogConfigModel> for LogConfig {
    type Error = ServerError;
    fn try_from(model: LogConfigModel) -> Result<LogConfig, Self::Error> {
        let currency = model
            .currency
            .map(|code| {
                Currency::from_code(&code).ok_or_else(|| InvalidIsoCurrencyCode::new(&code))
            })
            .transpose()?;
        Ok(LogConfig {
            debounce_interval: TimeDelta::milliseconds(model.debounce_interval_ms.into()),
            document_title: model.document_title,
            currency,
        })
    }
}
