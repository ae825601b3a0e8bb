use chrono::{DateTime, TimeDelta, Utc};
use fractic_server_error::ServerError;

use crate::errors::SaveTooSoon;

/// Rejects saves issued within `interval` of the last successful one.
#[derive(Debug, Clone)]
pub(crate) struct SaveDebounce {
    interval: TimeDelta,
    last_success: Option<DateTime<Utc>>,
}

impl SaveDebounce {
    pub(crate) fn new(interval: TimeDelta) -> Self {
        Self {
            interval,
            last_success: None,
        }
    }

    pub(crate) fn check(&self, now: DateTime<Utc>) -> Result<(), ServerError> {
        let Some(last) = self.last_success else {
            return Ok(());
        };
        let elapsed = now - last;
        if elapsed < TimeDelta::zero() {
            // Wall clock moved backwards; don't lock the user out until it
            // catches up.
            tracing::warn!(elapsed_ms = elapsed.num_milliseconds(), "clock moved backwards since last save");
            return Ok(());
        }
        if elapsed < self.interval {
            tracing::debug!(
                elapsed_ms = elapsed.num_milliseconds(),
                interval_ms = self.interval.num_milliseconds(),
                "save rejected by debounce"
            );
            return Err(SaveTooSoon::new(
                elapsed.num_milliseconds(),
                self.interval.num_milliseconds(),
            ));
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, now: DateTime<Utc>) {
        self.last_success = Some(now);
    }

    pub(crate) fn last_success(&self) -> Option<DateTime<Utc>> {
        self.last_success
    }
}
