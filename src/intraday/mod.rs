mod api;
mod model;
mod wire;

pub use model::{IntradayMeta, IntradayResponse, IntradayRow, TradingPeriod};

use chrono::NaiveDateTime;

use crate::core::models::IntradayFrequency;
use crate::core::{IressClient, IressError};

/// A builder for intraday time series via `TimeSeriesIntraDayGet2`.
///
/// With `minutes` frequency the consolidation interval is the number of
/// minutes per row and must be an integral divisor of 60; with `trades` it
/// is the number of trades per row. The gateway restricts the date span per
/// interval (e.g. 60-minute bars: at most 60 days).
pub struct IntradayBuilder<'a> {
    client: &'a IressClient,
    code: String,
    exchange: String,
    frequency: IntradayFrequency,
    interval: u32,
    include_trading_period: bool,
    window: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl<'a> IntradayBuilder<'a> {
    pub fn new(
        client: &'a IressClient,
        code: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            client,
            code: code.into(),
            exchange: exchange.into(),
            frequency: IntradayFrequency::Minutes,
            interval: 60,
            include_trading_period: false,
            window: None,
        }
    }

    /// Consolidation mode. Default: minutes.
    pub fn frequency(mut self, frequency: IntradayFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Consolidation interval. Default: 60.
    pub fn interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Mark the start and end trading rows. Minutes frequency only.
    pub fn include_trading_period(mut self, yes: bool) -> Self {
        self.include_trading_period = yes;
        self
    }

    /// Inclusive datetime window to retrieve.
    pub fn between(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.window = Some((start, end));
        self
    }

    fn validate(&self) -> Result<(NaiveDateTime, NaiveDateTime), IressError> {
        let (start, end) = self
            .window
            .ok_or_else(|| IressError::InvalidParams("no datetime window set".into()))?;
        if start > end {
            return Err(IressError::InvalidDates);
        }
        if self.interval == 0 || self.interval > 60 {
            return Err(IressError::InvalidParams(format!(
                "consolidation interval must be between 1 and 60, got {}",
                self.interval
            )));
        }
        if self.frequency == IntradayFrequency::Minutes && 60 % self.interval != 0 {
            return Err(IressError::InvalidParams(format!(
                "minutes interval must be an integral divisor of 60, got {}",
                self.interval
            )));
        }
        if self.include_trading_period && self.frequency != IntradayFrequency::Minutes {
            return Err(IressError::InvalidParams(
                "IncludeTradingPeriod is only valid with minutes frequency".into(),
            ));
        }
        Ok((start, end))
    }

    /// Fetches a single window and returns the rows.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn fetch(self) -> Result<Vec<IntradayRow>, IressError> {
        let resp = self.fetch_full().await?;
        Ok(resp.rows)
    }

    /// Fetches a single window, including the response header metadata.
    pub async fn fetch_full(self) -> Result<IntradayResponse, IressError> {
        let (start, end) = self.validate()?;
        api::fetch_intraday(
            self.client,
            &self.code,
            &self.exchange,
            self.frequency,
            self.interval,
            self.include_trading_period,
            start,
            end,
        )
        .await
    }
}
