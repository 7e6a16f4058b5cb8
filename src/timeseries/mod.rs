mod api;
mod model;
mod wire;

pub use model::{TimeSeriesMeta, TimeSeriesResponse, TimeSeriesRow};

use chrono::NaiveDate;

use crate::core::models::Frequency;
use crate::core::{IressClient, IressError};

use api::Selector;

/// A builder for fetching historical time series via `TimeSeriesGet2`.
///
/// The security can be a bare code paired with [`exchange`](Self::exchange),
/// or full security text in the form `code.exchange@datasource|board`
/// (e.g. `BHP.ASX@TM`), which is detected automatically.
pub struct TimeSeriesBuilder<'a> {
    client: &'a IressClient,
    security: String,
    exchange: Option<String>,
    frequency: Frequency,
    window: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> TimeSeriesBuilder<'a> {
    pub fn new(client: &'a IressClient, security: impl Into<String>) -> Self {
        Self {
            client,
            security: security.into(),
            exchange: None,
            frequency: Frequency::Daily,
            window: None,
        }
    }

    /// The exchange the security is listed on. Ignored when the security is
    /// given as security text.
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Sampling frequency. Default: daily.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Inclusive date window to retrieve.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Some((start, end));
        self
    }

    fn window(&self) -> Result<(NaiveDate, NaiveDate), IressError> {
        let (start, end) = self
            .window
            .ok_or_else(|| IressError::InvalidParams("no date window set".into()))?;
        if start > end {
            return Err(IressError::InvalidDates);
        }
        Ok((start, end))
    }

    fn selector(&self) -> Selector {
        Selector::resolve(&self.security, self.exchange.as_deref())
    }

    /// Fetches a single window and returns the rows.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(security = %self.security)))]
    pub async fn fetch(self) -> Result<Vec<TimeSeriesRow>, IressError> {
        let resp = self.fetch_full().await?;
        Ok(resp.rows)
    }

    /// Fetches a single window, including the response header metadata.
    pub async fn fetch_full(self) -> Result<TimeSeriesResponse, IressError> {
        let (start, end) = self.window()?;
        api::fetch_window(self.client, &self.selector(), self.frequency, start, end).await
    }

    /// Fetches the whole window page by page.
    ///
    /// The gateway caps how much history one call returns, so the request is
    /// re-issued with the start advanced to the day after the last returned
    /// row until the window is exhausted. A page that fails after data has
    /// been collected ends the loop and the partial data is returned; a
    /// failure on the first page propagates. A page that does not advance
    /// the cursor also ends the loop.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(security = %self.security)))]
    pub async fn fetch_paged(self) -> Result<Vec<TimeSeriesRow>, IressError> {
        let (start, end) = self.window()?;
        let selector = self.selector();

        let mut out: Vec<TimeSeriesRow> = Vec::new();
        let mut from = start;

        while from <= end {
            let page =
                match api::fetch_window(self.client, &selector, self.frequency, from, end).await {
                    Ok(page) => page,
                    Err(e) if out.is_empty() => return Err(e),
                    Err(_) => break,
                };
            if page.rows.is_empty() {
                break;
            }

            // Rows are sorted ascending, so the last row carries the max date.
            let max_date = page.rows.last().map(|r| r.date).unwrap_or(from);
            out.extend(page.rows);

            match max_date.succ_opt() {
                Some(next) if next > from => from = next,
                _ => break,
            }
        }

        Ok(out)
    }
}
