use chrono::{NaiveDate, NaiveDateTime};

use crate::core::{IressClient, IressError};
use crate::dividends::{DividendRow, DividendsBuilder};
use crate::intraday::{IntradayBuilder, IntradayRow};
use crate::quotes::{QuoteRow, QuotesBuilder};
use crate::timeseries::{TimeSeriesBuilder, TimeSeriesRow};

/// A high-level handle for one listed security, providing convenient access
/// to the per-security operations.
///
/// # Example
///
/// ```no_run
/// # use iress_rs::{IressClient, Security};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IressClient::builder()
///     .credentials("ACME", "jane", "secret")
///     .build()?;
/// let bhp = Security::new(&client, "BHP", "ASX");
///
/// let quote = bhp.quote().await?;
/// println!("last: {:?}", quote.last_price);
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
/// let bars = bhp.time_series(start, end).await?;
/// println!("fetched {} daily bars", bars.len());
/// # Ok(())
/// # }
/// ```
pub struct Security {
    client: IressClient,
    code: String,
    exchange: String,
}

impl Security {
    pub fn new(
        client: &IressClient,
        code: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            code: code.into(),
            exchange: exchange.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Daily bars across the window, paginating as needed.
    pub async fn time_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeSeriesRow>, IressError> {
        self.time_series_builder()
            .between(start, end)
            .fetch_paged()
            .await
    }

    /// A [`TimeSeriesBuilder`] pre-bound to this security, for non-default
    /// frequency or single-window fetches.
    pub fn time_series_builder(&self) -> TimeSeriesBuilder<'_> {
        TimeSeriesBuilder::new(&self.client, &self.code).exchange(&self.exchange)
    }

    /// Dividend history with pay dates inside the window.
    pub async fn dividends(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DividendRow>, IressError> {
        DividendsBuilder::new(&self.client, &self.code, &self.exchange)
            .between(start, end)
            .fetch()
            .await
    }

    /// Hourly intraday bars across the window. Use
    /// [`intraday_builder`](Self::intraday_builder) for other intervals.
    pub async fn intraday(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<IntradayRow>, IressError> {
        self.intraday_builder().between(start, end).fetch().await
    }

    /// An [`IntradayBuilder`] pre-bound to this security.
    pub fn intraday_builder(&self) -> IntradayBuilder<'_> {
        IntradayBuilder::new(&self.client, &self.code, &self.exchange)
    }

    /// The current quote snapshot.
    pub async fn quote(&self) -> Result<QuoteRow, IressError> {
        let rows = QuotesBuilder::new(&self.client)
            .codes([self.code.clone()])
            .exchanges([self.exchange.clone()])
            .fetch()
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| IressError::Data("quote response contained no rows".into()))
    }
}
