use chrono::NaiveDate;
use futures::future::try_join_all;

use crate::core::models::Frequency;
use crate::core::{IressClient, IressError};
use crate::dividends::{DividendRow, DividendsBuilder};
use crate::timeseries::{TimeSeriesBuilder, TimeSeriesRow};

/// Which per-security dataset a download fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    /// Historical time series, fetched page by page across the window.
    TimeSeries,
    /// Dividend history.
    Dividends,
}

/// Rows for one security in a [`DownloadResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadRows {
    TimeSeries(Vec<TimeSeriesRow>),
    Dividends(Vec<DividendRow>),
}

impl DownloadRows {
    pub fn len(&self) -> usize {
        match self {
            DownloadRows::TimeSeries(rows) => rows.len(),
            DownloadRows::Dividends(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One security's worth of downloaded data, tagged with its identity so the
/// caller can stack entries into a single (date, security) keyed table.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadEntry {
    pub code: String,
    pub exchange: String,
    pub rows: DownloadRows,
}

/// The result of a multi-security download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResponse {
    pub entries: Vec<DownloadEntry>,
}

/// A builder for downloading the same dataset for multiple securities
/// concurrently, on one exchange and one date window.
pub struct DownloadBuilder {
    client: IressClient,
    codes: Vec<String>,
    exchange: String,
    kind: DownloadKind,
    frequency: Frequency,
    window: Option<(NaiveDate, NaiveDate)>,
}

impl DownloadBuilder {
    pub fn new(client: &IressClient, exchange: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            codes: Vec::new(),
            exchange: exchange.into(),
            kind: DownloadKind::TimeSeries,
            frequency: Frequency::Daily,
            window: None,
        }
    }

    /// Replaces the current list of security codes.
    pub fn codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a single security code.
    pub fn add_code(mut self, code: impl Into<String>) -> Self {
        self.codes.push(code.into());
        self
    }

    /// Which dataset to download. Default: time series.
    pub fn kind(mut self, kind: DownloadKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sampling frequency for time-series downloads. Default: daily.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Inclusive date window to retrieve.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Fetches all securities concurrently.
    ///
    /// Securities that return no rows in the window are omitted from the
    /// result. Any failing security fails the whole download.
    pub async fn run(self) -> Result<DownloadResponse, IressError> {
        if self.codes.is_empty() {
            return Err(IressError::InvalidParams("no securities specified".into()));
        }
        let (start, end) = self
            .window
            .ok_or_else(|| IressError::InvalidParams("no date window set".into()))?;

        let futures = self.codes.iter().map(|code| {
            let code = code.clone();
            let exchange = self.exchange.clone();
            let client = &self.client;
            let kind = self.kind;
            let frequency = self.frequency;

            async move {
                let rows = match kind {
                    DownloadKind::TimeSeries => DownloadRows::TimeSeries(
                        TimeSeriesBuilder::new(client, &code)
                            .exchange(&exchange)
                            .frequency(frequency)
                            .between(start, end)
                            .fetch_paged()
                            .await?,
                    ),
                    DownloadKind::Dividends => DownloadRows::Dividends(
                        DividendsBuilder::new(client, &code, &exchange)
                            .between(start, end)
                            .fetch()
                            .await?,
                    ),
                };
                Ok::<DownloadEntry, IressError>(DownloadEntry {
                    code,
                    exchange,
                    rows,
                })
            }
        });

        let joined = try_join_all(futures).await?;
        let entries = joined.into_iter().filter(|e| !e.rows.is_empty()).collect();
        Ok(DownloadResponse { entries })
    }
}
