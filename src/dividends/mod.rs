mod api;
mod model;
mod wire;

pub use model::DividendRow;

use chrono::NaiveDate;

use crate::core::{IressClient, IressError};

/// A builder for fetching dividend history via
/// `SecurityDividendGetBySecurity`. The date window filters on the pay date.
pub struct DividendsBuilder<'a> {
    client: &'a IressClient,
    code: String,
    exchange: String,
    window: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> DividendsBuilder<'a> {
    pub fn new(
        client: &'a IressClient,
        code: impl Into<String>,
        exchange: impl Into<String>,
    ) -> Self {
        Self {
            client,
            code: code.into(),
            exchange: exchange.into(),
            window: None,
        }
    }

    /// Inclusive pay-date window to retrieve.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Fetches dividend rows, sorted ascending by ex-dividend date.
    /// A security with no dividends in the window yields an empty `Vec`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(code = %self.code)))]
    pub async fn fetch(self) -> Result<Vec<DividendRow>, IressError> {
        let (start, end) = self
            .window
            .ok_or_else(|| IressError::InvalidParams("no date window set".into()))?;
        if start > end {
            return Err(IressError::InvalidDates);
        }
        api::fetch_dividends(self.client, &self.code, &self.exchange, start, end).await
    }
}
