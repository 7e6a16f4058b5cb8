mod api;
mod model;
mod wire;

pub use model::MarketCapRow;

use chrono::NaiveDate;

use crate::core::{IressClient, IressError};

/// A builder for historical market capitalization via
/// `MarketCapitalizationHistoricalGet`.
///
/// All three security filters are optional on the wire: filter by index, by
/// code and exchange, or any combination. Unset filters are omitted from
/// the request.
pub struct MarketCapBuilder<'a> {
    client: &'a IressClient,
    index_code: Option<String>,
    code: Option<String>,
    exchange: Option<String>,
    window: Option<(NaiveDate, NaiveDate)>,
}

impl<'a> MarketCapBuilder<'a> {
    pub fn new(client: &'a IressClient) -> Self {
        Self {
            client,
            index_code: None,
            code: None,
            exchange: None,
            window: None,
        }
    }

    /// Filter by index (e.g. `XJO`).
    pub fn index_code(mut self, index: impl Into<String>) -> Self {
        self.index_code = Some(index.into());
        self
    }

    /// Filter by security code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Filter by exchange.
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Inclusive date window to retrieve.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Fetches rows sorted ascending by calculation date.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<MarketCapRow>, IressError> {
        let (start, end) = self
            .window
            .ok_or_else(|| IressError::InvalidParams("no date window set".into()))?;
        if start > end {
            return Err(IressError::InvalidDates);
        }
        api::fetch_market_cap(
            self.client,
            self.index_code.as_deref(),
            self.code.as_deref(),
            self.exchange.as_deref(),
            start,
            end,
        )
        .await
    }
}
