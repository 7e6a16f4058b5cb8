mod api;
mod model;
mod wire;

pub use model::QuoteRow;

use crate::core::{IressClient, IressError};

/// A builder for basic quote snapshots via `PricingQuoteGet`.
///
/// Securities can be addressed three ways: plain codes (optionally paired
/// with exchanges), security texts (`code.exchange@datasource|board`), or a
/// user-defined watchlist name. When both codes and texts are set, codes
/// win, matching the gateway's own precedence.
pub struct QuotesBuilder<'a> {
    client: &'a IressClient,
    codes: Vec<String>,
    exchanges: Vec<String>,
    texts: Vec<String>,
    watchlist: Option<String>,
}

impl<'a> QuotesBuilder<'a> {
    pub fn new(client: &'a IressClient) -> Self {
        Self {
            client,
            codes: Vec::new(),
            exchanges: Vec::new(),
            texts: Vec::new(),
            watchlist: None,
        }
    }

    /// Security codes to quote.
    pub fn codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Exchanges matching the codes, position by position.
    pub fn exchanges<I, S>(mut self, exchanges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchanges = exchanges.into_iter().map(Into::into).collect();
        self
    }

    /// Security texts to quote (`BHP.ASX@TM` style).
    pub fn security_texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.texts = texts.into_iter().map(Into::into).collect();
        self
    }

    /// Quote the contents of a user-defined watchlist.
    pub fn watchlist(mut self, name: impl Into<String>) -> Self {
        self.watchlist = Some(name.into());
        self
    }

    /// Fetches one snapshot row per requested security.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<QuoteRow>, IressError> {
        let selection = if !self.codes.is_empty() {
            api::Selection::Codes {
                codes: self.codes,
                exchanges: self.exchanges,
            }
        } else if !self.texts.is_empty() {
            api::Selection::Texts(self.texts)
        } else if let Some(name) = self.watchlist {
            api::Selection::Watchlist(name)
        } else {
            return Err(IressError::InvalidParams(
                "no securities selected: set codes, security texts or a watchlist".into(),
            ));
        };

        api::fetch_quotes(self.client, selection).await
    }
}
