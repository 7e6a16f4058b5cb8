use crate::core::soap::Params;
use crate::core::{IressClient, IressError};

use super::model::QuoteRow;
use super::wire;

pub(super) enum Selection {
    Codes {
        codes: Vec<String>,
        exchanges: Vec<String>,
    },
    Texts(Vec<String>),
    /// Watchlist names travel in the security-text array with the
    /// `UserWatchlistProvided` flag set.
    Watchlist(String),
}

pub(super) async fn fetch_quotes(
    client: &IressClient,
    selection: Selection,
) -> Result<Vec<QuoteRow>, IressError> {
    let mut params = Params::new();
    match selection {
        Selection::Codes { codes, exchanges } => {
            params.push_array("SecurityCodeArray", "SecurityCode", &codes);
            params.push_array("ExchangeArray", "Exchange", &exchanges);
        }
        Selection::Texts(texts) => {
            params.push_array("SecurityTextArray", "SecurityText", &texts);
        }
        Selection::Watchlist(name) => {
            params.push("UserWatchlistProvided", "true");
            params.push_array("SecurityTextArray", "SecurityText", &[name]);
        }
    }

    let table = client.invoke("PricingQuoteGet", params).await?;
    wire::map_response(table)
}
