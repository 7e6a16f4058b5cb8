use chrono::NaiveDate;

use crate::core::soap::{Params, fmt_date};
use crate::core::{IressClient, IressError};

use super::model::MarketCapRow;
use super::wire;

pub(super) async fn fetch_market_cap(
    client: &IressClient,
    index_code: Option<&str>,
    code: Option<&str>,
    exchange: Option<&str>,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<MarketCapRow>, IressError> {
    let mut params = Params::new();
    params.push_opt("IndexCode", index_code.map(str::to_string));
    params.push_opt("SecurityCode", code.map(str::to_string));
    params.push_opt("Exchange", exchange.map(str::to_string));
    params.push("MarketCapitalizationDateFrom", fmt_date(from));
    params.push("MarketCapitalizationDateTo", fmt_date(to));

    let table = client
        .invoke("MarketCapitalizationHistoricalGet", params)
        .await?;
    wire::map_response(table)
}
