use chrono::NaiveDate;

use crate::core::soap::{Params, fmt_date};
use crate::core::{IressClient, IressError};

use super::model::DividendRow;
use super::wire;

pub(super) async fn fetch_dividends(
    client: &IressClient,
    code: &str,
    exchange: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DividendRow>, IressError> {
    let mut params = Params::new();
    params.push("SecurityCode", code);
    params.push("Exchange", exchange);
    params.push("PayDateFrom", fmt_date(from));
    params.push("PayDateTo", fmt_date(to));

    let table = client.invoke("SecurityDividendGetBySecurity", params).await?;
    wire::map_response(table)
}
