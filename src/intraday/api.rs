use chrono::NaiveDateTime;

use crate::core::models::IntradayFrequency;
use crate::core::soap::{Params, fmt_datetime};
use crate::core::{IressClient, IressError};

use super::model::IntradayResponse;
use super::wire;

#[allow(clippy::too_many_arguments)]
pub(super) async fn fetch_intraday(
    client: &IressClient,
    code: &str,
    exchange: &str,
    frequency: IntradayFrequency,
    interval: u32,
    include_trading_period: bool,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<IntradayResponse, IressError> {
    let mut params = Params::new();
    params.push("SecurityCode", code);
    params.push("Exchange", exchange);
    params.push("Frequency", frequency.as_str());
    params.push("TimeSeriesFromDateTime", fmt_datetime(from));
    params.push("TimeSeriesToDateTime", fmt_datetime(to));
    params.push("ConsolidationInterval", interval.to_string());
    if include_trading_period {
        params.push("IncludeTradingPeriod", "true");
    }

    let table = client.invoke("TimeSeriesIntraDayGet2", params).await?;
    wire::map_response(table, client.intraday_tz())
}
