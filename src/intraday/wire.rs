use chrono::TimeZone;
use chrono_tz::Tz;

use crate::core::IressError;
use crate::core::soap::{SoapRow, SoapTable};

use super::model::{IntradayMeta, IntradayResponse, IntradayRow, TradingPeriod};

fn map_row(row: &SoapRow, tz: Tz) -> Result<IntradayRow, IressError> {
    let naive = row.datetime("TimeSeriesDateTime")?;
    let datetime = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            IressError::Data(format!(
                "timestamp `{naive}` is ambiguous or nonexistent in {tz}"
            ))
        })?;

    let trading_period = row
        .i32_opt("TradingPeriod")?
        .map(|v| {
            TradingPeriod::from_wire(v)
                .ok_or_else(|| IressError::Data(format!("unknown TradingPeriod value: {v}")))
        })
        .transpose()?;

    Ok(IntradayRow {
        datetime,
        open: row.f64_opt("OpenPrice")?,
        high: row.f64_opt("HighPrice")?,
        low: row.f64_opt("LowPrice")?,
        close: row.f64("ClosePrice")?,
        total_volume: row.f64_opt("TotalVolume")?,
        total_value: row.f64_opt("TotalValue")?,
        trade_count: row.i32_opt("TradeCount")?,
        trading_period,
        last_trade_number: row.i64_opt("LastTradeNumberOfTheInterval")?,
    })
}

fn map_meta(row: &SoapRow) -> Result<IntradayMeta, IressError> {
    Ok(IntradayMeta {
        price_display_multiplier: row.f64_opt("PriceDisplayMultiplier")?,
        security_code: row.string("SecurityCode"),
        exchange: row.string("Exchange"),
        data_source: row.string("DataSource"),
    })
}

pub(super) fn map_response(table: SoapTable, tz: Tz) -> Result<IntradayResponse, IressError> {
    let mut rows = table
        .rows
        .iter()
        .map(|r| map_row(r, tz))
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by_key(|r| r.datetime);

    let meta = table.header_rows.first().map(map_meta).transpose()?;

    Ok(IntradayResponse { rows, meta })
}
