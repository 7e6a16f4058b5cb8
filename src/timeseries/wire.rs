use crate::core::IressError;
use crate::core::soap::{SoapRow, SoapTable};

use super::model::{TimeSeriesMeta, TimeSeriesResponse, TimeSeriesRow};

fn map_row(row: &SoapRow) -> Result<TimeSeriesRow, IressError> {
    Ok(TimeSeriesRow {
        date: row.date("TimeSeriesDate")?,
        open: row.f64_opt("OpenPrice")?,
        high: row.f64_opt("HighPrice")?,
        low: row.f64_opt("LowPrice")?,
        close: row.f64("ClosePrice")?,
        total_volume: row.f64_opt("TotalVolume")?,
        total_value: row.f64_opt("TotalValue")?,
        trade_count: row.i32_opt("TradeCount")?,
        adjustment_factor: row.f64_opt("AdjustmentFactor")?,
        market_vwap: row.f64_opt("MarketVWAP")?,
        short_sold: row.f64_opt("ShortSold")?,
        short_sold_percent: row.f64_opt("ShortSoldPercent")?,
        short_sell_position: row.f64_opt("ShortSellPosition")?,
        short_sell_position_percent: row.f64_opt("ShortSellPositionPercent")?,
        valuation_price: row.f64_opt("ValuationPrice")?,
    })
}

fn map_meta(row: &SoapRow) -> Result<TimeSeriesMeta, IressError> {
    Ok(TimeSeriesMeta {
        price_display_multiplier: row.f64_opt("PriceDisplayMultiplier")?,
        security_code: row.string("SecurityCode"),
        exchange: row.string("Exchange"),
        data_source: row.string("DataSource"),
        oldest_source_date: row.date_opt("OldestSourceDate")?,
    })
}

pub(super) fn map_response(table: SoapTable) -> Result<TimeSeriesResponse, IressError> {
    let mut rows = table
        .rows
        .iter()
        .map(map_row)
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by_key(|r| r.date);

    let meta = table.header_rows.first().map(map_meta).transpose()?;

    Ok(TimeSeriesResponse { rows, meta })
}
