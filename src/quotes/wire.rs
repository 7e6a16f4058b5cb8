use crate::core::IressError;
use crate::core::soap::{SoapRow, SoapTable};

use super::model::QuoteRow;

fn map_row(row: &SoapRow) -> Result<QuoteRow, IressError> {
    Ok(QuoteRow {
        security_code: row.require("SecurityCode")?.to_string(),
        exchange: row.require("Exchange")?.to_string(),
        data_source: row.string("DataSource"),
        error_number: row.i32_opt("ErrorNumber")?,
        ask_count: row.i32_opt("AskCount")?,
        ask_price: row.f64_opt("AskPrice")?,
        ask_volume: row.f64_opt("AskVolume")?,
        bid_count: row.i32_opt("BidCount")?,
        bid_price: row.f64_opt("BidPrice")?,
        bid_volume: row.f64_opt("BidVolume")?,
        total_volume: row.f64_opt("TotalVolume")?,
        total_value: row.f64_opt("TotalValue")?,
        high_price: row.f64_opt("HighPrice")?,
        last_price: row.f64_opt("LastPrice")?,
        low_price: row.f64_opt("LowPrice")?,
        match_price: row.f64_opt("MatchPrice")?,
        match_volume: row.f64_opt("MatchVolume")?,
        market_value: row.f64_opt("MarketValue")?,
        market_volume: row.f64_opt("MarketVolume")?,
        movement: row.f64_opt("Movement")?,
        open_price: row.f64_opt("OpenPrice")?,
        quotation_basis_code: row.string("QuotationBasisCode"),
        trading_status: row.string("TradingStatus"),
        trade_count: row.i32_opt("TradeCount")?,
        trade_datetime: row.datetime_opt("TradeDateTime")?,
        update_datetime: row.datetime_opt("UpdateDateTime")?,
        previous_close_price: row.f64_opt("PreviousClosePrice")?,
        board: row.string("Board"),
    })
}

pub(super) fn map_response(table: SoapTable) -> Result<Vec<QuoteRow>, IressError> {
    table.rows.iter().map(map_row).collect()
}
