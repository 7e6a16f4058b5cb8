use polars::prelude::*;

use crate::dividends::DividendRow;
use crate::intraday::IntradayRow;
use crate::marketcap::MarketCapRow;
use crate::quotes::QuoteRow;
use crate::timeseries::TimeSeriesRow;

/// Trait for converting result rows into a polars `DataFrame`.
///
/// Date and datetime columns are rendered as ISO-8601 strings so the crate
/// works against `polars` with default features off.
pub trait ToDataFrame {
    /// Converts the rows into a `DataFrame`, index column first.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

macro_rules! col {
    ($rows:expr, $name:literal, $f:expr) => {
        Column::new($name.into(), $rows.iter().map($f).collect::<Vec<_>>())
    };
}

impl ToDataFrame for [TimeSeriesRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            col!(self, "date", |r| r.date.to_string()),
            col!(self, "open", |r| r.open),
            col!(self, "high", |r| r.high),
            col!(self, "low", |r| r.low),
            col!(self, "close", |r| Some(r.close)),
            col!(self, "total_volume", |r| r.total_volume),
            col!(self, "total_value", |r| r.total_value),
            col!(self, "trade_count", |r| r.trade_count),
            col!(self, "adjustment_factor", |r| r.adjustment_factor),
            col!(self, "market_vwap", |r| r.market_vwap),
            col!(self, "short_sold", |r| r.short_sold),
            col!(self, "short_sold_percent", |r| r.short_sold_percent),
            col!(self, "short_sell_position", |r| r.short_sell_position),
            col!(self, "short_sell_position_percent", |r| r
                .short_sell_position_percent),
            col!(self, "valuation_price", |r| r.valuation_price),
        ])
    }
}

impl ToDataFrame for [DividendRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            col!(self, "ex_dividend_date", |r| r.ex_dividend_date.to_string()),
            col!(self, "dividend_amount", |r| r.dividend_amount),
            col!(self, "adjusted_dividend_amount", |r| r
                .adjusted_dividend_amount),
            col!(self, "franked_percent", |r| r.franked_percent),
            col!(self, "payable_date", |r| r
                .payable_date
                .map(|d| d.to_string())),
            col!(self, "books_closing_date", |r| r
                .books_closing_date
                .map(|d| d.to_string())),
            col!(self, "dividend_type", |r| r.dividend_type.clone()),
            col!(self, "share_rate", |r| r.share_rate),
            col!(self, "dividend_yield", |r| r.dividend_yield),
            col!(self, "drp_price", |r| r.drp_price),
            col!(self, "dividend_description", |r| r
                .dividend_description
                .clone()),
            col!(self, "declaration_date", |r| r
                .declaration_date
                .map(|d| d.to_string())),
            col!(self, "stc_credits_per_share", |r| r.stc_credits_per_share),
        ])
    }
}

impl ToDataFrame for [MarketCapRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            col!(self, "date", |r| r.date.to_string()),
            col!(self, "security_code", |r| r.security_code.clone()),
            col!(self, "exchange", |r| r.exchange.clone()),
            col!(self, "gics_code", |r| r.gics_code),
            col!(self, "index_code", |r| r.index_code.clone()),
            col!(self, "index_factor", |r| r.index_factor),
            col!(self, "index_points", |r| r.index_points),
            col!(self, "shares_on_issue", |r| r.shares_on_issue),
            col!(self, "market_capitalization_start_of_day", |r| r
                .market_capitalization_start_of_day),
            col!(self, "market_capitalization_end_of_day", |r| r
                .market_capitalization_end_of_day),
            col!(self, "market_weight_start_of_day", |r| r
                .market_weight_start_of_day),
            col!(self, "market_weight_end_of_day", |r| r
                .market_weight_end_of_day),
            col!(self, "index_price_start_of_day", |r| r
                .index_price_start_of_day),
            col!(self, "index_price_end_of_day", |r| r.index_price_end_of_day),
        ])
    }
}

impl ToDataFrame for [IntradayRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            col!(self, "datetime", |r| r.datetime.to_rfc3339()),
            col!(self, "open", |r| r.open),
            col!(self, "high", |r| r.high),
            col!(self, "low", |r| r.low),
            col!(self, "close", |r| Some(r.close)),
            col!(self, "total_volume", |r| r.total_volume),
            col!(self, "total_value", |r| r.total_value),
            col!(self, "trade_count", |r| r.trade_count),
            col!(self, "trading_period", |r| r
                .trading_period
                .map(|p| p.as_str().to_string())),
            col!(self, "last_trade_number", |r| r.last_trade_number),
        ])
    }
}

impl ToDataFrame for [QuoteRow] {
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        DataFrame::new(vec![
            col!(self, "security_code", |r| r.security_code.clone()),
            col!(self, "exchange", |r| r.exchange.clone()),
            col!(self, "data_source", |r| r.data_source.clone()),
            col!(self, "error_number", |r| r.error_number),
            col!(self, "bid_price", |r| r.bid_price),
            col!(self, "bid_volume", |r| r.bid_volume),
            col!(self, "bid_count", |r| r.bid_count),
            col!(self, "ask_price", |r| r.ask_price),
            col!(self, "ask_volume", |r| r.ask_volume),
            col!(self, "ask_count", |r| r.ask_count),
            col!(self, "open_price", |r| r.open_price),
            col!(self, "high_price", |r| r.high_price),
            col!(self, "low_price", |r| r.low_price),
            col!(self, "last_price", |r| r.last_price),
            col!(self, "previous_close_price", |r| r.previous_close_price),
            col!(self, "total_volume", |r| r.total_volume),
            col!(self, "total_value", |r| r.total_value),
            col!(self, "movement", |r| r.movement),
            col!(self, "trading_status", |r| r.trading_status.clone()),
            col!(self, "trade_count", |r| r.trade_count),
            col!(self, "trade_datetime", |r| r
                .trade_datetime
                .map(|dt| dt.to_string())),
            col!(self, "update_datetime", |r| r
                .update_datetime
                .map(|dt| dt.to_string())),
            col!(self, "board", |r| r.board.clone()),
        ])
    }
}
