use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `TimeSeriesGet2` output, keyed by `date`.
///
/// The short-sold columns are NULL when the account is not permissioned for
/// that data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesRow {
    /// The date of the time series point (the index column).
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Closing price for the period. Never NULL on the wire.
    pub close: f64,
    pub total_volume: Option<f64>,
    pub total_value: Option<f64>,
    pub trade_count: Option<i32>,
    /// Adjustment factor indicating change to capital.
    pub adjustment_factor: Option<f64>,
    /// The market volume weighted average price.
    pub market_vwap: Option<f64>,
    pub short_sold: Option<f64>,
    pub short_sold_percent: Option<f64>,
    pub short_sell_position: Option<f64>,
    pub short_sell_position_percent: Option<f64>,
    /// The valuation price at end of day.
    pub valuation_price: Option<f64>,
}

/// Per-security metadata reported in the response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesMeta {
    pub price_display_multiplier: Option<f64>,
    pub security_code: Option<String>,
    pub exchange: Option<String>,
    pub data_source: Option<String>,
    /// The date of the oldest time series data available for the security.
    pub oldest_source_date: Option<NaiveDate>,
}

/// Full decoded response: rows sorted ascending by date, plus header
/// metadata when the gateway reported any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesResponse {
    pub rows: Vec<TimeSeriesRow>,
    pub meta: Option<TimeSeriesMeta>,
}
