use chrono::NaiveDateTime;
use serde::Serialize;

/// One snapshot row of `PricingQuoteGet`.
///
/// The primary key is (`security_code`, `exchange`, `data_source`); this is
/// the one endpoint whose result is not indexed by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRow {
    pub security_code: String,
    pub exchange: String,
    pub data_source: Option<String>,
    /// Error number when the security was not available; 0 otherwise.
    pub error_number: Option<i32>,
    pub ask_count: Option<i32>,
    pub ask_price: Option<f64>,
    pub ask_volume: Option<f64>,
    pub bid_count: Option<i32>,
    pub bid_price: Option<f64>,
    pub bid_volume: Option<f64>,
    pub total_volume: Option<f64>,
    pub total_value: Option<f64>,
    pub high_price: Option<f64>,
    /// Last price in cents (unadjusted).
    pub last_price: Option<f64>,
    pub low_price: Option<f64>,
    /// Indicative match price before market match occurs.
    pub match_price: Option<f64>,
    pub match_volume: Option<f64>,
    pub market_value: Option<f64>,
    pub market_volume: Option<f64>,
    /// Current day's movement in points.
    pub movement: Option<f64>,
    pub open_price: Option<f64>,
    pub quotation_basis_code: Option<String>,
    pub trading_status: Option<String>,
    pub trade_count: Option<i32>,
    pub trade_datetime: Option<NaiveDateTime>,
    pub update_datetime: Option<NaiveDateTime>,
    pub previous_close_price: Option<f64>,
    /// Vendor datasource board.
    pub board: Option<String>,
}
