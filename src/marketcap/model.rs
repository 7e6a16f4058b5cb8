use chrono::NaiveDate;
use serde::Serialize;

/// One row of `MarketCapitalizationHistoricalGet`, keyed by `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketCapRow {
    /// Date at which market capitalization was calculated (the index column).
    pub date: NaiveDate,
    pub security_code: String,
    pub exchange: String,
    /// Global Industry Classification Standard code.
    pub gics_code: Option<i32>,
    pub index_code: Option<String>,
    pub index_factor: Option<f64>,
    pub index_points: Option<f64>,
    /// Number of shares on issue at the time of calculation.
    pub shares_on_issue: Option<f64>,
    pub market_capitalization_start_of_day: Option<f64>,
    pub market_capitalization_end_of_day: Option<f64>,
    pub market_weight_start_of_day: Option<f64>,
    pub market_weight_end_of_day: Option<f64>,
    pub index_price_start_of_day: Option<f64>,
    pub index_price_end_of_day: Option<f64>,
}
