use chrono::NaiveDate;
use serde::Serialize;

/// One dividend event from `SecurityDividendGetBySecurity`, keyed by
/// `ex_dividend_date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividendRow {
    /// The ex-dividend date (the index column).
    pub ex_dividend_date: NaiveDate,
    pub dividend_amount: Option<f64>,
    pub adjusted_dividend_amount: Option<f64>,
    /// Franking percentage (Australian imputation credits).
    pub franked_percent: Option<f64>,
    pub payable_date: Option<NaiveDate>,
    pub books_closing_date: Option<NaiveDate>,
    pub dividend_type: Option<String>,
    pub share_rate: Option<f64>,
    pub dividend_yield: Option<f64>,
    /// Dividend reinvestment plan price.
    pub drp_price: Option<f64>,
    pub dividend_description: Option<String>,
    pub declaration_date: Option<NaiveDate>,
    /// South African secondary tax credits per share.
    pub stc_credits_per_share: Option<f64>,
}
