use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// Trading-period marker on intraday rows (minutes frequency only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradingPeriod {
    StartTrading,
    /// Start trading, with no trades during the start trading period.
    StartTradingNoTrades,
    EndTrading,
    /// End trading, with no trades during the end trading period.
    EndTradingNoTrades,
}

impl TradingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            TradingPeriod::StartTrading => "start_trading",
            TradingPeriod::StartTradingNoTrades => "start_trading_no_trades",
            TradingPeriod::EndTrading => "end_trading",
            TradingPeriod::EndTradingNoTrades => "end_trading_no_trades",
        }
    }

    pub(crate) fn from_wire(v: i32) -> Option<Self> {
        match v {
            0 => Some(TradingPeriod::StartTrading),
            1 => Some(TradingPeriod::StartTradingNoTrades),
            2 => Some(TradingPeriod::EndTrading),
            3 => Some(TradingPeriod::EndTradingNoTrades),
            _ => None,
        }
    }
}

/// One row of `TimeSeriesIntraDayGet2`, keyed by `datetime`.
///
/// The gateway reports naive local timestamps; they are localized to the
/// client's configured intraday timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntradayRow {
    /// Date and time of the intraday point (the index column).
    pub datetime: DateTime<Tz>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    /// Closing price for the interval. Never NULL on the wire.
    pub close: f64,
    pub total_volume: Option<f64>,
    pub total_value: Option<f64>,
    pub trade_count: Option<i32>,
    pub trading_period: Option<TradingPeriod>,
    /// The last trade number of the interval.
    pub last_trade_number: Option<i64>,
}

/// Per-security metadata reported in the response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntradayMeta {
    pub price_display_multiplier: Option<f64>,
    pub security_code: Option<String>,
    pub exchange: Option<String>,
    pub data_source: Option<String>,
}

/// Full decoded response: rows sorted ascending by timestamp, plus header
/// metadata when the gateway reported any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntradayResponse {
    pub rows: Vec<IntradayRow>,
    pub meta: Option<IntradayMeta>,
}
