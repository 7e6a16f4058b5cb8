use serde::Serialize;

/* ----- shared request vocabulary ----- */

/// Sampling frequency for the daily/weekly/... time-series operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

/// Consolidation mode for the intraday time-series operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum IntradayFrequency {
    /// Consolidate N minutes per row; N must be an integral divisor of 60.
    #[default]
    Minutes,
    /// Consolidate N trades per row.
    Trades,
}

impl IntradayFrequency {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            IntradayFrequency::Minutes => "minutes",
            IntradayFrequency::Trades => "trades",
        }
    }
}

/* ----- session ----- */

/// An established IPD session: the key sent with every call plus the user
/// token reported on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub session_key: String,
    pub user_token: String,
}
