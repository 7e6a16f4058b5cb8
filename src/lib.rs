//! iress-rs: ergonomic client for the Iress Pro Desktop web services.
//!
//! The desktop application exposes a local SOAP gateway; this crate starts a
//! session against it and wraps the handful of pricing operations behind
//! typed builders: historical time series (with transparent pagination
//! across long windows), dividends, historical market capitalization,
//! intraday series and quote snapshots.
//!
//! # Example
//!
//! ```no_run
//! # use iress_rs::{IressClient, TimeSeriesBuilder};
//! # use chrono::NaiveDate;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IressClient::builder()
//!     .credentials("ACME", "jane", "secret")
//!     .build()?;
//!
//! let bars = TimeSeriesBuilder::new(&client, "BHP")
//!     .exchange("ASX")
//!     .between(
//!         NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
//!     )
//!     .fetch_paged()
//!     .await?;
//! println!("{} daily bars", bars.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dividends;
pub mod download;
pub mod intraday;
pub mod marketcap;
pub mod quotes;
pub mod security;
pub mod timeseries;

pub use crate::core::{
    Frequency, IntradayFrequency, IressClient, IressClientBuilder, IressError, Session,
};
pub use dividends::{DividendRow, DividendsBuilder};
pub use download::{DownloadBuilder, DownloadEntry, DownloadKind, DownloadResponse, DownloadRows};
pub use intraday::{IntradayBuilder, IntradayMeta, IntradayResponse, IntradayRow, TradingPeriod};
pub use marketcap::{MarketCapBuilder, MarketCapRow};
pub use quotes::{QuoteRow, QuotesBuilder};
pub use security::Security;
pub use timeseries::{TimeSeriesBuilder, TimeSeriesMeta, TimeSeriesResponse, TimeSeriesRow};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
