//! Centralized constants for default endpoints and UA.

/// Default desktop UA; the gateway is local but still logs the client string.
pub(crate) const USER_AGENT: &str = concat!("iress-rs/", env!("CARGO_PKG_VERSION"));

/// The IPD web-service namespace. Also the SOAPAction prefix.
pub(crate) const IRESS_NS: &str = "http://webservices.iress.com.au/v4/";

/// Default SOAP endpoint of the Iress Pro Desktop gateway.
/// The desktop application exposes the web services on a local port; the
/// service is selected with the `svc` query parameter.
pub(crate) const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:51234/soap.aspx";

/// The only service available for the desktop version.
pub(crate) const DEFAULT_SERVICE: &str = "IRESS";

/// Application identifier reported on session start.
pub(crate) const DEFAULT_APPLICATION_ID: &str = "app";

/// Intraday timestamps come back naive; this is the default zone they are
/// localized to unless the client overrides it.
pub(crate) const DEFAULT_INTRADAY_TZ: chrono_tz::Tz = chrono_tz::America::New_York;
