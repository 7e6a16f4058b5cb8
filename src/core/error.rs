use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IressError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The gateway returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body could not be written or parsed as XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// The gateway returned a SOAP fault.
    #[error("SOAP fault {code}: {reason}")]
    Soap {
        /// The SOAP fault code (e.g. `soap:Server`).
        code: String,
        /// The human-readable fault string.
        reason: String,
    },

    /// Session establishment failed or no credentials were configured.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The data received was in an unexpected shape or missing a required column.
    #[error("Data format unexpected or missing column: {0}")]
    Data(String),

    /// A request was built with invalid or incomplete parameters.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,
}
