//! HTTP plumbing for SOAP calls.

use url::Url;

use crate::core::client::constants::IRESS_NS;
use crate::core::error::IressError;
use crate::core::soap;

/// POSTs a rendered envelope and returns the response body.
///
/// Gateways report SOAP faults with a 500, so on a non-2xx status the body
/// is still inspected for a `Fault` before the status itself is surfaced.
pub(crate) async fn post_envelope(
    http: &reqwest::Client,
    endpoint: &Url,
    operation: &str,
    envelope: String,
) -> Result<String, IressError> {
    let action = format!("\"{IRESS_NS}{operation}\"");
    let resp = http
        .post(endpoint.clone())
        .header(reqwest::header::CONTENT_TYPE, "text/xml; charset=utf-8")
        .header("SOAPAction", action)
        .body(envelope)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        if body.contains("Fault") {
            // Returns Err(IressError::Soap) when a fault element is present.
            soap::decode_response(&body)?;
        }
        return Err(IressError::Status {
            status: status.as_u16(),
            url: endpoint.as_str().to_string(),
        });
    }

    Ok(body)
}
