use chrono::NaiveDate;

use crate::core::models::Frequency;
use crate::core::soap::{Params, fmt_date};
use crate::core::{IressClient, IressError};

use super::model::TimeSeriesResponse;
use super::wire;

/// How the security is addressed on the wire. A security containing `.` or
/// `@` is already in `code.exchange@datasource|board` text form; a bare code
/// with an exchange uses the two separate parameters; a bare code without an
/// exchange is still valid security text.
pub(super) enum Selector {
    CodeAndExchange { code: String, exchange: String },
    Text(String),
}

impl Selector {
    pub(super) fn resolve(security: &str, exchange: Option<&str>) -> Self {
        if security.contains('.') || security.contains('@') {
            return Selector::Text(security.to_string());
        }
        match exchange {
            Some(exchange) => Selector::CodeAndExchange {
                code: security.to_string(),
                exchange: exchange.to_string(),
            },
            None => Selector::Text(security.to_string()),
        }
    }

    fn apply(&self, params: &mut Params) {
        match self {
            Selector::CodeAndExchange { code, exchange } => {
                params.push("SecurityCode", code);
                params.push("Exchange", exchange);
            }
            Selector::Text(text) => params.push("SecurityText", text),
        }
    }
}

pub(super) async fn fetch_window(
    client: &IressClient,
    selector: &Selector,
    frequency: Frequency,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<TimeSeriesResponse, IressError> {
    let mut params = Params::new();
    selector.apply(&mut params);
    params.push("Frequency", frequency.as_str());
    params.push("TimeSeriesFromDate", fmt_date(from));
    params.push("TimeSeriesToDate", fmt_date(to));

    let table = client.invoke("TimeSeriesGet2", params).await?;
    wire::map_response(table)
}
