//! SOAP 1.1 envelope rendering and response decoding for the IPD gateway.
//!
//! Every operation shares the same shape: an `Input` element carrying an
//! optional `Header/SessionKey` and a `Parameters` element, and a response
//! carrying `Result/DataRows/DataRow*` (plus `Result/HeaderRows/HeaderRow*`
//! for operations that report per-security metadata). Rather than binding
//! each operation to the WSDL, requests are written with a `quick_xml`
//! writer and responses are walked with a `quick_xml` reader that is
//! namespace-agnostic on local element names.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::core::error::IressError;

pub(crate) use crate::core::client::constants::IRESS_NS;

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Request date format used by the date-typed parameters.
pub(crate) fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y/%m/%d").to_string()
}

/// Request format for dateTime-typed parameters.
pub(crate) fn fmt_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// A single request parameter: a scalar, or an array wrapper with repeated
/// item elements (`SecurityCodeArray` around `SecurityCode*`).
enum ParamValue {
    Scalar(String),
    Array {
        item: &'static str,
        values: Vec<String>,
    },
}

/// Ordered request parameters. Unset (`None`) parameters are omitted from
/// the envelope entirely; the gateway treats absence as NULL.
#[derive(Default)]
pub(crate) struct Params(Vec<(&'static str, ParamValue)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, ParamValue::Scalar(value.into())));
    }

    pub(crate) fn push_opt(&mut self, name: &'static str, value: Option<String>) {
        if let Some(v) = value {
            self.push(name, v);
        }
    }

    /// Pushes an array parameter; empty arrays are omitted.
    pub(crate) fn push_array(&mut self, name: &'static str, item: &'static str, values: &[String]) {
        if !values.is_empty() {
            self.0.push((
                name,
                ParamValue::Array {
                    item,
                    values: values.to_vec(),
                },
            ));
        }
    }
}

fn xml_err(e: impl std::fmt::Display) -> IressError {
    IressError::Xml(e.to_string())
}

/// Thin wrapper so nested element writes stay readable.
struct EnvelopeWriter {
    w: Writer<Vec<u8>>,
}

impl EnvelopeWriter {
    fn new() -> Self {
        Self {
            w: Writer::new(Vec::new()),
        }
    }

    fn decl(&mut self) -> Result<(), IressError> {
        self.w
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(xml_err)
    }

    fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<(), IressError> {
        let mut el = BytesStart::new(name);
        for (k, v) in attrs {
            el.push_attribute((*k, *v));
        }
        self.w.write_event(Event::Start(el)).map_err(xml_err)
    }

    fn close(&mut self, name: &str) -> Result<(), IressError> {
        self.w
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn leaf(&mut self, name: &str, text: &str) -> Result<(), IressError> {
        self.open(name, &[])?;
        self.w
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)?;
        self.close(name)
    }

    fn finish(self) -> Result<String, IressError> {
        String::from_utf8(self.w.into_inner()).map_err(xml_err)
    }
}

/// Renders a full request envelope for `operation`. `session_key` is `None`
/// only for the session-start call itself.
pub(crate) fn build_envelope(
    operation: &str,
    session_key: Option<&str>,
    params: &Params,
) -> Result<String, IressError> {
    let mut ew = EnvelopeWriter::new();
    ew.decl()?;
    ew.open("soap:Envelope", &[("xmlns:soap", SOAP_ENV_NS)])?;
    ew.open("soap:Body", &[])?;
    ew.open(operation, &[("xmlns", IRESS_NS)])?;
    ew.open("Input", &[])?;
    if let Some(key) = session_key {
        ew.open("Header", &[])?;
        ew.leaf("SessionKey", key)?;
        ew.close("Header")?;
    }
    ew.open("Parameters", &[])?;
    for (name, value) in &params.0 {
        match value {
            ParamValue::Scalar(v) => ew.leaf(name, v)?,
            ParamValue::Array { item, values } => {
                ew.open(name, &[])?;
                for v in values {
                    ew.leaf(item, v)?;
                }
                ew.close(name)?;
            }
        }
    }
    ew.close("Parameters")?;
    ew.close("Input")?;
    ew.close(operation)?;
    ew.close("soap:Body")?;
    ew.close("soap:Envelope")?;
    ew.finish()
}

/// One decoded `DataRow` (or `HeaderRow`): column name to text content.
/// Empty and `xsi:nil` cells are simply absent.
#[derive(Debug, Default, Clone)]
pub(crate) struct SoapRow {
    cells: BTreeMap<String, String>,
}

impl SoapRow {
    pub(crate) fn text(&self, col: &str) -> Option<&str> {
        self.cells.get(col).map(String::as_str).filter(|s| !s.is_empty())
    }

    pub(crate) fn require(&self, col: &str) -> Result<&str, IressError> {
        self.text(col)
            .ok_or_else(|| IressError::Data(format!("missing required column `{col}`")))
    }

    pub(crate) fn string(&self, col: &str) -> Option<String> {
        self.text(col).map(str::to_string)
    }

    pub(crate) fn f64(&self, col: &str) -> Result<f64, IressError> {
        parse_num(col, self.require(col)?)
    }

    pub(crate) fn f64_opt(&self, col: &str) -> Result<Option<f64>, IressError> {
        self.text(col).map(|s| parse_num(col, s)).transpose()
    }

    pub(crate) fn i32_opt(&self, col: &str) -> Result<Option<i32>, IressError> {
        self.text(col).map(|s| parse_num(col, s)).transpose()
    }

    pub(crate) fn i64_opt(&self, col: &str) -> Result<Option<i64>, IressError> {
        self.text(col).map(|s| parse_num(col, s)).transpose()
    }

    pub(crate) fn date(&self, col: &str) -> Result<NaiveDate, IressError> {
        let s = self.require(col)?;
        parse_date(s).ok_or_else(|| bad_cell(col, s, "date"))
    }

    pub(crate) fn date_opt(&self, col: &str) -> Result<Option<NaiveDate>, IressError> {
        self.text(col)
            .map(|s| parse_date(s).ok_or_else(|| bad_cell(col, s, "date")))
            .transpose()
    }

    pub(crate) fn datetime(&self, col: &str) -> Result<NaiveDateTime, IressError> {
        let s = self.require(col)?;
        parse_datetime(s).ok_or_else(|| bad_cell(col, s, "dateTime"))
    }

    pub(crate) fn datetime_opt(&self, col: &str) -> Result<Option<NaiveDateTime>, IressError> {
        self.text(col)
            .map(|s| parse_datetime(s).ok_or_else(|| bad_cell(col, s, "dateTime")))
            .transpose()
    }

    #[cfg(test)]
    pub(crate) fn from_cells<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn bad_cell(col: &str, value: &str, ty: &str) -> IressError {
    IressError::Data(format!("column `{col}` is not a valid {ty}: `{value}`"))
}

fn parse_num<T: std::str::FromStr>(col: &str, s: &str) -> Result<T, IressError> {
    s.parse()
        .map_err(|_| IressError::Data(format!("column `{col}` is not a number: `{s}`")))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Some deployments report xsd:date columns with a midnight time part.
    parse_datetime(s).map(|dt| dt.date())
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    None
}

/// The generic decoded response: data rows plus any header rows.
#[derive(Debug, Default)]
pub(crate) struct SoapTable {
    pub(crate) rows: Vec<SoapRow>,
    pub(crate) header_rows: Vec<SoapRow>,
}

fn local_name(name: quick_xml::name::LocalName<'_>) -> Result<String, IressError> {
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(xml_err)
}

fn text_of(e: &BytesText<'_>) -> Result<String, IressError> {
    let raw = String::from_utf8_lossy(e.as_ref()).into_owned();
    Ok(quick_xml::escape::unescape(&raw).map_err(xml_err)?.into_owned())
}

/// Decodes a response envelope into a [`SoapTable`].
///
/// A `Fault` anywhere in the body short-circuits into [`IressError::Soap`].
/// Namespace prefixes are ignored; only local names are matched, which keeps
/// the decoder independent of whatever prefix the gateway picked.
pub(crate) fn decode_response(body: &str) -> Result<SoapTable, IressError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut table = SoapTable::default();

    let mut in_fault = false;
    let mut fault_code = String::new();
    let mut fault_reason = String::new();

    // (is_header_row, cells) for the row currently being filled.
    let mut current: Option<(bool, SoapRow)> = None;
    let mut current_col: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = local_name(e.local_name())?;
                match name.as_str() {
                    "Fault" => in_fault = true,
                    "DataRow" if !in_fault => current = Some((false, SoapRow::default())),
                    "HeaderRow" if !in_fault => current = Some((true, SoapRow::default())),
                    _ => {
                        if in_fault || current.is_some() {
                            current_col = Some(name);
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = text_of(&e)?;
                if in_fault {
                    match current_col.as_deref() {
                        Some("faultcode") => fault_code = text,
                        Some("faultstring") => fault_reason = text,
                        _ => {}
                    }
                } else if let (Some((_, row)), Some(col)) = (current.as_mut(), current_col.as_ref())
                {
                    if !text.is_empty() {
                        row.cells.insert(col.clone(), text);
                    }
                }
            }
            Ok(Event::End(e)) => {
                let name = local_name(e.local_name())?;
                match name.as_str() {
                    "Fault" => {
                        return Err(IressError::Soap {
                            code: fault_code,
                            reason: fault_reason,
                        });
                    }
                    "DataRow" | "HeaderRow" => {
                        if let Some((is_header, row)) = current.take() {
                            if is_header {
                                table.header_rows.push(row);
                            } else {
                                table.rows.push(row);
                            }
                        }
                    }
                    _ => current_col = None,
                }
            }
            // xsi:nil and self-closing empty cells: leave the cell absent.
            Ok(Event::Empty(_)) => {}
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(IressError::Xml(format!("xml parse error: {e}"))),
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_renders_header_and_scalar_params() {
        let mut params = Params::new();
        params.push("SecurityCode", "BHP");
        params.push("Exchange", "ASX");
        let xml = build_envelope("TimeSeriesGet2", Some("sk-1"), &params).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains(
            "<TimeSeriesGet2 xmlns=\"http://webservices.iress.com.au/v4/\">"
        ));
        assert!(xml.contains("<Header><SessionKey>sk-1</SessionKey></Header>"));
        assert!(xml.contains(
            "<Parameters><SecurityCode>BHP</SecurityCode><Exchange>ASX</Exchange></Parameters>"
        ));
    }

    #[test]
    fn envelope_omits_header_without_session_and_escapes_text() {
        let mut params = Params::new();
        params.push("Password", "a<b&c");
        let xml = build_envelope("IRESSSessionStart", None, &params).unwrap();
        assert!(!xml.contains("<Header>"));
        assert!(xml.contains("<Password>a&lt;b&amp;c</Password>"));
    }

    #[test]
    fn envelope_renders_array_params_and_skips_none() {
        let mut params = Params::new();
        params.push_opt("IndexCode", None);
        params.push_array(
            "SecurityCodeArray",
            "SecurityCode",
            &["BHP".to_string(), "CBA".to_string()],
        );
        params.push_array("ExchangeArray", "Exchange", &[]);
        let xml = build_envelope("PricingQuoteGet", Some("k"), &params).unwrap();
        assert!(!xml.contains("IndexCode"));
        assert!(!xml.contains("ExchangeArray"));
        assert!(xml.contains(
            "<SecurityCodeArray><SecurityCode>BHP</SecurityCode><SecurityCode>CBA</SecurityCode></SecurityCodeArray>"
        ));
    }

    #[test]
    fn decode_extracts_rows_and_header_rows() {
        let body = r#"<?xml version="1.0"?>
            <soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <TimeSeriesGet2Response xmlns="http://webservices.iress.com.au/v4/">
                  <Result>
                    <HeaderRows>
                      <HeaderRow><SecurityCode>BHP</SecurityCode><PriceDisplayMultiplier>1</PriceDisplayMultiplier></HeaderRow>
                    </HeaderRows>
                    <DataRows>
                      <DataRow><ClosePrice>42.5</ClosePrice><TimeSeriesDate>2021-03-01</TimeSeriesDate><TotalVolume/></DataRow>
                      <DataRow><ClosePrice>43.0</ClosePrice><TimeSeriesDate>2021-03-02</TimeSeriesDate></DataRow>
                    </DataRows>
                  </Result>
                </TimeSeriesGet2Response>
              </soap:Body>
            </soap:Envelope>"#;

        let table = decode_response(body).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.header_rows.len(), 1);
        assert_eq!(table.rows[0].f64("ClosePrice").unwrap(), 42.5);
        assert_eq!(table.rows[0].text("TotalVolume"), None);
        assert_eq!(
            table.rows[1].date("TimeSeriesDate").unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap()
        );
        assert_eq!(table.header_rows[0].text("SecurityCode"), Some("BHP"));
    }

    #[test]
    fn decode_surfaces_faults() {
        let body = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
              <soap:Body>
                <soap:Fault>
                  <faultcode>soap:Client</faultcode>
                  <faultstring>Invalid session key</faultstring>
                </soap:Fault>
              </soap:Body>
            </soap:Envelope>"#;
        match decode_response(body) {
            Err(IressError::Soap { code, reason }) => {
                assert_eq!(code, "soap:Client");
                assert_eq!(reason, "Invalid session key");
            }
            other => panic!("expected SOAP fault, got {other:?}"),
        }
    }

    #[test]
    fn row_accessors_report_bad_cells() {
        let row = SoapRow::from_cells([("ClosePrice", "not-a-number")]);
        let err = row.f64("ClosePrice").unwrap_err();
        assert!(matches!(err, IressError::Data(_)));
        let err = row.f64("OpenPrice").unwrap_err();
        assert!(err.to_string().contains("OpenPrice"));
    }

    #[test]
    fn date_cells_accept_both_wire_formats() {
        let row = SoapRow::from_cells([
            ("A", "2021-01-05"),
            ("B", "2021/01/05"),
            ("C", "2021-01-05T00:00:00"),
        ]);
        let expect = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(row.date("A").unwrap(), expect);
        assert_eq!(row.date("B").unwrap(), expect);
        assert_eq!(row.date("C").unwrap(), expect);
    }
}
