#![allow(dead_code)]

use httpmock::{Method::POST, Mock, MockServer};
use iress_rs::IressClient;
use url::Url;

pub const SESSION_KEY: &str = "sess-key-1";
pub const USER_TOKEN: &str = "user-token-1";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// The SOAPAction header value for a named operation.
pub fn action(operation: &str) -> String {
    format!("\"http://webservices.iress.com.au/v4/{operation}\"")
}

/// Wraps `inner` (DataRows/HeaderRows markup) in a full response envelope.
pub fn soap_result(operation: &str, inner: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>\
         <{operation}Response xmlns=\"http://webservices.iress.com.au/v4/\">\
         <Result>{inner}</Result>\
         </{operation}Response>\
         </soap:Body>\
         </soap:Envelope>"
    )
}

pub fn soap_fault(code: &str, reason: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>\
         <soap:Fault>\
         <faultcode>{code}</faultcode>\
         <faultstring>{reason}</faultstring>\
         </soap:Fault>\
         </soap:Body>\
         </soap:Envelope>"
    )
}

pub fn session_start_body() -> String {
    soap_result(
        "IRESSSessionStart",
        &format!(
            "<DataRows><DataRow>\
             <IRESSSessionKey>{SESSION_KEY}</IRESSSessionKey>\
             <UserToken>{USER_TOKEN}</UserToken>\
             </DataRow></DataRows>"
        ),
    )
}

pub fn mock_session_start(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("IRESSSessionStart"));
        then.status(200)
            .header("content-type", "text/xml; charset=utf-8")
            .body(session_start_body());
    })
}

/// Mocks a named operation with a canned response body.
pub fn mock_operation<'a>(server: &'a MockServer, operation: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action(operation));
        then.status(200)
            .header("content-type", "text/xml; charset=utf-8")
            .body(body);
    })
}

pub fn client_for(server: &MockServer) -> IressClient {
    IressClient::builder()
        .endpoint(Url::parse(&server.url("/soap")).unwrap())
        .credentials("ACME", "jane", "secret")
        .build()
        .unwrap()
}
