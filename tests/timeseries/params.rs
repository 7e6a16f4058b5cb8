use crate::common::{action, client_for, mock_session_start, setup_server, soap_result};
use chrono::NaiveDate;
use httpmock::Method::POST;
use iress_rs::{Frequency, IressError, TimeSeriesBuilder};

fn one_row() -> String {
    soap_result(
        "TimeSeriesGet2",
        "<DataRows><DataRow>\
         <TimeSeriesDate>2021-01-04</TimeSeriesDate>\
         <ClosePrice>42.5</ClosePrice>\
         </DataRow></DataRows>",
    )
}

fn window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
    )
}

#[tokio::test]
async fn security_text_wins_over_exchange() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<SecurityText>BHP.ASX@TM</SecurityText>");
        then.status(200).body(one_row());
    });

    let client = client_for(&server);
    let (start, end) = window();
    let bars = TimeSeriesBuilder::new(&client, "BHP.ASX@TM")
        .exchange("NYSE")
        .between(start, end)
        .fetch()
        .await
        .unwrap();

    mock.assert_hits(1);
    assert_eq!(bars.len(), 1);
}

#[tokio::test]
async fn bare_code_without_exchange_goes_as_security_text() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<SecurityText>BHP</SecurityText>");
        then.status(200).body(one_row());
    });

    let client = client_for(&server);
    let (start, end) = window();
    TimeSeriesBuilder::new(&client, "BHP")
        .between(start, end)
        .fetch()
        .await
        .unwrap();

    mock.assert_hits(1);
}

#[tokio::test]
async fn frequency_is_sent_on_the_wire() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<Frequency>weekly</Frequency>")
            .body_includes("<SecurityCode>BHP</SecurityCode>")
            .body_includes("<Exchange>ASX</Exchange>");
        then.status(200).body(one_row());
    });

    let client = client_for(&server);
    let (start, end) = window();
    TimeSeriesBuilder::new(&client, "BHP")
        .exchange("ASX")
        .frequency(Frequency::Weekly)
        .between(start, end)
        .fetch()
        .await
        .unwrap();

    mock.assert_hits(1);
}

#[tokio::test]
async fn inverted_window_is_rejected_before_any_request() {
    let server = setup_server();
    let client = client_for(&server);
    let (start, end) = window();
    let err = TimeSeriesBuilder::new(&client, "BHP")
        .exchange("ASX")
        .between(end, start)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, IressError::InvalidDates));
}

#[tokio::test]
async fn missing_window_is_rejected() {
    let server = setup_server();
    let client = client_for(&server);
    let err = TimeSeriesBuilder::new(&client, "BHP")
        .exchange("ASX")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, IressError::InvalidParams(_)));
}
