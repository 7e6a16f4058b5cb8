use crate::common::{action, client_for, mock_session_start, setup_server, soap_result};
use chrono::NaiveDate;
use httpmock::Method::POST;
use iress_rs::TimeSeriesBuilder;

fn rows(dates: &[&str]) -> String {
    let rows: String = dates
        .iter()
        .map(|d| {
            format!(
                "<DataRow><TimeSeriesDate>{d}</TimeSeriesDate><ClosePrice>1.0</ClosePrice></DataRow>"
            )
        })
        .collect();
    soap_result("TimeSeriesGet2", &format!("<DataRows>{rows}</DataRows>"))
}

fn builder<'a>(client: &'a iress_rs::IressClient) -> TimeSeriesBuilder<'a> {
    TimeSeriesBuilder::new(client, "BHP").exchange("ASX").between(
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
    )
}

#[tokio::test]
async fn advances_the_window_until_exhausted() {
    let server = setup_server();
    let _session = mock_session_start(&server);

    // First page covers Jan 1-2; the loop must re-request from Jan 3.
    let page1 = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<TimeSeriesFromDate>2021/01/01</TimeSeriesFromDate>");
        then.status(200).body(rows(&["2021-01-01", "2021-01-02"]));
    });
    let page2 = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<TimeSeriesFromDate>2021/01/03</TimeSeriesFromDate>");
        then.status(200).body(rows(&["2021-01-03", "2021-01-04"]));
    });

    let client = client_for(&server);
    let bars = builder(&client).fetch_paged().await.unwrap();

    page1.assert_hits(1);
    page2.assert_hits(1);
    assert_eq!(bars.len(), 4);
    assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(bars[3].date, NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
}

#[tokio::test]
async fn later_page_failure_returns_partial_data() {
    let server = setup_server();
    let _session = mock_session_start(&server);

    let _page1 = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<TimeSeriesFromDate>2021/01/01</TimeSeriesFromDate>");
        then.status(200).body(rows(&["2021-01-01", "2021-01-02"]));
    });
    let _page2 = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"))
            .body_includes("<TimeSeriesFromDate>2021/01/03</TimeSeriesFromDate>");
        then.status(500);
    });

    let client = client_for(&server);
    let bars = builder(&client).fetch_paged().await.unwrap();
    assert_eq!(bars.len(), 2);
}

#[tokio::test]
async fn first_page_failure_propagates() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"));
        then.status(500);
    });

    let client = client_for(&server);
    let err = builder(&client).fetch_paged().await.unwrap_err();
    assert!(matches!(err, iress_rs::IressError::Status { status: 500, .. }));
}

#[tokio::test]
async fn empty_first_page_is_an_empty_result() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/soap")
            .header("SOAPAction", action("TimeSeriesGet2"));
        then.status(200).body(rows(&[]));
    });

    let client = client_for(&server);
    let bars = builder(&client).fetch_paged().await.unwrap();
    assert!(bars.is_empty());
    mock.assert_hits(1);
}
