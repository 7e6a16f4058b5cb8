use crate::common::{client_for, mock_operation, mock_session_start, setup_server, soap_result};
use chrono::NaiveDate;
use iress_rs::TimeSeriesBuilder;

fn two_day_body() -> String {
    soap_result(
        "TimeSeriesGet2",
        "<HeaderRows><HeaderRow>\
         <PriceDisplayMultiplier>1</PriceDisplayMultiplier>\
         <SecurityCode>BHP</SecurityCode>\
         <Exchange>ASX</Exchange>\
         <DataSource>ASX</DataSource>\
         <OldestSourceDate>1998-01-02</OldestSourceDate>\
         </HeaderRow></HeaderRows>\
         <DataRows>\
         <DataRow>\
         <TimeSeriesDate>2021-03-02</TimeSeriesDate>\
         <OpenPrice>44.9</OpenPrice><HighPrice>45.6</HighPrice>\
         <LowPrice>44.7</LowPrice><ClosePrice>45.2</ClosePrice>\
         <TotalVolume>1000000</TotalVolume><TradeCount>5400</TradeCount>\
         <AdjustmentFactor>1</AdjustmentFactor><MarketVWAP>45.1</MarketVWAP>\
         </DataRow>\
         <DataRow>\
         <TimeSeriesDate>2021-03-01</TimeSeriesDate>\
         <OpenPrice>44.1</OpenPrice><HighPrice>44.8</HighPrice>\
         <LowPrice>44.0</LowPrice><ClosePrice>44.5</ClosePrice>\
         <ShortSold/>\
         </DataRow>\
         </DataRows>",
    )
}

#[tokio::test]
async fn decodes_rows_and_header_meta() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    let mock = mock_operation(&server, "TimeSeriesGet2", two_day_body());

    let client = client_for(&server);
    let resp = TimeSeriesBuilder::new(&client, "BHP")
        .exchange("ASX")
        .between(
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
        )
        .fetch_full()
        .await
        .unwrap();

    mock.assert();

    // Rows come back sorted ascending even though the wire order is reversed.
    assert_eq!(resp.rows.len(), 2);
    assert_eq!(
        resp.rows[0].date,
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
    );
    assert_eq!(resp.rows[0].close, 44.5);
    assert_eq!(resp.rows[0].short_sold, None);
    assert_eq!(resp.rows[0].trade_count, None);
    assert_eq!(resp.rows[1].trade_count, Some(5400));
    assert_eq!(resp.rows[1].market_vwap, Some(45.1));

    let meta = resp.meta.unwrap();
    assert_eq!(meta.security_code.as_deref(), Some("BHP"));
    assert_eq!(
        meta.oldest_source_date,
        Some(NaiveDate::from_ymd_opt(1998, 1, 2).unwrap())
    );
}

#[tokio::test]
async fn http_error_without_fault_is_a_status_error() {
    let server = setup_server();
    let _session = mock_session_start(&server);
    server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/soap")
            .header("SOAPAction", crate::common::action("TimeSeriesGet2"));
        then.status(503);
    });

    let client = client_for(&server);
    let err = TimeSeriesBuilder::new(&client, "BHP")
        .exchange("ASX")
        .between(
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 2).unwrap(),
        )
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, iress_rs::IressError::Status { status: 503, .. }));
}
