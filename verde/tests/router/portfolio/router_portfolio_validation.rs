use chrono::Utc;
use verde::{Verde, VerdeError};

use crate::helpers::{AAA, MockConnector, q1_span, ticker};

fn quiet_verde() -> Verde {
    Verde::builder()
        .with_connector(MockConnector::builder().quiet_signals().build())
        .build()
        .unwrap()
}

#[tokio::test]
async fn a_single_ticker_is_rejected() {
    let verde = quiet_verde();
    let universe = vec![ticker(AAA)];
    let err = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap_err();
    match err {
        VerdeError::InvalidArg(msg) => assert!(msg.contains("at least 2")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn an_empty_universe_is_rejected() {
    let verde = quiet_verde();
    let err = verde
        .portfolio(&[], q1_span(), Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, VerdeError::InvalidArg(_)));
}

#[tokio::test]
async fn duplicate_tickers_are_rejected() {
    let verde = quiet_verde();
    let universe = vec![ticker(AAA), ticker(" aaa ")];
    let err = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap_err();
    match err {
        VerdeError::InvalidArg(msg) => assert!(msg.contains("duplicate")),
        other => panic!("unexpected: {other:?}"),
    }
}
