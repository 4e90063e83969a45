use std::time::Duration;

use chrono::Utc;
use verde::{PortfolioMode, Verde, VerdeError};

use crate::helpers::{AAA, BBB, MockConnector, q1_span, series, ticker};

#[tokio::test]
async fn too_little_history_is_a_hard_error() {
    let connector = MockConnector::builder()
        .quiet_signals()
        .on_price_history(|t, _| {
            Ok(if t.as_str() == AAA {
                series(&[100.0])
            } else {
                series(&[50.0, 50.5, 51.5, 51.0])
            })
        })
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let err = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap_err();
    match err {
        VerdeError::InsufficientData { what } => assert!(what.contains("AAA")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn a_missing_price_series_fails_the_portfolio() {
    let connector = MockConnector::builder()
        .quiet_signals()
        .on_price_history(|t, _| {
            if t.as_str() == BBB {
                Err(VerdeError::not_found("delisted"))
            } else {
                Ok(series(&[100.0, 102.0, 101.0, 103.0]))
            }
        })
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let err = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap_err();
    match err {
        VerdeError::NotFound { what } => assert_eq!(what, "price history for BBB"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn signal_failures_do_not_fail_the_portfolio() {
    let connector = MockConnector::builder()
        .on_sustainability(|_| Err(VerdeError::connector("mock", "esg feed down")))
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .on_price_history(|t, _| {
            Ok(if t.as_str() == AAA {
                series(&[100.0, 102.0, 101.0, 103.0, 102.5, 104.0])
            } else {
                series(&[50.0, 50.5, 51.5, 51.0, 51.8, 52.1])
            })
        })
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap();

    // Prices were healthy, so the optimization proceeds on neutral scores;
    // the degraded sustainability feed only shows up as warnings.
    assert_eq!(report.mode, PortfolioMode::EsgAware);
    assert_eq!(report.scores.len(), 2);
    assert_eq!(report.warnings.len(), 2);
    for warning in &report.warnings {
        assert!(matches!(warning, VerdeError::AllProvidersFailed(_)));
    }
}

#[tokio::test(start_paused = true)]
async fn the_request_deadline_cuts_off_the_portfolio() {
    let connector = MockConnector::builder()
        .quiet_signals()
        .on_price_history(|_, _| Ok(series(&[100.0, 102.0, 101.0, 103.0])))
        .delay_ms(50)
        .build();
    let verde = Verde::builder()
        .with_connector(connector)
        .request_timeout(Duration::from_millis(10))
        .build()
        .unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let err = verde
        .portfolio(&universe, q1_span(), Utc::now())
        .await
        .unwrap_err();
    assert_eq!(err, VerdeError::request_timeout("portfolio"));
}
