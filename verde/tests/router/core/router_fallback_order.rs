use chrono::Utc;
use verde::{PartialPillarScore, Verde, VerdeError};

use crate::helpers::{AAA, BBB, MockConnector, q1_span, series, ticker};

#[tokio::test]
async fn the_first_registered_connector_serves_first() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_prices_ok(series(&[100.0, 110.0]))
        .build();
    let backup = MockConnector::builder()
        .name("backup")
        .returns_prices_ok(series(&[100.0, 90.0]))
        .build();

    let verde = Verde::builder()
        .with_connector(primary)
        .with_connector(backup)
        .build()
        .unwrap();

    let out = verde.price_history(&ticker(AAA), q1_span()).await.unwrap();
    assert_eq!(out.last_close(), Some(110.0));
}

#[tokio::test]
async fn a_failing_connector_falls_through_to_the_next() {
    let flaky = MockConnector::builder()
        .name("flaky")
        .on_price_history(|_, _| Err(VerdeError::connector("flaky", "boom")))
        .build();
    let backup = MockConnector::builder()
        .name("backup")
        .returns_prices_ok(series(&[100.0, 90.0]))
        .build();

    let verde = Verde::builder()
        .with_connector(flaky)
        .with_connector(backup)
        .build()
        .unwrap();

    let out = verde.price_history(&ticker(AAA), q1_span()).await.unwrap();
    assert_eq!(out.last_close(), Some(90.0));
}

#[tokio::test]
async fn a_recovered_signal_source_leaves_no_warning() {
    let flaky = MockConnector::builder()
        .name("flaky")
        .on_sustainability(|_| Err(VerdeError::connector("flaky", "boom")))
        .build();
    let backup = MockConnector::builder()
        .name("backup")
        .on_sustainability(|t| {
            Ok(if t.as_str() == AAA {
                PartialPillarScore {
                    e: Some(0.9),
                    s: Some(0.9),
                    g: Some(0.9),
                }
            } else {
                PartialPillarScore {
                    e: Some(0.1),
                    s: Some(0.1),
                    g: Some(0.1),
                }
            })
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();

    let verde = Verde::builder()
        .with_connector(flaky)
        .with_connector(backup)
        .build()
        .unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    // The backup's answers flowed through, and the recovered first attempt
    // is not worth a warning.
    assert!(report.warnings.is_empty());
    assert!((report.scores[&ticker(AAA)].composite() - 1.0).abs() < 1e-12);
    assert!(report.scores[&ticker(BBB)].composite().abs() < 1e-12);
}
