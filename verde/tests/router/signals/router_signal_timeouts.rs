use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use verde::{PartialPillarScore, Verde, VerdeError};
use verde_mock::MockConnector as SeededConnector;

use crate::helpers::{AAA, BBB, MockConnector, ticker};

#[tokio::test(start_paused = true)]
async fn a_stalled_ticker_times_out_per_source_without_failing_the_request() {
    let verde = Verde::builder()
        .with_connector(Arc::new(SeededConnector::new()))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let universe = vec![ticker("TIMEOUT"), ticker("ACME")];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    // TIMEOUT stalls all three sources; ACME is unaffected.
    assert_eq!(report.scores.len(), 2);
    assert_eq!(report.warnings.len(), 3);
    for warning in &report.warnings {
        assert!(matches!(warning, VerdeError::AllProvidersTimedOut { .. }));
    }
}

#[tokio::test(start_paused = true)]
async fn the_request_deadline_cuts_off_slow_signal_collection() {
    let connector = MockConnector::builder()
        .delay_ms(50)
        .quiet_signals()
        .build();
    let verde = Verde::builder()
        .with_connector(connector)
        .request_timeout(Duration::from_millis(10))
        .build()
        .unwrap();

    let universe = vec![ticker(AAA)];
    let err = verde.esg_scores(&universe, Utc::now()).await.unwrap_err();
    assert_eq!(err, VerdeError::request_timeout("esg-scores"));
}

#[tokio::test(start_paused = true)]
async fn a_timed_out_provider_falls_through_to_the_next() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay_ms(100)
        .returns_sustainability_ok(PartialPillarScore {
            e: Some(0.9),
            s: Some(0.9),
            g: Some(0.9),
        })
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .on_sustainability(|t| {
            Ok(if t.as_str() == AAA {
                PartialPillarScore {
                    e: Some(0.9),
                    s: Some(0.9),
                    g: Some(0.9),
                }
            } else {
                PartialPillarScore::default()
            })
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(10))
        .build()
        .unwrap();

    // If the slow connector had answered, both tickers would carry the same
    // full triple and normalize to the midpoint. The spread proves the fast
    // connector served after the timeout.
    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    assert!(report.warnings.is_empty());
    assert!((report.scores[&ticker(AAA)].composite() - 1.0).abs() < 1e-12);
    assert!(report.scores[&ticker(BBB)].composite().abs() < 1e-12);
}
