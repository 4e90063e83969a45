use chrono::Utc;
use verde::{Headline, PartialPillarScore, Verde, VerdeError};

use crate::helpers::{AAA, BBB, MockConnector, dt, ticker};

fn full(e: f64, s: f64, g: f64) -> PartialPillarScore {
    PartialPillarScore {
        e: Some(e),
        s: Some(s),
        g: Some(g),
    }
}

#[tokio::test]
async fn full_sustainability_with_quiet_news_and_filing_tops_the_group() {
    let connector = MockConnector::builder()
        .on_sustainability(|t| {
            Ok(if t.as_str() == AAA {
                full(0.8, 0.8, 0.8)
            } else {
                PartialPillarScore::default()
            })
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(report.scores.len(), 2);
    // AAA fuses above the all-neutral BBB on every pillar, so min-max
    // normalization pins the two to the extremes.
    assert!((report.scores[&ticker(AAA)].composite() - 1.0).abs() < 1e-12);
    assert!(report.scores[&ticker(BBB)].composite().abs() < 1e-12);
}

#[tokio::test]
async fn identical_peers_normalize_to_the_midpoint() {
    let connector = MockConnector::builder()
        .returns_sustainability_ok(full(0.8, 0.8, 0.8))
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    for (_, score) in &report.scores {
        assert!((score.composite() - 0.5).abs() < 1e-12);
    }
}

#[tokio::test]
async fn a_lone_ticker_sits_at_the_midpoint() {
    let connector = MockConnector::builder()
        .returns_sustainability_ok(full(0.9, 0.9, 0.9))
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    assert_eq!(report.scores.len(), 1);
    assert!((report.scores[&ticker(AAA)].composite() - 0.5).abs() < 1e-12);
}

#[tokio::test]
async fn an_empty_universe_is_rejected() {
    let verde = Verde::builder()
        .with_connector(MockConnector::builder().quiet_signals().build())
        .build()
        .unwrap();

    let err = verde.esg_scores(&[], Utc::now()).await.unwrap_err();
    assert!(matches!(err, VerdeError::InvalidArg(_)));
}

#[tokio::test]
async fn duplicate_tickers_are_rejected() {
    let verde = Verde::builder()
        .with_connector(MockConnector::builder().quiet_signals().build())
        .build()
        .unwrap();

    let universe = vec![ticker(AAA), ticker("aaa")];
    let err = verde.esg_scores(&universe, Utc::now()).await.unwrap_err();
    match err {
        VerdeError::InvalidArg(msg) => assert!(msg.contains("duplicate")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn news_headlines_lift_a_ticker_over_its_peers() {
    let connector = MockConnector::builder()
        .on_sustainability(|_| Ok(PartialPillarScore::default()))
        .on_news(|t, _| {
            // Touches all three pillar vocabularies, so the lift is
            // symmetric and survives per-pillar normalization.
            Ok(if t.as_str() == AAA {
                vec![Headline::new(
                    "AAA improves environmental, social and governance practices",
                    dt(2024, 3, 1, 12, 0, 0),
                )]
            } else {
                vec![]
            })
        })
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde
        .esg_scores(&universe, dt(2024, 3, 2, 12, 0, 0))
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let aaa = report.scores[&ticker(AAA)].composite();
    let bbb = report.scores[&ticker(BBB)].composite();
    assert!(aaa > bbb, "positive coverage should rank AAA above BBB");
}
