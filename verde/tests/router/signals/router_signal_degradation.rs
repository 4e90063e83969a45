use chrono::Utc;
use verde::{PartialPillarScore, Verde, VerdeError};

use crate::helpers::{AAA, BBB, MockConnector, series, ticker};

#[tokio::test]
async fn a_failing_source_degrades_to_neutral_with_a_warning() {
    let connector = MockConnector::builder()
        .on_sustainability(|t| {
            if t.as_str() == AAA {
                Err(VerdeError::connector("mock", "sustainability offline"))
            } else {
                Ok(PartialPillarScore::default())
            }
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    // The failure does not drop AAA from the report; it scores as neutral.
    assert_eq!(report.scores.len(), 2);
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        VerdeError::AllProvidersFailed(_)
    ));
}

#[tokio::test]
async fn uniformly_missing_data_surfaces_as_not_found() {
    let connector = MockConnector::builder()
        .on_sustainability(|t| {
            if t.as_str() == AAA {
                Err(VerdeError::not_found("nothing on file"))
            } else {
                Ok(PartialPillarScore::default())
            }
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        VerdeError::NotFound { what } => assert_eq!(what, "sustainability data for AAA"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn a_degraded_source_scores_like_an_explicitly_quiet_one() {
    let full = PartialPillarScore {
        e: Some(0.9),
        s: Some(0.9),
        g: Some(0.9),
    };

    let failing = MockConnector::builder()
        .on_sustainability(move |t| {
            if t.as_str() == AAA {
                Err(VerdeError::connector("mock", "boom"))
            } else {
                Ok(full)
            }
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();
    let quiet = MockConnector::builder()
        .on_sustainability(move |t| {
            if t.as_str() == AAA {
                Ok(PartialPillarScore::default())
            } else {
                Ok(full)
            }
        })
        .on_news(|_, _| Ok(vec![]))
        .on_filing(|_| Ok(None))
        .build();

    let universe = vec![ticker(AAA), ticker(BBB)];
    let as_of = Utc::now();

    let degraded = Verde::builder()
        .with_connector(failing)
        .build()
        .unwrap()
        .esg_scores(&universe, as_of)
        .await
        .unwrap();
    let explicit = Verde::builder()
        .with_connector(quiet)
        .build()
        .unwrap()
        .esg_scores(&universe, as_of)
        .await
        .unwrap();

    // Same scores either way; only the warning trail differs.
    assert_eq!(degraded.scores, explicit.scores);
    assert_eq!(degraded.warnings.len(), 1);
    assert!(explicit.warnings.is_empty());
}

#[tokio::test]
async fn a_prices_only_connector_yields_neutral_scores_and_unsupported_warnings() {
    let connector = MockConnector::builder()
        .returns_prices_ok(series(&[100.0, 101.0]))
        .build();
    let verde = Verde::builder().with_connector(connector).build().unwrap();

    let universe = vec![ticker(AAA)];
    let report = verde.esg_scores(&universe, Utc::now()).await.unwrap();

    assert!((report.scores[&ticker(AAA)].composite() - 0.5).abs() < 1e-12);

    let mut capabilities: Vec<&str> = report
        .warnings
        .iter()
        .map(|w| match w {
            VerdeError::Unsupported { capability } => capability.as_str(),
            other => panic!("unexpected: {other:?}"),
        })
        .collect();
    capabilities.sort_unstable();
    assert_eq!(capabilities, ["filing", "news", "sustainability"]);
}
