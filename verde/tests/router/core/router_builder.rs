use verde::{PillarWeights, TiltConfig, Verde, VerdeError};

use crate::helpers::MockConnector;

#[test]
fn build_requires_at_least_one_connector() {
    let err = Verde::builder().build().unwrap_err();
    match err {
        VerdeError::InvalidArg(msg) => assert!(msg.contains("no connectors")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn bad_fusion_weights_fail_before_any_fetch() {
    let err = Verde::builder()
        .with_connector(MockConnector::builder().build())
        .pillar_weights(PillarWeights {
            sustainability: 0.6,
            news: 0.3,
            filing: 0.3,
        })
        .build()
        .unwrap_err();
    match err {
        VerdeError::Config(msg) => assert!(msg.contains("sum to 1")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn a_bad_tilt_threshold_fails_at_build() {
    let err = Verde::builder()
        .with_connector(MockConnector::builder().build())
        .tilt(TiltConfig {
            threshold: 1.5,
            penalty: 0.8,
        })
        .build()
        .unwrap_err();
    match err {
        VerdeError::Config(msg) => assert!(msg.contains("threshold")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn defaults_build_cleanly() {
    let verde = Verde::builder()
        .with_connector(MockConnector::builder().quiet_signals().build())
        .build();
    assert!(verde.is_ok());
}
