use tkernel_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_is_rejected() {
    let _logger = Logger::builder()
        .name("integration-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("integration-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error");
    assert_eq!(err.kind(), "Subscriber");
}
