#![cfg(test)]
pub use rstest::*;

/// Install a test-writer tracing subscriber once per test binary.
pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Filter from RUST_LOG; output captured per test.
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Parse a statement that is known to be valid.
pub(crate) fn table(sql: &str) -> crate::TableMetadata {
    common_init();
    crate::parse_statement(sql, crate::ParseMode::Strict).expect("fixture statement parses")
}
