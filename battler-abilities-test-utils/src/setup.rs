use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a log subscriber for the test binary, once.
pub fn setup_test_environment() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing_core::Level::TRACE)
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .init();
    });
}
