//! Tracing subscriber setup.
//!
//! The scheduler emits `tracing` events; nothing is printed unless the
//! embedding application installs a subscriber. These helpers install the
//! default `fmt` subscriber.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber.
///
/// Level filtering comes from `RUST_LOG` (default: `info`), e.g.
/// `RUST_LOG=u_timetable=debug` to see every committed placement.
///
/// Panics if a global subscriber is already set; use [`try_init`] when
/// that may happen.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Like [`init`], but returns `false` instead of panicking when a
/// subscriber is already installed.
pub fn try_init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Subscriber for tests: debug level, output captured by the test harness.
/// Safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
