//! Shared helpers for unit tests.

/// Routes `log` output through the test harness; safe to call repeatedly.
pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}
