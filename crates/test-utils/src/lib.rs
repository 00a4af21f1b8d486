//! Utilities shared by the marketplace tooling's integration tests.

pub mod artifacts;
pub mod fork;
pub mod mock;
pub mod users;

/// Install a test log subscriber honoring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
