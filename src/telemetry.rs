//! Structured logging setup.
//!
//! Levels come from `RUST_LOG` (default `info`):
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=coursework::store=trace cargo run
//! ```
//!
//! Each request runs in a `request{method path}` span, so handler and store
//! events are printed with their route inline:
//!
//! ```text
//! INFO request{method=POST path="/courses"}: created id=8f0c… resource="Course"
//! INFO request{method=POST path="/courses"}: request completed status=201 latency_ms=0.4
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
