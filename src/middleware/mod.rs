//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every dispatched request. Only request
//! tracing lives here; there is no general chaining API.

mod trace;

pub(crate) use trace::trace;
