//! Per-request span: method and path on the span, status and latency on
//! the closing log line.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use crate::method::Method;
use crate::response::Response;

/// Runs `handle` inside a `request` span and logs one line when it finishes.
///
/// 5xx responses are logged at `warn`, everything else at `info`.
pub(crate) async fn trace<F>(method: Method, path: &str, handle: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path);
    let started = Instant::now();

    let response = handle.instrument(span.clone()).await;

    let status = response.code().code();
    let reason = response.code().reason();
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
    span.in_scope(|| {
        if status >= 500 {
            warn!(status, reason, latency_ms, "request failed");
        } else {
            info!(status, reason, latency_ms, "request completed");
        }
    });
    response
}
