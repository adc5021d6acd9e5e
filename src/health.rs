//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can it serve traffic? Failure → pulled from the load balancer. |
//!
//! ```rust
//! use coursework::{Router, health};
//!
//! let app = health::mount(Router::new());
//! ```

use crate::{Method, Request, Response, Router};

/// Registers both probes on `router`.
pub fn mount(router: Router) -> Router {
    router
        .on(Method::Get, "/healthz", liveness)
        .on(Method::Get, "/readyz", readiness)
}

/// Always `200 OK` with body `"ok"`. No dependencies, on purpose.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`.
///
/// The store is opened before the listener is bound, so a process that
/// answers at all is ready.
pub async fn readiness(_req: Request) -> Response {
    Response::text("ready")
}
