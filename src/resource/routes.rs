//! The route table: HTTP verbs onto the handler set.
//!
//! | Route | Operation | Success | Failure |
//! |---|---|---|---|
//! | `POST /{path}` | create | `201` + document, `location` header | `400` bad JSON, `500 {message}` |
//! | `GET /{path}` | list | `200` + array | `404 {message: "No <path>"}`, `500 {message}` |
//! | `GET /{path}/{id}` | get by id | `200` + document | `404 {message: "<Name> not found"}`, `500 {message}` |

use serde_json::Value;
use tracing::debug;

use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::router::Router;
use crate::status::Status;

use super::{Resource, ResourceHandlers};

/// Registers the three routes for `R` on `router`.
///
/// ```rust
/// use std::sync::Arc;
/// use coursework::resource::{self, Course, ResourceHandlers};
/// use coursework::store::MemoryCollection;
/// use coursework::Router;
///
/// let courses = ResourceHandlers::new(Arc::new(MemoryCollection::<Course>::new("courses")));
/// let app = resource::mount(Router::new(), courses);
/// ```
pub fn mount<R: Resource>(router: Router, handlers: ResourceHandlers<R>) -> Router {
    let collection = format!("/{}", R::PATH);
    let member = format!("/{}/{{id}}", R::PATH);

    let create = {
        let handlers = handlers.clone();
        move |req: Request| {
            let handlers = handlers.clone();
            async move { create_route(handlers, req).await }
        }
    };

    let list = {
        let handlers = handlers.clone();
        move |_req: Request| {
            let handlers = handlers.clone();
            async move { handlers.list().await.map(|docs| Response::json(&docs)) }
        }
    };

    let get = move |req: Request| {
        let handlers = handlers.clone();
        async move {
            let id = req.param("id").unwrap_or_default();
            handlers.get_by_id(id).await.map(|doc| Response::json(&doc))
        }
    };

    router
        .on(Method::Post, &collection, create)
        .on(Method::Get, &collection, list)
        .on(Method::Get, &member, get)
}

async fn create_route<R: Resource>(handlers: ResourceHandlers<R>, req: Request) -> Response {
    let payload: Value = match req.json() {
        Ok(payload) => payload,
        Err(e) => {
            debug!("rejecting malformed body: {e}");
            return Response::message(Status::BadRequest, format!("malformed JSON body: {e}"));
        }
    };

    match handlers.create(&payload).await {
        Ok(doc) => Response::builder()
            .status(Status::Created)
            .header("location", &format!("/{}/{}", R::PATH, doc.id))
            .json(&doc),
        Err(e) => e.into_response(),
    }
}
