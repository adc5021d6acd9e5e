//! # coursework
//!
//! One resource, end to end: a typed document definition, the HTTP routes
//! that create and read it, and the client that calls those routes from the
//! other side of the network. `Course` is the worked example; the layer is
//! generic over any [`Resource`](resource::Resource).
//!
//! ## The layers
//!
//! - [`resource`]: the definition ([`Resource`](resource::Resource) + field
//!   list), the handler set, and the route table.
//! - [`store`]: the storage collaborator the handlers talk to. Passed in
//!   explicitly, never global.
//! - [`client`]: the remote facade mirroring the handler set.
//!
//! Underneath sits a small HTTP core: radix-tree routing via [`matchit`],
//! hyper for I/O (HTTP/1.1 and HTTP/2), and graceful shutdown on SIGTERM /
//! Ctrl-C that drains in-flight requests.
//!
//! What this crate does not do: TLS, authentication, pagination, update or
//! delete. Put a proxy in front for the first; the rest are out of scope.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use coursework::resource::{self, Course, ResourceHandlers};
//! use coursework::store::MemoryCollection;
//! use coursework::{Router, Server, health};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), coursework::Error> {
//!     let courses = Arc::new(MemoryCollection::<Course>::open("memory://school")?);
//!
//!     let app = resource::mount(Router::new(), ResourceHandlers::new(courses));
//!     let app = health::mount(app);
//!
//!     Server::bind("0.0.0.0:3000".parse().unwrap()).await?.serve(app).await
//! }
//! ```
//!
//! ```text
//! curl -X POST localhost:3000/courses -H 'content-type: application/json' \
//!      -d '{"title":"Intro to Systems","rating":4.5}'
//! curl localhost:3000/courses
//! curl localhost:3000/courses/<id>
//! ```

mod error;
mod handler;
mod method;
mod middleware;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod client;
pub mod config;
pub mod health;
pub mod resource;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Message, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
