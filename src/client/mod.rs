//! Remote facade over the resource routes.
//!
//! [`ResourceClient`] offers the same three operations as
//! [`ResourceHandlers`](crate::resource::ResourceHandlers), but across the
//! network. Each call is one request and one response: it either yields the
//! decoded document(s) or fails with a [`TransportError`]. Nothing is retried,
//! cached or deduplicated; callers decide what to do with a failure.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), coursework::client::TransportError> {
//! use coursework::client::ResourceClient;
//! use coursework::resource::Course;
//! use serde_json::json;
//!
//! let courses = ResourceClient::<Course>::new("http://localhost:3000");
//! let created = courses.create(&json!({ "title": "Intro to Systems" })).await?;
//! let fetched = courses.get_by_id(&created.id).await?;
//! assert_eq!(created, fetched);
//! # Ok(()) }
//! ```

mod error;
mod transport;

pub use error::TransportError;
pub use transport::{HttpTransport, Reply, Transport};

use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use http::Uri;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::method::Method;
use crate::resource::Resource;
use crate::response::Message;
use crate::store::Stored;

/// Bytes escaped in a single path segment: `/` would split it, the rest are
/// not allowed in a path or would end it.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'#').add(b'%').add(b'/').add(b'<')
    .add(b'>').add(b'?').add(b'`').add(b'{').add(b'}');

/// Client for resource `R` mounted under a base URL.
pub struct ResourceClient<R> {
    endpoint: String,
    transport: Arc<dyn Transport>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            transport: Arc::clone(&self.transport),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Talks plain HTTP to `base_url` (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), R::PATH);
        Self { endpoint, transport, _resource: PhantomData }
    }

    /// `GET /{path}`
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list(&self) -> Result<Vec<Stored<R>>, TransportError> {
        self.call(Method::Get, self.endpoint.clone(), None).await
    }

    /// `GET /{path}/{id}`
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get_by_id(&self, id: &str) -> Result<Stored<R>, TransportError> {
        let id = utf8_percent_encode(id, SEGMENT);
        self.call(Method::Get, format!("{}/{id}", self.endpoint), None).await
    }

    /// `POST /{path}` with `payload` as the JSON body.
    #[instrument(skip_all, fields(resource = R::NAME))]
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Result<Stored<R>, TransportError> {
        let body = Bytes::from(serde_json::to_vec(payload)?);
        self.call(Method::Post, self.endpoint.clone(), Some(body)).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        uri: String,
        body: Option<Bytes>,
    ) -> Result<T, TransportError> {
        let parsed: Uri = uri
            .parse()
            .map_err(|source| TransportError::InvalidUri { uri, source })?;

        let reply = self.transport.send(method, parsed, body).await?;
        if !(200..300).contains(&reply.status) {
            let message = match serde_json::from_slice::<Message>(&reply.body) {
                Ok(m) => m.message,
                Err(_) => String::from_utf8_lossy(&reply.body).into_owned(),
            };
            debug!(status = reply.status, %message, "request failed");
            return Err(TransportError::Status { status: reply.status, message });
        }

        Ok(serde_json::from_slice(&reply.body)?)
    }
}
