//! The transport seam under [`ResourceClient`](super::ResourceClient).

use async_trait::async_trait;
use bytes::Bytes;
use http::Uri;
use http::header::CONTENT_TYPE;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use crate::method::Method;

use super::TransportError;

/// A raw answer: status code and body bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Bytes,
}

/// Sends one request and returns one reply. Non-2xx statuses are replies,
/// not errors; the client decides what they mean.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, uri: Uri, body: Option<Bytes>) -> Result<Reply, TransportError>;
}

/// Plain HTTP/1.1 over hyper's pooled client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: Client::builder(TokioExecutor::new()).build_http() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, uri: Uri, body: Option<Bytes>) -> Result<Reply, TransportError> {
        debug!(%method, %uri, "sending");

        let mut req = http::Request::builder().method(http::Method::from(method)).uri(uri);
        if body.is_some() {
            req = req.header(CONTENT_TYPE, "application/json");
        }
        let req = req.body(Full::new(body.unwrap_or_default()))?;

        let res = self.client.request(req).await?;
        let status = res.status().as_u16();
        let body = res.into_body().collect().await?.to_bytes();

        debug!(status, bytes = body.len(), "received");
        Ok(Reply { status, body })
    }
}
