//! Client-side failures.

/// Why a client call failed. The original failure is kept as the source.
///
/// The client never retries or recovers; every variant reaches the caller
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid uri {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("building request failed: {0}")]
    Http(#[from] http::Error),

    /// The request could not be sent or the connection broke.
    #[error("request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),

    #[error("reading response body failed: {0}")]
    Body(#[from] hyper::Error),

    /// The server answered with a non-2xx status.
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },

    /// The payload did not encode, or a 2xx body did not decode into the
    /// expected shape.
    #[error("json: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
