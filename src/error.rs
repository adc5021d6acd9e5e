//! Unified error type.

use crate::config::ConfigError;
use crate::store::StoreError;

/// The error type returned by the crate's infrastructure operations.
///
/// Application-level errors (404, 500 with a message, etc.) are expressed as
/// HTTP [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces process-level failures: reading configuration, opening the
/// store, binding to a port.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("store: {0}")]
    Store(#[from] StoreError),
}
