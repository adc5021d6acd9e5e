//! The storage collaborator.
//!
//! Handlers see storage only through [`Collection`], an object-safe async
//! trait, and receive it as an explicitly passed `Arc<dyn Collection<_>>`.
//! There is no process-wide handle: every test can open its own store.
//!
//! The collection owns persisted documents and assigns their identifiers.
//! It must be safe for concurrent use; callers never lock around it.

mod memory;

pub use memory::MemoryCollection;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A persisted document together with its storage-assigned identifier.
///
/// Serialises flat, with the identifier under `_id`:
/// `{"_id": "…", "title": "…"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stored<D> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub doc: D,
}

/// Errors reported by a storage backend.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum StoreError {
    /// The identifier is not in the backend's format. Backends reject these
    /// themselves; handlers do not pre-validate identifiers.
    #[error("invalid identifier {0:?}")]
    InvalidId(String),

    #[error("unsupported connection scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("malformed connection string {0:?}")]
    InvalidUrl(String),

    /// The backend could not be reached or did not answer.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A collection of documents of type `D`.
///
/// Each method is one round trip to the backend. None of them retry.
#[async_trait]
pub trait Collection<D>: Send + Sync
where
    D: Send + Sync + 'static,
{
    /// Every document, in storage order.
    async fn find_all(&self) -> Result<Vec<Stored<D>>, StoreError>;

    /// The document with this identifier, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<D>>, StoreError>;

    /// Persists `doc` under a fresh identifier and returns the stored form.
    async fn insert(&self, doc: D) -> Result<Stored<D>, StoreError>;
}
