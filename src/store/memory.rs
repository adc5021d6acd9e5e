//! In-process document collection.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{Collection, StoreError, Stored};

const SCHEME: &str = "memory";

/// An insertion-ordered, in-memory [`Collection`].
///
/// Identifiers are random UUIDs rendered as 32 lowercase hex digits. Lookups
/// accept any UUID spelling (hyphenated or not) and reject everything else
/// with [`StoreError::InvalidId`].
pub struct MemoryCollection<D> {
    name: String,
    docs: RwLock<Vec<Stored<D>>>,
}

impl<D> MemoryCollection<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), docs: RwLock::new(Vec::new()) }
    }

    /// Opens a collection from a `memory://<name>` connection string.
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let (scheme, name) = url
            .split_once("://")
            .ok_or_else(|| StoreError::InvalidUrl(url.to_owned()))?;
        if scheme != SCHEME {
            return Err(StoreError::UnsupportedScheme(scheme.to_owned()));
        }
        let name = name.trim_end_matches('/');
        if name.is_empty() || name.contains('/') {
            return Err(StoreError::InvalidUrl(url.to_owned()));
        }

        info!(collection = name, "opened in-memory collection");
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<D> Collection<D> for MemoryCollection<D>
where
    D: Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<Stored<D>>, StoreError> {
        let docs = self.docs.read().await;
        debug!(collection = %self.name, count = docs.len(), "find_all");
        Ok(docs.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Stored<D>>, StoreError> {
        let key = Uuid::parse_str(id)
            .map_err(|_| StoreError::InvalidId(id.to_owned()))?
            .simple()
            .to_string();
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|d| d.id == key).cloned())
    }

    async fn insert(&self, doc: D) -> Result<Stored<D>, StoreError> {
        let stored = Stored { id: Uuid::new_v4().simple().to_string(), doc };
        self.docs.write().await.push(stored.clone());
        debug!(collection = %self.name, id = %stored.id, "insert");
        Ok(stored)
    }
}
