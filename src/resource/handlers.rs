//! The handler set: one storage round trip per operation.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::store::{Collection, Stored};

use super::{Resource, ResourceError, Validation};

/// create / list / get-by-id for resource `R` over an injected collection.
///
/// Stateless apart from the collection handle; cheap to clone into every
/// route closure. No retries, no caching.
pub struct ResourceHandlers<R: Resource> {
    collection: Arc<dyn Collection<R>>,
}

impl<R: Resource> Clone for ResourceHandlers<R> {
    fn clone(&self) -> Self {
        Self { collection: Arc::clone(&self.collection) }
    }
}

impl<R: Resource> ResourceHandlers<R> {
    pub fn new(collection: Arc<dyn Collection<R>>) -> Self {
        Self { collection }
    }

    /// Every stored document, in storage order.
    ///
    /// An empty collection is reported as [`ResourceError::NotFound`], not as
    /// an empty success.
    pub async fn list(&self) -> Result<Vec<Stored<R>>, ResourceError> {
        let docs = self.collection.find_all().await?;
        if docs.is_empty() {
            debug!(resource = R::NAME, "list found nothing");
            return Err(ResourceError::empty::<R>());
        }
        debug!(resource = R::NAME, count = docs.len(), "listed");
        Ok(docs)
    }

    /// The document with this identifier. The identifier's format is the
    /// collection's business; malformed ones come back as storage errors.
    pub async fn get_by_id(&self, id: &str) -> Result<Stored<R>, ResourceError> {
        self.collection
            .find_by_id(id)
            .await?
            .ok_or_else(ResourceError::missing::<R>)
    }

    /// Casts `payload` onto `R`'s fields and persists the result.
    pub async fn create(&self, payload: &Value) -> Result<Stored<R>, ResourceError> {
        let doc = match R::validate(payload) {
            Validation::Valid(doc) => doc,
            Validation::Invalid(e) => return Err(ResourceError::invalid::<R>(e)),
        };
        let stored = self.collection.insert(doc).await?;
        info!(resource = R::NAME, id = %stored.id, "created");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resource::Course;
    use crate::store::{MemoryCollection, StoreError};

    fn handlers() -> ResourceHandlers<Course> {
        ResourceHandlers::new(Arc::new(MemoryCollection::<Course>::new("courses")))
    }

    #[tokio::test]
    async fn list_on_empty_store_is_not_found() {
        assert_eq!(handlers().list().await, Err(ResourceError::NotFound("No courses".into())));
    }

    #[tokio::test]
    async fn create_then_get_returns_the_same_document() {
        let h = handlers();
        let created = h.create(&json!({ "title": "Intro to Systems", "rating": 4.5 })).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.doc.title.as_deref(), Some("Intro to Systems"));
        assert_eq!(created.doc.rating, Some(4.5));

        assert_eq!(h.get_by_id(&created.id).await, Ok(created.clone()));
        assert_eq!(h.list().await, Ok(vec![created]));
    }

    #[tokio::test]
    async fn get_by_unknown_id_is_not_found() {
        let h = handlers();
        h.create(&json!({ "title": "a" })).await.unwrap();
        let unknown = uuid::Uuid::new_v4().simple().to_string();
        assert_eq!(
            h.get_by_id(&unknown).await,
            Err(ResourceError::NotFound("Course not found".into()))
        );
    }

    #[tokio::test]
    async fn malformed_id_is_a_storage_error() {
        assert_eq!(
            handlers().get_by_id("42").await,
            Err(ResourceError::Storage(StoreError::InvalidId("42".into())))
        );
    }

    #[tokio::test]
    async fn undeclared_fields_are_accepted() {
        let created = handlers()
            .create(&json!({ "title": "x", "sponsor": "ACME" }))
            .await
            .unwrap();
        assert_eq!(created.doc, Course { title: Some("x".into()), ..Course::default() });
    }

    #[tokio::test]
    async fn uncastable_payload_is_rejected_before_storage() {
        let h = handlers();
        let err = h.create(&json!({ "enrolled": [1, 2] })).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation { resource: "Course", .. }));
        assert!(matches!(h.list().await, Err(ResourceError::NotFound(_))));
    }
}
