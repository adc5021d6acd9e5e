//! The resource-access layer.
//!
//! A resource is a named document type with a static field list. Three
//! pieces are written once and work for any of them:
//!
//! - [`Resource`] + [`schema`]: the definition and the boundary check that
//!   turns an untyped payload into a typed document.
//! - [`ResourceHandlers`]: list / get-by-id / create against a
//!   [`Collection`](crate::store::Collection).
//! - [`mount`]: the route table mapping HTTP verbs onto those handlers.
//!
//! The matching remote facade lives in [`crate::client`].

mod course;
mod error;
mod handlers;
mod routes;
pub mod schema;

pub use course::{Certificate, Course, Description, Instructor};
pub use error::ResourceError;
pub use handlers::ResourceHandlers;
pub use routes::mount;
pub use schema::{Field, FieldKind, Validation, ValidationError};

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A document type exposed through the uniform create/list/get routes.
pub trait Resource: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular display name, used in messages: `"Course not found"`.
    const NAME: &'static str;

    /// Collection path segment, without slashes: `/courses`, `/courses/{id}`.
    /// Also used in the empty-list message: `"No courses"`.
    const PATH: &'static str;

    /// The declared fields. All of them are optional.
    fn fields() -> &'static [Field];

    /// Casts an untyped payload onto [`fields`](Resource::fields).
    fn validate(payload: &Value) -> Validation<Self> {
        schema::validate(Self::fields(), payload)
    }
}
