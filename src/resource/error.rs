//! Failure classes of the handler set and how each one is answered.

use tracing::error;

use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::StoreError;

use super::{Resource, ValidationError};

/// Errors that can occur during a resource operation.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ResourceError {
    /// The payload could not be cast onto the resource's fields.
    #[error("{resource} validation failed: {source}")]
    Validation {
        resource: &'static str,
        #[source]
        source: ValidationError,
    },

    /// An empty listing, or no document with the requested identifier.
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the storage collaborator.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ResourceError {
    pub(crate) fn invalid<R: Resource>(source: ValidationError) -> Self {
        Self::Validation { resource: R::NAME, source }
    }

    /// `"No courses"`
    pub(crate) fn empty<R: Resource>() -> Self {
        Self::NotFound(format!("No {}", R::PATH))
    }

    /// `"Course not found"`
    pub(crate) fn missing<R: Resource>() -> Self {
        Self::NotFound(format!("{} not found", R::NAME))
    }
}

/// `404 {message}` for `NotFound`; `500 {message}` for everything else.
impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => Response::message(Status::NotFound, message),
            other => {
                error!(error = %other, "resource operation failed");
                Response::message(Status::InternalServerError, other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Course;

    #[test]
    fn not_found_messages_use_the_resource_names() {
        assert_eq!(ResourceError::empty::<Course>().to_string(), "No courses");
        assert_eq!(ResourceError::missing::<Course>().to_string(), "Course not found");
    }

    #[test]
    fn maps_to_status_and_message() {
        let res = ResourceError::missing::<Course>().into_response();
        assert_eq!(res.code(), Status::NotFound);
        assert_eq!(res.body(), br#"{"message":"Course not found"}"#);

        let res = ResourceError::from(StoreError::Unavailable("connection refused".into())).into_response();
        assert_eq!(res.code(), Status::InternalServerError);
        assert_eq!(res.body(), br#"{"message":"storage unavailable: connection refused"}"#);

        let res = ResourceError::invalid::<Course>(ValidationError::Cast {
            path: "rating".into(),
            expected: "Number",
            value: "\"x\"".into(),
        })
        .into_response();
        assert_eq!(res.code(), Status::InternalServerError);
    }
}
