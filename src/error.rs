//! Error types of the sample blog.

use hypermedia_framework::{ApiError, WriterError};
use thiserror::Error;

/// Errors answering a blog request.
#[derive(Debug, Error)]
pub enum BlogError {
    /// The requested resource does not exist.
    #[error("{collection} {id} not found")]
    NotFound { collection: &'static str, id: u64 },

    /// The request refers to another resource that does not exist.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// No format is available for the requested media type.
    #[error("Media type {0} is not available")]
    NotAcceptable(String),

    /// The configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The response could not be written.
    #[error(transparent)]
    Writer(#[from] WriterError),
}

impl From<&BlogError> for ApiError {
    fn from(error: &BlogError) -> Self {
        match error {
            BlogError::NotFound { .. } => ApiError::not_found(error.to_string()),
            BlogError::InvalidReference(_) => {
                ApiError::new("Bad request", "bad-request", 400).with_description(error.to_string())
            }
            BlogError::NotAcceptable(_) => ApiError::new("Not acceptable", "not-acceptable", 406)
                .with_description(error.to_string()),
            BlogError::Config(_) => ApiError::server_error(error.to_string()),
            BlogError::Writer(writer_error) => ApiError::from(writer_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = BlogError::NotFound {
            collection: "blog-postings",
            id: 9,
        };
        assert_eq!(ApiError::from(&not_found).status_code, 404);
        assert_eq!(
            ApiError::from(&not_found).description.as_deref(),
            Some("blog-postings 9 not found")
        );

        let writer = BlogError::from(WriterError::MustHaveRepresentor("Comment".to_string()));
        assert_eq!(ApiError::from(&writer).status_code, 500);
    }
}
