//! # Framework Errors
//!
//! Every error the engine raises is a **developer-configuration error**: a wiring
//! defect such as a model type without a representor, a media type without a
//! mapper, or a model whose URL cannot be derived. They abort the write that hit
//! them and the partially built document is dropped.
//!
//! Optional absence (a related model that is not there, a field whose extractor
//! returns `None`, a page without a next page) is never an error; the writer
//! simply skips the element.

/// Errors that can occur while describing or writing a resource.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    #[error("Unable to resolve a URI for model {0}")]
    UnresolvableUri(String),
    #[error("No message mapper for media type {media_type} and model {model}")]
    MustHaveMessageMapper { media_type: String, model: String },
    #[error("No error message mapper for media type {0}")]
    MustHaveErrorMessageMapper(String),
    #[error("No representor registered for model {0}")]
    MustHaveRepresentor(String),
    #[error("Invalid representor for {model}: {reason}")]
    InvalidRepresentor { model: String, reason: String },
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(#[from] url::ParseError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WriterError>;
