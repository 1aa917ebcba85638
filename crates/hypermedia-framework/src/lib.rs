//! # Hypermedia Framework
//!
//! This crate builds hypermedia responses (HAL, JSON-LD or any other JSON format)
//! from plain Rust models. You describe each model type once, and the framework
//! walks model graphs and pages of models, deciding what to write, what to embed and
//! what to link, while a pluggable mapper decides what the document looks like.
//!
//! ## Architecture Overview
//!
//! The framework separates three concerns:
//!
//! 1. **Description** ([`Representor`]): how to read one model type. Identifier,
//!    type labels, fields, static links, binaries, related models and related
//!    collections.
//! 2. **Traversal** ([`write_page`], [`write_single_model`], [`write_error`]): the
//!    writers walk the models in a fixed order, apply the request's
//!    [`FieldSelection`] and [`EmbeddedSelection`], resolve localized values and
//!    derive every URL.
//! 3. **Shape** ([`SingleModelMessageMapper`], [`PageMessageMapper`],
//!    [`ErrorMessageMapper`]): one callback per structural element. The mapper
//!    alone decides where each element lands in the [`JsonObjectBuilder`].
//!
//! Adding a format means writing a mapper; adding a model type means registering a
//! representor. Neither touches the writers.
//!
//! ## Example
//!
//! ```rust
//! use hypermedia_framework::mock::RecordingMapper;
//! use hypermedia_framework::{
//!     write_page, Page, PageItems, Pagination, RequestContext, Representor, ResourceRegistry,
//!     ServerUrl,
//! };
//!
//! struct Person { id: u64, name: String, email: Option<String> }
//!
//! // 1. Describe the model
//! let representor = Representor::builder::<Person>()
//!     .identifier(|person| person.id)
//!     .add_type("Person")
//!     .add_string("name", |person| person.name.clone())
//!     .add_string("email", |person| person.email.clone())
//!     .build()?;
//!
//! // 2. Register it under a collection name
//! let registry = ResourceRegistry::new();
//! registry.register("people", representor)?;
//!
//! // 3. Write a page
//! let people = vec![Person { id: 1, name: "Ada".into(), email: None }];
//! let page = Page::new(PageItems::new(people, 1), Pagination::new(1, 10));
//! let request = RequestContext::new(ServerUrl::parse("https://example.com")?);
//! let mapper = RecordingMapper::new();
//!
//! write_page(&page, &mapper, &registry.snapshot(), &request)?;
//! assert_eq!(mapper.field_names(""), ["name"]);
//! # Ok::<(), hypermedia_framework::WriterError>(())
//! ```
//!
//! ## Errors
//!
//! Only wiring defects are errors ([`WriterError`]): a type without representor, a
//! media type without mapper, a resource without URL. They abort the write and the
//! partial document is dropped. Missing optional data is never an error; it is
//! simply not written.
//!
//! ## Concurrency
//!
//! Writes are synchronous and independent. The [`ResourceRegistry`] can change
//! while writes are running; each write works on the snapshot it started with.

pub mod api_error;
pub mod embedded;
pub mod embedded_path;
pub mod error;
pub mod fields;
pub mod json;
pub mod language;
pub mod mapper;
pub mod mock;
pub mod model;
pub mod page;
pub mod registry;
pub mod representor;
pub mod request;
pub mod uri;
pub mod writer;

pub use api_error::ApiError;
pub use embedded::{Embedded, EmbeddedSelection, MaxDepth};
pub use embedded_path::EmbeddedPath;
pub use error::{Result, WriterError};
pub use fields::{FieldSelection, Fields};
pub use json::{ArrayBuilder, FieldBuilder, JsonObjectBuilder};
pub use language::{Language, LocalizedText};
pub use mapper::{
    ErrorMessageMapper, MessageMapperRegistry, PageMessageMapper, SingleModelMessageMapper,
};
pub use model::{ModelRef, ModelType, SingleModel};
pub use page::{Page, PageInfo, PageItems, Pagination};
pub use registry::{ResourceRegistry, Resources};
pub use representor::{
    BinaryFile, RelatedCollection, RelatedModel, RelationMode, Representor, RepresentorBuilder,
};
pub use request::RequestContext;
pub use uri::{Path, ServerUrl};
pub use writer::{write_error, write_page, write_single_model, ResponseWriter};
