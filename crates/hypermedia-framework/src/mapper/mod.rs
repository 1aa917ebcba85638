//! # Message Mappers
//!
//! A mapper is the format strategy of the engine. The writers walk the model graph
//! and call one mapper method per structural element (a field, a link, the type
//! labels, a page URL, a count); the mapper decides where that element lands in
//! the [`JsonObjectBuilder`](crate::JsonObjectBuilder). The writers never look at
//! the shape of the output.
//!
//! There are three contracts:
//!
//! | Contract | Writes | Lifecycle hooks |
//! |----------|--------|-----------------|
//! | [`SingleModelMessageMapper`] | one model and its embedded models | `on_start`, `on_finish` |
//! | [`PageMessageMapper`] | a page of models plus pagination metadata | `on_start`, `on_start_item`, `on_finish_item`, `on_finish` |
//! | [`ErrorMessageMapper`] | an [`ApiError`](crate::ApiError) | `on_start`, `on_finish` |
//!
//! Each contract exposes a media type and a `supports` predicate. The
//! [`MessageMapperRegistry`] picks the first mapper matching both.

mod error;
mod page;
mod registry;
mod single;

pub use error::ErrorMessageMapper;
pub use page::PageMessageMapper;
pub use registry::MessageMapperRegistry;
pub use single::SingleModelMessageMapper;
