//! # Hypermedia Formats
//!
//! Reference [mappers](hypermedia_framework::mapper) for the hypermedia framework:
//!
//! | Media type                 | Single model                | Page                 | Error                      |
//! |----------------------------|-----------------------------|----------------------|----------------------------|
//! | `application/hal+json`     | [`HalSingleModelMapper`]    | [`HalPageMapper`]    |                            |
//! | `application/ld+json`      | [`JsonLdSingleModelMapper`] | [`JsonLdPageMapper`] | [`JsonLdErrorMapper`]      |
//! | `application/problem+json` |                             |                      | [`ProblemJsonErrorMapper`] |
//!
//! [`default_mappers`] registers all of them.

pub mod hal;
pub mod json_ld;
pub mod problem_json;

pub use hal::{HalPageMapper, HalSingleModelMapper};
pub use json_ld::{JsonLdErrorMapper, JsonLdPageMapper, JsonLdSingleModelMapper};
pub use problem_json::ProblemJsonErrorMapper;

use hypermedia_framework::MessageMapperRegistry;

/// A mapper registry holding every format of this crate.
///
/// Formats are tried in registration order: HAL first, then JSON-LD, then Problem
/// Details for errors.
pub fn default_mappers() -> MessageMapperRegistry {
    MessageMapperRegistry::new()
        .with_single_model_mapper(HalSingleModelMapper)
        .with_single_model_mapper(JsonLdSingleModelMapper)
        .with_page_mapper(HalPageMapper)
        .with_page_mapper(JsonLdPageMapper)
        .with_error_mapper(JsonLdErrorMapper)
        .with_error_mapper(ProblemJsonErrorMapper)
}
