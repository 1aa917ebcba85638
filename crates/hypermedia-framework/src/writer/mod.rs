//! # Writers
//!
//! Writers turn a page, a single model or an error into a JSON document. They
//! walk the model graph, apply the request's field and embedding selections and
//! drive a mapper through a fixed protocol:
//!
//! ```text
//! page:   on_start
//!         for each item: on_start_item, fields, links, types, self URL,
//!                        binaries, related models, related collections, on_finish_item
//!         total count, page count, current/first/[previous]/[next]/last page URLs,
//!         collection URL, on_finish
//! single: on_start, fields, links, types, self URL, binaries,
//!         related models, related collections, on_finish
//! error:  on_start, [description], title, type, status code, on_finish
//! ```
//!
//! Fields are written booleans first, then localized strings, strings and numbers,
//! each kind in declaration order. Embedded models replay the same sequence at their
//! [`EmbeddedPath`](crate::EmbeddedPath).
//!
//! A write is synchronous and owns its document. Any error aborts it and the
//! partial document is dropped.
//!
//! [`ResponseWriter`] bundles the registries so callers only name a media type.

mod error;
mod page;
mod single;
mod walker;

pub use error::write_error;
pub use page::write_page;
pub use single::write_single_model;

use crate::api_error::ApiError;
use crate::error::{Result, WriterError};
use crate::mapper::MessageMapperRegistry;
use crate::model::{ModelRef, SingleModel};
use crate::page::Page;
use crate::registry::ResourceRegistry;
use crate::request::RequestContext;
use std::any::Any;
use std::sync::Arc;

/// Writes responses in any media type the mapper registry knows.
///
/// Each write resolves everything against one snapshot of the resource registry.
#[derive(Clone)]
pub struct ResponseWriter {
    resources: Arc<ResourceRegistry>,
    mappers: Arc<MessageMapperRegistry>,
}

impl ResponseWriter {
    pub fn new(resources: Arc<ResourceRegistry>, mappers: Arc<MessageMapperRegistry>) -> Self {
        Self { resources, mappers }
    }

    pub fn resources(&self) -> &Arc<ResourceRegistry> {
        &self.resources
    }

    pub fn mappers(&self) -> &Arc<MessageMapperRegistry> {
        &self.mappers
    }

    pub fn write_page<T: Any>(
        &self,
        media_type: &str,
        page: &Page<T>,
        request: &RequestContext,
    ) -> Result<String> {
        let resources = self.resources.snapshot();
        let mapper = self.mappers.page_mapper(media_type, &page.info(), request)?;
        write_page(page, mapper, &resources, request)
    }

    pub fn write_single_model<T: Any>(
        &self,
        media_type: &str,
        single_model: &SingleModel<T>,
        request: &RequestContext,
    ) -> Result<String> {
        let resources = self.resources.snapshot();
        let model_type = single_model.model_type();
        let representor = resources
            .representor(model_type)
            .ok_or_else(|| WriterError::MustHaveRepresentor(model_type.to_string()))?;
        let model_ref = ModelRef::new(single_model.model(), model_type, representor.types());
        let mapper = self
            .mappers
            .single_model_mapper(media_type, &model_ref, request)?;
        write_single_model(single_model, mapper, &resources, request)
    }

    pub fn write_error(
        &self,
        media_type: &str,
        error: &ApiError,
        request: &RequestContext,
    ) -> Result<String> {
        let mapper = self.mappers.error_mapper(media_type, error, request)?;
        write_error(error, mapper, request)
    }
}
