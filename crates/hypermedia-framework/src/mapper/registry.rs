use super::{ErrorMessageMapper, PageMessageMapper, SingleModelMessageMapper};
use crate::api_error::ApiError;
use crate::error::{Result, WriterError};
use crate::model::ModelRef;
use crate::page::PageInfo;
use crate::request::RequestContext;
use tracing::debug;

/// The formats an application can answer with.
///
/// Mappers are tried in insertion order; the first whose media type matches and
/// whose `supports` accepts the input is used.
#[derive(Default)]
pub struct MessageMapperRegistry {
    single_model_mappers: Vec<Box<dyn SingleModelMessageMapper>>,
    page_mappers: Vec<Box<dyn PageMessageMapper>>,
    error_mappers: Vec<Box<dyn ErrorMessageMapper>>,
}

impl MessageMapperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_single_model_mapper(
        mut self,
        mapper: impl SingleModelMessageMapper + 'static,
    ) -> Self {
        self.single_model_mappers.push(Box::new(mapper));
        self
    }

    pub fn with_page_mapper(mut self, mapper: impl PageMessageMapper + 'static) -> Self {
        self.page_mappers.push(Box::new(mapper));
        self
    }

    pub fn with_error_mapper(mut self, mapper: impl ErrorMessageMapper + 'static) -> Self {
        self.error_mappers.push(Box::new(mapper));
        self
    }

    pub fn single_model_mapper(
        &self,
        media_type: &str,
        model: &ModelRef<'_>,
        request: &RequestContext,
    ) -> Result<&dyn SingleModelMessageMapper> {
        let mapper = self
            .single_model_mappers
            .iter()
            .find(|mapper| mapper.media_type() == media_type && mapper.supports(model, request))
            .map(|boxed| &**boxed)
            .ok_or_else(|| WriterError::MustHaveMessageMapper {
                media_type: media_type.to_string(),
                model: model.model_type().to_string(),
            })?;
        debug!(media_type, model = %model.model_type(), "Selected single model mapper");
        Ok(mapper)
    }

    pub fn page_mapper(
        &self,
        media_type: &str,
        page: &PageInfo,
        request: &RequestContext,
    ) -> Result<&dyn PageMessageMapper> {
        let mapper = self
            .page_mappers
            .iter()
            .find(|mapper| mapper.media_type() == media_type && mapper.supports(page, request))
            .map(|boxed| &**boxed)
            .ok_or_else(|| WriterError::MustHaveMessageMapper {
                media_type: media_type.to_string(),
                model: page.model_type.to_string(),
            })?;
        debug!(media_type, model = %page.model_type, "Selected page mapper");
        Ok(mapper)
    }

    pub fn error_mapper(
        &self,
        media_type: &str,
        error: &ApiError,
        request: &RequestContext,
    ) -> Result<&dyn ErrorMessageMapper> {
        self.error_mappers
            .iter()
            .find(|mapper| mapper.media_type() == media_type && mapper.supports(error, request))
            .map(|boxed| &**boxed)
            .ok_or_else(|| WriterError::MustHaveErrorMessageMapper(media_type.to_string()))
    }

    /// Media types with at least one single model or page mapper, first seen first.
    pub fn media_types(&self) -> Vec<&str> {
        let mut media_types: Vec<&str> = Vec::new();
        let all = self
            .single_model_mappers
            .iter()
            .map(|mapper| mapper.media_type())
            .chain(self.page_mappers.iter().map(|mapper| mapper.media_type()));
        for media_type in all {
            if !media_types.contains(&media_type) {
                media_types.push(media_type);
            }
        }
        media_types
    }
}
