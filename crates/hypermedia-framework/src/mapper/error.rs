use crate::api_error::ApiError;
use crate::json::JsonObjectBuilder;
use crate::request::RequestContext;

/// Shapes an error document for one media type.
#[allow(unused_variables)]
pub trait ErrorMessageMapper: Send + Sync {
    fn media_type(&self) -> &str;

    fn supports(&self, error: &ApiError, request: &RequestContext) -> bool {
        true
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        error: &ApiError,
        request: &RequestContext,
    ) {
    }

    fn on_finish(
        &self,
        builder: &mut JsonObjectBuilder,
        error: &ApiError,
        request: &RequestContext,
    ) {
    }

    fn map_title(&self, builder: &mut JsonObjectBuilder, title: &str) {}

    /// Only called when the error has a description.
    fn map_description(&self, builder: &mut JsonObjectBuilder, description: &str) {}

    fn map_type(&self, builder: &mut JsonObjectBuilder, error_type: &str) {}

    fn map_status_code(&self, builder: &mut JsonObjectBuilder, status_code: u16) {}
}
