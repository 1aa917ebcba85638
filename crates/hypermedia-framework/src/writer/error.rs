use crate::api_error::ApiError;
use crate::error::Result;
use crate::json::JsonObjectBuilder;
use crate::mapper::ErrorMessageMapper;
use crate::request::RequestContext;

/// Writes an error document through `mapper`.
///
/// The description is only mapped when the error has one.
pub fn write_error(
    error: &ApiError,
    mapper: &dyn ErrorMessageMapper,
    request: &RequestContext,
) -> Result<String> {
    let mut builder = JsonObjectBuilder::new();
    mapper.on_start(&mut builder, error, request);
    if let Some(description) = &error.description {
        mapper.map_description(&mut builder, description);
    }
    mapper.map_title(&mut builder, &error.title);
    mapper.map_type(&mut builder, &error.error_type);
    mapper.map_status_code(&mut builder, error.status_code);
    mapper.on_finish(&mut builder, error, request);
    Ok(serde_json::to_string(&builder.build())?)
}
