use crate::embedded_path::EmbeddedPath;
use crate::json::JsonObjectBuilder;
use crate::model::ModelRef;
use crate::request::RequestContext;
use serde_json::Number;

/// Shapes the document of a single model for one media type.
///
/// Every method but [`media_type`](Self::media_type) defaults to doing nothing,
/// so a format only implements the elements it represents.
///
/// Elements of the root model come through the plain methods; elements of an
/// embedded model come through the `map_embedded_resource_*` methods together
/// with the [`EmbeddedPath`] of that model.
#[allow(unused_variables)]
pub trait SingleModelMessageMapper: Send + Sync {
    fn media_type(&self) -> &str;

    /// Lets the mapper opt out for a model or request.
    fn supports(&self, model: &ModelRef<'_>, request: &RequestContext) -> bool {
        true
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        model: &ModelRef<'_>,
        request: &RequestContext,
    ) {
    }

    fn on_finish(
        &self,
        builder: &mut JsonObjectBuilder,
        model: &ModelRef<'_>,
        request: &RequestContext,
    ) {
    }

    fn map_boolean_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: bool) {}

    fn map_string_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &str) {}

    fn map_number_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &Number) {}

    fn map_link(&self, builder: &mut JsonObjectBuilder, field_name: &str, url: &str) {}

    fn map_types(&self, builder: &mut JsonObjectBuilder, types: &[String]) {}

    fn map_self_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_embedded_resource_boolean_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
    }

    fn map_embedded_resource_string_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
    }

    fn map_embedded_resource_number_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
    }

    fn map_embedded_resource_link(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        url: &str,
    ) {
    }

    fn map_embedded_resource_types(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        types: &[String],
    ) {
    }

    /// Self URL of the embedded model at `path`.
    fn map_embedded_resource_url(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
    }

    /// URL of a related model (or collection) that is linked, not embedded.
    ///
    /// `path` ends with the relation name.
    fn map_linked_resource_url(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
    }
}
