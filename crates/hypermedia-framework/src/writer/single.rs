use super::walker::{ModelWalker, ResourceSink};
use crate::embedded_path::EmbeddedPath;
use crate::error::{Result, WriterError};
use crate::json::JsonObjectBuilder;
use crate::mapper::SingleModelMessageMapper;
use crate::model::{ModelRef, ModelType, SingleModel};
use crate::registry::Resources;
use crate::request::RequestContext;
use serde_json::Number;
use std::any::Any;
use tracing::warn;

struct SingleModelSink<'a> {
    mapper: &'a dyn SingleModelMessageMapper,
    builder: &'a mut JsonObjectBuilder,
}

impl ResourceSink for SingleModelSink<'_> {
    fn boolean_field(&mut self, path: &EmbeddedPath, field_name: &str, value: bool) {
        if path.is_root() {
            self.mapper.map_boolean_field(self.builder, field_name, value);
        } else {
            self.mapper
                .map_embedded_resource_boolean_field(self.builder, path, field_name, value);
        }
    }

    fn string_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &str) {
        if path.is_root() {
            self.mapper.map_string_field(self.builder, field_name, value);
        } else {
            self.mapper
                .map_embedded_resource_string_field(self.builder, path, field_name, value);
        }
    }

    fn number_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &Number) {
        if path.is_root() {
            self.mapper.map_number_field(self.builder, field_name, value);
        } else {
            self.mapper
                .map_embedded_resource_number_field(self.builder, path, field_name, value);
        }
    }

    fn link(&mut self, path: &EmbeddedPath, field_name: &str, url: &str) {
        if path.is_root() {
            self.mapper.map_link(self.builder, field_name, url);
        } else {
            self.mapper
                .map_embedded_resource_link(self.builder, path, field_name, url);
        }
    }

    fn types(&mut self, path: &EmbeddedPath, types: &[String]) {
        if path.is_root() {
            self.mapper.map_types(self.builder, types);
        } else {
            self.mapper
                .map_embedded_resource_types(self.builder, path, types);
        }
    }

    fn self_url(&mut self, path: &EmbeddedPath, url: &str) {
        if path.is_root() {
            self.mapper.map_self_url(self.builder, url);
        } else {
            self.mapper.map_embedded_resource_url(self.builder, path, url);
        }
    }

    fn linked_resource_url(&mut self, path: &EmbeddedPath, url: &str) {
        self.mapper.map_linked_resource_url(self.builder, path, url);
    }
}

/// Writes one model through `mapper`.
///
/// Fails when the model type has no representor or the model has no URL; the
/// partially built document is dropped.
pub fn write_single_model<T: Any>(
    single_model: &SingleModel<T>,
    mapper: &dyn SingleModelMessageMapper,
    resources: &Resources,
    request: &RequestContext,
) -> Result<String> {
    let model_type = single_model.model_type();
    write_single(single_model.model(), model_type, mapper, resources, request).inspect_err(
        |error| {
            warn!(
                model = %model_type,
                media_type = mapper.media_type(),
                %error,
                "Single model write aborted"
            );
        },
    )
}

fn write_single(
    model: &dyn Any,
    model_type: ModelType,
    mapper: &dyn SingleModelMessageMapper,
    resources: &Resources,
    request: &RequestContext,
) -> Result<String> {
    let representor = resources
        .representor(model_type)
        .ok_or_else(|| WriterError::MustHaveRepresentor(model_type.to_string()))?;
    let model_ref = ModelRef::new(model, model_type, representor.types());

    let mut builder = JsonObjectBuilder::new();
    mapper.on_start(&mut builder, &model_ref, request);
    {
        let mut sink = SingleModelSink {
            mapper,
            builder: &mut builder,
        };
        ModelWalker::new(resources, request).write(
            &mut sink,
            representor,
            model,
            &EmbeddedPath::root(),
        )?;
    }
    mapper.on_finish(&mut builder, &model_ref, request);
    Ok(serde_json::to_string(&builder.build())?)
}
