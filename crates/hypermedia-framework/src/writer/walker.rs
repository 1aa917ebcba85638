//! The model walk shared by the single model and page writers.

use crate::embedded_path::EmbeddedPath;
use crate::error::{Result, WriterError};
use crate::registry::Resources;
use crate::representor::{RelationMode, Representor};
use crate::request::RequestContext;
use crate::uri::{create_binary_url, create_related_collection_url, create_single_url, Path};
use serde_json::Number;
use std::any::Any;
use tracing::debug;

/// Destination of the structural elements of one model.
///
/// `path` is the position of the model being written; it is the root for the
/// written model itself and non-root for embedded models. Implementations route
/// each element to the matching mapper method.
pub(crate) trait ResourceSink {
    fn boolean_field(&mut self, path: &EmbeddedPath, field_name: &str, value: bool);
    fn string_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &str);
    fn number_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &Number);
    fn link(&mut self, path: &EmbeddedPath, field_name: &str, url: &str);
    fn types(&mut self, path: &EmbeddedPath, types: &[String]);
    fn self_url(&mut self, path: &EmbeddedPath, url: &str);
    /// `path` ends with the relation name.
    fn linked_resource_url(&mut self, path: &EmbeddedPath, url: &str);
}

/// Walks a model and its relations against one registry snapshot.
pub(crate) struct ModelWalker<'a> {
    resources: &'a Resources,
    request: &'a RequestContext,
}

impl<'a> ModelWalker<'a> {
    pub(crate) fn new(resources: &'a Resources, request: &'a RequestContext) -> Self {
        Self { resources, request }
    }

    /// Writes `model`, described by `representor`, at `path`.
    ///
    /// The root model must have a URL; embedded models without one are written
    /// without a self link.
    pub(crate) fn write(
        &self,
        sink: &mut dyn ResourceSink,
        representor: &Representor,
        model: &dyn Any,
        path: &EmbeddedPath,
    ) -> Result<()> {
        let types = representor.types();
        let fields = self.request.fields();
        let allowed = |name: &str| fields.allows_all(types, name);

        for field in representor.boolean_fields() {
            if allowed(field.name()) {
                if let Some(value) = field.extract(model) {
                    sink.boolean_field(path, field.name(), value);
                }
            }
        }
        for field in representor.localized_fields() {
            if allowed(field.name()) {
                if let Some(value) = field.extract(model, self.request.language()) {
                    sink.string_field(path, field.name(), &value);
                }
            }
        }
        for field in representor.string_fields() {
            if allowed(field.name()) {
                if let Some(value) = field.extract(model) {
                    sink.string_field(path, field.name(), &value);
                }
            }
        }
        for field in representor.number_fields() {
            if allowed(field.name()) {
                if let Some(value) = field.extract(model) {
                    sink.number_field(path, field.name(), &value);
                }
            }
        }
        for link in representor.links() {
            if allowed(link.key.as_str()) {
                sink.link(path, &link.key, &link.url);
            }
        }

        sink.types(path, types);

        let model_path = self.resources.path(representor.model_type(), model);
        let server_url = self.request.server_url();
        match &model_path {
            Some(model_path) => {
                sink.self_url(path, &create_single_url(server_url, model_path));
            }
            None if path.is_root() => {
                return Err(WriterError::UnresolvableUri(
                    representor.model_type().to_string(),
                ))
            }
            None => {
                debug!(model = %representor.model_type(), %path, "Embedded model without URL");
            }
        }

        if let Some(model_path) = &model_path {
            for binary in representor.binaries() {
                if allowed(binary.key()) && binary.extract(model).is_some() {
                    let url = create_binary_url(server_url, binary.key(), model_path);
                    sink.string_field(path, binary.key(), &url);
                }
            }
        }

        self.write_related_models(sink, representor, model, path)?;
        self.write_related_collections(sink, representor, model, path);
        Ok(())
    }

    fn write_related_models(
        &self,
        sink: &mut dyn ResourceSink,
        representor: &Representor,
        model: &dyn Any,
        path: &EmbeddedPath,
    ) -> Result<()> {
        let types = representor.types();
        for relation in representor.related_models() {
            let key = relation.key();
            if !self.request.fields().allows_all(types, key) {
                continue;
            }
            let Some(related) = relation.extract(model) else {
                continue;
            };
            let related_type = relation.related_type();
            let Some(related_representor) = self.resources.representor(related_type) else {
                debug!(
                    model = %representor.model_type(),
                    relation = key,
                    %related_type,
                    "No representor for related model"
                );
                continue;
            };
            let related_path = path.push(key);

            let embed = relation.mode() == RelationMode::Embeddable
                && self.request.embedded().should_embed(path, key);
            if embed {
                debug!(%related_path, "Embedding");
                self.write(sink, related_representor, &*related, &related_path)?;
                continue;
            }

            match self.resources.path(related_type, &*related) {
                Some(related_model_path) => {
                    let url = create_single_url(self.request.server_url(), &related_model_path);
                    sink.linked_resource_url(&related_path, &url);
                }
                None => debug!(%related_path, %related_type, "Related model without URL"),
            }
        }
        Ok(())
    }

    fn write_related_collections(
        &self,
        sink: &mut dyn ResourceSink,
        representor: &Representor,
        model: &dyn Any,
        path: &EmbeddedPath,
    ) {
        let model_type = representor.model_type();
        let Some(collection_name) = self.resources.collection_name(model_type) else {
            return;
        };
        for collection in self.resources.related_collections(model_type) {
            let key = collection.key();
            if !self.request.fields().allows_all(representor.types(), key) {
                continue;
            }
            let Some(identifier) = collection.identifier(model) else {
                continue;
            };
            let owner = Path::new(collection_name, identifier);
            let url = create_related_collection_url(self.request.server_url(), &owner, key);
            sink.linked_resource_url(&path.push(key), &url);
        }
    }
}
