//! # JSON-LD
//!
//! [JSON-LD](https://www.w3.org/TR/json-ld/) mappers (`application/ld+json`) using
//! the schema.org vocabulary, with [Hydra](https://www.hydra-cg.com/spec/latest/core/)
//! collections for pages.
//!
//! A resource carries its types in `@type` and its URL in `@id`. Every member that
//! holds a URL is declared as an IRI in the `@context` of the object holding it.
//! Embedded resources are plain nested objects, so the resource at path
//! `creator.company` lives at `creator.company`.

use hypermedia_framework::{
    EmbeddedPath, ErrorMessageMapper, JsonObjectBuilder, ModelRef, PageInfo,
    PageMessageMapper, RequestContext, SingleModelMessageMapper,
};
use serde_json::{json, Number, Value};

pub const MEDIA_TYPE: &str = "application/ld+json";

const VOCABULARY: &str = "http://schema.org/";
const HYDRA_CONTEXT: &str = "https://www.w3.org/ns/hydra/context.jsonld";

fn keys(path: &EmbeddedPath, tail: &[&str]) -> Vec<String> {
    path.segments()
        .into_iter()
        .chain(tail.iter().copied())
        .map(str::to_string)
        .collect()
}

fn write_vocabulary(builder: &mut JsonObjectBuilder) {
    builder
        .nested_field(&["@context", "@vocab"])
        .value(VOCABULARY);
}

fn write_field(
    builder: &mut JsonObjectBuilder,
    path: &EmbeddedPath,
    name: &str,
    value: impl Into<Value>,
) {
    builder.nested_field(&keys(path, &[name])).value(value);
}

fn write_link(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, name: &str, url: &str) {
    builder.nested_field(&keys(path, &[name])).value(url);
    builder
        .nested_field(&keys(path, &["@context", name, "@type"]))
        .value("@id");
}

fn write_types(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, types: &[String]) {
    let mut array = builder.nested_field(&keys(path, &["@type"])).array_value();
    for label in types {
        array = array.add_value(label.as_str());
    }
}

fn write_id(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, url: &str) {
    builder.nested_field(&keys(path, &["@id"])).value(url);
}

/// A linked resource is an IRI member of its parent.
fn write_linked_resource(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, url: &str) {
    if let (Some(parent), Some(name)) = (path.parent(), path.last()) {
        write_link(builder, parent, name, url);
    }
}

/// JSON-LD rendering of a single model.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdSingleModelMapper;

impl SingleModelMessageMapper for JsonLdSingleModelMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        _model: &ModelRef<'_>,
        _request: &RequestContext,
    ) {
        write_vocabulary(builder);
    }

    fn map_boolean_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: bool) {
        write_field(builder, &EmbeddedPath::root(), field_name, value);
    }

    fn map_string_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &str) {
        write_field(builder, &EmbeddedPath::root(), field_name, value);
    }

    fn map_number_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &Number) {
        write_field(builder, &EmbeddedPath::root(), field_name, value.clone());
    }

    fn map_link(&self, builder: &mut JsonObjectBuilder, field_name: &str, url: &str) {
        write_link(builder, &EmbeddedPath::root(), field_name, url);
    }

    fn map_types(&self, builder: &mut JsonObjectBuilder, types: &[String]) {
        write_types(builder, &EmbeddedPath::root(), types);
    }

    fn map_self_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_id(builder, &EmbeddedPath::root(), url);
    }

    fn map_embedded_resource_boolean_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
        write_field(builder, path, field_name, value);
    }

    fn map_embedded_resource_string_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
        write_field(builder, path, field_name, value);
    }

    fn map_embedded_resource_number_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
        write_field(builder, path, field_name, value.clone());
    }

    fn map_embedded_resource_link(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        url: &str,
    ) {
        write_link(builder, path, field_name, url);
    }

    fn map_embedded_resource_types(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        types: &[String],
    ) {
        write_types(builder, path, types);
    }

    fn map_embedded_resource_url(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_id(builder, path, url);
    }

    fn map_linked_resource_url(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_linked_resource(builder, path, url);
    }
}

/// Hydra collection rendering of a page.
///
/// Items are written to `members`; the navigation links form a
/// `PartialCollectionView` under `view`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdPageMapper;

impl PageMessageMapper for JsonLdPageMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        _page: &PageInfo,
        _request: &RequestContext,
    ) {
        builder
            .field("@context")
            .value(json!([{ "@vocab": VOCABULARY }, HYDRA_CONTEXT]));
        builder.field("@type").array_value().add_value("Collection");
    }

    fn on_finish(
        &self,
        builder: &mut JsonObjectBuilder,
        _page: &PageInfo,
        _request: &RequestContext,
    ) {
        // An empty page still lists its (empty) members
        builder.field("members").array_value();
    }

    fn on_finish_item(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: JsonObjectBuilder,
        _item: &ModelRef<'_>,
        _request: &RequestContext,
    ) {
        page_builder.field("members").array_value().add(item_builder);
    }

    fn map_item_boolean_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: bool,
    ) {
        write_field(item_builder, &EmbeddedPath::root(), field_name, value);
    }

    fn map_item_string_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &str,
    ) {
        write_field(item_builder, &EmbeddedPath::root(), field_name, value);
    }

    fn map_item_number_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &Number,
    ) {
        write_field(item_builder, &EmbeddedPath::root(), field_name, value.clone());
    }

    fn map_item_link(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        url: &str,
    ) {
        write_link(item_builder, &EmbeddedPath::root(), field_name, url);
    }

    fn map_item_types(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        types: &[String],
    ) {
        write_types(item_builder, &EmbeddedPath::root(), types);
    }

    fn map_item_self_url(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        url: &str,
    ) {
        write_id(item_builder, &EmbeddedPath::root(), url);
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
        write_field(item_builder, path, field_name, value);
    }

    fn map_item_embedded_resource_string_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
        write_field(item_builder, path, field_name, value);
    }

    fn map_item_embedded_resource_number_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
        write_field(item_builder, path, field_name, value.clone());
    }

    fn map_item_embedded_resource_link(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        url: &str,
    ) {
        write_link(item_builder, path, field_name, url);
    }

    fn map_item_embedded_resource_types(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        types: &[String],
    ) {
        write_types(item_builder, path, types);
    }

    fn map_item_embedded_resource_url(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_id(item_builder, path, url);
    }

    fn map_item_linked_resource_url(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_linked_resource(item_builder, path, url);
    }

    fn map_item_total_count(&self, builder: &mut JsonObjectBuilder, total_count: usize) {
        builder.field("totalItems").value(total_count);
    }

    fn map_page_count(&self, builder: &mut JsonObjectBuilder, count: usize) {
        builder.field("numberOfItems").value(count);
    }

    fn map_current_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.nested_field(&["view", "@id"]).value(url);
        builder
            .nested_field(&["view", "@type"])
            .value("PartialCollectionView");
    }

    fn map_first_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.nested_field(&["view", "first"]).value(url);
    }

    fn map_previous_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.nested_field(&["view", "previous"]).value(url);
    }

    fn map_next_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.nested_field(&["view", "next"]).value(url);
    }

    fn map_last_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.nested_field(&["view", "last"]).value(url);
    }

    fn map_collection_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        builder.field("@id").value(url);
    }
}

/// JSON-LD error document: `title`, `description`, `@type` and `statusCode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdErrorMapper;

impl ErrorMessageMapper for JsonLdErrorMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn map_title(&self, builder: &mut JsonObjectBuilder, title: &str) {
        builder.field("title").value(title);
    }

    fn map_description(&self, builder: &mut JsonObjectBuilder, description: &str) {
        builder.field("description").value(description);
    }

    fn map_type(&self, builder: &mut JsonObjectBuilder, error_type: &str) {
        builder.field("@type").value(error_type);
    }

    fn map_status_code(&self, builder: &mut JsonObjectBuilder, status_code: u16) {
        builder.field("statusCode").value(status_code);
    }
}
