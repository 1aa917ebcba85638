//! # HAL
//!
//! [HAL](https://stateless.group/hal_specification.html) mappers for single models
//! and pages (`application/hal+json`).
//!
//! - Fields are written as top level members.
//! - Links, including `self`, go to `_links.{name}.href`.
//! - Embedded resources nest under `_embedded`, one level per relation, so the
//!   resource at path `creator.company` lives at `_embedded.creator._embedded.company`.
//! - Type labels are not part of HAL and are dropped.
//!
//! Pages carry their navigation under `_links` (`self`, `first`, `prev`, `next`,
//! `last`, `collection`), the counts as `total` and `count`, and the items as an
//! array under `_embedded`, keyed by the first type label of the item.

use hypermedia_framework::{
    EmbeddedPath, JsonObjectBuilder, ModelRef, PageMessageMapper, RequestContext,
    SingleModelMessageMapper,
};
use serde_json::Number;
use tracing::debug;

pub const MEDIA_TYPE: &str = "application/hal+json";

const EMBEDDED: &str = "_embedded";
const LINKS: &str = "_links";
const HREF: &str = "href";

/// Key path of the resource at `path`.
fn resource_keys(path: &EmbeddedPath) -> Vec<String> {
    path.segments()
        .into_iter()
        .flat_map(|segment| [EMBEDDED.to_string(), segment.to_string()])
        .collect()
}

fn field_keys(path: &EmbeddedPath, field_name: &str) -> Vec<String> {
    let mut keys = resource_keys(path);
    keys.push(field_name.to_string());
    keys
}

fn link_keys(path: &EmbeddedPath, link_name: &str) -> Vec<String> {
    let mut keys = resource_keys(path);
    keys.extend([LINKS.to_string(), link_name.to_string(), HREF.to_string()]);
    keys
}

fn write_link(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, name: &str, url: &str) {
    builder.nested_field(&link_keys(path, name)).value(url);
}

/// A link to a related resource is written on its parent.
fn write_linked_resource(builder: &mut JsonObjectBuilder, path: &EmbeddedPath, url: &str) {
    if let (Some(parent), Some(name)) = (path.parent(), path.last()) {
        write_link(builder, parent, name, url);
    }
}

/// HAL rendering of a single model.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalSingleModelMapper;

impl SingleModelMessageMapper for HalSingleModelMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn map_boolean_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: bool) {
        builder.field(field_name).value(value);
    }

    fn map_string_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &str) {
        builder.field(field_name).value(value);
    }

    fn map_number_field(&self, builder: &mut JsonObjectBuilder, field_name: &str, value: &Number) {
        builder.field(field_name).value(value.clone());
    }

    fn map_link(&self, builder: &mut JsonObjectBuilder, field_name: &str, url: &str) {
        write_link(builder, &EmbeddedPath::root(), field_name, url);
    }

    fn map_self_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "self", url);
    }

    fn map_embedded_resource_boolean_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
        builder.nested_field(&field_keys(path, field_name)).value(value);
    }

    fn map_embedded_resource_string_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
        builder.nested_field(&field_keys(path, field_name)).value(value);
    }

    fn map_embedded_resource_number_field(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
        builder
            .nested_field(&field_keys(path, field_name))
            .value(value.clone());
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

    fn map_embedded_resource_url(
        &self,
        builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_link(builder, path, "self", url);
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

/// HAL rendering of a page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalPageMapper;

impl PageMessageMapper for HalPageMapper {
    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn on_finish_item(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: JsonObjectBuilder,
        item: &ModelRef<'_>,
        _request: &RequestContext,
    ) {
        let key = match item.types().first() {
            Some(label) => label.as_str(),
            None => {
                debug!(model = %item.model_type(), "Item without type label, keyed by model name");
                item.model_type().name()
            }
        };
        page_builder
            .nested_field(&[EMBEDDED, key])
            .array_value()
            .add(item_builder);
    }

    fn map_item_boolean_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: bool,
    ) {
        item_builder.field(field_name).value(value);
    }

    fn map_item_string_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &str,
    ) {
        item_builder.field(field_name).value(value);
    }

    fn map_item_number_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &Number,
    ) {
        item_builder.field(field_name).value(value.clone());
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

    fn map_item_self_url(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        url: &str,
    ) {
        write_link(item_builder, &EmbeddedPath::root(), "self", url);
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
        item_builder
            .nested_field(&field_keys(path, field_name))
            .value(value);
    }

    fn map_item_embedded_resource_string_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
        item_builder
            .nested_field(&field_keys(path, field_name))
            .value(value);
    }

    fn map_item_embedded_resource_number_field(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
        item_builder
            .nested_field(&field_keys(path, field_name))
            .value(value.clone());
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

    fn map_item_embedded_resource_url(
        &self,
        _page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        write_link(item_builder, path, "self", url);
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
        builder.field("total").value(total_count);
    }

    fn map_page_count(&self, builder: &mut JsonObjectBuilder, count: usize) {
        builder.field("count").value(count);
    }

    fn map_current_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "self", url);
    }

    fn map_first_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "first", url);
    }

    fn map_previous_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "prev", url);
    }

    fn map_next_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "next", url);
    }

    fn map_last_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "last", url);
    }

    fn map_collection_url(&self, builder: &mut JsonObjectBuilder, url: &str) {
        write_link(builder, &EmbeddedPath::root(), "collection", url);
    }
}
