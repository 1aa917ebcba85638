use crate::embedded_path::EmbeddedPath;
use crate::json::JsonObjectBuilder;
use crate::model::ModelRef;
use crate::page::PageInfo;
use crate::request::RequestContext;
use serde_json::Number;

/// Shapes the document of a page of models for one media type.
///
/// Each item is written into its own builder, handed to
/// [`on_finish_item`](Self::on_finish_item) to be placed in the page document.
/// Item methods receive both builders. All methods but
/// [`media_type`](Self::media_type) default to doing nothing.
#[allow(unused_variables)]
pub trait PageMessageMapper: Send + Sync {
    fn media_type(&self) -> &str;

    fn supports(&self, page: &PageInfo, request: &RequestContext) -> bool {
        true
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        page: &PageInfo,
        request: &RequestContext,
    ) {
    }

    fn on_finish(
        &self,
        builder: &mut JsonObjectBuilder,
        page: &PageInfo,
        request: &RequestContext,
    ) {
    }

    fn on_start_item(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        item: &ModelRef<'_>,
        request: &RequestContext,
    ) {
    }

    /// Takes ownership of the finished item. Dropping it leaves the item out.
    fn on_finish_item(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: JsonObjectBuilder,
        item: &ModelRef<'_>,
        request: &RequestContext,
    ) {
    }

    fn map_item_boolean_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: bool,
    ) {
    }

    fn map_item_string_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &str,
    ) {
    }

    fn map_item_number_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        value: &Number,
    ) {
    }

    fn map_item_link(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        field_name: &str,
        url: &str,
    ) {
    }

    fn map_item_types(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        types: &[String],
    ) {
    }

    fn map_item_self_url(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        url: &str,
    ) {
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: bool,
    ) {
    }

    fn map_item_embedded_resource_string_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &str,
    ) {
    }

    fn map_item_embedded_resource_number_field(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        value: &Number,
    ) {
    }

    fn map_item_embedded_resource_link(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        field_name: &str,
        url: &str,
    ) {
    }

    fn map_item_embedded_resource_types(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        types: &[String],
    ) {
    }

    fn map_item_embedded_resource_url(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
    }

    fn map_item_linked_resource_url(
        &self,
        page_builder: &mut JsonObjectBuilder,
        item_builder: &mut JsonObjectBuilder,
        path: &EmbeddedPath,
        url: &str,
    ) {
    }

    /// Size of the whole collection.
    fn map_item_total_count(&self, builder: &mut JsonObjectBuilder, total_count: usize) {}

    /// Number of items on this page.
    fn map_page_count(&self, builder: &mut JsonObjectBuilder, count: usize) {}

    fn map_current_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_first_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_previous_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_next_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_last_page_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}

    fn map_collection_url(&self, builder: &mut JsonObjectBuilder, url: &str) {}
}
