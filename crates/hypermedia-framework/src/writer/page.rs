use super::walker::{ModelWalker, ResourceSink};
use crate::embedded_path::EmbeddedPath;
use crate::error::{Result, WriterError};
use crate::json::JsonObjectBuilder;
use crate::mapper::PageMessageMapper;
use crate::model::ModelRef;
use crate::page::{Page, PageInfo};
use crate::registry::Resources;
use crate::request::RequestContext;
use crate::uri::{create_collection_url, create_page_url};
use serde_json::Number;
use std::any::Any;
use tracing::warn;

struct PageItemSink<'a> {
    mapper: &'a dyn PageMessageMapper,
    page_builder: &'a mut JsonObjectBuilder,
    item_builder: &'a mut JsonObjectBuilder,
}

impl ResourceSink for PageItemSink<'_> {
    fn boolean_field(&mut self, path: &EmbeddedPath, field_name: &str, value: bool) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_boolean_field(page, item, field_name, value);
        } else {
            self.mapper
                .map_item_embedded_resource_boolean_field(page, item, path, field_name, value);
        }
    }

    fn string_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &str) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_string_field(page, item, field_name, value);
        } else {
            self.mapper
                .map_item_embedded_resource_string_field(page, item, path, field_name, value);
        }
    }

    fn number_field(&mut self, path: &EmbeddedPath, field_name: &str, value: &Number) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_number_field(page, item, field_name, value);
        } else {
            self.mapper
                .map_item_embedded_resource_number_field(page, item, path, field_name, value);
        }
    }

    fn link(&mut self, path: &EmbeddedPath, field_name: &str, url: &str) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_link(page, item, field_name, url);
        } else {
            self.mapper
                .map_item_embedded_resource_link(page, item, path, field_name, url);
        }
    }

    fn types(&mut self, path: &EmbeddedPath, types: &[String]) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_types(page, item, types);
        } else {
            self.mapper
                .map_item_embedded_resource_types(page, item, path, types);
        }
    }

    fn self_url(&mut self, path: &EmbeddedPath, url: &str) {
        let (page, item) = (&mut *self.page_builder, &mut *self.item_builder);
        if path.is_root() {
            self.mapper.map_item_self_url(page, item, url);
        } else {
            self.mapper
                .map_item_embedded_resource_url(page, item, path, url);
        }
    }

    fn linked_resource_url(&mut self, path: &EmbeddedPath, url: &str) {
        self.mapper.map_item_linked_resource_url(
            self.page_builder,
            self.item_builder,
            path,
            url,
        );
    }
}

/// Writes a page of models through `mapper`.
///
/// Items are written in page order, each one fully walked. Counts and page URLs
/// come after the items; previous and next links only exist when there is such a
/// page. Fails when the item type has no representor, or on the first item or
/// collection without a URL; nothing is returned in that case.
pub fn write_page<T: Any>(
    page: &Page<T>,
    mapper: &dyn PageMessageMapper,
    resources: &Resources,
    request: &RequestContext,
) -> Result<String> {
    let info = page.info();
    let items = page.items().iter().map(|item| item as &dyn Any);
    write(items, &info, mapper, resources, request).inspect_err(|error| {
        warn!(
            model = %info.model_type,
            media_type = mapper.media_type(),
            %error,
            "Page write aborted"
        );
    })
}

fn write<'m>(
    items: impl Iterator<Item = &'m dyn Any>,
    info: &PageInfo,
    mapper: &dyn PageMessageMapper,
    resources: &Resources,
    request: &RequestContext,
) -> Result<String> {
    let model_type = info.model_type;
    let representor = resources
        .representor(model_type)
        .ok_or_else(|| WriterError::MustHaveRepresentor(model_type.to_string()))?;
    let walker = ModelWalker::new(resources, request);

    let mut builder = JsonObjectBuilder::new();
    mapper.on_start(&mut builder, info, request);

    for model in items {
        let item = ModelRef::new(model, model_type, representor.types());
        let mut item_builder = JsonObjectBuilder::new();
        mapper.on_start_item(&mut builder, &mut item_builder, &item, request);
        {
            let mut sink = PageItemSink {
                mapper,
                page_builder: &mut builder,
                item_builder: &mut item_builder,
            };
            walker.write(&mut sink, representor, model, &EmbeddedPath::root())?;
        }
        mapper.on_finish_item(&mut builder, item_builder, &item, request);
    }

    mapper.map_item_total_count(&mut builder, info.total_count);
    mapper.map_page_count(&mut builder, info.item_count);

    let collection_url = resources
        .collection_name(model_type)
        .map(|name| create_collection_url(request.server_url(), name))
        .ok_or_else(|| WriterError::UnresolvableUri(model_type.to_string()))?;
    let page_url = |number: usize| create_page_url(&collection_url, number, info.items_per_page);

    mapper.map_current_page_url(&mut builder, &page_url(info.page_number));
    mapper.map_first_page_url(&mut builder, &page_url(1));
    if info.has_previous() {
        mapper.map_previous_page_url(&mut builder, &page_url(info.page_number - 1));
    }
    if info.has_next() {
        mapper.map_next_page_url(&mut builder, &page_url(info.page_number + 1));
    }
    mapper.map_last_page_url(&mut builder, &page_url(info.last_page_number.max(1)));
    mapper.map_collection_url(&mut builder, &collection_url);

    mapper.on_finish(&mut builder, info, request);
    Ok(serde_json::to_string(&builder.build())?)
}
