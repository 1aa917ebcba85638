//! # Recording Mapper
//!
//! [`RecordingMapper`] implements [`SingleModelMessageMapper`] and
//! [`PageMessageMapper`] without producing any format. Every callback is appended
//! to a shared log of [`Event`]s, so tests can assert what the writers emit and in
//! which order.
//!
//! ```rust
//! use hypermedia_framework::mock::{Event, RecordingMapper};
//! use hypermedia_framework::{
//!     write_single_model, RequestContext, Representor, ResourceRegistry, ServerUrl, SingleModel,
//! };
//!
//! struct Tag { id: u32, name: String }
//!
//! let registry = ResourceRegistry::new();
//! registry
//!     .register(
//!         "tags",
//!         Representor::builder::<Tag>()
//!             .identifier(|tag| tag.id)
//!             .add_string("name", |tag| tag.name.clone())
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! let mapper = RecordingMapper::new();
//! let request = RequestContext::new(ServerUrl::parse("http://localhost").unwrap());
//! let tag = SingleModel::new(Tag { id: 1, name: "rust".into() });
//! write_single_model(&tag, &mapper, &registry.snapshot(), &request).unwrap();
//!
//! assert_eq!(mapper.events().first(), Some(&Event::Start));
//! assert!(mapper.events().contains(&Event::SelfUrl {
//!     path: String::new(),
//!     url: "http://localhost/p/tags/1".into(),
//! }));
//! ```
//!
//! Clones share the log: register one clone in a
//! [`MessageMapperRegistry`](crate::MessageMapperRegistry) and inspect another.

use crate::embedded_path::EmbeddedPath;
use crate::json::JsonObjectBuilder;
use crate::mapper::{PageMessageMapper, SingleModelMessageMapper};
use crate::model::ModelRef;
use crate::page::PageInfo;
use crate::request::RequestContext;
use parking_lot::Mutex;
use serde_json::{Number, Value};
use std::sync::Arc;

pub const RECORDING_MEDIA_TYPE: &str = "application/x-recording";

/// One mapper callback. `path` is the dotted embedded path, empty for the root.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start,
    Finish,
    StartItem(String),
    FinishItem(String),
    Field { path: String, name: String, value: Value },
    Link { path: String, name: String, url: String },
    Types { path: String, types: Vec<String> },
    SelfUrl { path: String, url: String },
    LinkedResource { path: String, url: String },
    TotalCount(usize),
    PageCount(usize),
    PageUrl { kind: PageUrlKind, url: String },
    CollectionUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageUrlKind {
    Current,
    First,
    Previous,
    Next,
    Last,
}

/// Mapper that records callbacks instead of writing a document.
#[derive(Debug, Clone, Default)]
pub struct RecordingMapper {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Names of the recorded fields of the model at `path`, in order.
    pub fn field_names(&self, path: &str) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Field { path: at, name, .. } if at == path => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    fn record(&self, event: Event) {
        self.events.lock().push(event);
    }

    fn field(&self, path: &EmbeddedPath, name: &str, value: impl Into<Value>) {
        self.record(Event::Field {
            path: path.to_string(),
            name: name.to_string(),
            value: value.into(),
        });
    }

    fn link(&self, path: &EmbeddedPath, name: &str, url: &str) {
        self.record(Event::Link {
            path: path.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    fn types(&self, path: &EmbeddedPath, types: &[String]) {
        self.record(Event::Types {
            path: path.to_string(),
            types: types.to_vec(),
        });
    }

    fn self_url(&self, path: &EmbeddedPath, url: &str) {
        self.record(Event::SelfUrl {
            path: path.to_string(),
            url: url.to_string(),
        });
    }

    fn linked(&self, path: &EmbeddedPath, url: &str) {
        self.record(Event::LinkedResource {
            path: path.to_string(),
            url: url.to_string(),
        });
    }

    fn page_url(&self, kind: PageUrlKind, url: &str) {
        self.record(Event::PageUrl {
            kind,
            url: url.to_string(),
        });
    }
}

type Builder = JsonObjectBuilder;

impl SingleModelMessageMapper for RecordingMapper {
    fn media_type(&self) -> &str {
        RECORDING_MEDIA_TYPE
    }

    fn on_start(&self, _: &mut Builder, _: &ModelRef<'_>, _: &RequestContext) {
        self.record(Event::Start);
    }

    fn on_finish(&self, _: &mut Builder, _: &ModelRef<'_>, _: &RequestContext) {
        self.record(Event::Finish);
    }

    fn map_boolean_field(&self, _: &mut Builder, name: &str, value: bool) {
        self.field(&EmbeddedPath::root(), name, value);
    }

    fn map_string_field(&self, _: &mut Builder, name: &str, value: &str) {
        self.field(&EmbeddedPath::root(), name, value);
    }

    fn map_number_field(&self, _: &mut Builder, name: &str, value: &Number) {
        self.field(&EmbeddedPath::root(), name, value.clone());
    }

    fn map_link(&self, _: &mut Builder, name: &str, url: &str) {
        self.link(&EmbeddedPath::root(), name, url);
    }

    fn map_types(&self, _: &mut Builder, types: &[String]) {
        self.types(&EmbeddedPath::root(), types);
    }

    fn map_self_url(&self, _: &mut Builder, url: &str) {
        self.self_url(&EmbeddedPath::root(), url);
    }

    fn map_embedded_resource_boolean_field(
        &self,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: bool,
    ) {
        self.field(path, name, value);
    }

    fn map_embedded_resource_string_field(
        &self,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: &str,
    ) {
        self.field(path, name, value);
    }

    fn map_embedded_resource_number_field(
        &self,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: &Number,
    ) {
        self.field(path, name, value.clone());
    }

    fn map_embedded_resource_link(
        &self,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        url: &str,
    ) {
        self.link(path, name, url);
    }

    fn map_embedded_resource_types(&self, _: &mut Builder, path: &EmbeddedPath, types: &[String]) {
        self.types(path, types);
    }

    fn map_embedded_resource_url(&self, _: &mut Builder, path: &EmbeddedPath, url: &str) {
        self.self_url(path, url);
    }

    fn map_linked_resource_url(&self, _: &mut Builder, path: &EmbeddedPath, url: &str) {
        self.linked(path, url);
    }
}

impl PageMessageMapper for RecordingMapper {
    fn media_type(&self) -> &str {
        RECORDING_MEDIA_TYPE
    }

    fn on_start(&self, _: &mut Builder, _: &PageInfo, _: &RequestContext) {
        self.record(Event::Start);
    }

    fn on_finish(&self, _: &mut Builder, _: &PageInfo, _: &RequestContext) {
        self.record(Event::Finish);
    }

    fn on_start_item(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        item: &ModelRef<'_>,
        _: &RequestContext,
    ) {
        self.record(Event::StartItem(item.model_type().to_string()));
    }

    fn on_finish_item(&self, _: &mut Builder, _: Builder, item: &ModelRef<'_>, _: &RequestContext) {
        self.record(Event::FinishItem(item.model_type().to_string()));
    }

    fn map_item_boolean_field(&self, _: &mut Builder, _: &mut Builder, name: &str, value: bool) {
        self.field(&EmbeddedPath::root(), name, value);
    }

    fn map_item_string_field(&self, _: &mut Builder, _: &mut Builder, name: &str, value: &str) {
        self.field(&EmbeddedPath::root(), name, value);
    }

    fn map_item_number_field(&self, _: &mut Builder, _: &mut Builder, name: &str, value: &Number) {
        self.field(&EmbeddedPath::root(), name, value.clone());
    }

    fn map_item_link(&self, _: &mut Builder, _: &mut Builder, name: &str, url: &str) {
        self.link(&EmbeddedPath::root(), name, url);
    }

    fn map_item_types(&self, _: &mut Builder, _: &mut Builder, types: &[String]) {
        self.types(&EmbeddedPath::root(), types);
    }

    fn map_item_self_url(&self, _: &mut Builder, _: &mut Builder, url: &str) {
        self.self_url(&EmbeddedPath::root(), url);
    }

    fn map_item_embedded_resource_boolean_field(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: bool,
    ) {
        self.field(path, name, value);
    }

    fn map_item_embedded_resource_string_field(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: &str,
    ) {
        self.field(path, name, value);
    }

    fn map_item_embedded_resource_number_field(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        value: &Number,
    ) {
        self.field(path, name, value.clone());
    }

    fn map_item_embedded_resource_link(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        name: &str,
        url: &str,
    ) {
        self.link(path, name, url);
    }

    fn map_item_embedded_resource_types(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        types: &[String],
    ) {
        self.types(path, types);
    }

    fn map_item_embedded_resource_url(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        self.self_url(path, url);
    }

    fn map_item_linked_resource_url(
        &self,
        _: &mut Builder,
        _: &mut Builder,
        path: &EmbeddedPath,
        url: &str,
    ) {
        self.linked(path, url);
    }

    fn map_item_total_count(&self, _: &mut Builder, total_count: usize) {
        self.record(Event::TotalCount(total_count));
    }

    fn map_page_count(&self, _: &mut Builder, count: usize) {
        self.record(Event::PageCount(count));
    }

    fn map_current_page_url(&self, _: &mut Builder, url: &str) {
        self.page_url(PageUrlKind::Current, url);
    }

    fn map_first_page_url(&self, _: &mut Builder, url: &str) {
        self.page_url(PageUrlKind::First, url);
    }

    fn map_previous_page_url(&self, _: &mut Builder, url: &str) {
        self.page_url(PageUrlKind::Previous, url);
    }

    fn map_next_page_url(&self, _: &mut Builder, url: &str) {
        self.page_url(PageUrlKind::Next, url);
    }

    fn map_last_page_url(&self, _: &mut Builder, url: &str) {
        self.page_url(PageUrlKind::Last, url);
    }

    fn map_collection_url(&self, _: &mut Builder, url: &str) {
        self.record(Event::CollectionUrl(url.to_string()));
    }
}
