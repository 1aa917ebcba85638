use hypermedia_framework::mock::{Event, PageUrlKind, RecordingMapper, RECORDING_MEDIA_TYPE};
use hypermedia_framework::{
    write_page, write_single_model, BinaryFile, EmbeddedPath, Embedded, Fields, Language,
    LocalizedText, MessageMapperRegistry, Page, PageItems, Pagination, Representor,
    RequestContext, ResourceRegistry, ResponseWriter, ServerUrl, SingleModel, WriterError,
};
use serde_json::json;
use std::sync::Arc;

// --- Test Models ---

struct Company {
    id: u32,
    name: String,
}

struct Person {
    id: u32,
    name: String,
    email: Option<String>,
    active: bool,
    greeting: LocalizedText,
    company: Option<u32>,
    avatar: Option<Vec<u8>>,
}

struct Posting {
    id: u32,
    headline: String,
    words: u32,
    author: u32,
    reviewer: Option<u32>,
}

struct Comment {
    id: u32,
    author: u32,
}

fn company(id: u32) -> Company {
    Company {
        id,
        name: format!("Company {}", id),
    }
}

fn person(id: u32) -> Person {
    Person {
        id,
        name: format!("Person {}", id),
        email: None,
        active: true,
        greeting: LocalizedText::new("en", "Hello").with("es", "Hola"),
        company: Some(3),
        // Only odd ids have uploaded an avatar
        avatar: (id % 2 == 1).then(|| vec![0u8; 4]),
    }
}

fn posting(id: u32) -> Posting {
    Posting {
        id,
        headline: format!("Posting {}", id),
        words: 250,
        author: 7,
        reviewer: Some(8),
    }
}

fn company_representor() -> Representor {
    Representor::builder::<Company>()
        .identifier(|c| c.id)
        .add_type("Organization")
        .add_string("name", |c| c.name.clone())
        .build()
        .unwrap()
}

fn person_representor() -> Representor {
    Representor::builder::<Person>()
        .identifier(|p| p.id)
        .add_type("Person")
        .add_boolean("active", |p| p.active)
        .add_localized_string("greeting", |p, language| language.resolve(&p.greeting))
        .add_string("name", |p| p.name.clone())
        .add_string("email", |p| p.email.clone())
        .add_binary("avatar", |p| {
            p.avatar.as_ref().map(|png| BinaryFile::new(png.clone(), "image/png"))
        })
        .add_embedded_model("worksFor", |p: &Person| p.company.map(company))
        .build()
        .unwrap()
}

fn posting_representor() -> Representor {
    Representor::builder::<Posting>()
        .identifier(|p| p.id)
        .add_type("BlogPosting")
        .add_string("headline", |p| p.headline.clone())
        .add_number("wordCount", |p| p.words)
        .add_link("license", "https://creativecommons.org/licenses/by/4.0/")
        .add_embedded_model("author", |p: &Posting| Some(person(p.author)))
        .add_linked_model("reviewer", |p: &Posting| p.reviewer.map(person))
        .add_related_collection::<Person, _, _>("likes", |p| p.id)
        .build()
        .unwrap()
}

fn comment_representor() -> Representor {
    Representor::builder::<Comment>()
        .identifier(|c| c.id)
        .add_type("Comment")
        .add_bidirectional_model(
            "author",
            "comments",
            |c: &Comment| Some(person(c.author)),
            |p: &Person| p.id,
        )
        .build()
        .unwrap()
}

fn registry() -> ResourceRegistry {
    let registry = ResourceRegistry::new();
    registry.register("blog-postings", posting_representor()).unwrap();
    registry.register("people", person_representor()).unwrap();
    registry.register("companies", company_representor()).unwrap();
    registry
}

fn request() -> RequestContext {
    RequestContext::new(ServerUrl::parse("http://localhost/").unwrap())
}

fn write(registry: &ResourceRegistry, request: &RequestContext) -> Vec<Event> {
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(posting(1));
    write_single_model(&model, &mapper, &registry.snapshot(), request).unwrap();
    mapper.events()
}

fn field(path: &str, name: &str, value: serde_json::Value) -> Event {
    Event::Field {
        path: path.to_string(),
        name: name.to_string(),
        value,
    }
}

fn self_url(path: &str, url: &str) -> Event {
    Event::SelfUrl {
        path: path.to_string(),
        url: url.to_string(),
    }
}

fn linked(path: &str, url: &str) -> Event {
    Event::LinkedResource {
        path: path.to_string(),
        url: url.to_string(),
    }
}

fn types(path: &str, types: &[&str]) -> Event {
    Event::Types {
        path: path.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

fn position(events: &[Event], event: &Event) -> usize {
    events
        .iter()
        .position(|e| e == event)
        .unwrap_or_else(|| panic!("missing {:?} in {:#?}", event, events))
}

// --- Single model ---

#[test]
fn test_single_model_protocol_order() {
    let events = write(&registry(), &request());

    assert_eq!(
        events,
        vec![
            Event::Start,
            field("", "headline", json!("Posting 1")),
            field("", "wordCount", json!(250)),
            Event::Link {
                path: String::new(),
                name: "license".to_string(),
                url: "https://creativecommons.org/licenses/by/4.0/".to_string(),
            },
            types("", &["BlogPosting"]),
            self_url("", "http://localhost/p/blog-postings/1"),
            linked("author", "http://localhost/p/people/7"),
            linked("reviewer", "http://localhost/p/people/8"),
            linked("likes", "http://localhost/p/blog-postings/1/likes"),
            Event::Finish,
        ]
    );
}

#[test]
fn test_embedded_models_are_walked_at_their_path() {
    let request = request().with_embedded(Embedded::parse("author,author.worksFor"));
    let events = write(&registry(), &request);

    let expected = [
        field("author", "active", json!(true)),
        field("author", "greeting", json!("Hello")),
        field("author", "name", json!("Person 7")),
        types("author", &["Person"]),
        self_url("author", "http://localhost/p/people/7"),
        field("author", "avatar", json!("http://localhost/b/people/7/avatar")),
        field("author.worksFor", "name", json!("Company 3")),
        types("author.worksFor", &["Organization"]),
        self_url("author.worksFor", "http://localhost/p/companies/3"),
        linked("reviewer", "http://localhost/p/people/8"),
    ];
    let positions: Vec<usize> = expected.iter().map(|e| position(&events, e)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{:#?}", events);
    assert!(!events.contains(&linked("author", "http://localhost/p/people/7")));
}

#[test]
fn test_linked_relation_is_never_embedded() {
    let request = request().with_embedded(|_: &EmbeddedPath, _: &str| true);
    let events = write(&registry(), &request);

    assert!(events.contains(&linked("reviewer", "http://localhost/p/people/8")));
    assert!(!events.iter().any(|event| matches!(
        event,
        Event::Field { path, .. } | Event::SelfUrl { path, .. } if path.starts_with("reviewer")
    )));
    // The embeddable relation was embedded all the way down
    assert!(events.contains(&self_url("author.worksFor", "http://localhost/p/companies/3")));
}

#[test]
fn test_absent_values_are_not_written() {
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(person(7));
    write_single_model(&model, &mapper, &registry().snapshot(), &request()).unwrap();

    assert_eq!(mapper.field_names(""), ["active", "greeting", "name", "avatar"]);
}

#[test]
fn test_absent_binary_has_no_url() {
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(person(8));
    write_single_model(&model, &mapper, &registry().snapshot(), &request()).unwrap();

    assert_eq!(mapper.field_names(""), ["active", "greeting", "name"]);
    assert!(!mapper.events().iter().any(|event| matches!(
        event,
        Event::Field { value, .. } if value.as_str().is_some_and(|url| url.contains("/b/"))
    )));
}

#[test]
fn test_field_selection_filters_fields_links_and_relations() {
    let request =
        request().with_fields(Fields::all().with("BlogPosting", ["headline", "author"]));
    let events = write(&registry(), &request);

    assert_eq!(
        events,
        vec![
            Event::Start,
            field("", "headline", json!("Posting 1")),
            types("", &["BlogPosting"]),
            self_url("", "http://localhost/p/blog-postings/1"),
            linked("author", "http://localhost/p/people/7"),
            Event::Finish,
        ]
    );
}

#[test]
fn test_field_selection_applies_to_embedded_types() {
    let request = request()
        .with_fields(Fields::all().with("Person", ["name"]))
        .with_embedded(Embedded::parse("author"));
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(posting(1));
    write_single_model(&model, &mapper, &registry().snapshot(), &request).unwrap();

    assert_eq!(mapper.field_names("author"), ["name"]);
    assert_eq!(mapper.field_names(""), ["headline", "wordCount"]);
}

#[test]
fn test_localized_fields_follow_language() {
    let request = request().with_language(Language::new(["es-AR"]));
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(person(7));
    write_single_model(&model, &mapper, &registry().snapshot(), &request).unwrap();

    assert!(mapper.events().contains(&field("", "greeting", json!("Hola"))));
}

#[test]
fn test_back_collection_follows_registration() {
    let registry = registry();
    registry.register("comments", comment_representor()).unwrap();

    let mapper = RecordingMapper::new();
    let model = SingleModel::new(person(7));
    write_single_model(&model, &mapper, &registry.snapshot(), &request()).unwrap();
    assert!(mapper
        .events()
        .contains(&linked("comments", "http://localhost/p/people/7/comments")));

    registry.unregister::<Comment>();
    mapper.clear();
    write_single_model(&model, &mapper, &registry.snapshot(), &request()).unwrap();
    assert!(!mapper
        .events()
        .iter()
        .any(|event| matches!(event, Event::LinkedResource { path, .. } if path == "comments")));
}

#[test]
fn test_related_model_without_representor_is_skipped() {
    let registry = ResourceRegistry::new();
    registry.register("people", person_representor()).unwrap();

    let request = request().with_embedded(Embedded::parse("worksFor"));
    let mapper = RecordingMapper::new();
    let model = SingleModel::new(person(7));
    write_single_model(&model, &mapper, &registry.snapshot(), &request).unwrap();

    assert!(!mapper.events().iter().any(|event| match event {
        Event::Field { path, .. } | Event::LinkedResource { path, .. } => path == "worksFor",
        _ => false,
    }));
}

#[test]
fn test_embedded_model_without_route_has_no_self_url() {
    let registry = ResourceRegistry::new();
    registry.register("people", person_representor()).unwrap();
    registry.register_representor(company_representor());

    let request = request().with_embedded(Embedded::parse("worksFor"));
    let mapper = RecordingMapper::new();
    write_single_model(
        &SingleModel::new(person(7)),
        &mapper,
        &registry.snapshot(),
        &request,
    )
    .unwrap();

    assert_eq!(mapper.field_names("worksFor"), ["name"]);
    assert!(!mapper
        .events()
        .iter()
        .any(|event| matches!(event, Event::SelfUrl { path, .. } if path == "worksFor")));
}

#[test]
fn test_unregistered_root_type_fails() {
    let mapper = RecordingMapper::new();
    let err = write_single_model(
        &SingleModel::new(company(3)),
        &mapper,
        &ResourceRegistry::new().snapshot(),
        &request(),
    )
    .unwrap_err();
    assert!(matches!(err, WriterError::MustHaveRepresentor(model) if model == "Company"));
}

#[test]
fn test_root_without_route_is_unresolvable() {
    let registry = ResourceRegistry::new();
    registry.register_representor(company_representor());

    let mapper = RecordingMapper::new();
    let err = write_single_model(
        &SingleModel::new(company(3)),
        &mapper,
        &registry.snapshot(),
        &request(),
    )
    .unwrap_err();
    assert!(matches!(err, WriterError::UnresolvableUri(model) if model == "Company"));
    // No on_finish: the write was aborted
    assert!(!mapper.events().contains(&Event::Finish));
}

// --- Pages ---

fn page_events(postings: Vec<Posting>, total: usize, pagination: Pagination) -> Vec<Event> {
    let mapper = RecordingMapper::new();
    let page = Page::new(PageItems::new(postings, total), pagination);
    write_page(&page, &mapper, &registry().snapshot(), &request()).unwrap();
    mapper.events()
}

fn page_url(kind: PageUrlKind, page: usize, per_page: usize) -> Event {
    Event::PageUrl {
        kind,
        url: format!(
            "http://localhost/p/blog-postings?page={}&per_page={}",
            page, per_page
        ),
    }
}

#[test]
fn test_page_protocol_order() {
    let events = page_events(vec![posting(3), posting(4)], 5, Pagination::new(2, 2));

    let items: Vec<&Event> = events
        .iter()
        .filter(|e| matches!(e, Event::StartItem(_) | Event::FinishItem(_)))
        .collect();
    assert_eq!(
        items,
        [
            &Event::StartItem("Posting".to_string()),
            &Event::FinishItem("Posting".to_string()),
            &Event::StartItem("Posting".to_string()),
            &Event::FinishItem("Posting".to_string()),
        ]
    );
    assert!(
        position(&events, &self_url("", "http://localhost/p/blog-postings/3"))
            < position(&events, &self_url("", "http://localhost/p/blog-postings/4"))
    );

    let last_item = events
        .iter()
        .rposition(|e| matches!(e, Event::FinishItem(_)))
        .unwrap();
    assert_eq!(
        events[last_item + 1..],
        [
            Event::TotalCount(5),
            Event::PageCount(2),
            page_url(PageUrlKind::Current, 2, 2),
            page_url(PageUrlKind::First, 1, 2),
            page_url(PageUrlKind::Previous, 1, 2),
            page_url(PageUrlKind::Next, 3, 2),
            page_url(PageUrlKind::Last, 3, 2),
            Event::CollectionUrl("http://localhost/p/blog-postings".to_string()),
            Event::Finish,
        ]
    );
}

#[test]
fn test_empty_page() {
    let events = page_events(Vec::new(), 0, Pagination::new(1, 10));

    assert_eq!(
        events,
        vec![
            Event::Start,
            Event::TotalCount(0),
            Event::PageCount(0),
            page_url(PageUrlKind::Current, 1, 10),
            page_url(PageUrlKind::First, 1, 10),
            page_url(PageUrlKind::Last, 1, 10),
            Event::CollectionUrl("http://localhost/p/blog-postings".to_string()),
            Event::Finish,
        ]
    );
}

#[test]
fn test_page_of_unregistered_type_fails() {
    let mapper = RecordingMapper::new();
    let page = Page::new(PageItems::new(vec![company(1)], 1), Pagination::default());

    let err = write_page(&page, &mapper, &ResourceRegistry::new().snapshot(), &request())
        .unwrap_err();
    assert!(matches!(err, WriterError::MustHaveRepresentor(_)));
    assert!(mapper.events().is_empty());
}

// --- Response writer ---

#[test]
fn test_response_writer_selects_mapper_by_media_type() {
    let mapper = RecordingMapper::new();
    let writer = ResponseWriter::new(
        Arc::new(registry()),
        Arc::new(MessageMapperRegistry::new().with_single_model_mapper(mapper.clone())),
    );
    let model = SingleModel::new(posting(1));

    writer
        .write_single_model(RECORDING_MEDIA_TYPE, &model, &request())
        .unwrap();
    assert_eq!(mapper.events().first(), Some(&Event::Start));

    let err = writer
        .write_single_model("application/hal+json", &model, &request())
        .unwrap_err();
    assert!(matches!(err, WriterError::MustHaveMessageMapper { .. }));

    let err = writer
        .write_page(
            RECORDING_MEDIA_TYPE,
            &Page::new(PageItems::new(vec![posting(1)], 1), Pagination::default()),
            &request(),
        )
        .unwrap_err();
    assert!(matches!(err, WriterError::MustHaveMessageMapper { .. }));
}
