use hypermedia_formats::{HalPageMapper, HalSingleModelMapper};
use hypermedia_framework::{
    write_page, write_single_model, Embedded, Page, PageItems, Pagination, Representor,
    RequestContext, ResourceRegistry, Resources, ServerUrl, SingleModel,
};
use serde_json::{json, Value};
use std::sync::Arc;

struct Article {
    id: u32,
    title: String,
    editor: Option<u32>,
}

struct Editor {
    id: u32,
    name: String,
    email: Option<String>,
}

fn article(id: u32, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        editor: Some(5),
    }
}

fn resources() -> Arc<Resources> {
    let registry = ResourceRegistry::new();
    registry
        .register(
            "articles",
            Representor::builder::<Article>()
                .identifier(|article| article.id)
                .add_type("Article")
                .add_string("title", |article| article.title.clone())
                .build()
                .unwrap(),
        )
        .unwrap();
    registry.snapshot()
}

fn resources_with_editor() -> Arc<Resources> {
    let registry = ResourceRegistry::new();
    registry
        .register(
            "articles",
            Representor::builder::<Article>()
                .identifier(|article| article.id)
                .add_type("Article")
                .add_string("title", |article| article.title.clone())
                .add_embedded_model("editor", |article: &Article| {
                    article.editor.map(|id| Editor {
                        id,
                        name: format!("Editor {}", id),
                        email: None,
                    })
                })
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
        .register(
            "editors",
            Representor::builder::<Editor>()
                .identifier(|editor| editor.id)
                .add_type("Person")
                .add_string("name", |editor| editor.name.clone())
                .add_string("email", |editor| editor.email.clone())
                .build()
                .unwrap(),
        )
        .unwrap();
    registry.snapshot()
}

fn request() -> RequestContext {
    RequestContext::new(ServerUrl::parse("http://localhost:8080").unwrap())
}

fn parse(document: String) -> Value {
    serde_json::from_str(&document).unwrap()
}

#[test]
fn test_page_of_one_item() {
    let page = Page::new(
        PageItems::new(vec![article(1, "A")], 1),
        Pagination::new(1, 10),
    );

    let document = parse(write_page(&page, &HalPageMapper, &resources(), &request()).unwrap());

    assert_eq!(
        document,
        json!({
            "_embedded": {
                "Article": [
                    {
                        "title": "A",
                        "_links": { "self": { "href": "http://localhost:8080/p/articles/1" } }
                    }
                ]
            },
            "total": 1,
            "count": 1,
            "_links": {
                "self": { "href": "http://localhost:8080/p/articles?page=1&per_page=10" },
                "first": { "href": "http://localhost:8080/p/articles?page=1&per_page=10" },
                "last": { "href": "http://localhost:8080/p/articles?page=1&per_page=10" },
                "collection": { "href": "http://localhost:8080/p/articles" }
            }
        })
    );
}

#[test]
fn test_middle_page_links_to_neighbours() {
    let page = Page::new(
        PageItems::new(vec![article(3, "C"), article(4, "D")], 7),
        Pagination::new(2, 2),
    );

    let document = parse(write_page(&page, &HalPageMapper, &resources(), &request()).unwrap());

    let links = &document["_links"];
    assert_eq!(
        links["prev"]["href"],
        "http://localhost:8080/p/articles?page=1&per_page=2"
    );
    assert_eq!(
        links["next"]["href"],
        "http://localhost:8080/p/articles?page=3&per_page=2"
    );
    assert_eq!(
        links["last"]["href"],
        "http://localhost:8080/p/articles?page=4&per_page=2"
    );
    assert_eq!(document["count"], 2);
    assert_eq!(document["total"], 7);
    assert_eq!(document["_embedded"]["Article"].as_array().unwrap().len(), 2);
}

#[test]
fn test_empty_page() {
    let page: Page<Article> = Page::new(PageItems::new(Vec::new(), 0), Pagination::new(1, 10));

    let document = parse(write_page(&page, &HalPageMapper, &resources(), &request()).unwrap());

    assert_eq!(document["count"], 0);
    assert!(document.get("_embedded").is_none());
    assert!(document["_links"].get("first").is_some());
    assert!(document["_links"].get("last").is_some());
}

#[test]
fn test_single_model_with_embedded_editor() {
    let model = SingleModel::new(article(1, "A"));
    let request = request().with_embedded(Embedded::none().with("editor"));

    let document = parse(
        write_single_model(&model, &HalSingleModelMapper, &resources_with_editor(), &request)
            .unwrap(),
    );

    assert_eq!(
        document,
        json!({
            "title": "A",
            "_links": { "self": { "href": "http://localhost:8080/p/articles/1" } },
            "_embedded": {
                "editor": {
                    "name": "Editor 5",
                    "_links": { "self": { "href": "http://localhost:8080/p/editors/5" } }
                }
            }
        })
    );
}

#[test]
fn test_single_model_links_editor_by_default() {
    let model = SingleModel::new(article(1, "A"));

    let document = parse(
        write_single_model(&model, &HalSingleModelMapper, &resources_with_editor(), &request())
            .unwrap(),
    );

    assert_eq!(
        document["_links"]["editor"]["href"],
        "http://localhost:8080/p/editors/5"
    );
    assert!(document.get("_embedded").is_none());
}
