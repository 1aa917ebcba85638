use hypermedia_formats::{
    default_mappers, json_ld, problem_json, JsonLdErrorMapper, JsonLdPageMapper,
    JsonLdSingleModelMapper, ProblemJsonErrorMapper,
};
use hypermedia_framework::{
    write_error, write_page, write_single_model, ApiError, ErrorMessageMapper, JsonObjectBuilder,
    Page, PageItems, Pagination, Representor, RequestContext, ResourceRegistry, ResponseWriter,
    ServerUrl, SingleModel,
};
use rstest::rstest;
use serde_json::{json, Value};
use std::sync::Arc;

struct Recipe {
    id: u32,
    name: String,
    servings: u32,
    vegetarian: bool,
}

fn recipe(id: u32) -> Recipe {
    Recipe {
        id,
        name: format!("Recipe {}", id),
        servings: 4,
        vegetarian: id % 2 == 0,
    }
}

fn registry() -> ResourceRegistry {
    let registry = ResourceRegistry::new();
    registry
        .register(
            "recipes",
            Representor::builder::<Recipe>()
                .identifier(|recipe| recipe.id)
                .add_type("Recipe")
                .add_type("CreativeWork")
                .add_boolean("vegetarian", |recipe| recipe.vegetarian)
                .add_string("name", |recipe| recipe.name.clone())
                .add_number("recipeYield", |recipe| recipe.servings)
                .add_link("license", "https://creativecommons.org/licenses/by/4.0/")
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
}

fn request() -> RequestContext {
    RequestContext::new(ServerUrl::parse("http://localhost:8080").unwrap())
}

fn api_error() -> ApiError {
    ApiError::new("A title", "A type", 404).with_description("A description")
}

fn parse(document: String) -> Value {
    serde_json::from_str(&document).unwrap()
}

#[test]
fn test_single_model() {
    let model = SingleModel::new(recipe(2));

    let document = parse(
        write_single_model(&model, &JsonLdSingleModelMapper, &registry().snapshot(), &request())
            .unwrap(),
    );

    assert_eq!(
        document,
        json!({
            "@context": {
                "@vocab": "http://schema.org/",
                "license": { "@type": "@id" }
            },
            "vegetarian": true,
            "name": "Recipe 2",
            "recipeYield": 4,
            "license": "https://creativecommons.org/licenses/by/4.0/",
            "@type": ["Recipe", "CreativeWork"],
            "@id": "http://localhost:8080/p/recipes/2"
        })
    );
}

#[test]
fn test_hydra_collection() {
    let page = Page::new(
        PageItems::new(vec![recipe(1), recipe(2)], 5),
        Pagination::new(1, 2),
    );

    let document = parse(
        write_page(&page, &JsonLdPageMapper, &registry().snapshot(), &request()).unwrap(),
    );

    assert_eq!(document["@type"], json!(["Collection"]));
    assert_eq!(document["@id"], "http://localhost:8080/p/recipes");
    assert_eq!(document["totalItems"], 5);
    assert_eq!(document["numberOfItems"], 2);
    assert_eq!(
        document["view"],
        json!({
            "@id": "http://localhost:8080/p/recipes?page=1&per_page=2",
            "@type": "PartialCollectionView",
            "first": "http://localhost:8080/p/recipes?page=1&per_page=2",
            "next": "http://localhost:8080/p/recipes?page=2&per_page=2",
            "last": "http://localhost:8080/p/recipes?page=3&per_page=2"
        })
    );

    let members = document["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["@id"], "http://localhost:8080/p/recipes/1");
    assert_eq!(members[1]["name"], "Recipe 2");
}

#[test]
fn test_empty_hydra_collection_has_empty_members() {
    let page: Page<Recipe> = Page::new(PageItems::new(Vec::new(), 0), Pagination::new(1, 2));

    let document = parse(
        write_page(&page, &JsonLdPageMapper, &registry().snapshot(), &request()).unwrap(),
    );

    assert_eq!(document["members"], json!([]));
    assert_eq!(document["numberOfItems"], 0);
}

#[test]
fn test_error_document_has_exactly_four_members() {
    let document = parse(write_error(&api_error(), &JsonLdErrorMapper, &request()).unwrap());

    assert_eq!(
        document,
        json!({
            "description": "A description",
            "title": "A title",
            "@type": "A type",
            "statusCode": 404
        })
    );
}

#[test]
fn test_problem_details() {
    let document = parse(write_error(&api_error(), &ProblemJsonErrorMapper, &request()).unwrap());

    assert_eq!(
        document,
        json!({ "detail": "A description", "title": "A title", "type": "A type", "status": 404 })
    );
}

/// Adds envelope members only when the request carries the matching header.
struct EnvelopeErrorMapper;

impl ErrorMessageMapper for EnvelopeErrorMapper {
    fn media_type(&self) -> &str {
        json_ld::MEDIA_TYPE
    }

    fn on_start(
        &self,
        builder: &mut JsonObjectBuilder,
        _error: &ApiError,
        request: &RequestContext,
    ) {
        if request.header("X-Start").is_some() {
            builder.field("start").value("true");
        }
    }

    fn on_finish(
        &self,
        builder: &mut JsonObjectBuilder,
        _error: &ApiError,
        request: &RequestContext,
    ) {
        if request.header("X-End").is_some() {
            builder.field("end").value("true");
        }
    }

    fn map_title(&self, builder: &mut JsonObjectBuilder, title: &str) {
        JsonLdErrorMapper.map_title(builder, title);
    }

    fn map_description(&self, builder: &mut JsonObjectBuilder, description: &str) {
        JsonLdErrorMapper.map_description(builder, description);
    }

    fn map_type(&self, builder: &mut JsonObjectBuilder, error_type: &str) {
        JsonLdErrorMapper.map_type(builder, error_type);
    }

    fn map_status_code(&self, builder: &mut JsonObjectBuilder, status_code: u16) {
        JsonLdErrorMapper.map_status_code(builder, status_code);
    }
}

#[rstest]
#[case::no_headers(&[], &[])]
#[case::start(&["X-Start"], &["start"])]
#[case::end(&["X-End"], &["end"])]
#[case::both(&["X-Start", "X-End"], &["start", "end"])]
fn test_error_hooks_follow_request_headers(#[case] headers: &[&str], #[case] extra: &[&str]) {
    let request = headers
        .iter()
        .fold(request(), |request, header| request.with_header(header, "true"));

    let document = parse(write_error(&api_error(), &EnvelopeErrorMapper, &request).unwrap());

    let keys: Vec<&str> = document
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = vec!["description", "title", "@type", "statusCode"];
    if extra.contains(&"start") {
        expected.insert(0, "start");
    }
    if extra.contains(&"end") {
        expected.push("end");
    }
    assert_eq!(keys, expected);
}

#[rstest]
#[case(json_ld::MEDIA_TYPE, "@type")]
#[case(problem_json::MEDIA_TYPE, "type")]
fn test_response_writer_negotiates_error_format(
    #[case] media_type: &str,
    #[case] type_key: &str,
) {
    let writer = ResponseWriter::new(Arc::new(registry()), Arc::new(default_mappers()));

    let document = parse(writer.write_error(media_type, &api_error(), &request()).unwrap());

    assert_eq!(document[type_key], "A type");
}

#[test]
fn test_response_writer_rejects_unknown_media_type() {
    let writer = ResponseWriter::new(Arc::new(registry()), Arc::new(default_mappers()));

    let result = writer.write_single_model("text/html", &SingleModel::new(recipe(1)), &request());

    assert!(result.is_err());
}
