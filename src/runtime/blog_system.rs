use crate::error::BlogError;
use crate::model::{BlogPostingCreate, Comment, CommentCreate, Person, PersonCreate};
use crate::resources::{self, comment};
use crate::runtime::Config;
use crate::store::BlogStore;
use chrono::NaiveDate;
use hypermedia_formats::default_mappers;
use hypermedia_framework::{
    ApiError, BinaryFile, LocalizedText, Page, PageItems, Pagination, RequestContext,
    ResourceRegistry, ResponseWriter, ServerUrl, SingleModel,
};
use std::any::Any;
use std::sync::Arc;
use tracing::{error, info, warn};

/// A rendered answer: status code, media type and document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub media_type: String,
    pub body: String,
}

/// The blog application: storage, resource descriptions and formats wired together.
///
/// `BlogSystem` is cheap to share behind an `Arc`; every method takes `&self` and
/// requests may be answered from any number of tasks at once, even while the
/// comment resource is being unregistered or registered again.
///
/// # Example
///
/// ```ignore
/// let system = BlogSystem::new(Config::from_env()?)?;
/// let request = system.request("embedded=creator");
/// let response = system.blog_postings(None, system.pagination(None, None), &request);
/// ```
pub struct BlogSystem {
    config: Config,
    server_url: ServerUrl,
    store: Arc<BlogStore>,
    writer: ResponseWriter,
}

impl BlogSystem {
    /// Creates the store, registers every resource and loads the formats.
    pub fn new(config: Config) -> Result<Self, BlogError> {
        let server_url = ServerUrl::parse(&config.server_url)
            .map_err(|e| BlogError::Config(format!("server_url: {}", e)))?;
        let store = Arc::new(BlogStore::new());
        let registry = Arc::new(ResourceRegistry::new());
        resources::register_all(&registry, &store)?;
        let writer = ResponseWriter::new(registry, Arc::new(default_mappers()));

        info!(
            server_url = %server_url,
            media_types = ?writer.mappers().media_types(),
            "Blog system ready"
        );
        Ok(Self {
            config,
            server_url,
            store,
            writer,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<BlogStore> {
        &self.store
    }

    pub fn resources(&self) -> &Arc<ResourceRegistry> {
        self.writer.resources()
    }

    /// Request context for a raw query string (`fields[Type]=...`, `embedded=...`).
    pub fn request(&self, query: &str) -> RequestContext {
        RequestContext::from_query(self.server_url.clone(), query)
    }

    /// Requested pagination with the configured default and maximum page size.
    pub fn pagination(&self, page: Option<usize>, per_page: Option<usize>) -> Pagination {
        let per_page = per_page
            .unwrap_or(self.config.default_per_page)
            .min(self.config.max_per_page);
        Pagination::new(page.unwrap_or(1), per_page)
    }

    pub fn blog_postings(
        &self,
        media_type: Option<&str>,
        pagination: Pagination,
        request: &RequestContext,
    ) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            let page = fetch_page(pagination, |p| self.store.blog_postings(p));
            Ok(self.writer.write_page(media_type, &page, request)?)
        });
        self.respond(media_type, result, request)
    }

    pub fn people(
        &self,
        media_type: Option<&str>,
        pagination: Pagination,
        request: &RequestContext,
    ) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            let page = fetch_page(pagination, |p| self.store.people(p));
            Ok(self.writer.write_page(media_type, &page, request)?)
        });
        self.respond(media_type, result, request)
    }

    pub fn blog_posting(
        &self,
        media_type: Option<&str>,
        id: u64,
        request: &RequestContext,
    ) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            let posting = self.store.blog_posting(id).ok_or(BlogError::NotFound {
                collection: resources::BLOG_POSTINGS,
                id,
            })?;
            Ok(self
                .writer
                .write_single_model(media_type, &SingleModel::new(posting), request)?)
        });
        self.respond(media_type, result, request)
    }

    pub fn person(&self, media_type: Option<&str>, id: u64, request: &RequestContext) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            let person = self.store.person(id).ok_or(BlogError::NotFound {
                collection: resources::PEOPLE,
                id,
            })?;
            Ok(self
                .writer
                .write_single_model(media_type, &SingleModel::new(person), request)?)
        });
        self.respond(media_type, result, request)
    }

    /// A single comment. Not found while comments are disabled.
    pub fn comment(&self, media_type: Option<&str>, id: u64, request: &RequestContext) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            let not_found = BlogError::NotFound {
                collection: resources::COMMENTS,
                id,
            };
            if self.resources().snapshot().representor_of::<Comment>().is_none() {
                return Err(not_found);
            }
            let comment = self.store.comment(id).ok_or(not_found)?;
            Ok(self
                .writer
                .write_single_model(media_type, &SingleModel::new(comment), request)?)
        });
        self.respond(media_type, result, request)
    }

    /// Content behind a person's binary URL (`/b/people/{id}/{key}`).
    pub fn person_binary(&self, id: u64, key: &str) -> Option<BinaryFile> {
        let person = self.store.person(id)?;
        let resources = self.resources().snapshot();
        let binary = resources.representor_of::<Person>()?.binary(key)?;
        binary.extract(&person)
    }

    /// The `comments` collection of a blog posting.
    pub fn comments_of_posting(
        &self,
        media_type: Option<&str>,
        blog_posting_id: u64,
        pagination: Pagination,
        request: &RequestContext,
    ) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            if self.store.blog_posting(blog_posting_id).is_none() {
                return Err(BlogError::NotFound {
                    collection: resources::BLOG_POSTINGS,
                    id: blog_posting_id,
                });
            }
            let page: Page<Comment> = fetch_page(pagination, |p| {
                self.store.comments_of_posting(blog_posting_id, p)
            });
            Ok(self.writer.write_page(media_type, &page, request)?)
        });
        self.respond(media_type, result, request)
    }

    /// The `comments` collection of a person, present while comments are registered.
    pub fn comments_by(
        &self,
        media_type: Option<&str>,
        author_id: u64,
        pagination: Pagination,
        request: &RequestContext,
    ) -> Response {
        let media_type = self.media_type(media_type);
        let result = self.negotiate(media_type).and_then(|()| {
            if self.store.person(author_id).is_none() {
                return Err(BlogError::NotFound {
                    collection: resources::PEOPLE,
                    id: author_id,
                });
            }
            let page = fetch_page(pagination, |p| self.store.comments_by(author_id, p));
            Ok(self.writer.write_page(media_type, &page, request)?)
        });
        self.respond(media_type, result, request)
    }

    /// Stops representing comments. Documents written afterwards link neither to
    /// comments nor to the `comments` collections they added.
    pub fn disable_comments(&self) -> bool {
        self.resources().unregister::<Comment>()
    }

    pub fn enable_comments(&self) -> Result<(), BlogError> {
        let representor = comment::representor(Arc::clone(&self.store))?;
        self.resources().register(resources::COMMENTS, representor)?;
        Ok(())
    }

    /// Fills the store with a few people, postings and comments.
    pub fn seed(&self) -> Result<(), BlogError> {
        let ada = self.store.add_person(
            PersonCreate::new("Ada Lovelace")
                .with_email("ada@example.com")
                .with_job_title("Analyst")
                .with_birth_date(NaiveDate::from_ymd_opt(1815, 12, 10).unwrap_or_default()),
        );
        let grace = self
            .store
            .add_person(PersonCreate::new("Grace Hopper").with_job_title("Rear admiral"));
        self.store.set_avatar(ada.id, vec![0x89, b'P', b'N', b'G'])?;

        let postings = [
            ("Notes on the engine", "Notas sobre la máquina", ada.id),
            ("The first bug", "El primer error", grace.id),
            ("Compilers for everyone", "Compiladores para todos", grace.id),
        ];
        for (headline, spanish, creator_id) in postings {
            let posting = self.store.add_blog_posting(BlogPostingCreate {
                headline: headline.to_string(),
                alternative_headline: LocalizedText::new("en", headline).with("es", spanish),
                article_body: format!("<p>{}</p>", headline),
                creator_id,
            })?;
            self.store.add_comment(CommentCreate {
                blog_posting_id: posting.id,
                author_id: if creator_id == ada.id { grace.id } else { ada.id },
                text: format!("Thoughts on \"{}\"", headline),
            })?;
        }
        info!("Sample data loaded");
        Ok(())
    }

    fn media_type<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(&self.config.default_media_type)
    }

    fn negotiate(&self, media_type: &str) -> Result<(), BlogError> {
        if self.writer.mappers().media_types().contains(&media_type) {
            Ok(())
        } else {
            Err(BlogError::NotAcceptable(media_type.to_string()))
        }
    }

    /// Turns the outcome of a write into a response, rendering failures as error
    /// documents in the requested media type or, failing that, the error media type.
    fn respond(
        &self,
        media_type: &str,
        result: Result<String, BlogError>,
        request: &RequestContext,
    ) -> Response {
        let err = match result {
            Ok(body) => {
                return Response {
                    status: 200,
                    media_type: media_type.to_string(),
                    body,
                }
            }
            Err(err) => err,
        };

        let api_error = ApiError::from(&err);
        if api_error.is_server_error() {
            error!(error = %err, media_type, "Request failed");
        } else {
            warn!(error = %err, media_type, "Request rejected");
        }

        for candidate in [media_type, self.config.error_media_type.as_str()] {
            if let Ok(body) = self.writer.write_error(candidate, &api_error, request) {
                return Response {
                    status: api_error.status_code,
                    media_type: candidate.to_string(),
                    body,
                };
            }
        }
        Response {
            status: api_error.status_code,
            media_type: "text/plain".to_string(),
            body: api_error.title,
        }
    }
}

/// Loads the requested page. A page past the end is answered with the last page.
fn fetch_page<T: Any>(
    pagination: Pagination,
    fetch: impl Fn(&Pagination) -> PageItems<T>,
) -> Page<T> {
    let page = Page::new(fetch(&pagination), pagination);
    if page.page_number() == pagination.page() {
        return page;
    }
    let last = Pagination::new(page.page_number(), pagination.per_page());
    Page::new(fetch(&last), last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> BlogSystem {
        let system = BlogSystem::new(Config::default()).unwrap();
        system.seed().unwrap();
        system
    }

    #[test]
    fn test_pagination_is_clamped() {
        let system = system();
        let pagination = system.pagination(Some(2), Some(1_000));
        assert_eq!(pagination.page(), 2);
        assert_eq!(pagination.per_page(), 100);
        assert_eq!(system.pagination(None, None).per_page(), 30);
    }

    #[test]
    fn test_invalid_server_url() {
        let config = Config {
            server_url: "no scheme".to_string(),
            ..Config::default()
        };
        assert!(matches!(BlogSystem::new(config), Err(BlogError::Config(_))));
    }

    #[test]
    fn test_missing_posting_is_a_problem_document() {
        let system = system();
        let response = system.blog_posting(None, 999, &system.request(""));
        assert_eq!(response.status, 404);
        // HAL has no error format
        assert_eq!(response.media_type, "application/problem+json");
        assert!(response.body.contains("blog-postings 999 not found"));
    }

    #[test]
    fn test_page_past_end_loads_last_page() {
        let system = system();
        let page = fetch_page(system.pagination(Some(99), Some(2)), |p| {
            system.store().blog_postings(p)
        });
        assert_eq!(page.page_number(), 2);
        assert_eq!(page.items().len(), 1);
        assert!(!page.has_next());
    }

    #[test]
    fn test_person_binary() {
        let system = system();
        let image = system.person_binary(1, "image").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert!(system.person_binary(2, "image").is_none());
        assert!(system.person_binary(1, "cover").is_none());
        assert!(system.person_binary(99, "image").is_none());
    }

    #[test]
    fn test_comment_is_not_found_while_disabled() {
        let system = system();
        assert_eq!(system.comment(None, 4, &system.request("")).status, 200);
        system.disable_comments();
        assert_eq!(system.comment(None, 4, &system.request("")).status, 404);
    }

    #[test]
    fn test_unknown_media_type_is_not_acceptable() {
        let system = system();
        let response = system.blog_postings(
            Some("text/html"),
            Pagination::default(),
            &system.request(""),
        );
        assert_eq!(response.status, 406);
    }
}
