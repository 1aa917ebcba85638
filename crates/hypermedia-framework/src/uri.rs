//! # Paths and URLs
//!
//! A [`Path`] is the canonical location of one resource: its collection name and
//! its identifier. All absolute URLs are derived from a `Path` and the
//! [`ServerUrl`] of the current request:
//!
//! | URL                 | Shape                                      |
//! |---------------------|--------------------------------------------|
//! | single resource     | `{server}/p/{name}/{id}`                   |
//! | related collection  | `{server}/p/{name}/{id}/{relation}`        |
//! | binary resource     | `{server}/b/{name}/{id}/{binary}`          |
//! | collection          | `{server}/p/{name}`                        |
//! | collection page     | `{server}/p/{name}?page={n}&per_page={m}`  |

use crate::error::Result;
use std::fmt;
use url::Url;

/// Immutable (resource name, identifier) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    name: String,
    id: String,
}

impl Path {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `/{name}/{id}`
    pub fn as_uri(&self) -> String {
        format!("/{}/{}", self.name, self.id)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_uri())
    }
}

/// Base URL of the server answering the current request, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Parses and normalizes a server URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut url = Url::parse(raw)?;
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url.as_str().trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn create_single_url(server_url: &ServerUrl, path: &Path) -> String {
    format!("{}/p{}", server_url, path.as_uri())
}

pub fn create_related_collection_url(server_url: &ServerUrl, path: &Path, name: &str) -> String {
    format!("{}/p{}/{}", server_url, path.as_uri(), name)
}

pub fn create_binary_url(server_url: &ServerUrl, binary_id: &str, path: &Path) -> String {
    format!("{}/b{}/{}", server_url, path.as_uri(), binary_id)
}

pub fn create_collection_url(server_url: &ServerUrl, name: &str) -> String {
    format!("{}/p/{}", server_url, name)
}

pub fn create_page_url(collection_url: &str, page_number: usize, items_per_page: usize) -> String {
    format!(
        "{}?page={}&per_page={}",
        collection_url, page_number, items_per_page
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> ServerUrl {
        ServerUrl::parse("http://localhost:8080/").unwrap()
    }

    #[test]
    fn test_server_url_drops_trailing_slash() {
        assert_eq!(server().as_str(), "http://localhost:8080");
        assert!(ServerUrl::parse("not a url").is_err());
    }

    #[test]
    fn test_server_url_drops_query_and_fragment() {
        let server = ServerUrl::parse("http://localhost:8080/api/?debug=1#top").unwrap();
        assert_eq!(server.as_str(), "http://localhost:8080/api");
        assert_eq!(
            create_collection_url(&server, "people"),
            "http://localhost:8080/api/p/people"
        );
    }

    #[test]
    fn test_resource_urls() {
        let path = Path::new("blog-postings", "7");
        assert_eq!(
            create_single_url(&server(), &path),
            "http://localhost:8080/p/blog-postings/7"
        );
        assert_eq!(
            create_related_collection_url(&server(), &path, "comments"),
            "http://localhost:8080/p/blog-postings/7/comments"
        );
        assert_eq!(
            create_binary_url(&server(), "cover", &path),
            "http://localhost:8080/b/blog-postings/7/cover"
        );
    }

    #[test]
    fn test_page_url() {
        let collection = create_collection_url(&server(), "people");
        assert_eq!(collection, "http://localhost:8080/p/people");
        assert_eq!(
            create_page_url(&collection, 2, 10),
            "http://localhost:8080/p/people?page=2&per_page=10"
        );
    }
}
