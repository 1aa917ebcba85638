//! # Request Context
//!
//! Everything a write needs to know about the request it answers: the server URL
//! used to build absolute links, the field and embedding selections, the accepted
//! languages and the raw request headers (mappers may look at them in their
//! lifecycle hooks).
//!
//! ```rust
//! use hypermedia_framework::{RequestContext, ServerUrl};
//!
//! let server_url = ServerUrl::parse("https://blog.example.com/").unwrap();
//! let request = RequestContext::from_query(server_url, "fields[Person]=name&embedded=creator")
//!     .with_accept_language("es-ES, en;q=0.8");
//!
//! assert!(!request.fields().allows("Person", "email"));
//! assert_eq!(request.language().preferred_locale(), Some("es-ES"));
//! ```

use crate::embedded::{Embedded, EmbeddedSelection};
use crate::fields::{FieldSelection, Fields};
use crate::language::Language;
use crate::uri::ServerUrl;
use std::collections::HashMap;
use std::fmt;

pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Per-request collaborators of a write.
pub struct RequestContext {
    server_url: ServerUrl,
    fields: Box<dyn FieldSelection>,
    embedded: Box<dyn EmbeddedSelection>,
    language: Language,
    headers: HashMap<String, String>,
}

impl RequestContext {
    /// A context that writes every field, embeds nothing and prefers English.
    pub fn new(server_url: ServerUrl) -> Self {
        Self {
            server_url,
            fields: Box::new(Fields::all()),
            embedded: Box::new(Embedded::none()),
            language: Language::default(),
            headers: HashMap::new(),
        }
    }

    /// Builds the selections from a raw query string.
    ///
    /// `fields[Type]=a,b` restricts the fields of `Type`; `embedded=a,a.b` lists the
    /// relation paths to embed. Other parameters are ignored.
    pub fn from_query(server_url: ServerUrl, query: &str) -> Self {
        let mut fields = Fields::all();
        let mut embedded = Vec::new();
        let query = query.trim_start_matches('?');
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == "embedded" {
                embedded.push(value.into_owned());
            } else if let Some((type_name, names)) = Fields::parse_param(&key, &value) {
                fields = fields.with(type_name, names);
            }
        }
        Self::new(server_url)
            .with_fields(fields)
            .with_embedded(Embedded::parse(&embedded.join(",")))
    }

    pub fn with_fields(mut self, fields: impl FieldSelection + 'static) -> Self {
        self.fields = Box::new(fields);
        self
    }

    pub fn with_embedded(mut self, embedded: impl EmbeddedSelection + 'static) -> Self {
        self.embedded = Box::new(embedded);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Records the `Accept-Language` header and derives the language from it.
    pub fn with_accept_language(self, header: &str) -> Self {
        let language = Language::from_accept_language(header);
        self.with_header(ACCEPT_LANGUAGE, header)
            .with_language(language)
    }

    /// Adds a request header. Names are case-insensitive.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    pub fn fields(&self) -> &dyn FieldSelection {
        self.fields.as_ref()
    }

    pub fn embedded(&self) -> &dyn EmbeddedSelection {
        self.embedded.as_ref()
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("server_url", &self.server_url)
            .field("language", &self.language)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded_path::EmbeddedPath;

    fn server_url() -> ServerUrl {
        ServerUrl::parse("https://blog.example.com").unwrap()
    }

    #[test]
    fn test_defaults() {
        let request = RequestContext::new(server_url());
        assert!(request.fields().allows("Person", "email"));
        assert!(!request
            .embedded()
            .should_embed(&EmbeddedPath::root(), "creator"));
        assert_eq!(request.language().preferred_locale(), Some("en"));
    }

    #[test]
    fn test_from_query() {
        let request = RequestContext::from_query(
            server_url(),
            "?fields%5BPerson%5D=name,jobTitle&embedded=creator&embedded=creator.company&page=2",
        );
        assert!(request.fields().allows("Person", "jobTitle"));
        assert!(!request.fields().allows("Person", "email"));
        assert!(request.fields().allows("BlogPosting", "headline"));

        let root = EmbeddedPath::root();
        assert!(request.embedded().should_embed(&root, "creator"));
        assert!(request
            .embedded()
            .should_embed(&root.push("creator"), "company"));
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let request = RequestContext::new(server_url())
            .with_header("X-Start", "true")
            .with_accept_language("pt-BR");
        assert_eq!(request.header("x-start"), Some("true"));
        assert_eq!(request.header("Accept-Language"), Some("pt-BR"));
        assert_eq!(request.language().locales(), ["pt-BR"]);
    }
}
