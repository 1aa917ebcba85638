use chrono::{DateTime, Utc};
use hypermedia_framework::LocalizedText;

/// An article of the blog.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPosting {
    pub id: u64,
    pub headline: String,
    /// Subtitle, translated per locale.
    pub alternative_headline: LocalizedText,
    pub article_body: String,
    pub creator_id: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl BlogPosting {
    pub fn word_count(&self) -> usize {
        self.article_body.split_whitespace().count()
    }
}

/// Payload for creating a new blog posting.
#[derive(Debug, Clone)]
pub struct BlogPostingCreate {
    pub headline: String,
    pub alternative_headline: LocalizedText,
    pub article_body: String,
    pub creator_id: u64,
}
