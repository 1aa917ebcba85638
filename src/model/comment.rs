use chrono::{DateTime, Utc};

/// A reader's comment on a blog posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub blog_posting_id: u64,
    pub author_id: u64,
    pub text: String,
    pub created: DateTime<Utc>,
}

/// Payload for creating a new comment.
#[derive(Debug, Clone)]
pub struct CommentCreate {
    pub blog_posting_id: u64,
    pub author_id: u64,
    pub text: String,
}
