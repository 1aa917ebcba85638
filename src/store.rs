//! # Blog Store
//!
//! In-memory storage of people, blog postings and comments. Reads take a short read
//! lock and return owned copies, so the store can be shared by every request task.

use crate::error::BlogError;
use crate::model::{BlogPosting, BlogPostingCreate, Comment, CommentCreate, Person, PersonCreate};
use chrono::Utc;
use hypermedia_framework::{PageItems, Pagination};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Debug, Default)]
pub struct BlogStore {
    people: RwLock<BTreeMap<u64, Person>>,
    postings: RwLock<BTreeMap<u64, BlogPosting>>,
    comments: RwLock<BTreeMap<u64, Comment>>,
    next_id: AtomicU64,
}

fn page_of<T>(values: impl Iterator<Item = T> + Clone, pagination: &Pagination) -> PageItems<T> {
    let total_count = values.clone().count();
    let items = values
        .skip(pagination.start_position())
        .take(pagination.per_page())
        .collect();
    PageItems::new(items, total_count)
}

impl BlogStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    pub fn add_person(&self, params: PersonCreate) -> Person {
        let person = Person {
            id: self.next_id(),
            name: params.name,
            email: params.email,
            job_title: params.job_title,
            birth_date: params.birth_date,
            avatar: None,
        };
        self.people.write().insert(person.id, person.clone());
        debug!(person_id = person.id, "Person added");
        person
    }

    /// Sets the profile picture of a person.
    pub fn set_avatar(&self, person_id: u64, png: Vec<u8>) -> Result<(), BlogError> {
        let mut people = self.people.write();
        let person = people.get_mut(&person_id).ok_or(BlogError::NotFound {
            collection: "people",
            id: person_id,
        })?;
        person.avatar = Some(png);
        Ok(())
    }

    pub fn add_blog_posting(&self, params: BlogPostingCreate) -> Result<BlogPosting, BlogError> {
        if self.person(params.creator_id).is_none() {
            return Err(BlogError::InvalidReference(format!(
                "creator {} does not exist",
                params.creator_id
            )));
        }
        let now = Utc::now();
        let posting = BlogPosting {
            id: self.next_id(),
            headline: params.headline,
            alternative_headline: params.alternative_headline,
            article_body: params.article_body,
            creator_id: params.creator_id,
            created: now,
            modified: now,
        };
        self.postings.write().insert(posting.id, posting.clone());
        debug!(blog_posting_id = posting.id, "Blog posting added");
        Ok(posting)
    }

    pub fn add_comment(&self, params: CommentCreate) -> Result<Comment, BlogError> {
        if self.blog_posting(params.blog_posting_id).is_none() {
            return Err(BlogError::InvalidReference(format!(
                "blog posting {} does not exist",
                params.blog_posting_id
            )));
        }
        if self.person(params.author_id).is_none() {
            return Err(BlogError::InvalidReference(format!(
                "author {} does not exist",
                params.author_id
            )));
        }
        let comment = Comment {
            id: self.next_id(),
            blog_posting_id: params.blog_posting_id,
            author_id: params.author_id,
            text: params.text,
            created: Utc::now(),
        };
        self.comments.write().insert(comment.id, comment.clone());
        debug!(comment_id = comment.id, "Comment added");
        Ok(comment)
    }

    pub fn person(&self, id: u64) -> Option<Person> {
        self.people.read().get(&id).cloned()
    }

    pub fn blog_posting(&self, id: u64) -> Option<BlogPosting> {
        self.postings.read().get(&id).cloned()
    }

    pub fn comment(&self, id: u64) -> Option<Comment> {
        self.comments.read().get(&id).cloned()
    }

    pub fn people(&self, pagination: &Pagination) -> PageItems<Person> {
        page_of(self.people.read().values().cloned(), pagination)
    }

    pub fn blog_postings(&self, pagination: &Pagination) -> PageItems<BlogPosting> {
        page_of(self.postings.read().values().cloned(), pagination)
    }

    /// Comments on one blog posting, oldest first.
    pub fn comments_of_posting(
        &self,
        blog_posting_id: u64,
        pagination: &Pagination,
    ) -> PageItems<Comment> {
        let comments = self.comments.read();
        page_of(
            comments
                .values()
                .filter(|comment| comment.blog_posting_id == blog_posting_id)
                .cloned(),
            pagination,
        )
    }

    /// Comments written by one person, oldest first.
    pub fn comments_by(&self, author_id: u64, pagination: &Pagination) -> PageItems<Comment> {
        let comments = self.comments.read();
        page_of(
            comments
                .values()
                .filter(|comment| comment.author_id == author_id)
                .cloned(),
            pagination,
        )
    }
}
