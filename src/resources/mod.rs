//! # Resources
//!
//! How the blog model is represented: one [`Representor`](hypermedia_framework::Representor)
//! per model type, and the collection names they are routed under.
//!
//! | Collection      | Model                                        |
//! |-----------------|----------------------------------------------|
//! | `blog-postings` | [`BlogPosting`](crate::model::BlogPosting)   |
//! | `people`        | [`Person`](crate::model::Person)             |
//! | `comments`      | [`Comment`](crate::model::Comment)           |
//!
//! Relations are resolved through the [`BlogStore`], which every representor holds
//! on to.

pub mod blog_posting;
pub mod comment;
pub mod person;

use crate::store::BlogStore;
use hypermedia_framework::{ResourceRegistry, Result};
use std::sync::Arc;

pub const BLOG_POSTINGS: &str = "blog-postings";
pub const PEOPLE: &str = "people";
pub const COMMENTS: &str = "comments";

/// Registers every blog resource.
pub fn register_all(registry: &ResourceRegistry, store: &Arc<BlogStore>) -> Result<()> {
    registry.register(PEOPLE, person::representor()?)?;
    registry.register(BLOG_POSTINGS, blog_posting::representor(Arc::clone(store))?)?;
    registry.register(COMMENTS, comment::representor(Arc::clone(store))?)?;
    Ok(())
}
