use crate::model::{BlogPosting, Comment};
use crate::store::BlogStore;
use hypermedia_framework::{Representor, Result};
use std::sync::Arc;

pub const LICENSE: &str = "https://creativecommons.org/licenses/by/4.0/";

pub fn representor(store: Arc<BlogStore>) -> Result<Representor> {
    Representor::builder::<BlogPosting>()
        .identifier(|posting| posting.id)
        .add_type("BlogPosting")
        .add_localized_string("alternativeHeadline", |posting, language| {
            posting.alternative_headline.resolve(language)
        })
        .add_string("headline", |posting| posting.headline.clone())
        .add_string("articleBody", |posting| posting.article_body.clone())
        .add_string("dateCreated", |posting| posting.created.to_rfc3339())
        .add_string("dateModified", |posting| posting.modified.to_rfc3339())
        .add_number("wordCount", |posting| posting.word_count())
        .add_link("license", LICENSE)
        .add_embedded_model("creator", move |posting: &BlogPosting| {
            store.person(posting.creator_id)
        })
        .add_related_collection::<Comment, _, _>("comments", |posting| posting.id)
        .build()
}
