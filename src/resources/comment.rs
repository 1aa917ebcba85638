use crate::model::{Comment, Person};
use crate::store::BlogStore;
use hypermedia_framework::{Representor, Result};
use std::sync::Arc;

/// Comments link back to their posting and embed their author. Registering them
/// adds a `comments` collection to every person.
pub fn representor(store: Arc<BlogStore>) -> Result<Representor> {
    let postings = Arc::clone(&store);
    Representor::builder::<Comment>()
        .identifier(|comment| comment.id)
        .add_type("Comment")
        .add_string("text", |comment| comment.text.clone())
        .add_string("dateCreated", |comment| comment.created.to_rfc3339())
        .add_bidirectional_model(
            "author",
            "comments",
            move |comment: &Comment| store.person(comment.author_id),
            |person: &Person| person.id,
        )
        .add_linked_model("blogPosting", move |comment: &Comment| {
            postings.blog_posting(comment.blog_posting_id)
        })
        .build()
}
