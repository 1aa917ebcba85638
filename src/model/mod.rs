//! Plain data of the sample blog. Nothing here knows about hypermedia; the
//! [`resources`](crate::resources) module describes how each type is represented.

pub mod blog_posting;
pub mod comment;
pub mod person;

pub use blog_posting::*;
pub use comment::*;
pub use person::*;
