//! Runtime wiring of the blog application.
//!
//! - [`BlogSystem`] - owns the store, the resource registry and the response writer
//! - [`Config`] - settings loaded from the environment or JSON
//! - [`setup_tracing`] - initializes logging

pub mod blog_system;
pub mod config;
pub mod tracing;

pub use self::blog_system::{BlogSystem, Response};
pub use self::config::Config;
pub use self::tracing::setup_tracing;
