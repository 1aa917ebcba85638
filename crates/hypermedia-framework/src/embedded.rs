//! # Embedding Selection
//!
//! A related model declared *embeddable* is written inline only when the caller
//! opts in for that exact position, e.g. `?embedded=creator,creator.company`.
//! Everything else is written as a link.
//!
//! The engine embeds exactly as deep as the selection instructs and imposes no
//! limit of its own. [`MaxDepth`] wraps any selection with a hard cutoff for
//! callers whose policy could follow a cyclic relation graph forever.

use crate::embedded_path::EmbeddedPath;
use std::collections::HashSet;

/// Decides whether the relation `field_name` of the resource at `parent` is embedded.
pub trait EmbeddedSelection: Send + Sync {
    fn should_embed(&self, parent: &EmbeddedPath, field_name: &str) -> bool;
}

impl<F> EmbeddedSelection for F
where
    F: Fn(&EmbeddedPath, &str) -> bool + Send + Sync,
{
    fn should_embed(&self, parent: &EmbeddedPath, field_name: &str) -> bool {
        self(parent, field_name)
    }
}

/// Set of dotted relation paths to embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embedded {
    paths: HashSet<String>,
}

impl Embedded {
    /// Embeds nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Adds a dotted path such as `creator.company`.
    pub fn with(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Parses the comma separated value of the `embedded` query parameter.
    pub fn parse(value: &str) -> Self {
        value
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .fold(Self::none(), Self::with)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl EmbeddedSelection for Embedded {
    fn should_embed(&self, parent: &EmbeddedPath, field_name: &str) -> bool {
        if parent.is_root() {
            return self.paths.contains(field_name);
        }
        self.paths.contains(&format!("{}.{}", parent, field_name))
    }
}

/// Refuses to embed below `max_depth` levels, whatever the inner selection says.
#[derive(Debug, Clone)]
pub struct MaxDepth<E> {
    inner: E,
    max_depth: usize,
}

impl<E: EmbeddedSelection> MaxDepth<E> {
    pub fn new(inner: E, max_depth: usize) -> Self {
        Self { inner, max_depth }
    }
}

impl<E: EmbeddedSelection> EmbeddedSelection for MaxDepth<E> {
    fn should_embed(&self, parent: &EmbeddedPath, field_name: &str) -> bool {
        parent.len() < self.max_depth && self.inner.should_embed(parent, field_name)
    }
}
