//! # Embedded Paths
//!
//! The position of an embedded resource inside the output tree is the sequence of
//! relation names walked from the root model: `author.company` means "the
//! `company` relation of the embedded `author`".
//!
//! [`EmbeddedPath`] is a persistent cons-list. [`EmbeddedPath::push`] returns a new
//! path that shares every existing segment with its parent, so sibling relations
//! written from the same parent can hold their own paths without copying and
//! without observing each other.

use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct Node {
    segment: String,
    parent: EmbeddedPath,
}

/// Immutable, structurally shared list of relation names.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedPath {
    last: Option<Arc<Node>>,
    len: usize,
}

impl EmbeddedPath {
    /// The empty path of the root model.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended. `self` is left untouched.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        Self {
            last: Some(Arc::new(Node {
                segment: segment.into(),
                parent: self.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn is_root(&self) -> bool {
        self.last.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The last segment (the relation this path points at).
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref().map(|node| node.segment.as_str())
    }

    /// The path of the parent resource, or `None` at the root.
    pub fn parent(&self) -> Option<&EmbeddedPath> {
        self.last.as_deref().map(|node| &node.parent)
    }

    /// Segments from the root outwards.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = Vec::with_capacity(self.len);
        let mut current = self;
        while let Some(node) = current.last.as_deref() {
            segments.push(node.segment.as_str());
            current = &node.parent;
        }
        segments.reverse();
        segments
    }

    /// `true` when both paths share the same last node in memory.
    pub fn shares_tail_with(&self, other: &EmbeddedPath) -> bool {
        match (&self.last, &other.last) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for EmbeddedPath {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.segments() == other.segments()
    }
}

impl Eq for EmbeddedPath {}

impl fmt::Display for EmbeddedPath {
    /// Dotted form, e.g. `author.company`. The root renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for EmbeddedPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(EmbeddedPath::root(), |path, segment| path.push(segment))
    }
}
