//! Relations and binary resources declared by a representor.

use crate::model::ModelType;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub(crate) type RelatedExtractor = Arc<dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync>;
pub(crate) type IdentifierExtractor = Arc<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>;
pub(crate) type BinaryExtractor = Arc<dyn Fn(&dyn Any) -> Option<BinaryFile> + Send + Sync>;

/// How a related model may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationMode {
    /// Written inline when the embedded selection opts in, linked otherwise.
    Embeddable,
    /// Always written as a link.
    Linked,
}

/// A single related model (e.g. the `creator` of a blog posting).
#[derive(Clone)]
pub struct RelatedModel {
    pub(crate) key: String,
    pub(crate) related_type: ModelType,
    pub(crate) mode: RelationMode,
    pub(crate) extractor: RelatedExtractor,
}

impl RelatedModel {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn related_type(&self) -> ModelType {
        self.related_type
    }

    pub fn mode(&self) -> RelationMode {
        self.mode
    }

    /// Resolves the related instance of `model`, if there is one.
    pub fn extract(&self, model: &dyn Any) -> Option<Box<dyn Any>> {
        (self.extractor)(model)
    }
}

impl fmt::Debug for RelatedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedModel")
            .field("key", &self.key)
            .field("related_type", &self.related_type)
            .field("mode", &self.mode)
            .finish()
    }
}

/// A collection of related models, always written as a link.
///
/// The link points at `{owner}/{identifier}/{key}` where `identifier` is
/// computed from the owning model by this declaration.
#[derive(Clone)]
pub struct RelatedCollection {
    pub(crate) key: String,
    pub(crate) related_type: ModelType,
    pub(crate) identifier: IdentifierExtractor,
}

impl RelatedCollection {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Type of the items of the collection.
    pub fn related_type(&self) -> ModelType {
        self.related_type
    }

    /// Identifier of the owning model used to scope the collection.
    pub fn identifier(&self, owner: &dyn Any) -> Option<String> {
        (self.identifier)(owner)
    }
}

impl fmt::Debug for RelatedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelatedCollection")
            .field("key", &self.key)
            .field("related_type", &self.related_type)
            .finish()
    }
}

/// A related collection that a bidirectional relation adds to another type.
///
/// Declared on the relation's source and attached to `owner_type` by the
/// registry for as long as the source stays registered.
#[derive(Debug, Clone)]
pub struct BackCollection {
    pub(crate) owner_type: ModelType,
    pub(crate) collection: RelatedCollection,
}

impl BackCollection {
    /// Type that receives the collection.
    pub fn owner_type(&self) -> ModelType {
        self.owner_type
    }

    pub fn collection(&self) -> &RelatedCollection {
        &self.collection
    }
}

/// Content of a binary resource (an avatar, an attachment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFile {
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl BinaryFile {
    pub fn new(content: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// A named binary resource. Writers only emit its URL; the content is served elsewhere.
#[derive(Clone)]
pub struct Binary {
    pub(crate) key: String,
    pub(crate) extractor: BinaryExtractor,
}

impl Binary {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn extract(&self, model: &dyn Any) -> Option<BinaryFile> {
        (self.extractor)(model)
    }
}

impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary").field("key", &self.key).finish()
    }
}
