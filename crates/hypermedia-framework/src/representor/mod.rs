//! # Representor
//!
//! A [`Representor`] describes how one model type is represented: how to get its
//! identifier, which type labels it carries, which fields it exposes, which static
//! links, binary resources, related models and related collections it has.
//!
//! Representors are built once per model type through [`RepresentorBuilder`] and
//! are immutable afterwards:
//!
//! ```rust
//! use hypermedia_framework::Representor;
//!
//! struct BlogPosting { id: u64, title: String, subtitle: Option<String>, words: u32 }
//!
//! let representor = Representor::builder::<BlogPosting>()
//!     .identifier(|post| post.id)
//!     .add_type("BlogPosting")
//!     .add_string("headline", |post| post.title.clone())
//!     .add_string("alternativeHeadline", |post| post.subtitle.clone())
//!     .add_number("wordCount", |post| post.words)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(representor.types(), ["BlogPosting".to_string()]);
//! ```
//!
//! The builder is typed over the model; the finished `Representor` is type-erased
//! so the writers can walk a graph of different model types.

mod builder;
mod relation;

pub use builder::{IntoNumber, RepresentorBuilder};
pub use relation::{
    BackCollection, Binary, BinaryFile, RelatedCollection, RelatedModel, RelationMode,
};

use crate::language::Language;
use crate::model::ModelType;
use serde_json::Number;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

type Extractor<V> = Arc<dyn Fn(&dyn Any) -> Option<V> + Send + Sync>;
type LocalizedExtractor = Arc<dyn Fn(&dyn Any, &Language) -> Option<String> + Send + Sync>;

/// A named field extractor.
#[derive(Clone)]
pub struct Field<V> {
    name: String,
    extractor: Extractor<V>,
}

impl<V> Field<V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extract(&self, model: &dyn Any) -> Option<V> {
        (self.extractor)(model)
    }
}

impl<V> fmt::Debug for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// A named field resolved against the requested [`Language`].
#[derive(Clone)]
pub struct LocalizedField {
    name: String,
    extractor: LocalizedExtractor,
}

impl LocalizedField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extract(&self, model: &dyn Any, language: &Language) -> Option<String> {
        (self.extractor)(model, language)
    }
}

impl fmt::Debug for LocalizedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizedField")
            .field("name", &self.name)
            .finish()
    }
}

/// A static link declared for every instance of a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub key: String,
    pub url: String,
}

/// Immutable descriptor of one model type.
#[derive(Clone)]
pub struct Representor {
    model_type: ModelType,
    identifier: Extractor<String>,
    types: Vec<String>,
    boolean_fields: Vec<Field<bool>>,
    localized_fields: Vec<LocalizedField>,
    string_fields: Vec<Field<String>>,
    number_fields: Vec<Field<Number>>,
    links: Vec<Link>,
    binaries: Vec<Binary>,
    related_models: Vec<RelatedModel>,
    related_collections: Vec<RelatedCollection>,
    back_collections: Vec<BackCollection>,
}

impl Representor {
    /// Starts describing the model type `T`.
    pub fn builder<T: Any>() -> RepresentorBuilder<T> {
        RepresentorBuilder::new()
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// Identifier of `model`, or `None` when `model` is not of this representor's type.
    pub fn identifier(&self, model: &dyn Any) -> Option<String> {
        (self.identifier)(model)
    }

    /// Type labels in declaration order. Never empty: a type with no declared
    /// label is labelled with its model name.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn boolean_fields(&self) -> &[Field<bool>] {
        &self.boolean_fields
    }

    pub fn localized_fields(&self) -> &[LocalizedField] {
        &self.localized_fields
    }

    pub fn string_fields(&self) -> &[Field<String>] {
        &self.string_fields
    }

    pub fn number_fields(&self) -> &[Field<Number>] {
        &self.number_fields
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }

    /// Looks up a binary resource by name.
    pub fn binary(&self, key: &str) -> Option<&Binary> {
        self.binaries.iter().find(|binary| binary.key() == key)
    }

    pub fn related_models(&self) -> &[RelatedModel] {
        &self.related_models
    }

    /// Related collections declared by this type itself. Collections added by other
    /// types' bidirectional relations live in the registry.
    pub fn related_collections(&self) -> &[RelatedCollection] {
        &self.related_collections
    }

    /// Inverse collections this type's bidirectional relations add to their targets.
    pub fn back_collections(&self) -> &[BackCollection] {
        &self.back_collections
    }

    /// Every data field name, in writing order.
    pub fn field_names(&self) -> Vec<&str> {
        self.boolean_fields
            .iter()
            .map(Field::name)
            .chain(self.localized_fields.iter().map(LocalizedField::name))
            .chain(self.string_fields.iter().map(Field::name))
            .chain(self.number_fields.iter().map(Field::name))
            .collect()
    }
}

impl fmt::Debug for Representor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Representor")
            .field("model_type", &self.model_type)
            .field("types", &self.types)
            .field("fields", &self.field_names())
            .field("links", &self.links)
            .field("binaries", &self.binaries)
            .field("related_models", &self.related_models)
            .field("related_collections", &self.related_collections)
            .finish()
    }
}
