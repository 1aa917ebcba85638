//! Typed construction of a [`Representor`].

use super::relation::{
    BackCollection, Binary, BinaryFile, RelatedCollection, RelatedExtractor, RelatedModel,
    RelationMode,
};
use super::{Extractor, Field, Link, LocalizedField, Representor};
use crate::error::{Result, WriterError};
use crate::language::Language;
use crate::model::ModelType;
use serde_json::Number;
use std::any::Any;
use std::collections::HashSet;
use std::fmt::Display;
use std::marker::PhantomData;
use std::sync::Arc;

/// Values accepted by [`RepresentorBuilder::add_number`].
///
/// Implemented for the primitive integers and floats and for their `Option`s.
/// Non-finite floats have no JSON representation and are treated as absent.
pub trait IntoNumber {
    fn into_number(self) -> Option<Number>;
}

macro_rules! impl_into_number_for_integers {
    ($($t:ty),*) => {
        $(
            impl IntoNumber for $t {
                fn into_number(self) -> Option<Number> {
                    Some(Number::from(self))
                }
            }
        )*
    };
}

impl_into_number_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoNumber for f64 {
    fn into_number(self) -> Option<Number> {
        Number::from_f64(self)
    }
}

impl IntoNumber for f32 {
    fn into_number(self) -> Option<Number> {
        Number::from_f64(f64::from(self))
    }
}

impl<N: IntoNumber> IntoNumber for Option<N> {
    fn into_number(self) -> Option<Number> {
        self.and_then(IntoNumber::into_number)
    }
}

/// Builder for the representor of the model type `T`.
///
/// Field extractors may return the value itself or an `Option` of it; `None`
/// means the field is absent for that instance and is not written.
pub struct RepresentorBuilder<T> {
    model_type: ModelType,
    identifier: Option<Extractor<String>>,
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
    names: HashSet<String>,
    problems: Vec<String>,
    _model: PhantomData<fn(&T)>,
}

impl<T: Any> RepresentorBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            model_type: ModelType::of::<T>(),
            identifier: None,
            types: Vec::new(),
            boolean_fields: Vec::new(),
            localized_fields: Vec::new(),
            string_fields: Vec::new(),
            number_fields: Vec::new(),
            links: Vec::new(),
            binaries: Vec::new(),
            related_models: Vec::new(),
            related_collections: Vec::new(),
            back_collections: Vec::new(),
            names: HashSet::new(),
            problems: Vec::new(),
            _model: PhantomData,
        }
    }

    /// Sets the function producing the identifier used in the resource URL.
    pub fn identifier<F, I>(mut self, identifier: F) -> Self
    where
        F: Fn(&T) -> I + Send + Sync + 'static,
        I: Display,
    {
        if self.identifier.is_some() {
            self.problems.push("identifier declared twice".to_string());
        }
        self.identifier = Some(Arc::new(move |model: &dyn Any| {
            model
                .downcast_ref::<T>()
                .map(|model| identifier(model).to_string())
        }));
        self
    }

    /// Adds a type label (e.g. `BlogPosting`). Labels keep declaration order.
    pub fn add_type(mut self, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        if !self.types.contains(&type_name) {
            self.types.push(type_name);
        }
        self
    }

    pub fn add_boolean<F, R>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Option<bool>>,
    {
        let name = self.claim(key.into());
        self.boolean_fields.push(Field {
            name,
            extractor: typed(move |model: &T| -> Option<bool> { extractor(model).into() }),
        });
        self
    }

    pub fn add_string<F, R>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: Into<Option<String>>,
    {
        let name = self.claim(key.into());
        self.string_fields.push(Field {
            name,
            extractor: typed(move |model: &T| -> Option<String> { extractor(model).into() }),
        });
        self
    }

    /// Adds a string field resolved against the languages the client accepts.
    pub fn add_localized_string<F, R>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T, &Language) -> R + Send + Sync + 'static,
        R: Into<Option<String>>,
    {
        let name = self.claim(key.into());
        self.localized_fields.push(LocalizedField {
            name,
            extractor: Arc::new(move |model: &dyn Any, language: &Language| {
                model
                    .downcast_ref::<T>()
                    .and_then(|model| extractor(model, language).into())
            }),
        });
        self
    }

    pub fn add_number<F, R>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T) -> R + Send + Sync + 'static,
        R: IntoNumber,
    {
        let name = self.claim(key.into());
        self.number_fields.push(Field {
            name,
            extractor: typed(move |model: &T| extractor(model).into_number()),
        });
        self
    }

    /// Adds a link with the same URL for every instance of the type.
    pub fn add_link(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        let key = self.claim(key.into());
        self.links.push(Link {
            key,
            url: url.into(),
        });
        self
    }

    /// Adds a binary resource. Writers emit its URL, never its content.
    pub fn add_binary<F>(mut self, key: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&T) -> Option<BinaryFile> + Send + Sync + 'static,
    {
        let key = self.claim(key.into());
        self.binaries.push(Binary {
            key,
            extractor: typed::<T, _, _>(extractor),
        });
        self
    }

    /// Adds a related model that is always written as a link.
    pub fn add_linked_model<U, F>(self, key: impl Into<String>, extractor: F) -> Self
    where
        U: Any,
        F: Fn(&T) -> Option<U> + Send + Sync + 'static,
    {
        self.add_related_model(key.into(), RelationMode::Linked, extractor)
    }

    /// Adds a related model that is embedded when the request asks for it.
    pub fn add_embedded_model<U, F>(self, key: impl Into<String>, extractor: F) -> Self
    where
        U: Any,
        F: Fn(&T) -> Option<U> + Send + Sync + 'static,
    {
        self.add_related_model(key.into(), RelationMode::Embeddable, extractor)
    }

    /// Adds an embeddable related model plus the inverse collection on the target.
    ///
    /// Once registered, every `U` gets a related collection `back_key` listing the
    /// `T`s pointing at it, scoped by `back_identifier` of the `U`.
    pub fn add_bidirectional_model<U, F, G, I>(
        mut self,
        key: impl Into<String>,
        back_key: impl Into<String>,
        extractor: F,
        back_identifier: G,
    ) -> Self
    where
        U: Any,
        F: Fn(&T) -> Option<U> + Send + Sync + 'static,
        G: Fn(&U) -> I + Send + Sync + 'static,
        I: Display,
    {
        let key = self.claim(key.into());
        self.related_models.push(RelatedModel {
            key,
            related_type: ModelType::of::<U>(),
            mode: RelationMode::Embeddable,
            extractor: erase_related::<T, U, F>(extractor),
        });
        self.back_collections.push(BackCollection {
            owner_type: ModelType::of::<U>(),
            collection: RelatedCollection {
                key: back_key.into(),
                related_type: ModelType::of::<T>(),
                identifier: typed(move |model: &U| Some(back_identifier(model).to_string())),
            },
        });
        self
    }

    /// Adds a collection of `U` related to each `T`, always written as a link.
    ///
    /// `identifier` picks the value scoping the collection, usually the model's own id.
    pub fn add_related_collection<U, F, I>(mut self, key: impl Into<String>, identifier: F) -> Self
    where
        U: Any,
        F: Fn(&T) -> I + Send + Sync + 'static,
        I: Display,
    {
        let key = self.claim(key.into());
        self.related_collections.push(RelatedCollection {
            key,
            related_type: ModelType::of::<U>(),
            identifier: typed(move |model: &T| Some(identifier(model).to_string())),
        });
        self
    }

    /// Validates and freezes the description.
    ///
    /// Fails when no identifier was given or a name was declared twice.
    pub fn build(self) -> Result<Representor> {
        let model = self.model_type.name();
        let Some(identifier) = self.identifier else {
            return Err(WriterError::InvalidRepresentor {
                model: model.to_string(),
                reason: "missing identifier".to_string(),
            });
        };
        if !self.problems.is_empty() {
            return Err(WriterError::InvalidRepresentor {
                model: model.to_string(),
                reason: self.problems.join(", "),
            });
        }
        let types = if self.types.is_empty() {
            vec![model.to_string()]
        } else {
            self.types
        };
        Ok(Representor {
            model_type: self.model_type,
            identifier,
            types,
            boolean_fields: self.boolean_fields,
            localized_fields: self.localized_fields,
            string_fields: self.string_fields,
            number_fields: self.number_fields,
            links: self.links,
            binaries: self.binaries,
            related_models: self.related_models,
            related_collections: self.related_collections,
            back_collections: self.back_collections,
        })
    }

    fn add_related_model<U, F>(mut self, key: String, mode: RelationMode, extractor: F) -> Self
    where
        U: Any,
        F: Fn(&T) -> Option<U> + Send + Sync + 'static,
    {
        let key = self.claim(key);
        self.related_models.push(RelatedModel {
            key,
            related_type: ModelType::of::<U>(),
            mode,
            extractor: erase_related::<T, U, F>(extractor),
        });
        self
    }

    fn claim(&mut self, name: String) -> String {
        if !self.names.insert(name.clone()) {
            self.problems.push(format!("duplicate field `{}`", name));
        }
        name
    }
}

fn typed<T, V, F>(extractor: F) -> Extractor<V>
where
    T: Any,
    F: Fn(&T) -> Option<V> + Send + Sync + 'static,
{
    Arc::new(move |model: &dyn Any| model.downcast_ref::<T>().and_then(&extractor))
}

fn erase_related<T, U, F>(extractor: F) -> RelatedExtractor
where
    T: Any,
    U: Any,
    F: Fn(&T) -> Option<U> + Send + Sync + 'static,
{
    Arc::new(move |model: &dyn Any| {
        model
            .downcast_ref::<T>()
            .and_then(&extractor)
            .map(|related| Box::new(related) as Box<dyn Any>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        id: u32,
        name: String,
        age: Option<u8>,
        active: bool,
    }

    struct Posting {
        id: String,
        author: Option<Person>,
    }

    fn person() -> Person {
        Person {
            id: 7,
            name: "Ada".to_string(),
            age: None,
            active: true,
        }
    }

    #[test]
    fn test_build_erases_model_type() {
        let representor = Representor::builder::<Person>()
            .identifier(|p| p.id)
            .add_type("Person")
            .add_string("name", |p| p.name.clone())
            .add_number("age", |p| p.age)
            .add_boolean("active", |p| p.active)
            .build()
            .unwrap();

        let ada = person();
        assert_eq!(representor.identifier(&ada).as_deref(), Some("7"));
        assert_eq!(representor.identifier(&"not a person"), None);
        assert_eq!(representor.string_fields()[0].extract(&ada).as_deref(), Some("Ada"));
        assert_eq!(representor.number_fields()[0].extract(&ada), None);
        assert_eq!(representor.boolean_fields()[0].extract(&ada), Some(true));
        assert_eq!(representor.field_names(), ["active", "name", "age"]);
    }

    #[test]
    fn test_types_default_to_model_name() {
        let representor = Representor::builder::<Person>()
            .identifier(|p| p.id)
            .build()
            .unwrap();
        assert_eq!(representor.types(), ["Person".to_string()]);
    }

    #[test]
    fn test_missing_identifier_is_rejected() {
        let err = Representor::builder::<Person>()
            .add_string("name", |p| p.name.clone())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            WriterError::InvalidRepresentor { ref reason, .. } if reason == "missing identifier"
        ));
    }

    #[test]
    fn test_duplicate_names_are_rejected_across_kinds() {
        let err = Representor::builder::<Person>()
            .identifier(|p| p.id)
            .add_string("name", |p| p.name.clone())
            .add_link("name", "https://example.com")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate field `name`"));
    }

    #[test]
    fn test_related_model_extraction() {
        let representor = Representor::builder::<Posting>()
            .identifier(|p| p.id.clone())
            .add_embedded_model("author", |p: &Posting| {
                p.author.as_ref().map(|a| Person { name: a.name.clone(), ..person() })
            })
            .build()
            .unwrap();

        let relation = &representor.related_models()[0];
        assert_eq!(relation.mode(), RelationMode::Embeddable);
        assert_eq!(relation.related_type(), ModelType::of::<Person>());

        let with_author = Posting { id: "p".to_string(), author: Some(person()) };
        let extracted = relation.extract(&with_author).unwrap();
        assert_eq!(extracted.downcast_ref::<Person>().unwrap().name, "Ada");

        let without = Posting { id: "q".to_string(), author: None };
        assert!(relation.extract(&without).is_none());
    }

    #[test]
    fn test_bidirectional_model_declares_back_collection() {
        let representor = Representor::builder::<Posting>()
            .identifier(|p| p.id.clone())
            .add_bidirectional_model(
                "author",
                "postings",
                |p: &Posting| p.author.as_ref().map(|_| person()),
                |author: &Person| author.id,
            )
            .build()
            .unwrap();

        let back = &representor.back_collections()[0];
        assert_eq!(back.owner_type(), ModelType::of::<Person>());
        assert_eq!(back.collection().key(), "postings");
        assert_eq!(back.collection().related_type(), ModelType::of::<Posting>());
        assert_eq!(back.collection().identifier(&person()).as_deref(), Some("7"));
    }
}
