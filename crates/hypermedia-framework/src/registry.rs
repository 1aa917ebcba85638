//! # Resource Registry
//!
//! The registry maps model types to their [`Representor`] and, for routed types, to
//! the collection name used in URLs (`/p/{collection}/{id}`).
//!
//! ## Concurrency
//!
//! Writers run concurrently with registration and unregistration (types come and
//! go at runtime). The registry never mutates what a writer is reading: every change
//! builds a new [`Resources`] value and swaps it in under a short write lock. A
//! writer takes one [`ResourceRegistry::snapshot`] at the start and resolves every
//! lookup of that write against it, so a single document never mixes two
//! registrations.
//!
//! ## Bidirectional relations
//!
//! A bidirectional relation declared on `T` adds a related collection to its target
//! type `U`. Those back collections are derived from the registered representors on
//! every lookup, so unregistering `T` removes them from `U` as well.

use crate::error::{Result, WriterError};
use crate::model::ModelType;
use crate::representor::{RelatedCollection, Representor};
use crate::uri::Path;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Immutable view of the registered resources.
#[derive(Debug, Default, Clone)]
pub struct Resources {
    representors: HashMap<ModelType, Arc<Representor>>,
    collections: HashMap<ModelType, String>,
    // Registration order, for deterministic iteration.
    order: Vec<ModelType>,
}

impl Resources {
    pub fn representor(&self, model_type: ModelType) -> Option<&Arc<Representor>> {
        self.representors.get(&model_type)
    }

    pub fn representor_of<T: Any>(&self) -> Option<&Arc<Representor>> {
        self.representor(ModelType::of::<T>())
    }

    /// Collection name of a routed type.
    pub fn collection_name(&self, model_type: ModelType) -> Option<&str> {
        self.collections.get(&model_type).map(String::as_str)
    }

    /// Reverse lookup of [`Resources::collection_name`].
    pub fn model_type_for(&self, collection_name: &str) -> Option<ModelType> {
        self.collections
            .iter()
            .find(|(_, name)| name.as_str() == collection_name)
            .map(|(model_type, _)| *model_type)
    }

    /// Path of a model instance, or `None` when its type is not routed.
    pub fn path(&self, model_type: ModelType, model: &dyn Any) -> Option<Path> {
        let name = self.collection_name(model_type)?;
        let id = self.representor(model_type)?.identifier(model)?;
        Some(Path::new(name, id))
    }

    /// Related collections of a type: its own first, then those added by other
    /// types' bidirectional relations in registration order.
    pub fn related_collections(&self, model_type: ModelType) -> Vec<&RelatedCollection> {
        let own = self
            .representor(model_type)
            .into_iter()
            .flat_map(|representor| representor.related_collections());
        let back = self
            .order
            .iter()
            .filter_map(|source| self.representors.get(source))
            .flat_map(|representor| representor.back_collections())
            .filter(move |back| back.owner_type() == model_type)
            .map(|back| back.collection());
        own.chain(back).collect()
    }

    /// Collection names of every routed type, in registration order.
    pub fn root_collection_names(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter_map(|model_type| self.collection_name(*model_type))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.representors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representors.is_empty()
    }

    fn insert(&mut self, representor: Representor, collection: Option<String>) {
        let model_type = representor.model_type();
        if !self.representors.contains_key(&model_type) {
            self.order.push(model_type);
        }
        self.representors.insert(model_type, Arc::new(representor));
        match collection {
            Some(name) => {
                self.collections.insert(model_type, name);
            }
            None => {
                self.collections.remove(&model_type);
            }
        }
    }

    fn remove(&mut self, model_type: ModelType) -> bool {
        self.order.retain(|registered| *registered != model_type);
        self.collections.remove(&model_type);
        self.representors.remove(&model_type).is_some()
    }
}

/// Registry of representors, shared by every writer.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    current: RwLock<Arc<Resources>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a routed type under `collection_name`, replacing any previous
    /// registration of the same type.
    ///
    /// Fails if the collection name already routes another type.
    pub fn register(
        &self,
        collection_name: impl Into<String>,
        representor: Representor,
    ) -> Result<()> {
        let collection_name = collection_name.into();
        let model_type = representor.model_type();
        self.try_update(|resources| {
            if let Some(owner) = resources.model_type_for(&collection_name) {
                if owner != model_type {
                    return Err(WriterError::InvalidRepresentor {
                        model: model_type.to_string(),
                        reason: format!(
                            "collection `{}` already routes {}",
                            collection_name, owner
                        ),
                    });
                }
            }
            resources.insert(representor, Some(collection_name.clone()));
            Ok(())
        })?;
        info!(model_type = %model_type, collection = %collection_name, "Registered");
        Ok(())
    }

    /// Registers a type that is only ever written nested inside other resources.
    pub fn register_representor(&self, representor: Representor) {
        let model_type = representor.model_type();
        self.update(|resources| resources.insert(representor, None));
        info!(model_type = %model_type, "Registered without route");
    }

    /// Removes `T` together with the back collections its relations added.
    pub fn unregister<T: Any>(&self) -> bool {
        self.unregister_type(ModelType::of::<T>())
    }

    pub fn unregister_type(&self, model_type: ModelType) -> bool {
        let removed = self.update(|resources| resources.remove(model_type));
        if removed {
            info!(model_type = %model_type, "Unregistered");
        } else {
            debug!(model_type = %model_type, "Unregister of unknown type");
        }
        removed
    }

    /// The current registrations. Later changes do not affect the returned value.
    pub fn snapshot(&self) -> Arc<Resources> {
        Arc::clone(&self.current.read())
    }

    fn update<R>(&self, change: impl FnOnce(&mut Resources) -> R) -> R {
        let mut current = self.current.write();
        let mut next = Resources::clone(&current);
        let result = change(&mut next);
        *current = Arc::new(next);
        result
    }

    // Publishes the change only if it succeeds.
    fn try_update<R>(&self, change: impl FnOnce(&mut Resources) -> Result<R>) -> Result<R> {
        let mut current = self.current.write();
        let mut next = Resources::clone(&current);
        let result = change(&mut next)?;
        *current = Arc::new(next);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        id: u32,
    }

    struct Comment {
        id: u32,
        author: u32,
    }

    fn person_representor() -> Representor {
        Representor::builder::<Person>()
            .identifier(|p| p.id)
            .add_type("Person")
            .build()
            .unwrap()
    }

    fn comment_representor() -> Representor {
        Representor::builder::<Comment>()
            .identifier(|c| c.id)
            .add_bidirectional_model(
                "author",
                "comments",
                |c: &Comment| Some(Person { id: c.author }),
                |p: &Person| p.id,
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_resolve_path() {
        let registry = ResourceRegistry::new();
        registry.register("people", person_representor()).unwrap();

        let resources = registry.snapshot();
        let path = resources
            .path(ModelType::of::<Person>(), &Person { id: 3 })
            .unwrap();
        assert_eq!(path.as_uri(), "/people/3");
        assert_eq!(resources.root_collection_names(), ["people"]);
        assert_eq!(
            resources.model_type_for("people"),
            Some(ModelType::of::<Person>())
        );
    }

    #[test]
    fn test_unrouted_type_has_no_path() {
        let registry = ResourceRegistry::new();
        registry.register_representor(person_representor());

        let resources = registry.snapshot();
        assert!(resources.representor_of::<Person>().is_some());
        assert!(resources
            .path(ModelType::of::<Person>(), &Person { id: 3 })
            .is_none());
        assert!(resources.root_collection_names().is_empty());
    }

    #[test]
    fn test_collection_name_conflict() {
        let registry = ResourceRegistry::new();
        registry.register("people", person_representor()).unwrap();
        let err = registry.register("people", comment_representor()).unwrap_err();
        assert!(err.to_string().contains("already routes Person"));
    }

    #[test]
    fn test_back_collections_follow_registration() {
        let registry = ResourceRegistry::new();
        registry.register("people", person_representor()).unwrap();
        registry.register("comments", comment_representor()).unwrap();

        let resources = registry.snapshot();
        let keys: Vec<&str> = resources
            .related_collections(ModelType::of::<Person>())
            .into_iter()
            .map(RelatedCollection::key)
            .collect();
        assert_eq!(keys, ["comments"]);

        assert!(registry.unregister::<Comment>());
        assert!(registry
            .snapshot()
            .related_collections(ModelType::of::<Person>())
            .is_empty());
        // The earlier snapshot is unaffected
        assert_eq!(resources.related_collections(ModelType::of::<Person>()).len(), 1);
    }

    #[test]
    fn test_unregister_unknown_type() {
        let registry = ResourceRegistry::new();
        assert!(!registry.unregister::<Person>());
    }
}
