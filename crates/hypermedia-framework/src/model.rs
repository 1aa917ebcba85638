//! # Model Identity
//!
//! The engine never knows the concrete Rust types it serializes. Each model type is
//! identified by a [`ModelType`] (its `TypeId` plus a short display name) and model
//! instances travel through the writers as `&dyn Any`, which the representor closures
//! downcast back to the type they were declared for.

use std::any::{Any, TypeId};
use std::fmt;

/// Runtime identity of a model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelType {
    id: TypeId,
    name: &'static str,
}

impl ModelType {
    /// Returns the identity of `T`.
    pub fn of<T: Any>() -> Self {
        // Keep only the last path segment of the outer type ("Wrapper" instead of
        // "blog::model::Wrapper<blog::model::BlogPosting>")
        let full = std::any::type_name::<T>();
        let outer = full.split('<').next().unwrap_or(full);
        let name = outer.rsplit("::").next().unwrap_or(outer);
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A single model instance together with its type.
#[derive(Debug, Clone)]
pub struct SingleModel<T> {
    model: T,
    model_type: ModelType,
}

impl<T: Any> SingleModel<T> {
    pub fn new(model: T) -> Self {
        Self {
            model,
            model_type: ModelType::of::<T>(),
        }
    }

    pub fn model(&self) -> &T {
        &self.model
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn into_model(self) -> T {
        self.model
    }
}

/// Borrowed, type-erased view of a model handed to mapper lifecycle hooks.
///
/// `types` are the resource type labels declared by the model's representor.
#[derive(Clone, Copy)]
pub struct ModelRef<'a> {
    model: &'a dyn Any,
    model_type: ModelType,
    types: &'a [String],
}

impl<'a> ModelRef<'a> {
    pub fn new(model: &'a dyn Any, model_type: ModelType, types: &'a [String]) -> Self {
        Self {
            model,
            model_type,
            types,
        }
    }

    pub fn model(&self) -> &'a dyn Any {
        self.model
    }

    /// Downcasts the model back to its concrete type.
    pub fn downcast<T: Any>(&self) -> Option<&'a T> {
        self.model.downcast_ref::<T>()
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    pub fn types(&self) -> &'a [String] {
        self.types
    }
}

impl fmt::Debug for ModelRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRef")
            .field("model_type", &self.model_type)
            .field("types", &self.types)
            .finish()
    }
}
