//! Model handles.
//!
//! Models are engine-owned and referenced by a small `Copy` handle, so drawing
//! never allocates. `ModelLibrary` knows which handles resolve.
//! In a real engine you'd integrate mesh loading, hot-reload, streaming, etc.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Shared model handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Model(pub u32);

impl Model {
    /// Unit cube spanning `[-1, 1]` on each axis.
    pub const CUBE: Self = Self(0);
    pub const SPHERE: Self = Self(1);
    pub const PLANE: Self = Self(2);
}

/// Metadata about a registered model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub name: String,
    /// Half extent of the model before scaling.
    pub half_extent: f32,
}

/// Registry of models a host can resolve.
#[derive(Debug, Clone)]
pub struct ModelLibrary {
    next_id: u32,
    models: HashMap<Model, ModelInfo>,
}

impl Default for ModelLibrary {
    fn default() -> Self {
        let mut lib = Self {
            next_id: 0,
            models: HashMap::new(),
        };
        for (model, name) in [
            (Model::CUBE, "cube"),
            (Model::SPHERE, "sphere"),
            (Model::PLANE, "plane"),
        ] {
            lib.models.insert(
                model,
                ModelInfo {
                    name: name.to_string(),
                    half_extent: 1.0,
                },
            );
            lib.next_id = lib.next_id.max(model.0 + 1);
        }
        lib
    }
}

impl ModelLibrary {
    /// Registers a model and returns its handle.
    pub fn register(&mut self, name: impl Into<String>, half_extent: f32) -> Model {
        let model = Model(self.next_id);
        self.next_id += 1;
        self.models.insert(
            model,
            ModelInfo {
                name: name.into(),
                half_extent,
            },
        );
        model
    }

    pub fn get(&self, model: Model) -> Option<&ModelInfo> {
        self.models.get(&model)
    }

    pub fn contains(&self, model: Model) -> bool {
        self.models.contains_key(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_resolve() {
        let lib = ModelLibrary::default();
        assert_eq!(lib.get(Model::CUBE).map(|m| m.name.as_str()), Some("cube"));
        assert!(lib.contains(Model::PLANE));
        assert!(!lib.contains(Model(99)));
    }

    #[test]
    fn register_does_not_collide_with_builtins() {
        let mut lib = ModelLibrary::default();
        let monkey = lib.register("monkey", 1.2);
        assert_ne!(monkey, Model::CUBE);
        assert_ne!(monkey, Model::SPHERE);
        assert_ne!(monkey, Model::PLANE);
        assert_eq!(lib.get(monkey).map(|m| m.half_extent), Some(1.2));
    }
}
