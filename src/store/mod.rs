//! Persistence of the shape collection.
//!
//! The whole collection lives in a single key-value slot as a JSON array and
//! is always read and written as one unit.

mod backend;

pub use backend::{KeyValueStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use backend::FileStore;
#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorageStore;

use log::{error, warn};

use crate::error::StoreResult;
use crate::shape::{DEFAULT_CIRCLE_ID, DEFAULT_RECTANGLE_ID, Shape, ShapeId, default_shapes};

/// Slot holding the shape collection
pub const SHAPES_KEY: &str = "shapes";

/// Appends both default shapes unless at least one default id is present.
///
/// A collection holding only one of the two defaults is returned as is.
pub fn seed_defaults(mut shapes: Vec<Shape>) -> Vec<Shape> {
    let has_default = shapes
        .iter()
        .any(|shape| matches!(shape.id().as_str(), DEFAULT_RECTANGLE_ID | DEFAULT_CIRCLE_ID));
    if !has_default {
        shapes.extend(default_shapes());
    }
    shapes
}

/// Reads and writes the shape collection through a [`KeyValueStore`]
pub struct ShapeStore {
    backend: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for ShapeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeStore").finish_non_exhaustive()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl ShapeStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Load the collection, seeding the defaults if needed.
    ///
    /// An absent slot is initialised with an empty collection. Unreadable or
    /// malformed data is treated as empty.
    pub fn load(&mut self) -> Vec<Shape> {
        let shapes = match self.backend.read(SHAPES_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!("Discarding malformed shape collection: {}", err);
                Vec::new()
            }),
            Ok(None) => {
                if let Err(err) = self.backend.write(SHAPES_KEY, "[]") {
                    error!("Failed to initialise shape collection: {}", err);
                }
                Vec::new()
            }
            Err(err) => {
                warn!("Failed to read shape collection: {}", err);
                Vec::new()
            }
        };
        seed_defaults(shapes)
    }

    /// Replace the stored collection
    pub fn save(&mut self, shapes: &[Shape]) -> StoreResult<()> {
        let json = serde_json::to_string(shapes)?;
        self.backend.write(SHAPES_KEY, &json)
    }

    /// Remove the shape with `id`; missing ids are ignored
    pub fn remove(&mut self, id: &ShapeId) -> StoreResult<()> {
        let mut shapes = self.load();
        shapes.retain(|shape| shape.id() != id);
        self.save(&shapes)
    }
}
