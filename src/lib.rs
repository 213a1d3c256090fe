#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod renderer;
pub mod shape;
pub mod store;

pub use app::{APP_ID, ShapeEditorApp};
pub use config::EditorConfig;
pub use drag::{DragController, DragMode, DragSession, DragSnapshot, DragState};
pub use error::{StoreError, StoreResult};
pub use geometry::{CanvasBounds, CanvasPoint, Delta, FrameTransform, OverlayPoint, SurfacePoint};
pub use input::{EditorInput, InputAdapter, SurfaceLayout};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeId};
pub use store::{KeyValueStore, MemoryStore, ShapeStore};
