use crate::geometry::CanvasPoint;
use crate::shape::{Shape, ShapeId};

/// How the grabbed shape relates to the stored collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// A fresh copy of a palette template with its own id
    Copy,
    /// The stored shape itself
    Move,
}

/// Transient state of a grab-and-move operation
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// The shape being dragged, kept in step with its stored counterpart
    pub shape: Shape,
    pub mode: DragMode,
    /// Last pointer position in canvas coordinates
    pub anchor: CanvasPoint,
    /// Set while the pointer is on the overlay surface. The shape is then
    /// held only here and not in the stored collection.
    pub out_of_bounds: bool,
}

impl DragSession {
    pub fn new(shape: Shape, mode: DragMode, anchor: CanvasPoint) -> Self {
        Self {
            shape,
            mode,
            anchor,
            out_of_bounds: false,
        }
    }

    pub fn shape_id(&self) -> &ShapeId {
        self.shape.id()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging(DragSession { mode: DragMode::Copy, .. }) => "Dragging (copy)",
            Self::Dragging(DragSession { mode: DragMode::Move, .. }) => "Dragging (move)",
        }
    }
}

/// Read-only view of the controller handed to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSnapshot {
    pub dragging: Option<Shape>,
    pub out_of_bounds: bool,
    pub selected: Option<ShapeId>,
}

impl DragSnapshot {
    pub fn is_dragged(&self, id: &ShapeId) -> bool {
        self.dragging.as_ref().is_some_and(|shape| shape.id() == id)
    }
}
