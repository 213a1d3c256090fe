//! The drag state machine.
//!
//! A pointer-down over a shape starts a [`DragSession`]. Grabbing inside the
//! palette copies the template, grabbing in the canvas zone moves the stored
//! shape. Moves are persisted on every event. When the pointer leaves the
//! canvas surface the shape is taken out of the collection and carried on the
//! overlay until it either comes back or is released there and discarded.

mod session;

pub use session::{DragMode, DragSession, DragSnapshot, DragState};

use log::{debug, error, info};

use crate::geometry::hit_testing::{can_move, shape_at};
use crate::geometry::{CanvasBounds, CanvasPoint, FrameTransform, SurfacePoint};
use crate::id_generator::generate_id;
use crate::input::EditorInput;
use crate::shape::{Shape, ShapeId};
use crate::store::ShapeStore;

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    selected: Option<ShapeId>,
    bounds: CanvasBounds,
    transform: FrameTransform,
}

impl DragController {
    pub fn new(bounds: CanvasBounds) -> Self {
        Self {
            state: DragState::Idle,
            selected: None,
            bounds,
            transform: FrameTransform::default(),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn selected(&self) -> Option<&ShapeId> {
        self.selected.as_ref()
    }

    pub fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Where the canvas surface currently sits on the overlay
    pub fn set_transform(&mut self, transform: FrameTransform) {
        self.transform = transform;
    }

    pub fn snapshot(&self) -> DragSnapshot {
        let session = self.session();
        DragSnapshot {
            dragging: session.map(|session| session.shape.clone()),
            out_of_bounds: session.is_some_and(|session| session.out_of_bounds),
            selected: self.selected.clone(),
        }
    }

    pub fn handle_input(&mut self, input: &EditorInput, store: &mut ShapeStore) {
        match *input {
            EditorInput::PointerDown(at) => self.pointer_down(at, store),
            EditorInput::PointerMove(at) => self.pointer_move(at, store),
            EditorInput::PointerUp(at) => self.pointer_up(at, store),
            EditorInput::Delete => self.delete_selected(store),
        }
    }

    /// Grab the first shape under `at`, if any
    pub fn pointer_down(&mut self, at: CanvasPoint, store: &mut ShapeStore) {
        let mut shapes = store.load();

        if let DragState::Dragging(stale) = std::mem::take(&mut self.state) {
            self.resolve_stale(stale, &mut shapes);
        }
        self.selected = None;

        let Some(hit) = shape_at(&shapes, at) else {
            debug!("Pointer down at {:?} hit nothing", at);
            persist(store, &shapes);
            return;
        };

        let session = if self.bounds.is_palette_grab(at.x) {
            let copy = hit.with_id(generate_id());
            debug!("Copying {} {} as {}", hit.kind_name(), hit.id(), copy.id());
            // The copy joins the collection right away so moves can persist it
            shapes.push(copy.clone());
            DragSession::new(copy, DragMode::Copy, at)
        } else {
            debug!("Moving {} {}", hit.kind_name(), hit.id());
            DragSession::new(hit.clone(), DragMode::Move, at)
        };

        self.selected = Some(session.shape_id().clone());
        self.state = DragState::Dragging(session);
        persist(store, &shapes);
    }

    pub fn pointer_move(&mut self, at: SurfacePoint, store: &mut ShapeStore) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };

        match at {
            SurfacePoint::Overlay(point) => {
                if !session.out_of_bounds {
                    debug!("Carrying {} off the canvas", session.shape_id());
                    session.out_of_bounds = true;
                }
                if let Err(err) = store.remove(session.shape_id()) {
                    error!("Failed to lift {} off the canvas: {}", session.shape_id(), err);
                }

                let point = self.transform.to_canvas(point);
                session.shape.translate(point - session.anchor);
                session.anchor = point;
            }
            SurfacePoint::Canvas(point) => {
                let mut shapes = store.load();

                if session.out_of_bounds {
                    debug!("{} is back on the canvas", session.shape_id());
                    session.out_of_bounds = false;
                    if !shapes.iter().any(|shape| shape.id() == session.shape_id()) {
                        shapes.push(session.shape.clone());
                    }
                }

                let delta = point - session.anchor;
                let accepted = !self.bounds.is_in_canvas_zone(session.shape.position().x)
                    || can_move(&session.shape, delta, self.bounds);

                if accepted {
                    session.shape.translate(delta);
                    for shape in shapes.iter_mut().filter(|shape| shape.id() == session.shape_id()) {
                        shape.translate(delta);
                    }
                }

                session.anchor = point;
                persist(store, &shapes);
            }
        }
    }

    /// End the drag. Shapes dropped in the palette or off the canvas are deleted.
    pub fn pointer_up(&mut self, _at: SurfacePoint, store: &mut ShapeStore) {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return;
        };

        if session.out_of_bounds {
            info!("Discarding {} released off the canvas", session.shape_id());
            if let Err(err) = store.remove(session.shape_id()) {
                error!("Failed to discard {}: {}", session.shape_id(), err);
            }
            return;
        }

        if self.bounds.is_in_palette(session.shape.position().x) {
            info!("Deleting {} dropped in the palette", session.shape_id());
            if let Err(err) = store.remove(session.shape_id()) {
                error!("Failed to delete {}: {}", session.shape_id(), err);
            }
        } else {
            debug!("Dropped {} at {:?}", session.shape_id(), session.shape.position());
        }
    }

    /// Delete the most recently grabbed shape
    pub fn delete_selected(&mut self, store: &mut ShapeStore) {
        if self.is_dragging() {
            debug!("Ignoring delete during a drag");
            return;
        }
        let Some(id) = self.selected.take() else {
            return;
        };

        info!("Deleting selected shape {}", id);
        if let Err(err) = store.remove(&id) {
            error!("Failed to delete {}: {}", id, err);
        }
    }

    // A session still alive at the next pointer-down never saw its release
    fn resolve_stale(&self, stale: DragSession, shapes: &mut Vec<Shape>) {
        debug!("Resolving unfinished drag of {}", stale.shape_id());
        if stale.out_of_bounds && !shapes.iter().any(|shape| shape.id() == stale.shape_id()) {
            shapes.push(stale.shape.clone());
        }
        if self.bounds.is_in_palette(stale.shape.position().x) {
            shapes.retain(|shape| shape.id() != stale.shape_id());
        }
    }
}

fn persist(store: &mut ShapeStore, shapes: &[Shape]) {
    if let Err(err) = store.save(shapes) {
        error!("Failed to save shapes: {}", err);
    }
}
