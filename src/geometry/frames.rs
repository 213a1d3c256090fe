//! Coordinate frames of the two drawing surfaces.
//!
//! The canvas surface and the overlay surface each have their own origin.
//! The drag controller works in canvas coordinates and converts overlay
//! points with a [`FrameTransform`] when a drag leaves the canvas.

use std::ops::{Add, Sub};

/// Point relative to the canvas surface's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

/// Point relative to the overlay surface (the viewport) top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPoint {
    pub x: i32,
    pub y: i32,
}

/// Integer displacement between two points of the same frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

/// A pointer position tagged with the surface it was reported on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePoint {
    Canvas(CanvasPoint),
    Overlay(OverlayPoint),
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl OverlayPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Delta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for CanvasPoint {
    type Output = Delta;

    fn sub(self, rhs: Self) -> Delta {
        Delta::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Add<Delta> for CanvasPoint {
    type Output = CanvasPoint;

    fn add(self, rhs: Delta) -> CanvasPoint {
        CanvasPoint::new(self.x.saturating_add(rhs.dx), self.y.saturating_add(rhs.dy))
    }
}

/// Maps between the canvas frame and the overlay frame.
///
/// `canvas_origin` is where the canvas surface's top-left corner sits
/// in overlay coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTransform {
    pub canvas_origin: OverlayPoint,
}

impl FrameTransform {
    pub fn new(canvas_origin: OverlayPoint) -> Self {
        Self { canvas_origin }
    }

    pub fn to_canvas(&self, point: OverlayPoint) -> CanvasPoint {
        CanvasPoint::new(point.x - self.canvas_origin.x, point.y - self.canvas_origin.y)
    }

    pub fn to_overlay(&self, point: CanvasPoint) -> OverlayPoint {
        OverlayPoint::new(point.x + self.canvas_origin.x, point.y + self.canvas_origin.y)
    }
}
