pub mod frames;
pub mod hit_testing;

pub use frames::{CanvasPoint, Delta, FrameTransform, OverlayPoint, SurfacePoint};

/// The palette occupies this fraction (1/N) of the canvas surface width
pub const PALETTE_FRACTION: i32 = 4;

/// Size of the canvas surface, which holds both the palette and canvas zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub width: i32,
    pub height: i32,
}

impl CanvasBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// X coordinate of the palette/canvas split, for drawing
    pub fn separator_x(&self) -> f32 {
        self.width as f32 / PALETTE_FRACTION as f32
    }

    // The comparisons below are done on `x * 4` against `width` so a width
    // that is not a multiple of four splits exactly where `width / 4` would.

    /// A grab at this x copies the shape (`x <= separatorX`)
    pub fn is_palette_grab(&self, x: i32) -> bool {
        i64::from(x) * i64::from(PALETTE_FRACTION) <= i64::from(self.width)
    }

    /// A shape released at this x is deleted (`x < separatorX`)
    pub fn is_in_palette(&self, x: i32) -> bool {
        i64::from(x) * i64::from(PALETTE_FRACTION) < i64::from(self.width)
    }

    /// A shape at this x is bounds-checked while moving (`x >= separatorX`)
    pub fn is_in_canvas_zone(&self, x: i32) -> bool {
        !self.is_in_palette(x)
    }
}
