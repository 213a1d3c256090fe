use log::warn;
use serde::{Deserialize, Serialize};

use crate::geometry::CanvasBounds;

/// Editor settings, restored from eframe storage at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Width of the canvas surface in points, palette included
    pub canvas_width: i32,
    pub canvas_height: i32,
    /// Height of the zone title strip above the canvas
    pub header_height: f32,
    pub show_debug_window: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 500,
            header_height: 50.0,
            show_debug_window: false,
        }
    }
}

impl EditorConfig {
    /// Replace unusable values with their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.canvas_width <= 0 || self.canvas_height <= 0 {
            warn!(
                "Ignoring invalid canvas size {}x{}",
                self.canvas_width, self.canvas_height
            );
            self.canvas_width = defaults.canvas_width;
            self.canvas_height = defaults.canvas_height;
        }
        if self.header_height.is_nan() || self.header_height < 0.0 {
            warn!("Ignoring invalid header height {}", self.header_height);
            self.header_height = defaults.header_height;
        }
        self
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.canvas_width, self.canvas_height)
    }
}
