use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{CanvasPoint, Delta};

pub const DEFAULT_RECTANGLE_ID: &str = "defaultRectangle";
pub const DEFAULT_CIRCLE_ID: &str = "defaultCircle";

/// Identifier of a shape, unique within the stored collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ShapeId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub fill: String,
}

/// Circle, `(x, y)` is the center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ShapeId,
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub fill: String,
}

/// A shape in the editor. Stored records carry a `type` tag of
/// `rectangle` or `circle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn rectangle(id: impl Into<String>, x: i32, y: i32, width: i32, height: i32, fill: &str) -> Self {
        Self::Rectangle(Rectangle {
            id: ShapeId::new(id),
            x,
            y,
            width,
            height,
            fill: fill.to_owned(),
        })
    }

    pub fn circle(id: impl Into<String>, x: i32, y: i32, r: i32, fill: &str) -> Self {
        Self::Circle(Circle {
            id: ShapeId::new(id),
            x,
            y,
            r,
            fill: fill.to_owned(),
        })
    }

    pub fn id(&self) -> &ShapeId {
        match self {
            Self::Rectangle(rect) => &rect.id,
            Self::Circle(circle) => &circle.id,
        }
    }

    pub fn fill(&self) -> &str {
        match self {
            Self::Rectangle(rect) => &rect.fill,
            Self::Circle(circle) => &circle.fill,
        }
    }

    /// Anchor position: top-left for rectangles, center for circles
    pub fn position(&self) -> CanvasPoint {
        match self {
            Self::Rectangle(rect) => CanvasPoint::new(rect.x, rect.y),
            Self::Circle(circle) => CanvasPoint::new(circle.x, circle.y),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
        }
    }

    pub fn translate(&mut self, delta: Delta) {
        match self {
            Self::Rectangle(rect) => {
                rect.x = rect.x.saturating_add(delta.dx);
                rect.y = rect.y.saturating_add(delta.dy);
            }
            Self::Circle(circle) => {
                circle.x = circle.x.saturating_add(delta.dx);
                circle.y = circle.y.saturating_add(delta.dy);
            }
        }
    }

    /// Deep copy of this shape carrying a different id
    pub fn with_id(&self, id: ShapeId) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Self::Rectangle(rect) => rect.id = id,
            Self::Circle(circle) => circle.id = id,
        }
        copy
    }
}

/// The two palette templates seeded on first run
pub fn default_shapes() -> Vec<Shape> {
    vec![
        Shape::rectangle(DEFAULT_RECTANGLE_ID, 30, 100, 60, 60, "#228533"),
        Shape::circle(DEFAULT_CIRCLE_ID, 60, 200, 30, "#2f34d0"),
    ]
}
