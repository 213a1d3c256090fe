use crate::geometry::{CanvasBounds, CanvasPoint, Delta};
use crate::shape::{Circle, Rectangle, Shape};

// Boundary points are outside: both tests use strict inequalities.
// Sums are taken in i64 so stored coordinates near the i32 limits can't overflow.

fn rectangle_contains(rect: &Rectangle, point: CanvasPoint) -> bool {
    let (px, py) = (i64::from(point.x), i64::from(point.y));
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    px > x && px < x + i64::from(rect.width) && py > y && py < y + i64::from(rect.height)
}

fn circle_contains(circle: &Circle, point: CanvasPoint) -> bool {
    let dx = i64::from(circle.x) - i64::from(point.x);
    let dy = i64::from(circle.y) - i64::from(point.y);
    let r = i64::from(circle.r);
    dx * dx + dy * dy < r * r
}

pub fn contains_point(shape: &Shape, point: CanvasPoint) -> bool {
    match shape {
        Shape::Rectangle(rect) => rectangle_contains(rect, point),
        Shape::Circle(circle) => circle_contains(circle, point),
    }
}

/// First shape in stored order containing the point. Stored order is also
/// the hit priority when shapes overlap.
pub fn shape_at(shapes: &[Shape], point: CanvasPoint) -> Option<&Shape> {
    shapes.iter().find(|shape| contains_point(shape, point))
}

/// Whether the shape may move by `delta` while it sits in the canvas zone.
///
/// Only the right, top and bottom edges are checked. The left edge is left
/// open so a shape can be dragged back into the palette or off the surface.
pub fn can_move(shape: &Shape, delta: Delta, bounds: CanvasBounds) -> bool {
    let (width, height) = (i64::from(bounds.width), i64::from(bounds.height));
    let (dx, dy) = (i64::from(delta.dx), i64::from(delta.dy));
    match shape {
        Shape::Rectangle(rect) => {
            let (x, y) = (i64::from(rect.x), i64::from(rect.y));
            width >= x + i64::from(rect.width) + dx
                && 0 <= y + dy
                && height >= y + i64::from(rect.height) + dy
        }
        Shape::Circle(circle) => {
            let (x, y, r) = (i64::from(circle.x), i64::from(circle.y), i64::from(circle.r));
            width >= x + r + dx && 0 <= y - r + dy && height >= y + r + dy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Shape {
        Shape::rectangle("R1", 30, 100, 60, 60, "#228533")
    }

    fn circle() -> Shape {
        Shape::circle("C1", 60, 200, 30, "#2f34d0")
    }

    #[test]
    fn test_rectangle_interior_hit() {
        assert!(contains_point(&rect(), CanvasPoint::new(40, 110)));
        assert!(contains_point(&rect(), CanvasPoint::new(89, 159)));
    }

    #[test]
    fn test_rectangle_edges_are_outside() {
        let rect = rect();
        assert!(!contains_point(&rect, CanvasPoint::new(30, 120)));
        assert!(!contains_point(&rect, CanvasPoint::new(90, 120)));
        assert!(!contains_point(&rect, CanvasPoint::new(50, 100)));
        assert!(!contains_point(&rect, CanvasPoint::new(50, 160)));
        assert!(!contains_point(&rect, CanvasPoint::new(30, 100)));
    }

    #[test]
    fn test_circle_boundary_is_outside() {
        let circle = circle();
        assert!(contains_point(&circle, CanvasPoint::new(60, 200)));
        assert!(contains_point(&circle, CanvasPoint::new(89, 200)));
        assert!(!contains_point(&circle, CanvasPoint::new(90, 200)));
        assert!(!contains_point(&circle, CanvasPoint::new(60, 170)));
        // 18^2 + 24^2 == 30^2
        assert!(!contains_point(&circle, CanvasPoint::new(78, 224)));
    }

    #[test]
    fn test_first_match_wins() {
        let shapes = vec![
            Shape::rectangle("under", 0, 0, 100, 100, "#000000"),
            Shape::rectangle("over", 10, 10, 50, 50, "#ffffff"),
        ];
        let hit = shape_at(&shapes, CanvasPoint::new(20, 20)).unwrap();
        assert_eq!(hit.id().as_str(), "under");
        assert!(shape_at(&shapes, CanvasPoint::new(200, 200)).is_none());
    }

    #[test]
    fn test_rectangle_move_bounds() {
        let bounds = CanvasBounds::new(800, 500);
        let shape = Shape::rectangle("R1", 700, 100, 60, 60, "#000000");
        assert!(can_move(&shape, Delta::new(40, 0), bounds));
        assert!(!can_move(&shape, Delta::new(41, 0), bounds));
        assert!(!can_move(&shape, Delta::new(0, -101), bounds));
        assert!(!can_move(&shape, Delta::new(0, 341), bounds));
        // Nothing stops a leftward move
        assert!(can_move(&shape, Delta::new(-900, 0), bounds));
    }

    #[test]
    fn test_huge_rectangle_does_not_overflow() {
        let bounds = CanvasBounds::new(800, 500);
        let shape = Shape::rectangle("R", 300, 100, i32::MAX - 100, i32::MAX - 50, "#000000");
        assert!(contains_point(&shape, CanvasPoint::new(310, 110)));
        assert!(!can_move(&shape, Delta::new(390, 0), bounds));

        let far = Shape::rectangle("F", i32::MAX - 10, i32::MIN, 60, 60, "#000000");
        assert!(!contains_point(&far, CanvasPoint::new(i32::MAX, 0)));
        assert!(!can_move(&far, Delta::new(i32::MAX, i32::MIN), bounds));
    }

    #[test]
    fn test_circle_move_bounds() {
        let bounds = CanvasBounds::new(800, 500);
        let shape = Shape::circle("C1", 400, 40, 30, "#000000");
        assert!(can_move(&shape, Delta::new(0, -10), bounds));
        assert!(!can_move(&shape, Delta::new(0, -11), bounds));
        assert!(can_move(&shape, Delta::new(370, 0), bounds));
        assert!(!can_move(&shape, Delta::new(371, 0), bounds));
        assert!(!can_move(&shape, Delta::new(0, 431), bounds));
    }
}
