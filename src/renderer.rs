use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::drag::DragSnapshot;
use crate::geometry::{CanvasBounds, CanvasPoint};
use crate::input::SurfaceLayout;
use crate::shape::{Circle, Rectangle, Shape};

const HEADER_FILL: Color32 = Color32::from_rgb(0xe6, 0xe6, 0xe6);
const DRAGGED_OUTLINE: Color32 = Color32::RED;
const FALLBACK_FILL: Color32 = Color32::GRAY;

/// Parse a `#rrggbb` fill, falling back to gray for anything else
pub fn parse_fill(fill: &str) -> Color32 {
    Color32::from_hex(fill).unwrap_or(FALLBACK_FILL)
}

/// Shapes in the order they are painted.
///
/// Stored order is reversed so the first stored shape ends up on top, the same
/// shape a click would hit. The dragged shape is always painted last.
pub fn paint_order<'a>(shapes: &'a [Shape], snapshot: &DragSnapshot) -> Vec<&'a Shape> {
    let mut order: Vec<&Shape> = shapes
        .iter()
        .rev()
        .filter(|shape| !snapshot.is_dragged(shape.id()))
        .collect();
    order.extend(shapes.iter().filter(|shape| snapshot.is_dragged(shape.id())));
    order
}

/// Paints both surfaces from the stored shapes and a drag snapshot
#[derive(Debug, Clone)]
pub struct Renderer {
    header_height: f32,
}

impl Renderer {
    pub fn new(header_height: f32) -> Self {
        Self { header_height }
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Clear a surface to its background
    pub fn clear(&self, painter: &Painter, rect: Rect) {
        painter.rect(rect, 0.0, Color32::WHITE, Stroke::new(1.0, Color32::BLACK));
    }

    /// Zone titles above the canvas surface
    pub fn draw_header(&self, painter: &Painter, layout: &SurfaceLayout, bounds: CanvasBounds) {
        let canvas = layout.canvas_rect;
        let separator = canvas.min.x + bounds.separator_x();
        let top = canvas.min.y - self.header_height;
        let stroke = Stroke::new(1.0, Color32::BLACK);

        let palette = Rect::from_min_max(Pos2::new(canvas.min.x, top), Pos2::new(separator, canvas.min.y));
        let zone = Rect::from_min_max(Pos2::new(separator, top), Pos2::new(canvas.max.x, canvas.min.y));
        for (rect, title) in [(palette, "Figures"), (zone, "Canvas")] {
            painter.rect(rect, 0.0, HEADER_FILL, stroke);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                title,
                FontId::proportional(14.0),
                Color32::BLACK,
            );
        }
    }

    pub fn draw_zone_separator(&self, painter: &Painter, layout: &SurfaceLayout, bounds: CanvasBounds) {
        let x = layout.canvas_rect.min.x + bounds.separator_x();
        painter.line_segment(
            [Pos2::new(x, layout.canvas_rect.min.y), Pos2::new(x, layout.canvas_rect.max.y)],
            Stroke::new(1.0, Color32::BLACK),
        );
    }

    /// `origin` is the screen position of the frame the rectangle is expressed in
    pub fn draw_rectangle(&self, painter: &Painter, origin: Pos2, rect: &Rectangle, dragged: bool) {
        let min = origin + egui::vec2(rect.x as f32, rect.y as f32);
        let screen_rect = Rect::from_min_size(min, egui::vec2(rect.width as f32, rect.height as f32));
        let fill = parse_fill(&rect.fill);
        painter.rect(screen_rect, 0.0, fill, Self::outline(fill, dragged));
    }

    pub fn draw_circle(&self, painter: &Painter, origin: Pos2, circle: &Circle, dragged: bool) {
        let center = origin + egui::vec2(circle.x as f32, circle.y as f32);
        let fill = parse_fill(&circle.fill);
        painter.circle(center, circle.r as f32, fill, Self::outline(fill, dragged));
    }

    pub fn draw_shape(&self, painter: &Painter, origin: Pos2, shape: &Shape, dragged: bool) {
        match shape {
            Shape::Rectangle(rect) => self.draw_rectangle(painter, origin, rect, dragged),
            Shape::Circle(circle) => self.draw_circle(painter, origin, circle, dragged),
        }
    }

    /// Redraw the canvas surface with both zones
    pub fn render_canvas(
        &self,
        painter: &Painter,
        layout: &SurfaceLayout,
        bounds: CanvasBounds,
        shapes: &[Shape],
        snapshot: &DragSnapshot,
    ) {
        let painter = painter.with_clip_rect(layout.canvas_rect);
        self.clear(&painter, layout.canvas_rect);
        self.draw_zone_separator(&painter, layout, bounds);

        let origin = layout.canvas_rect.min;
        for shape in paint_order(shapes, snapshot) {
            self.draw_shape(&painter, origin, shape, snapshot.is_dragged(shape.id()));
        }
    }

    /// Redraw the overlay surface. It only shows a shape carried off the canvas.
    pub fn render_overlay(&self, painter: &Painter, layout: &SurfaceLayout, snapshot: &DragSnapshot) {
        if !snapshot.out_of_bounds {
            return;
        }
        let Some(shape) = &snapshot.dragging else {
            return;
        };

        // Shape coordinates stay in the canvas frame; find where that frame
        // starts on the overlay.
        let transform = layout.transform();
        let origin = layout.overlay_to_screen(transform.to_overlay(CanvasPoint::default()));
        self.draw_shape(painter, origin, shape, true);
    }

    fn outline(fill: Color32, dragged: bool) -> Stroke {
        if dragged {
            Stroke::new(2.0, DRAGGED_OUTLINE)
        } else {
            Stroke::new(1.0, fill)
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeId;

    fn shapes() -> Vec<Shape> {
        vec![
            Shape::rectangle("A", 300, 100, 60, 60, "#228533"),
            Shape::circle("B", 400, 200, 30, "#2f34d0"),
            Shape::rectangle("C", 500, 100, 60, 60, "#ff0000"),
        ]
    }

    #[test]
    fn test_parse_fill() {
        assert_eq!(parse_fill("#228533"), Color32::from_rgb(0x22, 0x85, 0x33));
        assert_eq!(parse_fill("green"), FALLBACK_FILL);
    }

    #[test]
    fn test_first_stored_shape_painted_last() {
        let shapes = shapes();
        let order: Vec<_> = paint_order(&shapes, &DragSnapshot::default())
            .into_iter()
            .map(|shape| shape.id().as_str())
            .collect();
        assert_eq!(order, ["C", "B", "A"]);
    }

    #[test]
    fn test_dragged_shape_painted_on_top() {
        let shapes = shapes();
        let snapshot = DragSnapshot {
            dragging: Some(shapes[2].clone()),
            out_of_bounds: false,
            selected: Some(ShapeId::new("C")),
        };
        let order: Vec<_> = paint_order(&shapes, &snapshot)
            .into_iter()
            .map(|shape| shape.id().as_str())
            .collect();
        assert_eq!(order, ["B", "A", "C"]);
    }

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::default();
        let layout = SurfaceLayout::new(
            Rect::from_min_size(egui::pos2(20.0, 70.0), egui::vec2(800.0, 500.0)),
            Rect::from_min_size(Pos2::ZERO, egui::vec2(1024.0, 768.0)),
        );
        let bounds = CanvasBounds::new(800, 500);
        let snapshot = DragSnapshot {
            dragging: Some(shapes()[0].clone()),
            out_of_bounds: true,
            selected: None,
        };

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            renderer.draw_header(&painter, &layout, bounds);
            renderer.render_canvas(&painter, &layout, bounds, &shapes(), &snapshot);
            renderer.render_overlay(&painter, &layout, &snapshot);
        });
    }
}
