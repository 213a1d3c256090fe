use egui::{Context, Event, Key, PointerButton, Pos2, Rect};

use crate::geometry::{CanvasPoint, FrameTransform, OverlayPoint, SurfacePoint};

/// Key that deletes the selected shape
pub const DELETE_KEY: Key = Key::Delete;

/// Normalized input handed to the drag controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorInput {
    /// Primary button pressed on the canvas surface
    PointerDown(CanvasPoint),
    /// Pointer moved on either surface
    PointerMove(SurfacePoint),
    /// Primary button released on either surface
    PointerUp(SurfacePoint),
    /// The delete key was pressed
    Delete,
}

/// Screen placement of the two surfaces.
///
/// The canvas surface is `canvas_rect`. The overlay surface covers the whole
/// `viewport` and receives everything outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    pub canvas_rect: Rect,
    pub viewport: Rect,
}

impl SurfaceLayout {
    pub fn new(canvas_rect: Rect, viewport: Rect) -> Self {
        Self { canvas_rect, viewport }
    }

    pub fn transform(&self) -> FrameTransform {
        FrameTransform::new(OverlayPoint::new(
            (self.canvas_rect.min.x - self.viewport.min.x) as i32,
            (self.canvas_rect.min.y - self.viewport.min.y) as i32,
        ))
    }

    /// Find the surface under a screen position and express the position in
    /// that surface's frame. Fractions are truncated.
    pub fn locate(&self, pos: Pos2) -> SurfacePoint {
        if self.canvas_rect.contains(pos) {
            SurfacePoint::Canvas(CanvasPoint::new(
                (pos.x - self.canvas_rect.min.x) as i32,
                (pos.y - self.canvas_rect.min.y) as i32,
            ))
        } else {
            SurfacePoint::Overlay(OverlayPoint::new(
                (pos.x - self.viewport.min.x) as i32,
                (pos.y - self.viewport.min.y) as i32,
            ))
        }
    }

    pub fn overlay_to_screen(&self, point: OverlayPoint) -> Pos2 {
        self.viewport.min + egui::vec2(point.x as f32, point.y as f32)
    }
}

/// Converts raw egui events into [`EditorInput`]s, keeping delivery order
#[derive(Debug, Default)]
pub struct InputAdapter;

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's inputs
    pub fn process_input(&self, ctx: &Context, layout: &SurfaceLayout) -> Vec<EditorInput> {
        let events = ctx.input(|input| input.events.clone());
        events
            .iter()
            .filter_map(|event| self.translate(event, layout))
            .collect()
    }

    pub fn translate(&self, event: &Event, layout: &SurfaceLayout) -> Option<EditorInput> {
        match event {
            Event::PointerMoved(pos) => Some(EditorInput::PointerMove(layout.locate(*pos))),
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => match layout.locate(*pos) {
                SurfacePoint::Canvas(point) => Some(EditorInput::PointerDown(point)),
                // The overlay only tracks drags, it never starts one
                SurfacePoint::Overlay(_) => None,
            },
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => Some(EditorInput::PointerUp(layout.locate(*pos))),
            Event::Key {
                key,
                pressed: true,
                ..
            } if *key == DELETE_KEY => Some(EditorInput::Delete),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, pos2};

    fn layout() -> SurfaceLayout {
        SurfaceLayout::new(
            Rect::from_min_size(pos2(100.0, 80.0), egui::vec2(800.0, 500.0)),
            Rect::from_min_size(Pos2::ZERO, egui::vec2(1200.0, 800.0)),
        )
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_locate_canvas_and_overlay() {
        let layout = layout();
        assert_eq!(
            layout.locate(pos2(140.7, 190.2)),
            SurfacePoint::Canvas(CanvasPoint::new(40, 110))
        );
        assert_eq!(
            layout.locate(pos2(50.0, 60.0)),
            SurfacePoint::Overlay(OverlayPoint::new(50, 60))
        );
        assert_eq!(layout.transform().canvas_origin, OverlayPoint::new(100, 80));
    }

    #[test]
    fn test_press_only_starts_on_canvas() {
        let layout = layout();
        let adapter = InputAdapter::new();

        assert_eq!(adapter.translate(&button(pos2(20.0, 20.0), true), &layout), None);
        assert_eq!(
            adapter.translate(&button(pos2(140.0, 190.0), true), &layout),
            Some(EditorInput::PointerDown(CanvasPoint::new(40, 110)))
        );
        assert_eq!(
            adapter.translate(&button(pos2(20.0, 20.0), false), &layout),
            Some(EditorInput::PointerUp(SurfacePoint::Overlay(OverlayPoint::new(20, 20))))
        );
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let event = Event::PointerButton {
            pos: pos2(140.0, 190.0),
            button: PointerButton::Secondary,
            pressed: true,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(InputAdapter::new().translate(&event, &layout()), None);
    }

    #[test]
    fn test_delete_key() {
        let adapter = InputAdapter::new();
        let key = |key, pressed| Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        };
        assert_eq!(adapter.translate(&key(Key::Delete, true), &layout()), Some(EditorInput::Delete));
        assert_eq!(adapter.translate(&key(Key::Delete, false), &layout()), None);
        assert_eq!(adapter.translate(&key(Key::Backspace, true), &layout()), None);
    }
}
