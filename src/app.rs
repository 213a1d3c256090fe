use egui::{Id, LayerId, Order, Sense};
use log::warn;

use crate::config::EditorConfig;
use crate::drag::DragController;
use crate::input::{InputAdapter, SurfaceLayout};
use crate::renderer::Renderer;
use crate::store::ShapeStore;

/// Used for the window title and the native storage directory
pub const APP_ID: &str = "shape_dnd";

pub struct ShapeEditorApp {
    config: EditorConfig,
    store: ShapeStore,
    controller: DragController,
    input: InputAdapter,
    renderer: Renderer,
}

impl Default for ShapeEditorApp {
    fn default() -> Self {
        Self::with_store(EditorConfig::default(), ShapeStore::in_memory())
    }
}

impl ShapeEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous editor settings (if any).
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            .unwrap_or_default()
            .validated();

        Self::with_store(config, platform_store())
    }

    pub fn with_store(config: EditorConfig, store: ShapeStore) -> Self {
        Self {
            controller: DragController::new(config.bounds()),
            renderer: Renderer::new(config.header_height),
            input: InputAdapter::new(),
            config,
            store,
        }
    }

    fn debug_window(&self, ctx: &egui::Context, shape_count: usize) {
        let snapshot = self.controller.snapshot();
        egui::Window::new("Editor Debug").show(ctx, |ui| {
            ui.label(format!("Number of shapes: {}", shape_count));
            ui.label(format!("State: {}", self.controller.state().name()));
            ui.label(format!("Out of bounds: {}", snapshot.out_of_bounds));
            match &snapshot.selected {
                Some(id) => ui.label(format!("Selected: {}", id)),
                None => ui.label("Selected: none"),
            };
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_store() -> ShapeStore {
    match crate::store::FileStore::for_app(APP_ID) {
        Some(backend) => {
            log::info!("Storing shapes in {}", backend.dir().display());
            ShapeStore::new(Box::new(backend))
        }
        None => {
            warn!("No storage directory available, shapes will not be kept");
            ShapeStore::in_memory()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_store() -> ShapeStore {
    match crate::store::LocalStorageStore::new() {
        Ok(backend) => ShapeStore::new(Box::new(backend)),
        Err(err) => {
            warn!("{}, shapes will not be kept", err);
            ShapeStore::in_memory()
        }
    }
}

impl eframe::App for ShapeEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let shape_count = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_space(self.renderer.header_height());

                let bounds = self.controller.bounds();
                let size = egui::vec2(bounds.width as f32, bounds.height as f32);
                let (response, canvas_painter) = ui.allocate_painter(size, Sense::click_and_drag());
                let layout = SurfaceLayout::new(response.rect, ctx.screen_rect());

                // Inputs are handled in delivery order against the current layout
                self.controller.set_transform(layout.transform());
                for input in self.input.process_input(ctx, &layout) {
                    self.controller.handle_input(&input, &mut self.store);
                }

                let shapes = self.store.load();
                let snapshot = self.controller.snapshot();

                self.renderer.draw_header(ui.painter(), &layout, bounds);
                self.renderer
                    .render_canvas(&canvas_painter, &layout, bounds, &shapes, &snapshot);

                let overlay = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("drag_overlay")));
                self.renderer.render_overlay(&overlay, &layout, &snapshot);
                shapes.len()
            })
            .inner;

        if self.config.show_debug_window {
            self.debug_window(ctx, shape_count);
        }

        if self.controller.is_dragging() {
            ctx.request_repaint();
        }
    }
}
