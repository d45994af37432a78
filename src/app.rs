use crate::canvas::Canvas;
use crate::constants::BORDER_COLOR;
use crate::coordinate::Point;
use crate::frame_loop::FrameLoop;
use crate::render::{draw_frame, PainterSurface};
use crate::store::StateStore;
use crate::ui::UiState;
use clipboard::ClipboardContext;
use clipboard::ClipboardProvider;
use egui::{Context, Pos2, Rect, Stroke, Ui};
use log::{debug, trace, warn};

const GRID_SIZE_INPUT: &str = "grid_size_input";
const RECT_X_INPUT: &str = "rect_x_input";
const RECT_Y_INPUT: &str = "rect_y_input";

pub struct GridCanvasApp {
    store: StateStore,
    canvas: Canvas,
    frames: FrameLoop,
    ui_state: UiState,
    clipboard: Option<ClipboardContext>,
}

impl GridCanvasApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.visuals = egui::Visuals::light();
        cc.egui_ctx.set_style(style);

        let clipboard = match ClipboardProvider::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                warn!("clipboard unavailable, copy buttons disabled: {err}");
                None
            }
        };

        let mut app = Self::with_clipboard(clipboard);
        app.frames.start(&cc.egui_ctx);
        app
    }

    fn with_clipboard(clipboard: Option<ClipboardContext>) -> Self {
        Self {
            store: StateStore::new(),
            canvas: Canvas::new(),
            frames: FrameLoop::new(),
            ui_state: UiState::default(),
            clipboard,
        }
    }

    pub fn copy_to_clipboard(&mut self, text: String) -> bool {
        let Some(clipboard) = &mut self.clipboard else {
            return false;
        };
        match clipboard.set_contents(text) {
            Ok(()) => true,
            Err(err) => {
                warn!("copy to clipboard failed: {err}");
                false
            }
        }
    }

    /// Stops the render loop when the view goes away.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.frames.cancel() {
            debug!("teardown invalidated {handle:?}");
        }
    }

    // Controls run first so edits land before the canvas takes its snapshot.
    fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
            self.draw_controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Canvas Coordinate System");

        ui.horizontal_wrapped(|ui| {
            ui.label("Grid Size");
            if text_field(ui, GRID_SIZE_INPUT, &mut self.ui_state.grid_size).changed() {
                self.store.set_grid_size(&self.ui_state.grid_size);
            }

            ui.separator();
            ui.label("Rectangle X");
            if text_field(ui, RECT_X_INPUT, &mut self.ui_state.rect_x).changed() {
                self.store.set_rectangle_x(&self.ui_state.rect_x);
            }
            ui.label("Rectangle Y");
            if text_field(ui, RECT_Y_INPUT, &mut self.ui_state.rect_y).changed() {
                self.store.set_rectangle_y(&self.ui_state.rect_y);
            }
        });

        let pointer = self.store.pointer();
        ui.horizontal_wrapped(|ui| {
            self.coordinate_readout(ui, "Viewport", pointer.viewport);
            ui.separator();
            self.coordinate_readout(ui, "Canvas", pointer.canvas);
        });
    }

    fn coordinate_readout(&mut self, ui: &mut Ui, name: &str, point: Point) {
        for (axis, value) in [("X", point.x), ("Y", point.y)] {
            ui.label(format!("{name} {axis}"));
            let text = value.to_string();
            ui.add(egui::TextEdit::singleline(&mut text.as_str()).desired_width(60.0));
        }
        if ui
            .add_enabled(self.clipboard.is_some(), egui::Button::new("Copy"))
            .clicked()
        {
            self.copy_to_clipboard(format!("({}, {})", point.x, point.y));
        }
    }

    // Pointer moves over the surface, applied in arrival order
    fn handle_pointer_moves(&mut self, ui: &Ui, surface_rect: Rect) {
        let moves: Vec<Pos2> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) if surface_rect.contains(*pos) => Some(*pos),
                    _ => None,
                })
                .collect()
        });

        for pos in moves {
            self.store.record_pointer_move(pos, self.canvas.origin());
        }
    }

    fn draw_canvas(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let surface_rect = response.rect;

        self.canvas.resize(surface_rect, ui.ctx().pixels_per_point());
        self.handle_pointer_moves(ui, surface_rect);

        let snapshot = self.store.snapshot();
        let canvas = &self.canvas;
        self.frames.tick(ui.ctx(), || {
            let Some(metrics) = canvas.metrics() else {
                trace!("drawing surface not ready, skipping frame");
                return false;
            };
            let mut surface = PainterSurface::new(&painter, surface_rect);
            draw_frame(&mut surface, metrics.logical_size, &snapshot);
            painter.rect_stroke(surface_rect, 0.0, Stroke::new(1.0, BORDER_COLOR));
            true
        });
    }
}

fn text_field(ui: &mut Ui, id: &str, text: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(text)
            .id(egui::Id::new(id))
            .desired_width(60.0),
    )
}

impl eframe::App for GridCanvasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}
