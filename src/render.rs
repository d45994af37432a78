//! Immediate-mode drawing of one frame.
//!
//! Coordinates handed to a [`Surface`] are logical canvas pixels with the
//! origin at the surface's top-left corner. The display density never shows
//! up here; egui applies it when the shapes are tessellated.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::constants::{
    AXIS_COLOR, AXIS_STROKE_WIDTH, BACKGROUND_COLOR, GRID_COLOR, GRID_STROKE_WIDTH, LABEL_COLOR,
    POINTER_COLOR, POINTER_FONT_SIZE, POINTER_LABEL_OFFSET, POINTER_RADIUS, RECT_COLOR,
    RECT_STROKE_WIDTH,
};
use crate::marker::Marker;
use crate::store::{RectangleSpec, Snapshot};

/// The drawing operations a frame needs.
pub trait Surface {
    fn clear(&mut self, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    /// Bold text whose bottom-left corner sits at `pos`.
    fn bold_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32);
}

/// Draws a complete frame. Later steps paint over earlier ones.
pub fn draw_frame<S: Surface>(surface: &mut S, size: Vec2, snapshot: &Snapshot) {
    surface.clear(BACKGROUND_COLOR);
    draw_grid(surface, size, snapshot);
    draw_axes(surface, size);
    draw_rectangle(surface, &snapshot.rectangle);
    for marker in Marker::for_rectangle(&snapshot.rectangle) {
        draw_marker(surface, &marker);
    }
    draw_pointer(surface, snapshot);
}

fn draw_grid<S: Surface>(surface: &mut S, size: Vec2, snapshot: &Snapshot) {
    let stroke = Stroke::new(GRID_STROKE_WIDTH, GRID_COLOR);

    // Vertical lines
    for x in snapshot.grid.line_offsets(size.x) {
        surface.line(Pos2::new(x, 0.0), Pos2::new(x, size.y), stroke);
    }

    // Horizontal lines
    for y in snapshot.grid.line_offsets(size.y) {
        surface.line(Pos2::new(0.0, y), Pos2::new(size.x, y), stroke);
    }
}

fn draw_axes<S: Surface>(surface: &mut S, size: Vec2) {
    let stroke = Stroke::new(AXIS_STROKE_WIDTH, AXIS_COLOR);
    surface.line(Pos2::ZERO, Pos2::new(size.x, 0.0), stroke);
    surface.line(Pos2::ZERO, Pos2::new(0.0, size.y), stroke);
}

fn draw_rectangle<S: Surface>(surface: &mut S, rectangle: &RectangleSpec) {
    let Some(end) = rectangle.end() else {
        return;
    };
    let rect = Rect::from_min_max(rectangle.anchor.to_pos2(), end.to_pos2());
    surface.stroke_rect(rect, Stroke::new(RECT_STROKE_WIDTH, RECT_COLOR));
}

fn draw_marker<S: Surface>(surface: &mut S, marker: &Marker) {
    let center = marker.position.to_pos2();
    surface.fill_circle(center, marker.radius, marker.color);
    surface.bold_text(
        center + marker.label_offset,
        &marker.label(),
        marker.font_size,
        marker.label_color,
    );
}

fn draw_pointer<S: Surface>(surface: &mut S, snapshot: &Snapshot) {
    let canvas = snapshot.pointer.canvas;
    let pos = canvas.to_pos2();
    let (dx, dy) = POINTER_LABEL_OFFSET;
    surface.bold_text(
        pos + Vec2::new(dx, dy),
        &format!("({}, {})", canvas.x, canvas.y),
        POINTER_FONT_SIZE,
        LABEL_COLOR,
    );
    surface.fill_circle(pos, POINTER_RADIUS, POINTER_COLOR);
}

/// Draws onto an egui painter, translating canvas coordinates to screen.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    /// `rect` is the surface's screen rectangle; its top-left is canvas (0, 0).
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        let screen = Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_stroke(screen, 0.0, stroke);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn bold_text(&mut self, pos: Pos2, text: &str, size: f32, color: Color32) {
        // No bold face in the default fonts, so strike twice half a point apart.
        let pos = self.to_screen(pos);
        for dx in [0.0, 0.5] {
            self.painter.text(
                pos + Vec2::new(dx, 0.0),
                Align2::LEFT_BOTTOM,
                text,
                FontId::proportional(size),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{Point, PointerSample};
    use crate::grid::Grid;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Color32),
        Line(Pos2, Pos2, Stroke),
        StrokeRect(Rect, Stroke),
        FillCircle(Pos2, f32, Color32),
        Text(Pos2, String, f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color32) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
            self.calls.push(DrawCall::Line(from, to, stroke));
        }

        fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
            self.calls.push(DrawCall::StrokeRect(rect, stroke));
        }

        fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
            self.calls.push(DrawCall::FillCircle(center, radius, color));
        }

        fn bold_text(&mut self, pos: Pos2, text: &str, size: f32, _color: Color32) {
            self.calls.push(DrawCall::Text(pos, text.to_string(), size));
        }
    }

    impl RecordingSurface {
        fn vertical_grid_lines(&self) -> Vec<f32> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Line(from, to, stroke)
                        if stroke.color == GRID_COLOR && from.x == to.x =>
                    {
                        Some(from.x)
                    }
                    _ => None,
                })
                .collect()
        }

        fn texts(&self) -> Vec<(Pos2, String)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Text(pos, text, _) => Some((*pos, text.clone())),
                    _ => None,
                })
                .collect()
        }
    }

    fn render(snapshot: &Snapshot, size: Vec2) -> RecordingSurface {
        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, size, snapshot);
        surface
    }

    #[test]
    fn frame_starts_with_clear() {
        let surface = render(&Snapshot::default(), Vec2::new(300.0, 200.0));
        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear(BACKGROUND_COLOR)));
    }

    #[test]
    fn default_scenario_draws_rectangle_and_labels() {
        let surface = render(&Snapshot::default(), Vec2::new(300.0, 200.0));

        let rect = surface.calls.iter().find_map(|call| match call {
            DrawCall::StrokeRect(rect, _) => Some(*rect),
            _ => None,
        });
        assert_eq!(
            rect,
            Some(Rect::from_min_max(Pos2::new(25.0, 25.0), Pos2::new(125.0, 125.0)))
        );

        let texts = surface.texts();
        assert_eq!(texts[0], (Pos2::new(30.0, 45.0), "(25,25)".to_string()));
        assert_eq!(texts[1], (Pos2::new(130.0, 140.0), "(125,125)".to_string()));
        assert_eq!(texts[2], (Pos2::new(10.0, 10.0), "(0, 0)".to_string()));
    }

    #[test]
    fn vertical_lines_follow_grid_size() {
        let snapshot = Snapshot {
            grid: Grid::new(50),
            ..Snapshot::default()
        };
        let surface = render(&snapshot, Vec2::new(260.0, 100.0));
        assert_eq!(
            surface.vertical_grid_lines(),
            vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0]
        );
    }

    #[test]
    fn one_pixel_grid_is_dense() {
        let snapshot = Snapshot {
            grid: Grid::new(1),
            ..Snapshot::default()
        };
        let surface = render(&snapshot, Vec2::new(40.0, 30.0));
        let lines = surface.vertical_grid_lines();
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().enumerate().all(|(i, x)| *x == i as f32));
    }

    #[test]
    fn axes_meet_at_origin_over_the_grid() {
        let size = Vec2::new(300.0, 200.0);
        let surface = render(&Snapshot::default(), size);
        let axes: Vec<(usize, Pos2, Pos2)> = surface
            .calls
            .iter()
            .enumerate()
            .filter_map(|(i, call)| match call {
                DrawCall::Line(from, to, stroke) if stroke.color == AXIS_COLOR => {
                    Some((i, *from, *to))
                }
                _ => None,
            })
            .collect();

        assert_eq!(axes.len(), 2);
        assert_eq!((axes[0].1, axes[0].2), (Pos2::ZERO, Pos2::new(300.0, 0.0)));
        assert_eq!((axes[1].1, axes[1].2), (Pos2::ZERO, Pos2::new(0.0, 200.0)));

        let last_grid_line = surface
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Line(_, _, s) if s.color == GRID_COLOR));
        assert!(last_grid_line.unwrap() < axes[0].0);
    }

    #[test]
    fn pointer_indicator_is_drawn_last() {
        let snapshot = Snapshot {
            pointer: PointerSample {
                viewport: Point::new(120, 340),
                canvas: Point::new(110, 290),
            },
            ..Snapshot::default()
        };
        let surface = render(&snapshot, Vec2::new(400.0, 400.0));

        let n = surface.calls.len();
        assert_eq!(
            surface.calls[n - 2],
            DrawCall::Text(Pos2::new(120.0, 300.0), "(110, 290)".to_string(), POINTER_FONT_SIZE)
        );
        assert_eq!(
            surface.calls[n - 1],
            DrawCall::FillCircle(Pos2::new(110.0, 290.0), POINTER_RADIUS, POINTER_COLOR)
        );
    }

    #[test]
    fn overflowing_rectangle_only_skips_itself() {
        let snapshot = Snapshot {
            rectangle: RectangleSpec {
                anchor: Point::new(i32::MAX, 5),
                ..RectangleSpec::default()
            },
            ..Snapshot::default()
        };
        let surface = render(&snapshot, Vec2::new(100.0, 100.0));

        assert!(!surface
            .calls
            .iter()
            .any(|call| matches!(call, DrawCall::StrokeRect(..))));
        // anchor label plus pointer label survive
        assert_eq!(surface.texts().len(), 2);
        assert!(!surface.vertical_grid_lines().is_empty());
    }
}
