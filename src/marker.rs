use egui::{Color32, Vec2};

use crate::constants::{
    ANCHOR_LABEL_OFFSET, END_LABEL_OFFSET, LABEL_COLOR, MARKER_COLOR, MARKER_FONT_SIZE, MARKER_RADIUS,
};
use crate::coordinate::Point;
use crate::store::RectangleSpec;

/// A dot with its coordinates written next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub label_offset: Vec2,
    pub radius: f32,
    pub color: Color32,
    pub label_color: Color32,
    pub font_size: f32,
}

impl Marker {
    pub fn new(position: Point, label_offset: (f32, f32)) -> Self {
        Self {
            position,
            label_offset: Vec2::new(label_offset.0, label_offset.1),
            radius: MARKER_RADIUS,
            color: MARKER_COLOR,
            label_color: LABEL_COLOR,
            font_size: MARKER_FONT_SIZE,
        }
    }

    /// Markers for the rectangle's anchor and, when representable, its
    /// opposite corner.
    pub fn for_rectangle(rectangle: &RectangleSpec) -> Vec<Marker> {
        let mut markers = vec![Marker::new(rectangle.anchor, ANCHOR_LABEL_OFFSET)];
        if let Some(end) = rectangle.end() {
            markers.push(Marker::new(end, END_LABEL_OFFSET));
        }
        markers
    }

    pub fn label(&self) -> String {
        self.position.label()
    }
}
