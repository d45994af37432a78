//! Default values and drawing styles shared by the store and the renderer.

use egui::Color32;

// Defaults at mount
/// Grid spacing, in logical pixels, used until the user edits it.
pub const DEFAULT_GRID_SIZE: u32 = 25;
/// Top-left corner of the rectangle until the user edits it.
pub const DEFAULT_RECT_X: i32 = 25;
pub const DEFAULT_RECT_Y: i32 = 25;
/// Fallback spacing when the grid size input is unusable.
pub const MIN_GRID_SIZE: u32 = 1;

// Rectangle
pub const RECT_WIDTH: i32 = 100;
pub const RECT_HEIGHT: i32 = 100;

// Strokes
pub const GRID_COLOR: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
pub const GRID_STROKE_WIDTH: f32 = 0.5;
pub const AXIS_COLOR: Color32 = Color32::RED;
pub const AXIS_STROKE_WIDTH: f32 = 2.0;
pub const RECT_COLOR: Color32 = Color32::from_rgb(0x33, 0x9a, 0xf0);
pub const RECT_STROKE_WIDTH: f32 = 2.0;
pub const BORDER_COLOR: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

// Markers and labels
pub const MARKER_COLOR: Color32 = Color32::RED;
pub const MARKER_RADIUS: f32 = 8.0;
pub const LABEL_COLOR: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const MARKER_FONT_SIZE: f32 = 16.0;
/// Label offsets from the anchor and end markers.
pub const ANCHOR_LABEL_OFFSET: (f32, f32) = (5.0, 20.0);
pub const END_LABEL_OFFSET: (f32, f32) = (5.0, 15.0);

// Pointer indicator
pub const POINTER_COLOR: Color32 = Color32::from_rgb(0x00, 0x7a, 0xff);
pub const POINTER_RADIUS: f32 = 4.0;
pub const POINTER_FONT_SIZE: f32 = 14.0;
pub const POINTER_LABEL_OFFSET: (f32, f32) = (10.0, 10.0);
