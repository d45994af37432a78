//! Single source of truth for what the canvas shows.
//!
//! Input handlers write here; the renderer only ever sees a [`Snapshot`]
//! copied at the start of a frame.

use egui::Pos2;
use log::debug;

use crate::constants::{DEFAULT_RECT_X, DEFAULT_RECT_Y, MIN_GRID_SIZE, RECT_HEIGHT, RECT_WIDTH};
use crate::coordinate::{Point, PointerSample};
use crate::error::{parse_integer, InputError};
use crate::grid::Grid;

/// The annotated rectangle: a movable anchor with a fixed extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleSpec {
    pub anchor: Point,
    pub width: i32,
    pub height: i32,
}

impl Default for RectangleSpec {
    fn default() -> Self {
        Self {
            anchor: Point::new(DEFAULT_RECT_X, DEFAULT_RECT_Y),
            width: RECT_WIDTH,
            height: RECT_HEIGHT,
        }
    }
}

impl RectangleSpec {
    /// Corner opposite the anchor, or `None` when it falls outside `i32`.
    pub fn end(&self) -> Option<Point> {
        self.anchor.checked_offset(self.width, self.height)
    }
}

/// Everything one frame needs, copied so the frame draws a consistent state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub rectangle: RectangleSpec,
    pub pointer: PointerSample,
}

#[derive(Debug, Default)]
pub struct StateStore {
    grid: Grid,
    rectangle: RectangleSpec,
    pointer: PointerSample,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            rectangle: self.rectangle,
            pointer: self.pointer,
        }
    }

    pub fn rectangle(&self) -> RectangleSpec {
        self.rectangle
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    /// Unusable input falls back to the minimum spacing.
    pub fn set_grid_size(&mut self, raw: &str) {
        let size = Grid::parse_size(raw).unwrap_or_else(|err| {
            debug!("grid size falls back to {MIN_GRID_SIZE}: {err}");
            MIN_GRID_SIZE
        });
        self.grid = Grid::new(size);
    }

    /// Unusable input leaves the current coordinate in place.
    pub fn set_rectangle_x(&mut self, raw: &str) {
        if let Some(x) = parse_coordinate(raw, "x") {
            self.rectangle.anchor.x = x;
        }
    }

    /// Unusable input leaves the current coordinate in place.
    pub fn set_rectangle_y(&mut self, raw: &str) {
        if let Some(y) = parse_coordinate(raw, "y") {
            self.rectangle.anchor.y = y;
        }
    }

    /// Overwrites the previous sample; no history is kept.
    pub fn record_pointer_move(&mut self, device_pos: Pos2, surface_origin: Pos2) {
        self.pointer = PointerSample::capture(device_pos, surface_origin);
    }
}

fn parse_coordinate(raw: &str, axis: &str) -> Option<i32> {
    let parsed = parse_integer(raw).and_then(|value| {
        i32::try_from(value).map_err(|_| InputError::OutOfI32(value))
    });
    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("ignoring rectangle {axis} edit: {err}");
            None
        }
    }
}
