use egui::Pos2;

/// A position in logical pixels. Negative values are allowed and simply land
/// outside the visible quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rounds a floating point position to the nearest whole pixel.
    pub fn rounded(pos: Pos2) -> Self {
        Self {
            x: round_to_pixel(pos.x),
            y: round_to_pixel(pos.y),
        }
    }

    /// Offsets the point, or `None` if the result does not fit.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    pub fn to_pos2(self) -> Pos2 {
        Pos2::new(self.x as f32, self.y as f32)
    }

    /// Compact label drawn next to markers, e.g. `(25,25)`.
    pub fn label(self) -> String {
        format!("({},{})", self.x, self.y)
    }
}

// Halves round up like the browser's Math.round, so -0.5 becomes 0. The sum
// is taken in f64 so values just below a half are not rounded up.
fn round_to_pixel(value: f32) -> i32 {
    (f64::from(value) + 0.5).floor() as i32
}

/// Where the pointer was on its last move, in both frames of reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSample {
    /// Relative to the window the input device reports in.
    pub viewport: Point,
    /// Relative to the drawing surface's top-left corner.
    pub canvas: Point,
}

impl PointerSample {
    /// Converts a device position into both frames. `surface_origin` is the
    /// surface's top-left corner in the device frame.
    pub fn capture(device_pos: Pos2, surface_origin: Pos2) -> Self {
        Self {
            viewport: Point::rounded(device_pos),
            canvas: Point::rounded(device_pos - surface_origin.to_vec2()),
        }
    }
}
