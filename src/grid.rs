use crate::constants::{DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use std::num::IntErrorKind;

use crate::error::{parse_integer, InputError};

/// Spacing of the background grid, always at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    pub fn new(size: u32) -> Self {
        Self {
            size: size.max(MIN_GRID_SIZE),
        }
    }

    pub fn get_size(&self) -> u32 {
        self.size
    }

    /// Reads a size from a text field. Unparsable or non-positive input is
    /// reported as an error so the caller can pick a fallback. Positive
    /// values past `u32::MAX` are wider than any surface and saturate there,
    /// which still leaves only the line at 0.
    pub fn parse_size(raw: &str) -> Result<u32, InputError> {
        let value = match parse_integer(raw) {
            Ok(value) => value,
            Err(InputError::OutOfRange { source, .. })
                if *source.kind() == IntErrorKind::PosOverflow =>
            {
                return Ok(u32::MAX);
            }
            Err(err) => return Err(err),
        };
        if value <= 0 {
            return Err(InputError::NotPositive(value));
        }
        Ok(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Offsets of the lines across an extent: 0, size, 2*size, ... below `extent`.
    pub fn line_offsets(&self, extent: f32) -> impl Iterator<Item = f32> {
        let step = self.size as f32;
        (0u32..)
            .map(move |i| i as f32 * step)
            .take_while(move |offset| *offset < extent)
    }
}
