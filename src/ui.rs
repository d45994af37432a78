use crate::constants::{DEFAULT_GRID_SIZE, DEFAULT_RECT_X, DEFAULT_RECT_Y};

/// Text currently typed into the editable fields. The store keeps the parsed
/// values; these buffers keep whatever the user typed, valid or not.
pub struct UiState {
    pub grid_size: String,
    pub rect_x: String,
    pub rect_y: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE.to_string(),
            rect_x: DEFAULT_RECT_X.to_string(),
            rect_y: DEFAULT_RECT_Y.to_string(),
        }
    }
}
