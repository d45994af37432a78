//! # Grid Canvas
//!
//! An interactive drawing surface for learning how pointer positions map
//! between the window and a canvas. It shows:
//! - a background grid with adjustable spacing
//! - red axes along the canvas' top and left edges
//! - a 100x100 rectangle whose corners are labelled with their coordinates
//! - the pointer position, both window-relative and canvas-relative
//!
//! The canvas is redrawn from scratch every frame from a snapshot of the
//! [`store::StateStore`].

#![deny(unsafe_code)]

pub mod app;
pub mod canvas;
pub mod constants;
pub mod coordinate;
pub mod error;
pub mod frame_loop;
pub mod grid;
pub mod marker;
pub mod render;
pub mod store;
pub mod ui;

use app::GridCanvasApp;

/// Opens the grid canvas window and runs until it is closed.
pub fn run_app() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 800.0)),
        min_window_size: Some(egui::vec2(800.0, 600.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Canvas Coordinate System",
        native_options,
        Box::new(|cc| Box::new(GridCanvasApp::new(cc))),
    )
}
