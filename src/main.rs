fn main() -> eframe::Result<()> {
    // RUST_LOG=grid_canvas=debug shows parse fallbacks and resizes
    env_logger::init();

    grid_canvas::run_app()
}
