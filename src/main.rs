mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::ChargeScopeApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional CLI argument: a station CSV loaded before the UI starts.
    // A bad path or schema here is a fatal configuration error.
    let mut state = AppState::default();
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        let dataset = data::loader::load_file(&path)
            .with_context(|| format!("loading startup dataset {}", path.display()))?;
        log::info!(
            "Loaded {} stations across {} states",
            dataset.len(),
            dataset.states.len()
        );
        state.set_dataset(dataset);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "ChargeScope – EV Station Explorer",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ChargeScopeApp::with_state(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
