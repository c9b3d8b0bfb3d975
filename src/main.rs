mod app;
mod constants;
mod error;
mod fonts;
mod loader;
mod params;
mod render;
mod session;

use app::NomoguideApp;
use constants::{APP_TITLE, WINDOW_SIZE};
use eframe::egui;
use std::path::PathBuf;
use tracing::info;

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,nomoguide=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> eframe::Result<()> {
    init_logging();

    // An optional chart to open right away; otherwise the user uploads one.
    let initial = std::env::args_os().nth(1).map(PathBuf::from);
    info!(initial = ?initial, "nomoguide starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(APP_TITLE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(NomoguideApp::new(cc, initial)))),
    )
}
