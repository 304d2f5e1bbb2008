#![warn(clippy::all)]

use anyhow::{anyhow, Result};
use conway_grid::{App, Config};

fn main() -> Result<()> {
    use eframe::egui::ViewportBuilder;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Config::WINDOW_SIZE)
            .with_min_inner_size(Config::MIN_WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(create_app),
    )
    .map_err(|e| anyhow!("{}", e))
}

fn create_app(
    cc: &eframe::CreationContext<'_>,
) -> std::result::Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(App::new(&cc.egui_ctx)?))
}
