mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{config::load_settings, ResponseOrdering};
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::UsuariosApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the API (overrides usuarios.toml and environment)
    #[arg(long)]
    api_url: Option<String>,
    /// last_resolved or latest_issued
    #[arg(long)]
    ordering: Option<ResponseOrdering>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    if let Some(ordering) = args.ordering {
        settings.response_ordering = ordering;
    }
    tracing::info!(api = %settings.api_base_url, ordering = ?settings.response_ordering, "starting");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Usuarios")
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Usuarios",
        options,
        Box::new(|_cc| Ok(Box::new(UsuariosApp::new(cmd_tx, ui_rx)))),
    )
}
