mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::{RosterApp, StartupConfig};

/// Desktop roster: fetch a demo user directory once, then manage the records
/// locally.
#[derive(Debug, Parser)]
#[command(name = "roster-desk")]
struct Cli {
    /// Directory endpoint to fetch the initial record list from.
    #[arg(long, default_value = client_core::DEFAULT_DIRECTORY_ENDPOINT)]
    endpoint: String,
    /// Start with an empty collection instead of fetching the directory.
    #[arg(long)]
    skip_initial_load: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cli.endpoint.clone(), cmd_rx, ui_tx);

    let startup = StartupConfig {
        endpoint: cli.endpoint,
        initial_load: !cli.skip_initial_load,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roster Desk")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Roster Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(RosterApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
}
