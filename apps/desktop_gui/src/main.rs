use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::TaskListApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the remote task resource.
    #[arg(long, default_value = "http://localhost:3000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(args.server_url.clone(), cmd_rx, ui_tx);

    // Initial load before any user interaction.
    if cmd_tx.send(BackendCommand::RefreshTasks).is_err() {
        tracing::error!("backend worker unavailable at startup");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Task List")
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Task List",
        options,
        Box::new(|_cc| Ok(Box::new(TaskListApp::new(args.server_url, cmd_tx, ui_rx)))),
    )
}
