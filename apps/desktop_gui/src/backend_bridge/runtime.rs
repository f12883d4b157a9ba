//! Backend worker: owns the tokio runtime and the outbound HTTP client.

use std::thread;

use client_core::{DirectorySource, HttpDirectory};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawn the worker thread that serves directory loads until the UI side
/// hangs up.
pub fn launch(endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::DirectoryLoadFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            // A bad --endpoint is not fatal: every load answers with the
            // parse error and the rest of the UI stays usable.
            let directory = HttpDirectory::new(&endpoint);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadDirectory => {
                        let event = match &directory {
                            Ok(directory) => match directory.fetch_records().await {
                                Ok(records) => UiEvent::DirectoryLoaded(records),
                                Err(err) => UiEvent::DirectoryLoadFailed(err.to_string()),
                            },
                            Err(err) => UiEvent::DirectoryLoadFailed(err.to_string()),
                        };
                        let _ = ui_tx.try_send(event);
                    }
                }
            }
        });
    });
}
