//! Backend worker: a dedicated thread owning the tokio runtime, the task
//! resource client, and the controller. Commands arrive over the UI queue and
//! are processed one at a time, so each mutate -> fetch cycle completes before
//! the next command starts.

use std::thread;

use client_core::{ClientEvent, TaskClient, TaskListController};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let controller = TaskListController::new(TaskClient::new(server_url));

            let mut events = controller.subscribe_events();
            let event_tx = ui_tx.clone();
            tokio::spawn(async move {
                while let Ok(event) = events.recv().await {
                    let mapped = match event {
                        ClientEvent::TasksLoaded { tasks, stats } => {
                            UiEvent::TasksLoaded { tasks, stats }
                        }
                        ClientEvent::TaskCreated => UiEvent::TaskCreated,
                    };
                    let _ = event_tx.try_send(mapped);
                }
            });

            while let Ok(cmd) = cmd_rx.recv() {
                let (context, result) = match cmd {
                    BackendCommand::RefreshTasks => {
                        (UiErrorContext::FetchTasks, controller.refresh().await)
                    }
                    BackendCommand::CreateTask { text } => (
                        UiErrorContext::CreateTask,
                        controller.create_task(&text).await,
                    ),
                    BackendCommand::ToggleTask { task } => (
                        UiErrorContext::ToggleTask,
                        controller.toggle_completion(&task).await,
                    ),
                    BackendCommand::EditTask {
                        task_id,
                        text,
                        completed,
                    } => (
                        UiErrorContext::EditTask,
                        controller.edit_task(task_id, &text, completed).await,
                    ),
                    BackendCommand::DeleteTask { task_id } => (
                        UiErrorContext::DeleteTask,
                        controller.delete_task(task_id).await,
                    ),
                };

                if let Err(err) = result {
                    tracing::error!(?context, "task operation abandoned: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        context,
                        format!("{err:#}"),
                    )));
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::events::UiErrorCategory;
    use crossbeam_channel::bounded;
    use shared::domain::TaskId;
    use std::time::Duration;

    fn unreachable_server_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[test]
    fn failed_mutation_publishes_error_with_command_context_and_no_reload() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        launch(unreachable_server_url(), cmd_rx, ui_tx);

        cmd_tx
            .send(BackendCommand::DeleteTask {
                task_id: TaskId(1),
            })
            .unwrap();

        match ui_rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            UiEvent::Error(err) => {
                assert_eq!(err.context(), UiErrorContext::DeleteTask);
                assert_eq!(err.category(), UiErrorCategory::Transport);
            }
            UiEvent::TasksLoaded { .. } => panic!("unexpected reload after failed mutation"),
            UiEvent::TaskCreated => panic!("unexpected create confirmation"),
        }
        assert!(
            ui_rx.recv_timeout(Duration::from_millis(300)).is_err(),
            "no further event expected after a failed mutation"
        );
    }

    #[test]
    fn failed_refresh_publishes_error_without_snapshot() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        launch(unreachable_server_url(), cmd_rx, ui_tx);

        cmd_tx.send(BackendCommand::RefreshTasks).unwrap();

        match ui_rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            UiEvent::Error(err) => {
                assert_eq!(err.context(), UiErrorContext::FetchTasks);
            }
            UiEvent::TasksLoaded { .. } => panic!("snapshot published despite failed fetch"),
            UiEvent::TaskCreated => panic!("unexpected create confirmation"),
        }
    }
}
