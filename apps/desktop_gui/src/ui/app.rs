use std::collections::HashMap;
use std::time::Duration;

use client_core::CompletionStats;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Task, TaskId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

/// In-progress inline edit of one row. A row is either in display mode or in
/// edit mode; edit mode ends only when a full snapshot replaces the list.
struct RowEdit {
    draft: String,
    needs_focus: bool,
}

pub struct TaskListApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    tasks: Vec<Task>,
    stats: CompletionStats,
    new_task_input: String,
    row_edits: HashMap<TaskId, RowEdit>,
    status: String,
    status_banner: Option<StatusBanner>,
    empty_name_alert_open: bool,
    loaded_once: bool,
}

impl TaskListApp {
    pub fn new(
        server_url: String,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url,
            tasks: Vec::new(),
            stats: CompletionStats::default(),
            new_task_input: String::new(),
            row_edits: HashMap::new(),
            status: String::new(),
            status_banner: None,
            empty_name_alert_open: false,
            loaded_once: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::TasksLoaded { tasks, stats } => {
                    self.tasks = tasks;
                    self.stats = stats;
                    // A full re-render collapses every row back to display
                    // mode.
                    self.row_edits.clear();
                    self.loaded_once = true;
                }
                UiEvent::TaskCreated => {
                    self.new_task_input.clear();
                }
                UiEvent::Error(err) => {
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: format!(
                            "{} error while {}: {}",
                            err_label(err.category()),
                            err.context().describe(),
                            err.message()
                        ),
                    });
                }
            }
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_composer(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let edit = egui::TextEdit::singleline(&mut self.new_task_input)
                .id_salt("new_task_input")
                .hint_text("What needs doing?")
                .desired_width(ui.available_width() - 64.0);
            let response = ui.add(edit);

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let add_clicked = ui.button("Add").clicked();
            if add_clicked || enter_pressed {
                self.submit_new_task();
            }
        });
    }

    fn submit_new_task(&mut self) {
        if self.new_task_input.trim().is_empty() {
            self.empty_name_alert_open = true;
            return;
        }
        // The input is only cleared once the server confirms the create; a
        // failed request leaves it populated.
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::CreateTask {
                text: self.new_task_input.clone(),
            },
            &mut self.status,
        );
    }

    fn show_empty_name_alert(&mut self, ctx: &egui::Context) {
        if !self.empty_name_alert_open {
            return;
        }
        // Blocks the rest of the UI until acknowledged.
        let modal = egui::Modal::new(egui::Id::new("empty_name_alert")).show(ctx, |ui| {
            ui.heading("Invalid task name");
            ui.add_space(4.0);
            ui.label("Provide a valid task name");
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    self.empty_name_alert_open = false;
                }
            });
        });
        if modal.should_close() {
            self.empty_name_alert_open = false;
        }
    }

    fn show_stats(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.stats.summary_label()).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(self.stats.ratio_label());
            });
        });
    }

    fn show_task_row_display(&mut self, ui: &mut egui::Ui, task: &Task) {
        ui.horizontal(|ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::DeleteTask { task_id: task.id },
                        &mut self.status,
                    );
                }
                if ui.button("Edit").clicked() {
                    self.row_edits.insert(
                        task.id,
                        RowEdit {
                            draft: task.task.clone(),
                            needs_focus: true,
                        },
                    );
                }

                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    let mut text = egui::RichText::new(&task.task);
                    if task.completed {
                        text = text.strikethrough().weak();
                    }
                    // Clicking the row body (not the buttons) toggles
                    // completion after the round trip succeeds.
                    let label = ui.add(
                        egui::Label::new(text)
                            .sense(egui::Sense::click())
                            .truncate(),
                    );
                    if label.clicked() {
                        dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::ToggleTask { task: task.clone() },
                            &mut self.status,
                        );
                    }
                });
            });
        });
    }

    fn show_task_row_editor(&mut self, ui: &mut egui::Ui, task: &Task) {
        let Some(edit) = self.row_edits.get_mut(&task.id) else {
            return;
        };

        let mut save_requested = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut edit.draft)
                    .id_salt(("task_row_editor", task.id.0))
                    .desired_width(ui.available_width() - 64.0),
            );
            if edit.needs_focus {
                edit.needs_focus = false;
                response.request_focus();
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                save_requested = true;
            }
            if ui.button("Save").clicked() {
                save_requested = true;
            }
        });

        if save_requested {
            let trimmed = edit.draft.trim().to_string();
            // Empty confirmation is ignored; the row stays in edit mode until
            // the next full snapshot.
            if !trimmed.is_empty() {
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::EditTask {
                        task_id: task.id,
                        text: trimmed,
                        completed: task.completed,
                    },
                    &mut self.status,
                );
            }
        }
    }

    fn show_task_row(&mut self, ui: &mut egui::Ui, task: &Task) {
        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(6.0)
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if self.row_edits.contains_key(&task.id) {
                    self.show_task_row_editor(ui, task);
                } else {
                    self.show_task_row_display(ui, task);
                }
            });
        ui.add_space(4.0);
    }

    fn show_task_list(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Task List");
            ui.small(format!("Server: {}", self.server_url));
            ui.add_space(6.0);

            self.show_status_banner(ui);
            self.show_composer(ui);
            ui.add_space(8.0);
            self.show_stats(ui);
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("task_rows_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let tasks = self.tasks.clone();
                    for task in &tasks {
                        self.show_task_row(ui, task);
                    }
                    if self.loaded_once && tasks.is_empty() {
                        ui.weak("No tasks yet. Add one above.");
                    }
                });

            if !self.status.is_empty() {
                ui.separator();
                ui.small(egui::RichText::new(&self.status).weak());
            }
        });
    }
}

impl eframe::App for TaskListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_task_list(ctx);
        self.show_empty_name_alert(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
