use chrono::{DateTime, Local};
use client_core::RecordStore;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{DraftMode, Record, RecordId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

/// Options resolved from the command line before the app starts.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub endpoint: String,
    pub initial_load: bool,
}

/// Card action picked up while rendering the grid and applied after the
/// loop, so the collection is never mutated mid-iteration.
#[derive(Debug, Clone, Copy)]
enum CardAction {
    Edit(RecordId),
    Delete(RecordId),
}

pub struct RosterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    store: RecordStore,
    endpoint: String,
    status: String,
    loaded_at: Option<DateTime<Local>>,
}

impl RosterApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            store: RecordStore::new(),
            endpoint: startup.endpoint,
            status: "Starting".to_string(),
            loaded_at: None,
        };
        if startup.initial_load {
            app.request_directory_load();
        } else {
            app.status = "Initial directory load skipped".to_string();
        }
        app
    }

    fn request_directory_load(&mut self) {
        // One load in flight at a time; it is not cancellable.
        if self.store.is_loading() {
            return;
        }
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadDirectory,
            &mut self.status,
        ) {
            self.store.begin_load();
            self.status = format!("Loading directory from {}", self.endpoint);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    // Don't clobber the in-flight load status.
                    if !self.store.is_loading() {
                        self.status = message;
                    }
                }
                UiEvent::DirectoryLoaded(records) => {
                    let count = records.len();
                    self.store.complete_load(records);
                    let now = Local::now();
                    self.loaded_at = Some(now);
                    self.status = loaded_status_line(count, now);
                }
                UiEvent::DirectoryLoadFailed(message) => {
                    self.store.fail_load(message);
                    self.status = "Directory load failed".to_string();
                }
            }
        }
    }

    fn submit_draft(&mut self) {
        let was_editing = self.store.draft().is_editing();
        if self.store.submit_draft().is_ok() {
            self.status = if was_editing {
                "Record updated".to_string()
            } else {
                "Record added".to_string()
            };
        }
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(error) = self.store.last_error() else {
            return;
        };
        let message = error.to_string();

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.store.clear_error();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_form_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("record_form_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let editing = self.store.draft().is_editing();
                ui.heading(form_heading(editing));
                if let DraftMode::Edit(id) = self.store.draft().mode {
                    ui.weak(format!("Updating record {id}"));
                }
                ui.add_space(6.0);

                let draft = self.store.draft_mut();
                let first_resp = form_text_field(
                    ui,
                    "draft_first_name",
                    "First name",
                    "Leanne",
                    &mut draft.first_name,
                );
                ui.add_space(4.0);
                let last_resp = form_text_field(
                    ui,
                    "draft_last_name",
                    "Last name",
                    "Graham",
                    &mut draft.last_name,
                );
                ui.add_space(4.0);
                let email_resp = form_text_field(
                    ui,
                    "draft_email",
                    "Email",
                    "leanne@example.com",
                    &mut draft.email,
                );

                let enter_pressed = ctx.input(|i| i.key_pressed(egui::Key::Enter));
                let field_focused =
                    first_resp.has_focus() || last_resp.has_focus() || email_resp.has_focus();
                if enter_pressed && field_focused {
                    self.submit_draft();
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button(submit_button_label(editing)).clicked() {
                        self.submit_draft();
                    }
                    if editing && ui.button("Cancel").clicked() {
                        self.store.cancel_edit();
                    }
                });
            });
    }

    fn show_record_grid(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.show_error_banner(ui);

            ui.horizontal(|ui| {
                ui.heading("Records");
                ui.weak(record_count_label(self.store.records().len()));
            });
            ui.add_space(6.0);

            let mut action = None;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for record in self.store.records() {
                        if let Some(picked) = record_card(ui, record) {
                            action = Some(picked);
                        }
                        ui.add_space(6.0);
                    }
                    if self.store.records().is_empty() {
                        if self.store.is_loading() {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.weak("Loading directory");
                            });
                        } else {
                            ui.weak("No records. Add one with the form on the left.");
                        }
                    }
                });

            match action {
                Some(CardAction::Edit(id)) => {
                    self.store.begin_edit(id);
                }
                Some(CardAction::Delete(id)) => self.store.delete(id),
                None => {}
            }
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.store.is_loading() {
                    ui.spinner();
                }
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let reload =
                        ui.add_enabled(!self.store.is_loading(), egui::Button::new("Reload"));
                    if reload.clicked() {
                        self.request_directory_load();
                    }
                });
            });
        });
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_form_panel(ctx);
        self.show_status_bar(ctx);
        self.show_record_grid(ctx);

        if self.store.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn form_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 28.0], edit)
}

fn record_card(ui: &mut egui::Ui, record: &Record) -> Option<CardAction> {
    let mut action = None;
    egui::Frame::group(ui.style())
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(record.full_name()).strong());
                    ui.weak(&record.email);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Delete").clicked() {
                        action = Some(CardAction::Delete(record.id));
                    }
                    if ui.button("Edit").clicked() {
                        action = Some(CardAction::Edit(record.id));
                    }
                });
            });
        });
    action
}

fn form_heading(editing: bool) -> &'static str {
    if editing {
        "Edit record"
    } else {
        "New record"
    }
}

fn submit_button_label(editing: bool) -> &'static str {
    if editing {
        "Save changes"
    } else {
        "Add record"
    }
}

fn record_count_label(count: usize) -> String {
    if count == 1 {
        "1 record".to_string()
    } else {
        format!("{count} records")
    }
}

fn loaded_status_line(count: usize, at: DateTime<Local>) -> String {
    format!(
        "Loaded {} at {}",
        record_count_label(count),
        at.format("%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::{form_heading, record_count_label, submit_button_label};

    #[test]
    fn record_count_label_pluralizes() {
        assert_eq!(record_count_label(0), "0 records");
        assert_eq!(record_count_label(1), "1 record");
        assert_eq!(record_count_label(10), "10 records");
    }

    #[test]
    fn form_labels_follow_draft_mode() {
        assert_eq!(form_heading(false), "New record");
        assert_eq!(form_heading(true), "Edit record");
        assert_eq!(submit_button_label(false), "Add record");
        assert_eq!(submit_button_label(true), "Save changes");
    }
}
