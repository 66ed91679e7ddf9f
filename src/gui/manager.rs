//! Main window implemented with egui/eframe

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info, warn};

use crate::constants::fragments;
use crate::launcher::{Launcher, SpawnError};
use crate::menu::{Confirmation, MenuAction};
use crate::notify::{NoticeKind, Notifier};

use super::components::confirm_dialog::{self, ConfirmOutcome};
use super::components::fragments_dialog::{FragmentsPrompt, PromptOutcome};
use super::components::notices;
use super::constants::*;

/// The one dialog sequence in flight, if any.
enum DialogState {
    Idle,
    Confirming {
        action: MenuAction,
        confirmation: Confirmation,
    },
    PromptingFragments(FragmentsPrompt),
}

struct LauncherApp {
    launcher: Launcher,
    notifier: Notifier,
    dialog: DialogState,
    fragments_path: PathBuf,
    last_process_check: Instant,
}

impl LauncherApp {
    fn new(cc: &CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx);
        Self::with_fragments_path(PathBuf::from(fragments::FILE_NAME))
    }

    fn with_fragments_path(fragments_path: PathBuf) -> Self {
        info!("Initializing launcher window");
        Self {
            launcher: Launcher::new(),
            notifier: Notifier::new(),
            dialog: DialogState::Idle,
            fragments_path,
            last_process_check: Instant::now(),
        }
    }

    /// Entry point for a menu button press.
    fn activate(&mut self, action: MenuAction, ctx: &egui::Context) {
        if action == MenuAction::Salir {
            info!("Quit requested from menu");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        match action.confirmation() {
            Some(confirmation) => {
                self.dialog = DialogState::Confirming {
                    action,
                    confirmation,
                };
            }
            None => self.launch(action),
        }
    }

    fn handle_confirm_outcome(&mut self, action: MenuAction, outcome: ConfirmOutcome) {
        self.dialog = DialogState::Idle;
        match outcome {
            ConfirmOutcome::Confirmed if action.needs_fragments() => {
                self.dialog = DialogState::PromptingFragments(FragmentsPrompt::new());
            }
            ConfirmOutcome::Confirmed => self.launch(action),
            ConfirmOutcome::Cancelled => {
                info!(action = action.label(), "Cancelled at confirmation");
                self.notifier.show_transient(
                    action.cancelled_message(),
                    NoticeKind::Warning,
                    Duration::from_millis(STATUS_DURATION_MS),
                );
            }
        }
    }

    fn handle_prompt_outcome(&mut self, outcome: PromptOutcome) {
        self.dialog = DialogState::Idle;
        match outcome {
            PromptOutcome::Submitted(lists) => {
                // A failed write aborts the action; the program must not
                // start against stale lists
                if let Err(err) = lists.write_to(&self.fragments_path) {
                    warn!(error = ?err, "Fragment write failed, launch aborted");
                    self.notifier.show_transient(
                        format!("Error: {err:#}"),
                        NoticeKind::Error,
                        Duration::from_millis(STATUS_DURATION_MS),
                    );
                    return;
                }
                self.launch(MenuAction::RenombrarAudios);
            }
            PromptOutcome::Cancelled(message) => {
                info!(message, "Fragment prompt cancelled");
                self.notifier.show_transient(
                    message,
                    NoticeKind::Warning,
                    Duration::from_millis(STATUS_DURATION_MS),
                );
            }
        }
    }

    /// Spawns the action's program and banners the result.
    fn launch(&mut self, action: MenuAction) {
        let Some(program) = action.program() else {
            return;
        };

        let duration = Duration::from_millis(BANNER_DURATION_MS);
        match self.launcher.spawn(program) {
            Ok(()) => {
                self.notifier.show_blocking(
                    format!("Se ha iniciado '{program}'."),
                    NoticeKind::Success,
                    duration,
                );
            }
            Err(err @ SpawnError::AlreadyRunning) => {
                warn!(program, "Spawn rejected, a process is already running");
                self.notifier
                    .show_blocking(err.to_string(), NoticeKind::Warning, duration);
            }
            Err(err) => {
                error!(program, error = %err, "Spawn failed");
                self.notifier
                    .show_blocking(err.to_string(), NoticeKind::Error, duration);
            }
        }
    }

    fn poll_process(&mut self) {
        if self.last_process_check.elapsed() < Duration::from_millis(PROCESS_CHECK_INTERVAL_MS) {
            return;
        }
        self.last_process_check = Instant::now();

        if let Some(exit) = self.launcher.poll_exit() {
            self.notifier.show_blocking(
                format!("'{}' ha terminado su ejecucion.", exit.name),
                NoticeKind::Info,
                Duration::from_millis(BANNER_DURATION_MS),
            );
        }
    }

    /// Keeps the window repainting exactly as often as the pending work needs.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.notifier.banner().is_some() {
            ctx.request_repaint_after(Duration::from_millis(BANNER_ANIMATION_INTERVAL_MS));
        } else if let Some(deadline) = self.notifier.next_deadline(now) {
            ctx.request_repaint_after(deadline);
        }
        if self.launcher.running_program().is_some() {
            ctx.request_repaint_after(Duration::from_millis(PROCESS_CHECK_INTERVAL_MS));
        }
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_process();
        self.notifier.tick(now);

        let busy =
            !matches!(self.dialog, DialogState::Idle) || self.notifier.banner().is_some();

        egui::TopBottomPanel::bottom("status_line")
            .show_separator_line(false)
            .show(ctx, |ui| notices::status_line(ui, &self.notifier));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(SECTION_SPACING);
            ui.vertical_centered(|ui| {
                ui.heading("Bienvenido. Elija una opcion:");
                ui.add_space(SECTION_SPACING);

                ui.add_enabled_ui(!busy, |ui| {
                    for action in MenuAction::ALL {
                        let button =
                            egui::Button::new(egui::RichText::new(action.label()).strong());
                        if ui.add_sized([BUTTON_WIDTH, BUTTON_HEIGHT], button).clicked() {
                            self.activate(action, ctx);
                        }
                        ui.add_space(ITEM_SPACING);
                    }
                });
            });
        });

        // A live banner suspends any open dialog instead of stacking on top
        if self.notifier.banner().is_none() {
            match &mut self.dialog {
                DialogState::Idle => {}
                DialogState::Confirming {
                    action,
                    confirmation,
                } => {
                    let (action, confirmation) = (*action, *confirmation);
                    if let Some(outcome) = confirm_dialog::show(ctx, &confirmation) {
                        self.handle_confirm_outcome(action, outcome);
                    }
                }
                DialogState::PromptingFragments(prompt) => {
                    if let Some(outcome) = prompt.show(ctx) {
                        self.handle_prompt_outcome(outcome);
                    }
                }
            }
        }

        if let Some(notice) = self.notifier.banner() {
            notices::banner(ctx, notice, now);
        }

        self.schedule_repaint(ctx, now);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(program) = self.launcher.running_program() {
            info!(program, "Window closing, leaving the program running");
        }
        info!("Launcher exiting");
    }
}

fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = COLOR_PRIMARY;
    visuals.window_fill = COLOR_SECONDARY;
    visuals.override_text_color = Some(COLOR_TEXT);
    visuals.widgets.inactive.weak_bg_fill = COLOR_ACCENT;
    visuals.widgets.hovered.weak_bg_fill = COLOR_ACCENT_DARK;
    visuals.widgets.active.weak_bg_fill = COLOR_ACCENT_DARK;
    ctx.set_visuals(visuals);
}

pub fn run_gui() -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(false)
            .with_title("Lanzador de Aplicaciones"),
        ..Default::default()
    };

    eframe::run_native(
        "Lanzador de Aplicaciones",
        options,
        Box::new(|cc| Ok(Box::new(LauncherApp::new(cc)))),
    )
    .map_err(|err| anyhow!("Failed to launch window: {err}"))
}
