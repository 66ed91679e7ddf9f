//! Yes/no confirmation window shown before an action runs

use eframe::egui;

use crate::menu::Confirmation;

// Import constants from parent module
use super::super::constants::{BANNER_WIDTH, ITEM_SPACING};

/// What the user chose, once they chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

/// Renders the confirmation window and returns the choice once one is made.
pub fn show(ctx: &egui::Context, confirmation: &Confirmation) -> Option<ConfirmOutcome> {
    let mut outcome = None;

    egui::Window::new(confirmation.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.set_max_width(BANNER_WIDTH);
            ui.label(confirmation.text);

            ui.add_space(ITEM_SPACING);

            ui.horizontal(|ui| {
                if ui.button("Si").clicked() {
                    outcome = Some(ConfirmOutcome::Confirmed);
                }

                if ui.button("No").clicked() {
                    outcome = Some(ConfirmOutcome::Cancelled);
                }
            });
        });

    outcome
}
