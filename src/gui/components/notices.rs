//! Banner and status line rendering for the notifier

use std::time::Instant;

use eframe::egui;

use crate::notify::{Notice, NoticeKind, Notifier};

use super::super::constants::*;

fn color(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Success => COLOR_SUCCESS,
        NoticeKind::Error => COLOR_ERROR,
        NoticeKind::Warning => COLOR_WARNING,
        NoticeKind::Info => COLOR_INFO,
    }
}

/// Draws the centered banner with its progress bar. A full-window backdrop
/// swallows pointer input underneath for as long as the banner is visible.
pub fn banner(ctx: &egui::Context, notice: &Notice, now: Instant) {
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("banner_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(
                screen,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(96),
            );
        });

    egui::Area::new(egui::Id::new("banner"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(COLOR_SECONDARY)
                .show(ui, |ui| {
                    ui.set_width(BANNER_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.add_space(ITEM_SPACING);
                        ui.colored_label(color(notice.kind), &notice.text);
                        ui.add_space(ITEM_SPACING);
                    });
                    ui.add(
                        egui::ProgressBar::new(notice.progress_at(now))
                            .fill(COLOR_ACCENT)
                            .desired_height(5.0),
                    );
                });
        });
}

/// Draws the status line at the bottom of the main window.
pub fn status_line(ui: &mut egui::Ui, notifier: &Notifier) {
    match notifier.status() {
        Some(notice) => {
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    color(notice.kind),
                    egui::RichText::new(&notice.text).italics(),
                );
            });
        }
        // Keep the reserved height stable while there is nothing to say
        None => ui.add_space(ui.text_style_height(&egui::TextStyle::Body)),
    }
}
