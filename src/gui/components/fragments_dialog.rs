//! Two-step fragment list prompt for the renaming action
//!
//! The odd list is asked first, then the even list. Cancelling either step,
//! or submitting an empty value, abandons the whole sequence without
//! touching the file.

use eframe::egui;

use crate::constants::fragments;
use crate::fragments::FragmentLists;

// Import constants from parent module
use super::super::constants::{BANNER_WIDTH, ITEM_SPACING};

/// Which list is currently being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptStep {
    Odd,
    Even,
}

impl PromptStep {
    fn question(&self) -> &'static str {
        match self {
            PromptStep::Odd => {
                "Ingrese lista de fragmentos para archivos IMPARES (ejemplo: 2,3,1,2):"
            }
            PromptStep::Even => {
                "Ingrese lista de fragmentos para archivos PARES (ejemplo: 2,3,1,2):"
            }
        }
    }

    fn cancelled_message(&self) -> &'static str {
        match self {
            PromptStep::Odd => "Entrada de fragmentos IMPARES cancelada.",
            PromptStep::Even => "Entrada de fragmentos PARES cancelada.",
        }
    }
}

/// How the prompt sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Both lists collected; nothing has been written yet.
    Submitted(FragmentLists),
    /// The user backed out; the message names the abandoned step.
    Cancelled(&'static str),
}

/// State of the prompt sequence, created when the confirmation passes and
/// dropped when the sequence ends either way.
pub struct FragmentsPrompt {
    step: PromptStep,
    input: String,
    odd: Option<String>,
}

impl FragmentsPrompt {
    pub fn new() -> Self {
        Self {
            step: PromptStep::Odd,
            input: fragments::DEFAULT_COUNTS.to_string(),
            odd: None,
        }
    }

    /// Accepts the current input and advances a step. An empty value cancels
    /// the whole sequence; accepting the second step yields both lists.
    fn submit(&mut self) -> Option<PromptOutcome> {
        if self.input.trim().is_empty() {
            return Some(PromptOutcome::Cancelled(self.step.cancelled_message()));
        }
        match self.step {
            PromptStep::Odd => {
                self.odd = Some(self.input.clone());
                self.input = fragments::DEFAULT_COUNTS.to_string();
                self.step = PromptStep::Even;
                None
            }
            PromptStep::Even => {
                let odd = self.odd.take().unwrap_or_default();
                Some(PromptOutcome::Submitted(FragmentLists::new(
                    &odd,
                    &self.input,
                )))
            }
        }
    }

    fn cancel(&self) -> PromptOutcome {
        PromptOutcome::Cancelled(self.step.cancelled_message())
    }

    /// Renders the prompt window; returns the outcome once the sequence ends.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PromptOutcome> {
        let mut outcome = None;

        egui::Window::new("Listas de Fragmentos")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(BANNER_WIDTH);
                ui.label(self.step.question());
                ui.text_edit_singleline(&mut self.input);

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Aceptar").clicked() {
                        outcome = self.submit();
                    }

                    if ui.button("Cancelar").clicked() {
                        outcome = Some(self.cancel());
                    }
                });
            });

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_steps_submitted_yield_trimmed_lists() {
        let mut prompt = FragmentsPrompt::new();
        prompt.input = " 2,3,1,2 ".to_string();
        assert!(prompt.submit().is_none());

        prompt.input = "4,1".to_string();
        let outcome = prompt.submit();
        assert_eq!(
            outcome,
            Some(PromptOutcome::Submitted(FragmentLists::new(
                "2,3,1,2", "4,1"
            )))
        );
    }

    #[test]
    fn test_each_step_starts_from_the_default_value() {
        let mut prompt = FragmentsPrompt::new();
        assert_eq!(prompt.input, fragments::DEFAULT_COUNTS);

        prompt.input = "5,5".to_string();
        prompt.submit();
        assert_eq!(prompt.input, fragments::DEFAULT_COUNTS);
    }

    #[test]
    fn test_cancel_on_first_step_names_the_odd_list() {
        let prompt = FragmentsPrompt::new();
        assert_eq!(
            prompt.cancel(),
            PromptOutcome::Cancelled("Entrada de fragmentos IMPARES cancelada.")
        );
    }

    #[test]
    fn test_cancel_on_second_step_names_the_even_list() {
        let mut prompt = FragmentsPrompt::new();
        prompt.submit();
        assert_eq!(
            prompt.cancel(),
            PromptOutcome::Cancelled("Entrada de fragmentos PARES cancelada.")
        );
    }

    #[test]
    fn test_empty_input_cancels_the_sequence() {
        let mut prompt = FragmentsPrompt::new();
        prompt.input = "   ".to_string();
        assert_eq!(
            prompt.submit(),
            Some(PromptOutcome::Cancelled(
                "Entrada de fragmentos IMPARES cancelada."
            ))
        );
    }

    #[test]
    fn test_empty_second_step_cancels_too() {
        let mut prompt = FragmentsPrompt::new();
        prompt.submit();

        prompt.input = String::new();
        assert_eq!(
            prompt.submit(),
            Some(PromptOutcome::Cancelled(
                "Entrada de fragmentos PARES cancelada."
            ))
        );
    }
}
