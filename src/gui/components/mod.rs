//! Reusable pieces of the main window

pub mod confirm_dialog;
pub mod fragments_dialog;
pub mod notices;
