//! egui front end: main window, dialogs and notices

pub mod components;
pub mod constants;
mod manager;

pub use manager::run_gui;
