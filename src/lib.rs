//! Hover-popup selector for the terminal.
//!
//! The popup itself lives in [`popup`] and is independent of any rendering
//! backend; [`tui`] hosts it in a ratatui terminal. This crate adds the
//! directory and logging helpers used by the `hoverpick` binary.

pub mod app_dirs;
pub mod logging;

pub use hoverpick_popup as popup;
pub use hoverpick_tui as tui;
