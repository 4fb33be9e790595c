//! Terminal host for the hoverpick popup.
//!
//! [`TuiSurface`] implements the popup's surface contract on top of ratatui:
//! it records what the popup draws during a frame, hit-tests the mouse against
//! the previous render and turns the recording into widgets. [`run`] wires it
//! to a real terminal with the crossterm event loop.

mod delegate;
pub mod input;
mod render;
mod runtime;
mod surface;
pub mod theme;


pub use delegate::{LabelDelegate, SELECTED_PREFIX};
pub use input::{FrameInput, SearchEdit};
pub use render::VISIBLE_ROWS;
pub use runtime::{LOG_PANE_HEIGHT, PickOutcome, RunOptions, run};
pub use surface::TuiSurface;
pub use theme::Theme;
