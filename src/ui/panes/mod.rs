//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`window`]: the titled, centred frame that stands in for a desktop window
//! - [`card`]: the visible card, filled with its background colour
//! - [`controls`]: one button per card, plus the hit areas used for clicks
//! - [`status`]: status bar with keybindings and the last action
//!
//! Each module exports a `render_*` function that draws into a [`Rect`] and
//! keeps no state between frames. [`controls::render_controls`] returns the
//! button areas it drew so the app can route mouse clicks.
//!
//! [`Rect`]: ratatui::layout::Rect

pub mod card;
pub mod controls;
pub mod status;
pub mod window;

pub use card::render_card_pane;
pub use controls::{render_controls, ControlHit, ControlsRenderData};
pub use status::render_status_bar;
pub use window::{centered_window, render_window};
