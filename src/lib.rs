//! # Introduction
//!
//! cardswitch shows a deck of coloured cards in a terminal window, one at a
//! time, with a button per card that brings it to the front.
//!
//! ## Layout
//!
//! ```text
//! CLI → CardRegistry → SelectionController → TUI
//! ```
//!
//! 1. [`cli`] — command-line options; builds the registry.
//! 2. [`cards`] — [`cards::Card`] and the append-only [`cards::CardRegistry`].
//! 3. [`selection`] — [`selection::SelectionController`], the only mutable
//!    state: which card is visible.
//! 4. [`ui`] — ratatui-based TUI that draws the visible card and routes key
//!    presses and button clicks to the controller.
//! 5. [`logging`] — optional file-backed `tracing` subscriber.

pub mod cards;
pub mod cli;
pub mod logging;
pub mod selection;
pub mod ui;
