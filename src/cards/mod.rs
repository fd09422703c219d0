//! Card deck model
//!
//! This module provides the data side of the deck:
//! - [`card`]: a single [`Card`] with its id, label and [`CardStyle`]
//! - [`registry`]: the ordered, append-only [`CardRegistry`]
//! - [`errors`]: [`CardError`], shared with the selection controller
//!
//! The registry knows nothing about rendering. Colours are plain RGB triples
//! and the UI converts them when drawing.

pub mod card;
pub mod errors;
pub mod registry;

pub use card::{Card, CardStyle, Rgb};
pub use errors::CardError;
pub use registry::CardRegistry;
