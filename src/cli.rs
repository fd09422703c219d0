//! Command-line options
//!
//! Everything is optional: with no arguments the built-in three-card deck is
//! shown starting at its first card.

use crate::cards::{CardError, CardRegistry, CardStyle, Rgb};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "cardswitch", version, about = "Switch between coloured cards")]
pub struct Cli {
    /// Card shown at startup (defaults to the first card)
    #[arg(long, value_name = "ID")]
    pub initial: Option<String>,

    /// Replace the built-in deck; repeat to add cards in order
    #[arg(long = "card", value_name = "ID=#RRGGBB")]
    pub cards: Vec<CardSpec>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level instead of info
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the registry: the `--card` deck if any was given, else the demo deck
    pub fn build_registry(&self) -> Result<CardRegistry, CardError> {
        if self.cards.is_empty() {
            return Ok(CardRegistry::demo());
        }

        let mut registry = CardRegistry::new();
        for spec in &self.cards {
            registry.register(spec.id.as_str(), spec.id.as_str(), spec.style)?;
        }
        Ok(registry)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardSpecError {
    #[error("expected ID=#RRGGBB, got '{0}'")]
    MissingColor(String),

    #[error("card id must not be empty")]
    EmptyId,

    #[error("invalid colour '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// One `--card` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub id: String,
    pub style: CardStyle,
}

impl FromStr for CardSpec {
    type Err = CardSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last '=' so ids may contain one
        let (id, color) = s
            .rsplit_once('=')
            .ok_or_else(|| CardSpecError::MissingColor(s.to_string()))?;

        let id = id.trim();
        if id.is_empty() {
            return Err(CardSpecError::EmptyId);
        }

        let Rgb(r, g, b) = Rgb::from_hex(color.trim())
            .ok_or_else(|| CardSpecError::InvalidColor(color.to_string()))?;

        Ok(CardSpec {
            id: id.to_string(),
            style: CardStyle::solid(r, g, b),
        })
    }
}
