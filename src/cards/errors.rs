//! Errors raised by the card registry and the selection controller

/// Misuse of a card id.
///
/// Both variants are wiring defects in normal operation (every control is
/// bound to a registered id at startup), but they are returned as values so
/// callers and tests get a deterministic failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// A card with this id is already registered
    #[error("card '{id}' is already registered")]
    DuplicateId { id: String },

    /// No card with this id is registered
    #[error("card '{id}' not found")]
    NotFound { id: String },
}

impl CardError {
    /// The id the error is about
    pub fn id(&self) -> &str {
        match self {
            CardError::DuplicateId { id } | CardError::NotFound { id } => id,
        }
    }
}
