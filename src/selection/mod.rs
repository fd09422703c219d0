//! Selection controller
//!
//! Holds the one piece of mutable state in the application: which card is
//! visible. The controller borrows the [`CardRegistry`] it selects from, so the
//! current id can never point outside of it.
//!
//! # Transitions
//!
//! Every registered id is a state. [`SelectionController::select`] moves from
//! any state to the target; [`first`](SelectionController::first),
//! [`last`](SelectionController::last), [`next`](SelectionController::next) and
//! [`previous`](SelectionController::previous) are shortcuts that resolve a
//! target by position and then take the same path. `next` and `previous` wrap
//! around the ends of the deck.

use crate::cards::{Card, CardError, CardRegistry};
use tracing::debug;

pub struct SelectionController<'a> {
    registry: &'a CardRegistry,
    /// Position of the visible card in the registry
    current: usize,
}

impl<'a> SelectionController<'a> {
    /// Create a controller showing `initial`.
    ///
    /// Fails with [`CardError::NotFound`] if `initial` is not registered.
    pub fn new(registry: &'a CardRegistry, initial: &str) -> Result<Self, CardError> {
        let current = registry
            .index_of(initial)
            .ok_or_else(|| CardError::NotFound {
                id: initial.to_string(),
            })?;
        Ok(SelectionController { registry, current })
    }

    /// Create a controller showing the first registered card
    pub fn with_first(registry: &'a CardRegistry) -> Result<Self, CardError> {
        let first = registry.get_index(0).ok_or_else(|| CardError::NotFound {
            id: String::new(),
        })?;
        Self::new(registry, first.id())
    }

    /// Make `id` the visible card and return it.
    ///
    /// On [`CardError::NotFound`] the current selection is left as it was.
    pub fn select(&mut self, id: &str) -> Result<&'a Card, CardError> {
        let target = self
            .registry
            .index_of(id)
            .ok_or_else(|| CardError::NotFound { id: id.to_string() })?;
        Ok(self.show(target))
    }

    pub fn current(&self) -> &'a str {
        self.current_card().id()
    }

    pub fn current_card(&self) -> &'a Card {
        &self.registry.all().as_slice()[self.current]
    }

    /// Position of the visible card in the registry
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// True only for the visible card
    pub fn is_visible(&self, id: &str) -> bool {
        self.registry.index_of(id) == Some(self.current)
    }

    pub fn registry(&self) -> &'a CardRegistry {
        self.registry
    }

    pub fn first(&mut self) -> &'a Card {
        self.show(0)
    }

    pub fn last(&mut self) -> &'a Card {
        self.show(self.registry.len() - 1)
    }

    pub fn next(&mut self) -> &'a Card {
        self.show((self.current + 1) % self.registry.len())
    }

    pub fn previous(&mut self) -> &'a Card {
        let len = self.registry.len();
        self.show((self.current + len - 1) % len)
    }

    fn show(&mut self, target: usize) -> &'a Card {
        self.current = target;
        let card = self.current_card();
        debug!(event = "selection.changed", card = card.id(), index = target);
        card
    }
}
