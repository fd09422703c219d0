//! Ordered card registry
//!
//! Cards are kept in insertion order in a `Vec`; an `FxHashMap` indexes them
//! by id. The registry is append-only: there is no removal, so an index handed
//! out by [`CardRegistry::index_of`] stays valid for the registry's lifetime.

use super::card::{Card, CardStyle};
use super::errors::CardError;
use rustc_hash::FxHashMap;

/// Ids of the built-in demo deck
pub const CARD_ONE: &str = "Card One";
pub const CARD_TWO: &str = "Card Two";
pub const CARD_THREE: &str = "Card Three";

#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl CardRegistry {
    pub fn new() -> Self {
        CardRegistry::default()
    }

    /// The three-card deck: pink, cyan and light grey panels
    pub fn demo() -> Self {
        let mut registry = CardRegistry::new();
        for (id, style) in [
            (CARD_ONE, CardStyle::solid(255, 175, 175)),
            (CARD_TWO, CardStyle::solid(0, 255, 255)),
            (CARD_THREE, CardStyle::solid(192, 192, 192)),
        ] {
            // Ids above are distinct
            let _ = registry.register(id, id, style);
        }
        registry
    }

    /// Register a new card.
    ///
    /// Fails with [`CardError::DuplicateId`] without touching the registry if
    /// `id` is already taken.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        style: CardStyle,
    ) -> Result<&Card, CardError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(CardError::DuplicateId { id });
        }

        let position = self.cards.len();
        self.index.insert(id.clone(), position);
        self.cards.push(Card::new(id, label, style));
        Ok(&self.cards[position])
    }

    /// Look up a card by id
    pub fn get(&self, id: &str) -> Result<&Card, CardError> {
        self.index_of(id)
            .map(|i| &self.cards[i])
            .ok_or_else(|| CardError::NotFound { id: id.to_string() })
    }

    /// All cards in insertion order. Each call starts a fresh iteration.
    pub fn all(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Insertion position of `id`
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get_index(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> CardStyle {
        CardStyle::solid(128, 128, 128)
    }

    #[test]
    fn test_demo_deck() {
        let registry = CardRegistry::demo();
        let ids: Vec<&str> = registry.all().map(Card::id).collect();
        assert_eq!(ids, vec![CARD_ONE, CARD_TWO, CARD_THREE]);
        assert_eq!(
            registry.get(CARD_TWO).unwrap().style(),
            CardStyle::solid(0, 255, 255)
        );
        assert_eq!(registry.get(CARD_ONE).unwrap().label(), CARD_ONE);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        let card = registry.register("a", "Alpha", grey()).unwrap();
        assert_eq!(card.id(), "a");
        assert_eq!(card.label(), "Alpha");

        registry.register("b", "Beta", grey()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.index_of("b"), Some(1));
        assert_eq!(registry.get_index(0).map(Card::id), Some("a"));
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }

    #[test]
    fn test_duplicate_id_leaves_registry_unchanged() {
        let mut registry = CardRegistry::new();
        registry.register("a", "Alpha", grey()).unwrap();

        let err = registry
            .register("a", "Other", CardStyle::solid(1, 2, 3))
            .unwrap_err();
        assert_eq!(err, CardError::DuplicateId { id: "a".to_string() });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().label(), "Alpha");
        assert_eq!(registry.get("a").unwrap().style(), grey());
    }

    #[test]
    fn test_get_unknown() {
        let registry = CardRegistry::demo();
        assert_eq!(
            registry.get("Nonexistent"),
            Err(CardError::NotFound {
                id: "Nonexistent".to_string()
            })
        );
    }

    #[test]
    fn test_all_is_restartable() {
        let registry = CardRegistry::demo();
        let first: Vec<&Card> = registry.all().collect();
        let second: Vec<&Card> = registry.all().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
