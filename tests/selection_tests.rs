// Integration tests for the card registry and selection controller

use cardswitch::cards::{Card, CardError, CardRegistry, CardStyle};
use cardswitch::selection::SelectionController;
use std::collections::HashSet;

fn deck(ids: &[&str]) -> CardRegistry {
    let mut registry = CardRegistry::new();
    for (i, id) in ids.iter().enumerate() {
        let shade = (i * 40) as u8;
        registry
            .register(*id, *id, CardStyle::solid(shade, shade, shade))
            .expect("ids are distinct");
    }
    registry
}

#[test]
fn test_reference_scenario() {
    let registry = CardRegistry::demo();
    let ids: Vec<&str> = registry.all().map(Card::id).collect();
    assert_eq!(ids, vec!["Card One", "Card Two", "Card Three"]);

    let mut controller = SelectionController::with_first(&registry).unwrap();
    assert_eq!(controller.current(), "Card One");

    controller.select("Card Two").unwrap();
    assert_eq!(controller.current(), "Card Two");

    controller.select("Card Three").unwrap();
    assert_eq!(controller.current(), "Card Three");

    let err = controller.select("Nonexistent").unwrap_err();
    assert!(matches!(err, CardError::NotFound { ref id } if id == "Nonexistent"));
    assert_eq!(controller.current(), "Card Three");

    // Selecting the visible card again is not an error
    controller.select("Card Three").unwrap();
    assert_eq!(controller.current(), "Card Three");
}

#[test]
fn test_current_tracks_last_select() {
    let ids = ["a", "b", "c", "d", "e"];
    let registry = deck(&ids);
    let mut controller = SelectionController::with_first(&registry).unwrap();

    // Deterministic pseudo-random walk over the deck
    let mut state: u32 = 7;
    for _ in 0..200 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let target = ids[(state >> 16) as usize % ids.len()];
        controller.select(target).unwrap();
        assert_eq!(controller.current(), target);
    }
}

#[test]
fn test_failed_select_keeps_state() {
    let registry = deck(&["a", "b"]);
    let mut controller = SelectionController::new(&registry, "b").unwrap();

    for bad in ["", "A", "c", " b"] {
        assert_eq!(
            controller.select(bad).unwrap_err(),
            CardError::NotFound { id: bad.to_string() }
        );
        assert_eq!(controller.current(), "b");
    }
}

#[test]
fn test_all_unaffected_by_selection() {
    let registry = CardRegistry::demo();
    let before: Vec<Card> = registry.all().cloned().collect();

    let mut controller = SelectionController::with_first(&registry).unwrap();
    for id in ["Card Three", "Card One", "Card Two", "Card Two"] {
        controller.select(id).unwrap();
    }
    controller.next();
    controller.previous();

    let after: Vec<Card> = registry.all().cloned().collect();
    assert_eq!(before, after);

    let ids: HashSet<&str> = after.iter().map(Card::id).collect();
    assert_eq!(ids.len(), after.len());
    assert_eq!(after.len(), 3);
}

#[test]
fn test_duplicate_register_rejected() {
    let mut registry = CardRegistry::demo();
    let err = registry
        .register("Card Two", "Again", CardStyle::solid(1, 1, 1))
        .unwrap_err();
    assert_eq!(
        err,
        CardError::DuplicateId {
            id: "Card Two".to_string()
        }
    );
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get("Card Two").unwrap().label(), "Card Two");
}

#[test]
fn test_larger_deck_navigation() {
    let registry = deck(&["a", "b", "c", "d"]);
    let mut controller = SelectionController::with_first(&registry).unwrap();

    let visited: Vec<&str> = (0..5).map(|_| controller.next().id()).collect();
    assert_eq!(visited, vec!["b", "c", "d", "a", "b"]);

    assert_eq!(controller.last().id(), "d");
    assert_eq!(controller.previous().id(), "c");
    assert_eq!(controller.first().id(), "a");
    assert_eq!(controller.previous().id(), "d");
}
