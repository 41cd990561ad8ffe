// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spread aggregate: a named layout plus its deck slots.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::deck_slot::{self, DeckSlot};
use crate::position::{self, Position};

/// A named, reusable card layout.
///
/// Spreads are created empty and mutated through an editing session. The
/// model itself never persists anything and enforces no layout invariants
/// beyond what its mutators do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spread {
    /// Display name. Stores reject empty names at save time.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Layout cells, in stacking order.
    pub positions: Vec<Position>,
    /// Deck roles the positions draw from. Empty means a single implicit slot.
    pub deck_slots: Vec<DeckSlot>,
}

impl Spread {
    /// Creates an empty spread with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description, builder style.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether positions are partitioned across more than one deck slot.
    ///
    /// Slot-less and single-slot spreads collapse to one reading-level deck,
    /// so per-position slot assignment is only offered when this is true.
    #[must_use]
    pub fn is_multi_slot(&self) -> bool {
        self.deck_slots.len() > 1
    }

    /// Looks up a slot by key.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&DeckSlot> {
        self.deck_slots.iter().find(|slot| slot.key == key)
    }

    /// Adds a slot with an auto-generated key and returns that key.
    pub fn add_slot(
        &mut self,
        cartomancy_type: impl Into<String>,
        label: Option<String>,
    ) -> String {
        let key = deck_slot::next_key(&self.deck_slots);
        let mut slot = DeckSlot::new(key.clone(), cartomancy_type);
        slot.label = label;
        self.deck_slots.push(slot);
        key
    }

    /// Removes the slot with `key`, returning it if present.
    ///
    /// Positions referencing the removed key keep their reference; readers
    /// resolve such keys to the first remaining slot and report the dangling
    /// reference.
    pub fn remove_slot(&mut self, key: &str) -> Option<DeckSlot> {
        let index = self.deck_slots.iter().position(|slot| slot.key == key)?;
        Some(self.deck_slots.remove(index))
    }

    /// The union of all position frames, or `None` when the layout is empty.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        position::content_bounds(&self.positions)
    }

    /// The name a duplicate of this spread receives.
    #[must_use]
    pub fn copy_name(&self) -> String {
        format!("Copy of {}", self.name)
    }

    /// Deep-copies the layout under a fresh "Copy of" name.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            name: self.copy_name(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn add_slot_assigns_sequential_keys() {
        let mut spread = Spread::new("Mixed Draw");
        assert_eq!(spread.add_slot("Tarot", None), "A");
        assert_eq!(spread.add_slot("Lenormand", Some("Clarifier".into())), "B");

        assert!(spread.slot("A").is_some());
        assert_eq!(spread.slot("B").map(DeckSlot::display_label), Some("Clarifier"));
        assert!(spread.is_multi_slot());
    }

    #[test]
    fn twenty_seventh_slot_gets_numeric_key() {
        let mut spread = Spread::new("Everything");
        for _ in 0..26 {
            spread.add_slot("Tarot", None);
        }
        assert_eq!(spread.add_slot("Tarot", None), "27");
    }

    #[test]
    fn remove_slot_leaves_position_references_alone() {
        let mut spread = Spread::new("Two Deck");
        let key = spread.add_slot("Tarot", None);
        spread.add_slot("Lenormand", None);

        let mut position = Position::new(0.0, 0.0);
        position.deck_slot_key = Some(key.clone());
        spread.positions.push(position);

        let removed = spread.remove_slot(&key);
        assert_eq!(removed.map(|slot| slot.key), Some("A".to_string()));
        // The dangling reference survives; resolution handles the fallback.
        assert_eq!(spread.positions[0].deck_slot_key.as_deref(), Some("A"));
        assert!(!spread.is_multi_slot());
    }

    #[test]
    fn duplicate_renames_and_deep_copies() {
        let mut spread = Spread::new("Celtic Cross").with_description("Classic");
        spread.positions.push(Position::new(10.0, 10.0));
        spread.add_slot("Tarot", None);

        let copy = spread.duplicate();
        assert_eq!(copy.name, "Copy of Celtic Cross");
        assert_eq!(copy.description, "Classic");
        assert_eq!(copy.positions, spread.positions);
        assert_eq!(copy.deck_slots, spread.deck_slots);
    }
}
