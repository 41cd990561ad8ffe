// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot-to-deck bindings and slot reference resolution.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;
use hashbrown::HashMap;

use tableau_model::{DeckSlot, Spread};

use crate::decks::{Deck, DeckId};

/// Key of the synthetic slot used when a spread declares none.
pub const IMPLICIT_SLOT_KEY: &str = "A";

/// How a position's slot reference resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotResolution {
    /// Index into the effective slot list.
    pub index: usize,
    /// The reference named a key no slot carries, so the first slot stood
    /// in. Stored layouts can legitimately contain such keys (a slot may be
    /// removed after positions were assigned), so this is reported rather
    /// than treated as an error.
    pub dangling: bool,
}

/// A bound deck: just enough identity to stamp onto cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundDeck {
    /// Store identifier.
    pub id: DeckId,
    /// Display name snapshot.
    pub name: String,
}

impl From<&Deck> for BoundDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id,
            name: deck.name.clone(),
        }
    }
}

/// Transient slot-to-deck choices for one reading.
///
/// Never persisted: the bindings exist only to constrain per-position card
/// pickers and to stamp deck identity onto each card as it is filled in.
#[derive(Clone, Debug, Default)]
pub struct SlotBindings {
    map: HashMap<String, BoundDeck>,
}

impl SlotBindings {
    /// Creates an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `deck` to `slot_key`, returning the previously bound deck.
    pub fn bind(&mut self, slot_key: impl Into<String>, deck: BoundDeck) -> Option<BoundDeck> {
        self.map.insert(slot_key.into(), deck)
    }

    /// The deck bound to `slot_key`, if any.
    #[must_use]
    pub fn deck_for(&self, slot_key: &str) -> Option<&BoundDeck> {
        self.map.get(slot_key)
    }

    /// Removes the binding for `slot_key`.
    pub fn unbind(&mut self, slot_key: &str) -> Option<BoundDeck> {
        self.map.remove(slot_key)
    }

    /// Drops every binding.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of bound slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no slot is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The slot list a reading actually works with.
///
/// A spread with no declared slots still reads from one deck. Representing
/// that as a synthetic single slot (requiring `fallback_type`, which may be
/// empty for "any deck") keeps the zero- and one-slot cases on the same code
/// path as multi-slot spreads.
#[must_use]
pub fn effective_slots<'a>(spread: &'a Spread, fallback_type: &str) -> Cow<'a, [DeckSlot]> {
    if spread.deck_slots.is_empty() {
        Cow::Owned(vec![DeckSlot::new(IMPLICIT_SLOT_KEY, fallback_type)])
    } else {
        Cow::Borrowed(spread.deck_slots.as_slice())
    }
}

/// Resolves a position's slot reference against an effective slot list.
///
/// An explicit key resolves to its slot; an unknown key falls back to the
/// first slot and is reported as dangling; no key means the first slot.
/// Returns `None` only for an empty slot list, which [`effective_slots`]
/// never produces.
#[must_use]
pub fn resolve_slot(slots: &[DeckSlot], reference: Option<&str>) -> Option<SlotResolution> {
    if slots.is_empty() {
        return None;
    }
    match reference {
        Some(key) => match slots.iter().position(|slot| slot.key == key) {
            Some(index) => Some(SlotResolution {
                index,
                dangling: false,
            }),
            None => Some(SlotResolution {
                index: 0,
                dangling: true,
            }),
        },
        None => Some(SlotResolution {
            index: 0,
            dangling: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::borrow::ToOwned;

    fn slots() -> [DeckSlot; 2] {
        [DeckSlot::new("A", "Tarot"), DeckSlot::new("B", "Lenormand")]
    }

    #[test]
    fn explicit_keys_resolve_to_their_slot() {
        let resolution = resolve_slot(&slots(), Some("B"));
        assert_eq!(
            resolution,
            Some(SlotResolution {
                index: 1,
                dangling: false
            })
        );
    }

    #[test]
    fn missing_reference_means_the_first_slot() {
        let resolution = resolve_slot(&slots(), None);
        assert_eq!(
            resolution,
            Some(SlotResolution {
                index: 0,
                dangling: false
            })
        );
    }

    #[test]
    fn unknown_keys_fall_back_and_report() {
        let resolution = resolve_slot(&slots(), Some("Q"));
        assert_eq!(
            resolution,
            Some(SlotResolution {
                index: 0,
                dangling: true
            })
        );
    }

    #[test]
    fn empty_slot_list_cannot_resolve() {
        assert_eq!(resolve_slot(&[], Some("A")), None);
        assert_eq!(resolve_slot(&[], None), None);
    }

    #[test]
    fn slotless_spread_gets_a_synthetic_slot() {
        let spread = Spread::new("Daily Draw");
        let effective = effective_slots(&spread, "Tarot");
        assert_eq!(effective.len(), 1);
        assert_eq!(effective[0].key, IMPLICIT_SLOT_KEY);
        assert_eq!(effective[0].cartomancy_type, "Tarot");
    }

    #[test]
    fn declared_slots_are_borrowed_verbatim() {
        let mut spread = Spread::new("Two Deck");
        spread.add_slot("Tarot", None);
        let effective = effective_slots(&spread, "ignored");
        assert!(matches!(effective, Cow::Borrowed(_)));
        assert_eq!(effective[0].cartomancy_type, "Tarot");
    }

    #[test]
    fn bindings_replace_and_clear() {
        let mut bindings = SlotBindings::new();
        assert!(bindings.is_empty());

        let previous = bindings.bind(
            "A",
            BoundDeck {
                id: DeckId(5),
                name: "Rider-Waite".to_owned(),
            },
        );
        assert_eq!(previous, None);
        assert_eq!(bindings.deck_for("A").map(|deck| deck.id), Some(DeckId(5)));

        let previous = bindings.bind(
            "A",
            BoundDeck {
                id: DeckId(7),
                name: "Thoth".to_owned(),
            },
        );
        assert_eq!(previous.map(|deck| deck.id), Some(DeckId(5)));
        assert_eq!(bindings.len(), 1);

        bindings.clear();
        assert!(bindings.deck_for("A").is_none());
    }
}
