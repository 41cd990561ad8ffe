// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use tableau_model::{DeckSlot, Spread};

use crate::binding::{
    BoundDeck, IMPLICIT_SLOT_KEY, SlotBindings, SlotResolution, effective_slots, resolve_slot,
};
use crate::decks::DeckId;

/// One card recorded against a spread position.
///
/// Cards are identified by name within their deck; the deck identity is
/// stamped on when the name is set so the record stays meaningful after the
/// session's slot bindings are gone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadingCard {
    /// Card name within its deck. Empty means the position is unfilled.
    pub name: String,
    /// Whether the card was drawn reversed.
    pub reversed: bool,
    /// Identifier of the deck the card came from.
    pub deck_id: Option<DeckId>,
    /// Name snapshot of that deck.
    pub deck_name: Option<String>,
    /// Index of the spread position this card fills.
    pub position_index: usize,
}

impl ReadingCard {
    /// An unfilled card for the position at `index`.
    #[must_use]
    pub fn empty(index: usize) -> Self {
        Self {
            position_index: index,
            ..Self::default()
        }
    }

    /// Whether a card name has been recorded.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty()
    }
}

/// One reading block being filled in: a card list, an optional attached
/// spread, and the slot-to-deck bindings that constrain card choice.
///
/// With a spread attached, the card list always has exactly one entry per
/// position; attaching a different spread pads or truncates the list while
/// preserving what was already filled in. Without a spread the reading is
/// free-form and cards are appended at will.
///
/// Slots collapse naturally: a spread with zero or one declared slot reads
/// from a single deck, represented as the synthetic slot
/// [`IMPLICIT_SLOT_KEY`] so no caller branches on "no slots" versus "one
/// slot".
#[derive(Clone, Debug, Default)]
pub struct ReadingSession {
    spread: Option<Spread>,
    fallback_type: String,
    bindings: SlotBindings,
    cards: Vec<ReadingCard>,
}

impl ReadingSession {
    /// Starts a free-form reading with no cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached spread, if any.
    #[must_use]
    pub fn spread(&self) -> Option<&Spread> {
        self.spread.as_ref()
    }

    /// The cards recorded so far, in position order.
    #[must_use]
    pub fn cards(&self) -> &[ReadingCard] {
        &self.cards
    }

    /// The current slot-to-deck bindings.
    #[must_use]
    pub fn bindings(&self) -> &SlotBindings {
        &self.bindings
    }

    /// Attaches `spread`, resizing the card list to its position count.
    ///
    /// Existing cards keep their content up to the new length; missing
    /// entries are padded as unfilled. `fallback_type` is the cartomancy
    /// type required by the implicit slot when the spread declares none
    /// (empty for "any deck").
    pub fn attach_spread(&mut self, spread: Spread, fallback_type: impl Into<String>) {
        let count = spread.positions.len();
        self.cards.truncate(count);
        for index in self.cards.len()..count {
            self.cards.push(ReadingCard::empty(index));
        }
        self.fallback_type = fallback_type.into();
        self.spread = Some(spread);
    }

    /// Detaches the spread, switching back to free-form.
    ///
    /// Cards and bindings survive, so re-attaching the same spread restores
    /// the reading as it was.
    pub fn detach_spread(&mut self) -> Option<Spread> {
        self.spread.take()
    }

    /// The slot list this reading works with: the spread's declared slots,
    /// or the synthetic single implicit slot.
    #[must_use]
    pub fn effective_slots(&self) -> Cow<'_, [DeckSlot]> {
        match &self.spread {
            Some(spread) => effective_slots(spread, &self.fallback_type),
            None => Cow::Owned(vec![DeckSlot::new(IMPLICIT_SLOT_KEY, &*self.fallback_type)]),
        }
    }

    /// How the position at `index` resolves against the effective slots.
    ///
    /// `None` when no spread is attached or the index is out of range. A
    /// dangling slot reference resolves to the first slot and says so.
    #[must_use]
    pub fn slot_for_position(&self, index: usize) -> Option<SlotResolution> {
        let spread = self.spread.as_ref()?;
        let position = spread.positions.get(index)?;
        resolve_slot(&self.effective_slots(), position.deck_slot_key.as_deref())
    }

    /// The deck the position at `index` draws from, if its slot is bound.
    ///
    /// This is what constrains the position's card picker: only cards from
    /// this deck may fill the position.
    #[must_use]
    pub fn deck_for_position(&self, index: usize) -> Option<&BoundDeck> {
        let resolution = self.slot_for_position(index)?;
        let key = self.effective_slots()[resolution.index].key.clone();
        self.bindings.deck_for(&key)
    }

    /// The single reading-level deck, meaningful when the reading collapses
    /// to one slot (free-form, or a spread with at most one declared slot).
    #[must_use]
    pub fn reading_deck(&self) -> Option<&BoundDeck> {
        let key = self.effective_slots().first()?.key.clone();
        self.bindings.deck_for(&key)
    }

    /// Binds `deck` to the reading's first slot.
    ///
    /// Shorthand for [`ReadingSession::bind_slot`] in the single-deck case;
    /// the same card-clear cascade applies.
    pub fn bind_reading_deck(&mut self, deck: BoundDeck) -> usize {
        let Some(slot) = self.effective_slots().first().map(|slot| slot.key.clone()) else {
            return 0;
        };
        self.bind_slot(slot, deck)
    }

    /// Binds `deck` to `slot_key` and clears every card whose position
    /// resolves to that slot, returning how many were cleared.
    ///
    /// A card name is only valid relative to the deck bound to its slot, so
    /// rebinding clears the name and deck stamp of every affected card while
    /// preserving `reversed`. Rebinding the already-bound deck is a no-op.
    pub fn bind_slot(&mut self, slot_key: impl Into<String>, deck: BoundDeck) -> usize {
        let slot_key = slot_key.into();
        if self.bindings.deck_for(&slot_key).map(|bound| bound.id) == Some(deck.id) {
            return 0;
        }

        let affected: Vec<usize> = (0..self.cards.len())
            .filter(|&index| {
                let Some(resolution) = self.slot_for_position(index) else {
                    // Free-form cards all draw from the implicit slot.
                    return self.spread.is_none() && slot_key == IMPLICIT_SLOT_KEY;
                };
                self.effective_slots()[resolution.index].key == slot_key
            })
            .collect();

        self.bindings.bind(slot_key, deck);

        let mut cleared = 0;
        for index in affected {
            let card = &mut self.cards[index];
            if card.is_filled() {
                cleared += 1;
            }
            card.name.clear();
            card.deck_id = None;
            card.deck_name = None;
        }
        cleared
    }

    /// Records the card name at `index`, stamping the bound deck's identity
    /// onto the card.
    ///
    /// Returns `false` when the index is out of range. With no deck bound
    /// for the position's slot the name is still recorded, unstamped.
    pub fn set_card_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        let stamp = if self.spread.is_some() {
            self.deck_for_position(index).cloned()
        } else {
            self.reading_deck().cloned()
        };
        let card = &mut self.cards[index];
        card.name = name.into();
        match stamp {
            Some(deck) => {
                card.deck_id = Some(deck.id);
                card.deck_name = Some(deck.name);
            }
            None => {
                card.deck_id = None;
                card.deck_name = None;
            }
        }
        true
    }

    /// Flips the reversed flag of the card at `index`.
    ///
    /// Returns `false` when the index is out of range.
    pub fn toggle_reversed(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        card.reversed = !card.reversed;
        true
    }

    /// Appends a free-form card and returns its index.
    ///
    /// Returns `None` while a spread is attached: the card list length is
    /// then fixed to the position count.
    pub fn push_card(&mut self, name: impl Into<String>) -> Option<usize> {
        if self.spread.is_some() {
            return None;
        }
        let index = self.cards.len();
        let mut card = ReadingCard::empty(index);
        card.name = name.into();
        if let Some(deck) = self.reading_deck().cloned() {
            card.deck_id = Some(deck.id);
            card.deck_name = Some(deck.name);
        }
        self.cards.push(card);
        Some(index)
    }

    /// Removes the free-form card at `index`, renumbering those after it.
    ///
    /// Returns `false` while a spread is attached or when the index is out
    /// of range.
    pub fn remove_card(&mut self, index: usize) -> bool {
        if self.spread.is_some() || index >= self.cards.len() {
            return false;
        }
        self.cards.remove(index);
        for (position_index, card) in self.cards.iter_mut().enumerate() {
            card.position_index = position_index;
        }
        true
    }

    /// Projects the reading for display.
    ///
    /// Positioned over the attached spread's layout when there is one and at
    /// least one card, free-form otherwise; see [`crate::layout::project`].
    #[must_use]
    pub fn project(&self) -> crate::layout::Projection {
        let positions = self
            .spread
            .as_ref()
            .map_or(&[][..], |spread| spread.positions.as_slice());
        crate::layout::project(positions, &self.cards)
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ReadingSessionDebugInfo {
        let dangling = (0..self.cards.len())
            .filter_map(|index| self.slot_for_position(index))
            .filter(|resolution| resolution.dangling)
            .count();
        ReadingSessionDebugInfo {
            attached: self.spread.is_some(),
            card_count: self.cards.len(),
            filled_count: self.cards.iter().filter(|card| card.is_filled()).count(),
            slot_count: self.effective_slots().len(),
            bound_count: self.bindings.len(),
            dangling_count: dangling,
        }
    }
}

/// Debug snapshot of a [`ReadingSession`] state.
#[derive(Clone, Copy, Debug)]
pub struct ReadingSessionDebugInfo {
    /// Whether a spread is attached.
    pub attached: bool,
    /// Number of cards in the list.
    pub card_count: usize,
    /// Number of cards with a recorded name.
    pub filled_count: usize,
    /// Number of effective slots.
    pub slot_count: usize,
    /// Number of slots with a bound deck.
    pub bound_count: usize,
    /// Number of positions whose slot reference is dangling.
    pub dangling_count: usize,
}
