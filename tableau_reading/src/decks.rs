// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck identity and cartomancy-type matching.

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

use tableau_model::DeckSlot;

/// Identifier of a deck in the caller's store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DeckId(pub i64);

/// One cartomancy-type membership entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeTag {
    /// Type name ("Tarot", "Lenormand", ...).
    pub name: String,
}

/// A deck as the resolver sees it: identity plus type membership.
///
/// Decks from the single-type era carry only `cartomancy_type`; migrated
/// decks also carry the multi-type list. Eligibility prefers the list and
/// falls back to the legacy field, so both vintages keep working side by
/// side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    /// Store identifier.
    pub id: DeckId,
    /// Display name.
    pub name: String,
    /// Legacy single type name. For migrated decks this may hold several
    /// names joined for display; it is only consulted when the list below is
    /// empty.
    pub cartomancy_type: String,
    /// Multi-type membership. Empty means "not migrated".
    pub cartomancy_types: Vec<TypeTag>,
}

impl Deck {
    /// Creates a legacy single-type deck.
    #[must_use]
    pub fn new(
        id: DeckId,
        name: impl Into<String>,
        cartomancy_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cartomancy_type: cartomancy_type.into(),
            cartomancy_types: Vec::new(),
        }
    }

    /// Replaces the multi-type membership list, builder style.
    #[must_use]
    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cartomancy_types = names
            .into_iter()
            .map(|name| TypeTag { name: name.into() })
            .collect();
        self
    }

    /// Whether this deck satisfies a required cartomancy type.
    ///
    /// An empty requirement is unrestricted and matches every deck. With a
    /// non-empty multi-type list, any member name may match; otherwise the
    /// legacy single-type field must match exactly.
    #[must_use]
    pub fn matches_type(&self, required: &str) -> bool {
        if required.is_empty() {
            return true;
        }
        if !self.cartomancy_types.is_empty() {
            return self.cartomancy_types.iter().any(|tag| tag.name == required);
        }
        self.cartomancy_type == required
    }
}

/// Decks eligible for `slot`, preserving the order given.
#[must_use]
pub fn eligible_decks<'a>(slot: &DeckSlot, decks: &'a [Deck]) -> SmallVec<[&'a Deck; 4]> {
    decks
        .iter()
        .filter(|deck| deck.matches_type(&slot.cartomancy_type))
        .collect()
}

/// Display order for cartomancy types. Types not listed here sort last.
pub const TYPE_ORDER: [&str; 6] = [
    "Tarot",
    "Lenormand",
    "Oracle",
    "Playing Cards",
    "Kipper",
    "I Ching",
];

/// Sorts type tags into the preferred display order.
///
/// Unknown names keep their relative order after the known ones.
pub fn sort_type_tags(tags: &mut [TypeTag]) {
    tags.sort_by_key(|tag| type_rank(&tag.name));
}

fn type_rank(name: &str) -> usize {
    TYPE_ORDER
        .iter()
        .position(|known| *known == name)
        .unwrap_or(TYPE_ORDER.len())
}
