// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The deck record: the dual-field type-membership shape.

use serde::{Deserialize, Serialize};

use tableau_reading::{Deck, DeckId, TypeTag};

/// A deck as the store lists it for slot eligibility.
///
/// Decks from the single-type era carry only `cartomancy_type`; migrated
/// decks additionally carry `cartomancy_types`. The resolver in
/// `tableau_reading` is the sole consumer of the dual shape, so conversion
/// happens here and nothing downstream sees both fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckRecord {
    /// Store identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Legacy single type name; may hold joined names for display.
    #[serde(default)]
    pub cartomancy_type: String,
    /// Multi-type membership, absent on unmigrated decks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cartomancy_types: Vec<TypeTagRecord>,
}

/// One type-membership entry of a [`DeckRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTagRecord {
    /// Type name ("Tarot", "Lenormand", ...).
    pub name: String,
}

impl DeckRecord {
    /// Converts into the resolver-facing deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        Deck {
            id: DeckId(self.id),
            name: self.name,
            cartomancy_type: self.cartomancy_type,
            cartomancy_types: self
                .cartomancy_types
                .into_iter()
                .map(|tag| TypeTag { name: tag.name })
                .collect(),
        }
    }
}
