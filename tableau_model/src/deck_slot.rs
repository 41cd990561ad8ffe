// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck slots: named deck roles that a spread's positions draw from.

use alloc::string::{String, ToString};

/// A named role within a spread that must be filled by a deck of a specific
/// cartomancy type.
///
/// Positions reference a slot through [`Position::deck_slot_key`]; at reading
/// time each slot is bound to one concrete deck and that binding supplies the
/// cards for every position using the slot.
///
/// [`Position::deck_slot_key`]: crate::Position::deck_slot_key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckSlot {
    /// Short identifier. Generated keys are single letters, then numeric
    /// strings once `A`-`Z` is used up; see [`next_key`].
    pub key: String,
    /// Optional display name. [`DeckSlot::display_label`] falls back to the
    /// cartomancy type.
    pub label: Option<String>,
    /// Cartomancy type any bound deck must declare ("Tarot", "Lenormand", ...).
    pub cartomancy_type: String,
}

impl DeckSlot {
    /// Creates an unlabeled slot with the given key and required type.
    #[must_use]
    pub fn new(key: impl Into<String>, cartomancy_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: None,
            cartomancy_type: cartomancy_type.into(),
        }
    }

    /// Sets the display label, builder style.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The text shown for this slot in pickers and legends.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ => &self.cartomancy_type,
        }
    }
}

/// Picks the key for a newly added slot.
///
/// Walks `A`-`Z` and returns the first letter not already in use. Once the
/// alphabet is exhausted, falls back to the 1-based count after the addition,
/// so the 27th slot is keyed `"27"`.
#[must_use]
pub fn next_key(existing: &[DeckSlot]) -> String {
    for letter in 'A'..='Z' {
        let candidate = letter.to_string();
        if !existing.iter().any(|slot| slot.key == candidate) {
            return candidate;
        }
    }
    (existing.len() + 1).to_string()
}
