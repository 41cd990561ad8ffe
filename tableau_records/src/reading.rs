// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading persistence records: one per reading block in a journal entry.

use serde::{Deserialize, Deserializer, Serialize};

use tableau_reading::{DeckId, ReadingCard};

/// A persisted reading block.
///
/// `cards_used` is stored as written; loading tolerates the legacy form
/// where entries were bare card-name strings. Building a record from session
/// cards filters out unfilled positions before submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// The spread the reading was laid with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread_id: Option<i64>,
    /// Name snapshot of that spread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread_name: Option<String>,
    /// The reading-level deck, for single-slot readings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<i64>,
    /// Name snapshot of that deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    /// Cartomancy type of the reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartomancy_type: Option<String>,
    /// The recorded cards. Tolerates bare-string entries on load.
    #[serde(default, deserialize_with = "cards_string_or_object")]
    pub cards_used: Vec<CardRecord>,
    /// Order of this block among the entry's readings.
    #[serde(default)]
    pub position_order: i64,
}

impl ReadingRecord {
    /// Builds the card list to submit: every filled card, in position order.
    #[must_use]
    pub fn cards_for_save(cards: &[ReadingCard]) -> Vec<CardRecord> {
        cards
            .iter()
            .filter(|card| card.is_filled())
            .map(CardRecord::from)
            .collect()
    }

    /// Converts the stored cards into session cards.
    ///
    /// A card without an explicit `position_index` takes its array index, so
    /// legacy readings still project onto their spread in order.
    #[must_use]
    pub fn cards(&self) -> Vec<ReadingCard> {
        self.cards_used
            .iter()
            .enumerate()
            .map(|(index, card)| card.clone().into_card(index))
            .collect()
    }
}

/// One recorded card on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name within its deck.
    pub name: String,
    /// Whether the card was drawn reversed.
    #[serde(default)]
    pub reversed: bool,
    /// Identifier of the deck the card came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<i64>,
    /// Name snapshot of that deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_name: Option<String>,
    /// Card row identifier, filled in server-side for thumbnail lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
    /// Index of the spread position the card fills; written `camelCase` by an
    /// older front-end, absent in legacy readings.
    #[serde(
        default,
        alias = "positionIndex",
        skip_serializing_if = "Option::is_none"
    )]
    pub position_index: Option<usize>,
}

impl CardRecord {
    /// Converts into a session card, defaulting the position index to
    /// `fallback_index` when the record does not declare one.
    #[must_use]
    pub fn into_card(self, fallback_index: usize) -> ReadingCard {
        ReadingCard {
            name: self.name,
            reversed: self.reversed,
            deck_id: self.deck_id.map(DeckId),
            deck_name: self.deck_name,
            position_index: self.position_index.unwrap_or(fallback_index),
        }
    }
}

impl From<&ReadingCard> for CardRecord {
    fn from(card: &ReadingCard) -> Self {
        Self {
            name: card.name.clone(),
            reversed: card.reversed,
            deck_id: card.deck_id.map(|id| id.0),
            deck_name: card.deck_name.clone(),
            card_id: None,
            position_index: Some(card.position_index),
        }
    }
}

/// Accepts card entries as objects or as bare name strings.
///
/// The earliest journal exports stored `cards_used` as `["The Tower", ...]`;
/// a bare string reads as an upright card of that name. Entries of any other
/// shape are dropped rather than failing the record, and a value that is not
/// a list at all reads as empty.
fn cards_string_or_object<'de, D>(deserializer: D) -> Result<Vec<CardRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Name(String),
        Card(CardRecord),
        Other(serde_json::Value),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Entry>),
        Other(serde_json::Value),
    }

    let entries = match Raw::deserialize(deserializer)? {
        Raw::List(entries) => entries,
        Raw::Other(_) => Vec::new(),
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Name(name) => Some(CardRecord {
                name,
                ..CardRecord::default()
            }),
            Entry::Card(card) => Some(card),
            Entry::Other(_) => None,
        })
        .collect())
}
