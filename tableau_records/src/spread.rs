// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spread record and its lenient field normalization.

use serde::{Deserialize, Deserializer, Serialize};

use tableau_model::{DeckSlot, Position, Spread};

use crate::error::RecordError;

/// A spread as the store delivers and accepts it.
///
/// Deserialization absorbs every legacy shape quirk so the core crates only
/// ever see clean lists: `deck_slots` and `allowed_deck_types` may arrive as
/// JSON-encoded strings, `positions` may hold something that is not an
/// array, and any of them may be missing. Serialization always writes the
/// modern shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadRecord {
    /// Store identifier; absent before the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name. Required at save time; see
    /// [`SpreadRecord::validate_for_save`].
    #[serde(default)]
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Layout cells. A non-array value is recovered as empty.
    #[serde(default, deserialize_with = "list_or_json_string")]
    pub positions: Vec<PositionRecord>,
    /// The spread's own cartomancy type, used as the implicit slot's
    /// requirement when no deck slots are declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartomancy_type: Option<String>,
    /// Deck types the spread accepts, from the pre-slot era. May arrive as a
    /// JSON-encoded string.
    #[serde(default, deserialize_with = "list_or_json_string")]
    pub allowed_deck_types: Vec<String>,
    /// Deck preselected when a reading starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_deck_id: Option<i64>,
    /// Deck roles. May arrive as a JSON-encoded string; parse failure reads
    /// as an empty list.
    #[serde(default, deserialize_with = "list_or_json_string")]
    pub deck_slots: Vec<DeckSlotRecord>,
}

impl SpreadRecord {
    /// Builds a record from an edited spread, carrying `id` over.
    #[must_use]
    pub fn from_spread(spread: &Spread, id: Option<i64>) -> Self {
        Self {
            id,
            name: spread.name.clone(),
            description: (!spread.description.is_empty()).then(|| spread.description.clone()),
            positions: spread.positions.iter().map(PositionRecord::from).collect(),
            cartomancy_type: None,
            allowed_deck_types: Vec::new(),
            default_deck_id: None,
            deck_slots: spread.deck_slots.iter().map(DeckSlotRecord::from).collect(),
        }
    }

    /// Converts into the core model, dropping the store-only fields.
    ///
    /// The `cartomancy_type` does not travel with the model; callers pass it
    /// to `ReadingSession::attach_spread` as the implicit slot's fallback.
    #[must_use]
    pub fn into_spread(self) -> Spread {
        Spread {
            name: self.name,
            description: self.description.unwrap_or_default(),
            positions: self.positions.into_iter().map(PositionRecord::into_position).collect(),
            deck_slots: self
                .deck_slots
                .into_iter()
                .map(DeckSlotRecord::into_slot)
                .collect(),
        }
    }

    /// Save-side validation: the store rejects a blank name.
    pub fn validate_for_save(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::MissingName);
        }
        Ok(())
    }
}

/// One layout cell on the wire.
///
/// Early records carry only `x`/`y`; the extent, rotation, and slot fields
/// default like the original editor's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Left edge in logical units.
    pub x: f64,
    /// Top edge in logical units.
    pub y: f64,
    /// Horizontal extent.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Vertical extent.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Human-readable name.
    #[serde(default)]
    pub label: String,
    /// Badge token shown on the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Whether the position is displayed sideways.
    #[serde(default)]
    pub rotated: bool,
    /// Deck-slot reference; written `camelCase` by an older front-end.
    #[serde(
        default,
        alias = "deckSlotKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub deck_slot_key: Option<String>,
}

impl PositionRecord {
    /// Converts into the core model.
    #[must_use]
    pub fn into_position(self) -> Position {
        Position {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            label: self.label,
            key: self.key,
            rotated: self.rotated,
            deck_slot_key: self.deck_slot_key,
        }
    }
}

impl From<&Position> for PositionRecord {
    fn from(position: &Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: position.width,
            height: position.height,
            label: position.label.clone(),
            key: position.key.clone(),
            rotated: position.rotated,
            deck_slot_key: position.deck_slot_key.clone(),
        }
    }
}

/// One deck role on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckSlotRecord {
    /// Short identifier.
    pub key: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Required cartomancy type.
    #[serde(default)]
    pub cartomancy_type: String,
}

impl DeckSlotRecord {
    /// Converts into the core model.
    #[must_use]
    pub fn into_slot(self) -> DeckSlot {
        DeckSlot {
            key: self.key,
            label: self.label,
            cartomancy_type: self.cartomancy_type,
        }
    }
}

impl From<&DeckSlot> for DeckSlotRecord {
    fn from(slot: &DeckSlot) -> Self {
        Self {
            key: slot.key.clone(),
            label: slot.label.clone(),
            cartomancy_type: slot.cartomancy_type.clone(),
        }
    }
}

fn default_width() -> f64 {
    80.0
}

fn default_height() -> f64 {
    120.0
}

/// Accepts a list, a JSON-encoded string holding a list, or anything else.
///
/// Legacy rows stored these columns as serialized JSON text; newer writers
/// inline the array. A string that fails to parse, or a value of any other
/// shape, reads as empty rather than failing the whole record.
fn list_or_json_string<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        List(Vec<T>),
        Json(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::<T>::deserialize(deserializer)? {
        Raw::List(list) => list,
        Raw::Json(text) => serde_json::from_str(&text).unwrap_or_default(),
        Raw::Other(_) => Vec::new(),
    })
}
