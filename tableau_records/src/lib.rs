// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tableau_records --heading-base-level=0

//! Tableau Records: the collaborator-facing shapes at the store boundary.
//!
//! The engine crates work on clean in-memory types; what a store actually
//! delivers is a decade of accumulated shape quirks. This crate is the
//! adapter between the two: every tolerance for legacy data lives here, so
//! `tableau_model`, `tableau_editor`, and `tableau_reading` never see a
//! malformed field.
//!
//! What loading absorbs, silently:
//! - `deck_slots` and `allowed_deck_types` as JSON-encoded strings, with
//!   parse failure reading as an empty list.
//! - `positions` holding a non-array value, likewise recovered as empty.
//! - positions missing their extent (defaulted to 80×120), rotation, or
//!   label, and slot keys written `camelCase` by an older front-end.
//! - `cards_used` entries that are bare card-name strings, and cards without
//!   a `position_index` (defaulted to array order).
//!
//! Saving is the strict direction: [`SpreadRecord::validate_for_save`]
//! rejects a blank name with a [`RecordError`], and
//! [`ReadingRecord::cards_for_save`] drops unfilled positions, both exactly
//! as the store itself would.
//!
//! ## Example
//!
//! ```rust
//! use tableau_records::SpreadRecord;
//!
//! // A legacy row: slots serialized as text inside the JSON payload.
//! let json = r#"{
//!     "name": "Clarified Draw",
//!     "positions": [{"x": 40.0, "y": 20.0}, {"x": 140.0, "y": 20.0}],
//!     "cartomancy_type": "Tarot",
//!     "deck_slots": "[{\"key\": \"A\", \"cartomancy_type\": \"Tarot\"}]"
//! }"#;
//!
//! let record: SpreadRecord = serde_json::from_str(json)?;
//! let fallback = record.cartomancy_type.clone().unwrap_or_default();
//! let spread = record.into_spread();
//! assert_eq!(spread.deck_slots.len(), 1);
//! assert_eq!(spread.positions[0].width, 80.0);
//! assert_eq!(fallback, "Tarot");
//! # Ok::<(), serde_json::Error>(())
//! ```

mod deck;
mod error;
mod reading;
mod spread;

pub use deck::{DeckRecord, TypeTagRecord};
pub use error::RecordError;
pub use reading::{CardRecord, ReadingRecord};
pub use spread::{DeckSlotRecord, PositionRecord, SpreadRecord};
