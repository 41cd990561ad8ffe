// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `tableau_records` crate.
//!
//! These run full store round trips: load a legacy payload, edit the spread,
//! record a reading against it, and check what would go back over the wire.

use tableau_editor::DesignSession;
use tableau_reading::{BoundDeck, DeckId, Projection, ReadingSession, eligible_decks};
use tableau_records::{DeckRecord, ReadingRecord, SpreadRecord};

/// A spread row as the original store would deliver it, quirks included.
const LEGACY_SPREAD: &str = r#"{
    "id": 12,
    "name": "Clarified Draw",
    "description": "Tarot theme with a Lenormand clarifier",
    "positions": [
        {"x": 140.0, "y": 100.0, "label": "Theme"},
        {"x": 260.0, "y": 100.0, "label": "Clarifier", "deckSlotKey": "B"}
    ],
    "cartomancy_type": "Tarot",
    "allowed_deck_types": "[\"Tarot\", \"Lenormand\"]",
    "deck_slots": "[{\"key\": \"A\", \"cartomancy_type\": \"Tarot\"}, {\"key\": \"B\", \"cartomancy_type\": \"Lenormand\"}]"
}"#;

const DECKS: &str = r#"[
    {"id": 5, "name": "Rider-Waite", "cartomancy_type": "Tarot"},
    {"id": 9, "name": "Blue Owl", "cartomancy_type": "Lenormand"},
    {"id": 11, "name": "Mixed", "cartomancy_type": "Tarot, Lenormand",
     "cartomancy_types": [{"name": "Tarot"}, {"name": "Lenormand"}]}
]"#;

#[test]
fn load_edit_save_keeps_the_arrays_verbatim() {
    let record: SpreadRecord = serde_json::from_str(LEGACY_SPREAD).unwrap();
    let id = record.id;
    let spread = record.into_spread();
    assert_eq!(spread.positions.len(), 2);
    assert_eq!(spread.deck_slots.len(), 2);

    // Edit: nudge the clarifier, add a third position.
    let mut session = DesignSession::new(spread);
    assert!(session.rotate_position(1));
    session.add_position("Outcome");

    let saved = SpreadRecord::from_spread(&session.into_spread(), id);
    saved.validate_for_save().unwrap();
    assert_eq!(saved.id, Some(12));
    assert_eq!(saved.positions.len(), 3);
    assert!(saved.positions[1].rotated);
    assert_eq!(saved.positions[1].deck_slot_key.as_deref(), Some("B"));

    // The modern shape goes back out: deck_slots as a real array.
    let wire = serde_json::to_value(&saved).unwrap();
    assert!(wire["deck_slots"].is_array());
    assert_eq!(wire["deck_slots"][1]["cartomancy_type"], "Lenormand");
}

#[test]
fn a_recorded_reading_round_trips_through_its_record() {
    let spread_record: SpreadRecord = serde_json::from_str(LEGACY_SPREAD).unwrap();
    let fallback = spread_record.cartomancy_type.clone().unwrap_or_default();
    let spread = spread_record.into_spread();

    let decks: Vec<_> = serde_json::from_str::<Vec<DeckRecord>>(DECKS)
        .unwrap()
        .into_iter()
        .map(DeckRecord::into_deck)
        .collect();

    // Slot B only offers the Lenormand-capable decks.
    let eligible: Vec<DeckId> = eligible_decks(&spread.deck_slots[1], &decks)
        .iter()
        .map(|deck| deck.id)
        .collect();
    assert_eq!(eligible, vec![DeckId(9), DeckId(11)]);

    let mut session = ReadingSession::new();
    session.attach_spread(spread, fallback);
    session.bind_slot("A", BoundDeck::from(&decks[0]));
    session.bind_slot("B", BoundDeck::from(&decks[1]));
    session.set_card_name(0, "The Star");
    session.set_card_name(1, "The Ship");

    let record = ReadingRecord {
        spread_id: Some(12),
        spread_name: Some("Clarified Draw".into()),
        cartomancy_type: Some("Tarot".into()),
        cards_used: ReadingRecord::cards_for_save(session.cards()),
        ..ReadingRecord::default()
    };
    assert_eq!(record.cards_used.len(), 2);
    assert_eq!(record.cards_used[1].deck_id, Some(9));

    // Reload the stored block and project it for display.
    let text = serde_json::to_string(&record).unwrap();
    let reloaded: ReadingRecord = serde_json::from_str(&text).unwrap();
    let spread = serde_json::from_str::<SpreadRecord>(LEGACY_SPREAD)
        .unwrap()
        .into_spread();
    let Projection::Positioned(layout) =
        tableau_reading::project(&spread.positions, &reloaded.cards())
    else {
        panic!("expected a positioned projection");
    };
    assert_eq!(layout.slots.len(), 2);
    assert_eq!(layout.slots[0].card, Some(0));
    assert_eq!(layout.slots[1].card, Some(1));
}

#[test]
fn an_entirely_legacy_reading_still_projects() {
    // Bare-string cards, no position indices, positions without extents.
    let reading: ReadingRecord =
        serde_json::from_str(r#"{"cards_used": ["The Rider", "The Clover"]}"#).unwrap();
    let spread: SpreadRecord = serde_json::from_str(
        r#"{"name": "Pair", "positions": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 0.0}]}"#,
    )
    .unwrap();

    let Projection::Positioned(layout) =
        tableau_reading::project(&spread.into_spread().positions, &reading.cards())
    else {
        panic!("expected a positioned projection");
    };
    assert_eq!(layout.slots[0].card, Some(0));
    assert_eq!(layout.slots[1].card, Some(1));
}
