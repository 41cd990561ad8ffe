// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tableau_reading --heading-base-level=0

//! Tableau Reading: filling a spread with cards, headless.
//!
//! Where `tableau_editor` designs a layout, this crate records a reading
//! against one: which deck fills which deck slot, which card fills which
//! position, and how the finished association is laid out for display.
//!
//! - [`Deck`] and [`eligible_decks`]: the two-tier cartomancy-type match. A
//!   deck with a multi-type membership list is eligible wherever any member
//!   name matches; a legacy single-type deck falls back to field equality.
//! - [`SlotBindings`] and [`resolve_slot`]: the transient slot-to-deck
//!   choices for one reading, and the resolution of a position's slot
//!   reference, with dangling keys falling back to the first slot and saying
//!   so.
//! - [`ReadingSession`]: owns the card list, keeps it sized to the attached
//!   spread, and enforces the cascade: rebinding a slot clears every card
//!   whose position draws from it, because a card name is only valid
//!   relative to the deck bound to its slot.
//! - [`project`]: reduces positions and cards to a positioned layout in unit
//!   fractions of the trimmed content box, or to a plain row when there is
//!   no layout to place cards into.
//!
//! ## Example
//!
//! ```rust
//! use tableau_model::{Position, Spread};
//! use tableau_reading::{BoundDeck, Deck, DeckId, ReadingSession, eligible_decks};
//!
//! let mut spread = Spread::new("Two Deck Draw");
//! spread.positions.push(Position::new(0.0, 0.0));
//! spread.positions.push(Position::new(100.0, 0.0));
//! spread.add_slot("Tarot", None);
//! spread.add_slot("Lenormand", None);
//! spread.positions[1].deck_slot_key = Some("B".into());
//!
//! let decks = [
//!     Deck::new(DeckId(5), "Rider-Waite", "Tarot"),
//!     Deck::new(DeckId(9), "Blue Owl", "Lenormand"),
//! ];
//!
//! // Only the Lenormand deck may fill slot B.
//! let eligible = eligible_decks(&spread.deck_slots[1], &decks);
//! assert_eq!(eligible.len(), 1);
//!
//! let mut session = ReadingSession::new();
//! session.attach_spread(spread, "");
//! session.bind_slot("A", BoundDeck::from(&decks[0]));
//! session.bind_slot("B", BoundDeck::from(&decks[1]));
//!
//! session.set_card_name(1, "The Ship");
//! assert_eq!(session.cards()[1].deck_id, Some(DeckId(9)));
//! ```
//!
//! Everything here is in-memory bookkeeping over data a caller already
//! loaded; persistence and the record shapes it goes through live in
//! `tableau_records`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod layout;

mod binding;
mod decks;
mod session;

pub use binding::{
    BoundDeck, IMPLICIT_SLOT_KEY, SlotBindings, SlotResolution, effective_slots, resolve_slot,
};
pub use decks::{Deck, DeckId, TYPE_ORDER, TypeTag, eligible_decks, sort_type_tags};
pub use layout::{FreeFormLayout, PositionedLayout, ProjectedSlot, Projection, project};
pub use session::{ReadingCard, ReadingSession, ReadingSessionDebugInfo};
