// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tableau_model --heading-base-level=0

//! Tableau Model: the core data model for cartomancy spread layouts.
//!
//! A spread is a named arrangement of rectangular [`Position`]s on a 2D
//! canvas, optionally partitioned across named [`DeckSlot`]s so that a single
//! reading can draw from several decks at once. This crate holds the plain
//! data types and their local rules; the interactive editing state machine
//! lives in `tableau_editor` and the reading-time binding and layout logic in
//! `tableau_reading`.
//!
//! - [`Position`]: one cell of the layout, with logical geometry, a label, an
//!   optional badge key, a rotation flag, and an optional deck-slot reference.
//! - [`DeckSlot`]: a named deck role with a required cartomancy type; new
//!   slots receive auto-generated `A`-`Z` keys.
//! - [`Spread`]: the aggregate that callers load, edit, and save.
//! - [`presets`]: the stock layouts (Celtic Cross, Grand Tableau, ...) seeded
//!   into an empty journal.
//!
//! ## Example
//!
//! ```rust
//! use tableau_model::{Position, Spread};
//!
//! let mut spread = Spread::new("Three Card Line");
//! for x in [80.0, 160.0, 240.0] {
//!     spread.positions.push(Position::new(x, 100.0));
//! }
//!
//! // Partition across two decks: slots receive A-Z keys automatically.
//! let tarot = spread.add_slot("Tarot", None);
//! let lenormand = spread.add_slot("Lenormand", Some("Clarifier".into()));
//! assert_eq!((tarot.as_str(), lenormand.as_str()), ("A", "B"));
//!
//! spread.positions[2].deck_slot_key = Some(lenormand);
//! assert!(spread.is_multi_slot());
//! ```
//!
//! Positions may overlap freely; the model performs no collision detection
//! and enforces no exclusion constraint. Geometry uses [`kurbo`] types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod presets;

mod deck_slot;
mod position;
mod spread;

pub use deck_slot::{DeckSlot, next_key};
pub use position::{DEFAULT_EXTENT, Position, content_bounds};
pub use spread::Spread;
