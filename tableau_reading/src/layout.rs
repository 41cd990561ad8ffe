// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-time layout projector.
//!
//! A finished reading is displayed either geometrically, with every position
//! placed inside the spread's trimmed bounding box, or as a plain ordered row
//! when there is no layout to place cards into. The projector reduces a
//! position list and a card list to one of those two shapes; hosts multiply
//! the unit fractions by whatever rendered extent they have available, so
//! the same projection scales from a thumbnail to a full page.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use tableau_model::{Position, content_bounds};

use crate::session::ReadingCard;

/// One position of a positioned projection, in unit fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedSlot {
    /// Placement within the trimmed content box, each edge in `0.0..=1.0`.
    pub fraction: Rect,
    /// Whether the position is displayed sideways.
    pub rotated: bool,
    /// The position's label.
    pub label: String,
    /// The position's badge text (explicit key or 1-based index).
    pub key: String,
    /// Index into the card list of the card filling this position, or `None`
    /// for an empty placeholder rendered with the label and key alone.
    pub card: Option<usize>,
}

/// A geometric projection over the spread's trimmed bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedLayout {
    /// The trimmed content box in canvas coordinates.
    pub content: Rect,
    /// Content width over height, for aspect-ratio-preserving hosts.
    pub aspect_ratio: f64,
    /// One entry per spread position, in position order.
    pub slots: Vec<ProjectedSlot>,
}

/// A plain ordered row of cards, with no geometric placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeFormLayout {
    /// Indices into the card list of the filled cards, in list order.
    pub cards: Vec<usize>,
}

/// The two render shapes a reading projects to.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// Cards placed over the spread layout.
    Positioned(PositionedLayout),
    /// Cards in a row; no spread geometry available.
    FreeForm(FreeFormLayout),
}

/// Projects a reading for display.
///
/// The positioned shape is produced when there are both positions and cards;
/// everything else renders free-form. Positioned slots match their card by
/// [`ReadingCard::position_index`]; a position no card points at becomes an
/// empty placeholder and a card pointing outside the position list is
/// ignored. Free-form rows carry only filled cards.
#[must_use]
pub fn project(positions: &[Position], cards: &[ReadingCard]) -> Projection {
    if positions.is_empty() || cards.is_empty() {
        return Projection::FreeForm(FreeFormLayout {
            cards: cards
                .iter()
                .enumerate()
                .filter(|(_, card)| card.is_filled())
                .map(|(index, _)| index)
                .collect(),
        });
    }

    // Positive extents make a degenerate content box impossible, but the
    // denominators are guarded all the same.
    let content = content_bounds(positions).unwrap_or(Rect::ZERO);
    let width = content.width().max(f64::MIN_POSITIVE);
    let height = content.height().max(f64::MIN_POSITIVE);

    let slots = positions
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let frame = position.frame();
            ProjectedSlot {
                fraction: Rect::new(
                    (frame.x0 - content.x0) / width,
                    (frame.y0 - content.y0) / height,
                    (frame.x1 - content.x0) / width,
                    (frame.y1 - content.y0) / height,
                ),
                rotated: position.rotated,
                label: position.label.clone(),
                key: position.display_key(index),
                card: cards
                    .iter()
                    .position(|card| card.is_filled() && card.position_index == index),
            }
        })
        .collect();

    Projection::Positioned(PositionedLayout {
        content,
        aspect_ratio: width / height,
        slots,
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::borrow::ToOwned;
    use alloc::vec;

    fn card(name: &str, index: usize) -> ReadingCard {
        ReadingCard {
            name: name.to_owned(),
            position_index: index,
            ..ReadingCard::default()
        }
    }

    #[test]
    fn positioned_fractions_span_the_trimmed_box() {
        // Content starts at (100, 40): the trim removes the empty margin.
        let positions = vec![
            Position::new(100.0, 40.0).with_extent(80.0, 120.0),
            Position::new(300.0, 40.0).with_extent(80.0, 120.0),
        ];
        let cards = vec![card("The Fool", 0), card("The Magician", 1)];

        let Projection::Positioned(layout) = project(&positions, &cards) else {
            panic!("expected a positioned projection");
        };

        assert_eq!(layout.content, Rect::new(100.0, 40.0, 380.0, 160.0));
        assert_eq!(layout.aspect_ratio, 280.0 / 120.0);
        assert_eq!(
            layout.slots[0].fraction,
            Rect::new(0.0, 0.0, 80.0 / 280.0, 1.0)
        );
        assert_eq!(
            layout.slots[1].fraction,
            Rect::new(200.0 / 280.0, 0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn cards_match_their_position_index() {
        let positions = vec![
            Position::new(0.0, 0.0),
            Position::new(100.0, 0.0),
            Position::new(200.0, 0.0),
        ];
        // Recorded out of order; the index wins over list order.
        let cards = vec![card("Third", 2), card("First", 0), card("Second", 1)];

        let Projection::Positioned(layout) = project(&positions, &cards) else {
            panic!("expected a positioned projection");
        };
        let matched: Vec<Option<usize>> = layout.slots.iter().map(|slot| slot.card).collect();
        assert_eq!(matched, vec![Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn unfilled_positions_become_placeholders() {
        let positions = vec![
            Position::new(0.0, 0.0).with_label("Past"),
            Position::new(100.0, 0.0).with_label("Present"),
        ];
        let cards = vec![card("The Tower", 1)];

        let Projection::Positioned(layout) = project(&positions, &cards) else {
            panic!("expected a positioned projection");
        };
        assert_eq!(layout.slots[0].card, None);
        assert_eq!(layout.slots[0].label, "Past");
        assert_eq!(layout.slots[0].key, "1");
        assert_eq!(layout.slots[1].card, Some(0));
    }

    #[test]
    fn out_of_range_cards_are_ignored() {
        let positions = vec![Position::new(0.0, 0.0)];
        let cards = vec![card("Kept", 0), card("Stray", 9)];

        let Projection::Positioned(layout) = project(&positions, &cards) else {
            panic!("expected a positioned projection");
        };
        assert_eq!(layout.slots.len(), 1);
        assert_eq!(layout.slots[0].card, Some(0));
    }

    #[test]
    fn rotation_and_keys_carry_through() {
        let mut position = Position::new(0.0, 0.0).with_extent(60.0, 90.0);
        position.toggle_rotation();
        position.key = Some("X".to_owned());
        let cards = vec![card("The Wheel", 0)];

        let Projection::Positioned(layout) = project(&[position], &cards) else {
            panic!("expected a positioned projection");
        };
        assert!(layout.slots[0].rotated);
        assert_eq!(layout.slots[0].key, "X");
    }

    #[test]
    fn no_positions_projects_free_form() {
        let cards = vec![card("One", 0), card("", 1), card("Two", 2)];
        let projection = project(&[], &cards);
        assert_eq!(
            projection,
            Projection::FreeForm(FreeFormLayout { cards: vec![0, 2] })
        );
    }

    #[test]
    fn no_cards_projects_free_form_even_with_positions() {
        let positions = vec![Position::new(0.0, 0.0)];
        assert_eq!(
            project(&positions, &[]),
            Projection::FreeForm(FreeFormLayout { cards: vec![] })
        );
    }
}
