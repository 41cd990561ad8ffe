// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stock spread library seeded into an empty journal.
//!
//! Layout coordinates are tuned so every preset fits the minimum canvas
//! without scrolling. The classic spreads use a 60×90 card; the Grand Tableau
//! shrinks to 45×65 to fit 36 cards.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::position::Position;
use crate::spread::Spread;

const CARD_WIDTH: f64 = 60.0;
const CARD_HEIGHT: f64 = 90.0;

fn cell(x: f64, y: f64, label: &str) -> Position {
    Position::new(x, y)
        .with_extent(CARD_WIDTH, CARD_HEIGHT)
        .with_label(label)
}

/// A single card for daily reflection.
#[must_use]
pub fn daily_draw() -> Spread {
    let mut spread = Spread::new("Daily Draw").with_description("A single card for daily reflection");
    spread.positions = vec![cell(200.0, 100.0, "Card of the Day")];
    spread
}

/// A simple past-present-future reading.
#[must_use]
pub fn three_card_line() -> Spread {
    let mut spread =
        Spread::new("Three Card Line").with_description("A simple past-present-future reading");
    spread.positions = vec![
        cell(80.0, 100.0, "Past"),
        cell(160.0, 100.0, "Present"),
        cell(240.0, 100.0, "Future"),
    ];
    spread
}

/// Five cards in a row.
#[must_use]
pub fn five_card_line() -> Spread {
    let mut spread = Spread::new("Five Card Line").with_description("Five cards in a row");
    spread.positions = numbered_line();
    spread
}

/// A five card cross spread for deeper insight.
#[must_use]
pub fn five_card_cross() -> Spread {
    let mut spread =
        Spread::new("Five Card Cross").with_description("A five card cross spread for deeper insight");
    spread.positions = vec![
        cell(150.0, 110.0, "Present"),
        cell(70.0, 110.0, "Past"),
        cell(230.0, 110.0, "Future"),
        cell(150.0, 10.0, "Above"),
        cell(150.0, 210.0, "Below"),
    ];
    spread
}

/// The classic 10-card Celtic Cross spread.
///
/// The "Challenge" card lies sideways across the "Present" card: it shares
/// the same origin and is stored with its extents already swapped and the
/// rotation flag set.
#[must_use]
pub fn celtic_cross() -> Spread {
    let mut challenge = cell(140.0, 130.0, "Challenge");
    challenge.toggle_rotation();

    let mut spread =
        Spread::new("Celtic Cross").with_description("The classic 10-card Celtic Cross spread");
    spread.positions = vec![
        cell(140.0, 130.0, "Present"),
        challenge,
        cell(140.0, 230.0, "Foundation"),
        cell(140.0, 30.0, "Crown"),
        cell(50.0, 130.0, "Past"),
        cell(230.0, 130.0, "Future"),
        cell(330.0, 240.0, "Self"),
        cell(330.0, 160.0, "Environment"),
        cell(330.0, 80.0, "Hopes/Fears"),
        cell(330.0, 0.0, "Outcome"),
    ];
    spread
}

/// Simple three-card Lenormand line.
#[must_use]
pub fn lenormand_three_card() -> Spread {
    let mut spread =
        Spread::new("Lenormand 3-Card").with_description("Simple three-card Lenormand line");
    spread.positions = vec![
        cell(80.0, 100.0, "1"),
        cell(160.0, 100.0, "2"),
        cell(240.0, 100.0, "3"),
    ];
    spread
}

/// Five-card Lenormand line.
#[must_use]
pub fn lenormand_five_card() -> Spread {
    let mut spread = Spread::new("Lenormand 5-Card").with_description("Five-card Lenormand line");
    spread.positions = numbered_line();
    spread
}

/// Nine-card Lenormand box spread.
#[must_use]
pub fn lenormand_box() -> Spread {
    let mut positions = Vec::with_capacity(9);
    for row in 0..3_u32 {
        for col in 0..3_u32 {
            let number = row * 3 + col + 1;
            positions.push(cell(
                80.0 + f64::from(col) * 80.0,
                10.0 + f64::from(row) * 100.0,
                &format!("{number}"),
            ));
        }
    }

    let mut spread =
        Spread::new("Lenormand 3x3 Box").with_description("Nine-card Lenormand box spread");
    spread.positions = positions;
    spread
}

/// Full 36-card Lenormand Grand Tableau, nine columns by four rows.
#[must_use]
pub fn grand_tableau() -> Spread {
    let mut positions = Vec::with_capacity(36);
    for row in 0..4_u32 {
        for col in 0..9_u32 {
            let number = row * 9 + col + 1;
            positions.push(
                Position::new(10.0 + f64::from(col) * 52.0, 10.0 + f64::from(row) * 75.0)
                    .with_extent(45.0, 65.0)
                    .with_label(format!("{number}")),
            );
        }
    }

    let mut spread = Spread::new("Grand Tableau (9x4)")
        .with_description("Full 36-card Lenormand Grand Tableau");
    spread.positions = positions;
    spread
}

/// All stock spreads, in seed order.
#[must_use]
pub fn all() -> Vec<Spread> {
    vec![
        daily_draw(),
        three_card_line(),
        five_card_line(),
        five_card_cross(),
        celtic_cross(),
        lenormand_three_card(),
        lenormand_five_card(),
        lenormand_box(),
        grand_tableau(),
    ]
}

fn numbered_line() -> Vec<Position> {
    [40.0, 110.0, 180.0, 250.0, 320.0]
        .into_iter()
        .enumerate()
        .map(|(index, x)| cell(x, 100.0, &format!("{}", index + 1)))
        .collect()
}
