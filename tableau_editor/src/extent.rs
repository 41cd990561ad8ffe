// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use tableau_model::Position;

/// Smallest logical canvas the designer ever presents.
pub const MIN_CANVAS: Size = Size::new(620.0, 460.0);

/// Breathing room added beyond the content's bounding box, in logical units.
pub const CANVAS_PADDING: f64 = 40.0;

/// The logical canvas size needed to contain `positions`.
///
/// Takes the bounding box of all frames (measured from the canvas origin),
/// adds [`CANVAS_PADDING`], and floors the result at [`MIN_CANVAS`] per axis.
/// The canvas never clips content: it must be recomputed after every position
/// mutation so it grows under drags and resizes, and it shrinks back once
/// positions no longer need the room.
#[must_use]
pub fn canvas_extent(positions: &[Position]) -> Size {
    let (max_x, max_y) = positions
        .iter()
        .fold((0.0_f64, 0.0_f64), |(max_x, max_y), position| {
            (
                max_x.max(position.x + position.width),
                max_y.max(position.y + position.height),
            )
        });
    Size::new(
        MIN_CANVAS.width.max(max_x + CANVAS_PADDING),
        MIN_CANVAS.height.max(max_y + CANVAS_PADDING),
    )
}
