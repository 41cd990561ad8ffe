// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card positions: the rectangular cells of a spread layout.

use alloc::format;
use alloc::string::String;
use kurbo::{Point, Rect, Size};

/// Extent of a freshly added position, in logical units.
pub const DEFAULT_EXTENT: Size = Size::new(80.0, 120.0);

/// One rectangular cell in a spread layout.
///
/// Coordinates are logical "design pixels" with the origin at the top-left of
/// the canvas. A position carries no identity beyond its index in the owning
/// spread. Overlaps are allowed and never resolved by the model; stacking
/// order is the array order, later entries on top.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    /// Left edge. Non-negative.
    pub x: f64,
    /// Top edge. Non-negative.
    pub y: f64,
    /// Horizontal extent. Positive; swapped with `height` when rotating.
    pub width: f64,
    /// Vertical extent. Positive; swapped with `width` when rotating.
    pub height: f64,
    /// Human-readable name ("Past", "Challenge", ...). Not required to be unique.
    pub label: String,
    /// Short badge token shown on the canvas and in legends. When `None`, the
    /// 1-based index stands in; see [`Position::display_key`].
    pub key: Option<String>,
    /// Whether the position is displayed sideways. Toggling swaps the stored
    /// extents once; the flag carries the remaining meaning.
    pub rotated: bool,
    /// Key of the deck slot that supplies this position's card, when the
    /// owning spread partitions positions across slots.
    pub deck_slot_key: Option<String>,
}

impl Position {
    /// Creates a position at `(x, y)` with the default card extent.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: DEFAULT_EXTENT.width,
            height: DEFAULT_EXTENT.height,
            label: String::new(),
            key: None,
            rotated: false,
            deck_slot_key: None,
        }
    }

    /// Sets the label, builder style.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the extent, builder style.
    #[must_use]
    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The occupied rectangle in canvas space.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// The top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The badge text for this position at `index` in its spread.
    ///
    /// Falls back to the 1-based index when no explicit key is set.
    #[must_use]
    pub fn display_key(&self, index: usize) -> String {
        match &self.key {
            Some(key) if !key.is_empty() => key.clone(),
            _ => format!("{}", index + 1),
        }
    }

    /// Swaps width and height and flips the `rotated` flag.
    ///
    /// Applying this twice restores the original geometry.
    pub fn toggle_rotation(&mut self) {
        core::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }
}

/// The union of all position frames, or `None` for an empty set.
#[must_use]
pub fn content_bounds(positions: &[Position]) -> Option<Rect> {
    let mut frames = positions.iter().map(Position::frame);
    let first = frames.next()?;
    Some(frames.fold(first, |bounds, frame| bounds.union(frame)))
}
