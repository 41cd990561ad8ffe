// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Maps pointer coordinates between the rendered view and the logical canvas.
///
/// The designer canvas has a fixed logical coordinate space but is displayed
/// at whatever size the host gives it, so the two spaces generally differ by
/// an independent scale factor per axis. Every pointer event must pass
/// through this correction before it can be compared against position
/// geometry.
///
/// A map built from a degenerate rendered rectangle (zero or negative extent,
/// the "not yet mounted" case) is inert: conversions collapse to the origin
/// rather than producing non-finite coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMap {
    rendered: Rect,
    logical: Size,
}

impl SurfaceMap {
    /// A surface that has not been laid out yet. All conversions collapse to
    /// the origin.
    pub const UNMOUNTED: Self = Self {
        rendered: Rect::ZERO,
        logical: Size::ZERO,
    };

    /// Creates a map from the rendered rectangle (view space) to a logical
    /// canvas extent.
    #[must_use]
    pub const fn new(rendered: Rect, logical: Size) -> Self {
        Self { rendered, logical }
    }

    /// The rendered rectangle in view/device coordinates.
    #[must_use]
    pub fn rendered(&self) -> Rect {
        self.rendered
    }

    /// The logical canvas extent.
    #[must_use]
    pub fn logical(&self) -> Size {
        self.logical
    }

    /// Whether conversions are meaningful yet.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.rendered.width() > 0.0 && self.rendered.height() > 0.0
    }

    /// Converts a view/device point into logical canvas coordinates.
    ///
    /// Degrades to the canvas origin while the surface is unmounted.
    #[must_use]
    pub fn view_to_canvas_point(&self, pt: Point) -> Point {
        if !self.is_mounted() {
            return Point::ZERO;
        }
        let sx = self.logical.width / self.rendered.width();
        let sy = self.logical.height / self.rendered.height();
        Point::new(
            (pt.x - self.rendered.x0) * sx,
            (pt.y - self.rendered.y0) * sy,
        )
    }

    /// Converts a logical canvas point into view/device coordinates.
    #[must_use]
    pub fn canvas_to_view_point(&self, pt: Point) -> Point {
        if !self.is_mounted() {
            return self.rendered.origin();
        }
        let sx = self.rendered.width() / self.logical.width.max(f64::MIN_POSITIVE);
        let sy = self.rendered.height() / self.logical.height.max(f64::MIN_POSITIVE);
        Point::new(self.rendered.x0 + pt.x * sx, self.rendered.y0 + pt.y * sy)
    }

    /// Converts a logical canvas rectangle into view/device coordinates.
    ///
    /// Useful for drawing selection outlines and resize handles over the
    /// rendered canvas.
    #[must_use]
    pub fn canvas_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.canvas_to_view_point(rect.origin());
        let p1 = self.canvas_to_view_point(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }
}
