// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tableau_editor --heading-base-level=0

//! Tableau Editor: the interactive spread designer, headless.
//!
//! This crate is the stateful core of the designer surface: it owns a
//! [`Spread`](tableau_model::Spread) for the duration of an editing session
//! and turns pointer input into layout mutations. It knows nothing about any
//! UI framework; callers deliver pointer events (already routed to the canvas)
//! and render the resulting geometry however they like.
//!
//! - [`SurfaceMap`]: converts between view/device coordinates and the logical
//!   canvas space, with an independent scale per axis. Pointer events must
//!   pass through it because the canvas is displayed at a size that generally
//!   differs from its logical coordinate space.
//! - [`canvas_extent`]: the logical canvas size for a layout. The bounding
//!   box of all positions plus padding, floored at [`MIN_CANVAS`]; the canvas
//!   grows during a drag rather than clamping it.
//! - [`SnapMode`]: grid snapping (20-unit cells) or whole-unit rounding,
//!   applied to the anchored result of a gesture, never to the raw pointer.
//! - [`DesignSession`]: the gesture state machine. Presses start drags on
//!   position bodies and resizes on their bottom-right handles; moves snap
//!   and clamp; releases commit. Context menus surface a [`MenuActions`] set
//!   for the caller to present.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tableau_editor::{DesignSession, Grab, SurfaceMap};
//! use tableau_model::{Position, Spread};
//!
//! let mut spread = Spread::new("Three Card Line");
//! spread.positions.push(Position::new(80.0, 100.0));
//!
//! let mut session = DesignSession::new(spread);
//!
//! // The canvas is rendered at half its logical size.
//! let map = SurfaceMap::new(Rect::new(0.0, 0.0, 310.0, 230.0), session.canvas_size());
//!
//! // Press inside the position (view coordinates) and drag to the right.
//! let grab = session.pointer_down(&map, Point::new(60.0, 80.0));
//! assert_eq!(grab, Some(Grab::Body(0)));
//! session.pointer_move(&map, Point::new(70.0, 80.0));
//! session.pointer_up();
//!
//! // Ten view pixels are twenty logical units here, kept on the grid.
//! assert_eq!(session.spread().positions[0].x, 100.0);
//! ```
//!
//! Confirmation prompts and text entry stay with the caller: the session's
//! destructive mutators apply unconditionally once called, which keeps every
//! transition exercisable without a UI harness.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod extent;
mod session;
mod snap;
mod surface;

pub use extent::{CANVAS_PADDING, MIN_CANVAS, canvas_extent};
pub use session::{
    DesignSession, DesignSessionDebugInfo, GesturePhase, Grab, MIN_POSITION_EXTENT, MenuActions,
    RESIZE_HANDLE,
};
pub use snap::{GRID_SIZE, SnapMode};
pub use surface::SurfaceMap;
