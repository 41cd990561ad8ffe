// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use kurbo::{Point, Rect, Size};

use tableau_model::{DEFAULT_EXTENT, DeckSlot, Position, Spread};

use crate::extent::canvas_extent;
use crate::snap::SnapMode;
use crate::surface::SurfaceMap;

/// Side length of the square resize handle at a position's bottom-right
/// corner, in logical units.
pub const RESIZE_HANDLE: f64 = 8.0;

/// Smallest width and height reachable through interactive resizing.
///
/// Loaded data is not clamped; only the resize gesture enforces this.
pub const MIN_POSITION_EXTENT: f64 = 40.0;

bitflags::bitflags! {
    /// Actions offered by a position's context menu.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MenuActions: u8 {
        /// Edit the label and badge key.
        const EDIT = 0b0000_0001;
        /// Swap the extents and flip the rotation flag.
        const ROTATE = 0b0000_0010;
        /// Choose which deck slot the position draws from. Only offered when
        /// the spread has more than one slot.
        const ASSIGN_SLOT = 0b0000_0100;
        /// Remove the position.
        const DELETE = 0b0000_1000;
    }
}

/// What a press landed on, in stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grab {
    /// The body of the position at this index: a drag begins.
    Body(usize),
    /// The resize handle of the position at this index: a resize begins.
    Handle(usize),
}

/// The gesture currently in progress, for inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Nothing in progress.
    Idle,
    /// A position is following the pointer.
    Dragging,
    /// A position's extent is following the pointer.
    Resizing,
    /// A context menu is open over a position.
    MenuOpen,
}

#[derive(Clone, Copy, Debug)]
enum Gesture {
    Idle,
    Dragging {
        index: usize,
        pointer: Point,
        origin: Point,
    },
    Resizing {
        index: usize,
        pointer: Point,
        extent: Size,
    },
    MenuOpen {
        index: usize,
    },
}

/// Interactive editing session over one spread layout.
///
/// The session owns the [`Spread`] while it is being edited; take it back
/// with [`DesignSession::into_spread`] when the caller is ready to persist.
/// Pointer events arrive in view coordinates together with the
/// [`SurfaceMap`] that locates the rendered canvas, and are converted before
/// any hit testing.
///
/// A press replaces whatever gesture was in progress, so a stray menu or a
/// gesture interrupted by the host never wedges the session. Pressing empty
/// canvas clears the selection and any open menu.
///
/// Destructive operations ([`DesignSession::delete_position`],
/// [`DesignSession::clear_positions`]) apply unconditionally; confirmation
/// prompts are the caller's concern, as are the text-entry dialogs behind
/// [`DesignSession::rename_position`].
#[derive(Debug)]
pub struct DesignSession {
    spread: Spread,
    snap: SnapMode,
    selected: Option<usize>,
    gesture: Gesture,
}

impl DesignSession {
    /// Starts an editing session owning `spread`.
    #[must_use]
    pub fn new(spread: Spread) -> Self {
        Self {
            spread,
            snap: SnapMode::default(),
            selected: None,
            gesture: Gesture::Idle,
        }
    }

    /// The spread being edited.
    #[must_use]
    pub fn spread(&self) -> &Spread {
        &self.spread
    }

    /// Ends the session, handing the edited spread back.
    #[must_use]
    pub fn into_spread(self) -> Spread {
        self.spread
    }

    /// The current snap mode.
    #[must_use]
    pub fn snap_mode(&self) -> SnapMode {
        self.snap
    }

    /// Sets the snap mode. Takes effect from the next pointer event;
    /// geometry already placed is left alone.
    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        self.snap = mode;
    }

    /// The selected position index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The phase of the in-progress gesture.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.gesture {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Dragging { .. } => GesturePhase::Dragging,
            Gesture::Resizing { .. } => GesturePhase::Resizing,
            Gesture::MenuOpen { .. } => GesturePhase::MenuOpen,
        }
    }

    /// The logical canvas size for the current layout.
    ///
    /// Recomputed from the positions on every call, so it already reflects
    /// any in-progress drag or resize.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        canvas_extent(&self.spread.positions)
    }

    /// Hit test a logical canvas point against the layout.
    ///
    /// Later array entries stack on top, so the scan runs back to front; for
    /// each candidate the resize handle wins over the body.
    #[must_use]
    pub fn hit_test(&self, canvas_pt: Point) -> Option<Grab> {
        for (index, position) in self.spread.positions.iter().enumerate().rev() {
            if handle_rect(position).contains(canvas_pt) {
                return Some(Grab::Handle(index));
            }
            if position.frame().contains(canvas_pt) {
                return Some(Grab::Body(index));
            }
        }
        None
    }

    /// The resize handle rectangle for the position at `index`, in logical
    /// coordinates, for hosts that draw the handle.
    #[must_use]
    pub fn resize_handle_rect(&self, index: usize) -> Option<Rect> {
        self.spread.positions.get(index).map(handle_rect)
    }

    /// Handles a press at `view_pt`, starting a drag or resize when it lands
    /// on a position.
    ///
    /// Returns what was grabbed. A press on empty canvas returns `None` and
    /// clears the selection and any open menu.
    pub fn pointer_down(&mut self, map: &SurfaceMap, view_pt: Point) -> Option<Grab> {
        let pt = map.view_to_canvas_point(view_pt);
        let grab = self.hit_test(pt);
        match grab {
            Some(Grab::Body(index)) => {
                self.selected = Some(index);
                if let Some(position) = self.spread.positions.get(index) {
                    self.gesture = Gesture::Dragging {
                        index,
                        pointer: pt,
                        origin: position.origin(),
                    };
                }
            }
            Some(Grab::Handle(index)) => {
                self.selected = Some(index);
                if let Some(position) = self.spread.positions.get(index) {
                    self.gesture = Gesture::Resizing {
                        index,
                        pointer: pt,
                        extent: Size::new(position.width, position.height),
                    };
                }
            }
            None => {
                self.selected = None;
                self.gesture = Gesture::Idle;
            }
        }
        grab
    }

    /// Handles pointer movement, updating the dragged or resized position.
    ///
    /// Returns `true` when geometry changed. Drags snap the moved origin and
    /// clamp it to stay non-negative; there is no upper clamp because the
    /// canvas grows instead. Resizes snap the extent after enforcing
    /// [`MIN_POSITION_EXTENT`].
    pub fn pointer_move(&mut self, map: &SurfaceMap, view_pt: Point) -> bool {
        let pt = map.view_to_canvas_point(view_pt);
        let snap = self.snap;
        match self.gesture {
            Gesture::Dragging {
                index,
                pointer,
                origin,
            } => {
                let Some(position) = self.spread.positions.get_mut(index) else {
                    return false;
                };
                let delta = pt - pointer;
                position.x = snap.snap(origin.x + delta.x).max(0.0);
                position.y = snap.snap(origin.y + delta.y).max(0.0);
                true
            }
            Gesture::Resizing {
                index,
                pointer,
                extent,
            } => {
                let Some(position) = self.spread.positions.get_mut(index) else {
                    return false;
                };
                let delta = pt - pointer;
                position.width = snap.snap((extent.width + delta.x).max(MIN_POSITION_EXTENT));
                position.height = snap.snap((extent.height + delta.y).max(MIN_POSITION_EXTENT));
                true
            }
            Gesture::Idle | Gesture::MenuOpen { .. } => false,
        }
    }

    /// Handles a release: the in-progress drag or resize commits at its last
    /// computed value. Open menus stay open.
    pub fn pointer_up(&mut self) {
        if matches!(
            self.gesture,
            Gesture::Dragging { .. } | Gesture::Resizing { .. }
        ) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Handles the pointer leaving the surface. Identical to a release: the
    /// gesture commits, nothing rolls back.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Opens a context menu over the position under `view_pt`.
    ///
    /// Returns the action set to offer, or `None` (clearing selection and
    /// menu state) when the press landed on empty canvas.
    pub fn open_menu(&mut self, map: &SurfaceMap, view_pt: Point) -> Option<MenuActions> {
        let pt = map.view_to_canvas_point(view_pt);
        match self.hit_test(pt) {
            Some(Grab::Body(index) | Grab::Handle(index)) => {
                self.selected = Some(index);
                self.gesture = Gesture::MenuOpen { index };
                self.menu_actions()
            }
            None => {
                self.selected = None;
                self.gesture = Gesture::Idle;
                None
            }
        }
    }

    /// The open menu's action set, while one is open.
    ///
    /// Slot assignment is only offered when the spread actually partitions
    /// positions across more than one slot.
    #[must_use]
    pub fn menu_actions(&self) -> Option<MenuActions> {
        match self.gesture {
            Gesture::MenuOpen { .. } => {
                let mut actions = MenuActions::EDIT | MenuActions::ROTATE | MenuActions::DELETE;
                if self.spread.is_multi_slot() {
                    actions |= MenuActions::ASSIGN_SLOT;
                }
                Some(actions)
            }
            _ => None,
        }
    }

    /// The index the open menu refers to, while one is open.
    #[must_use]
    pub fn menu_target(&self) -> Option<usize> {
        match self.gesture {
            Gesture::MenuOpen { index } => Some(index),
            _ => None,
        }
    }

    /// Closes the context menu, keeping the selection.
    pub fn close_menu(&mut self) {
        if matches!(self.gesture, Gesture::MenuOpen { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Adds a position at the canvas center and returns its index.
    ///
    /// The new position gets the default extent, the 1-based count as its
    /// badge key, and the given label; the origin is snapped like any other
    /// placement. The new position becomes the selection.
    pub fn add_position(&mut self, label: impl Into<String>) -> usize {
        let canvas = self.canvas_size();
        let snap = self.snap;
        let index = self.spread.positions.len();

        let mut position = Position::new(
            snap.snap((canvas.width - DEFAULT_EXTENT.width) / 2.0).max(0.0),
            snap.snap((canvas.height - DEFAULT_EXTENT.height) / 2.0).max(0.0),
        )
        .with_label(label);
        position.key = Some(format!("{}", index + 1));

        self.spread.positions.push(position);
        self.selected = Some(index);
        index
    }

    /// Replaces the label and badge key of the position at `index`.
    ///
    /// Returns `false` when the index is out of range.
    pub fn rename_position(
        &mut self,
        index: usize,
        label: impl Into<String>,
        key: Option<String>,
    ) -> bool {
        let Some(position) = self.spread.positions.get_mut(index) else {
            return false;
        };
        position.label = label.into();
        position.key = key;
        true
    }

    /// Rotates the position at `index`: extents swap and the flag flips.
    ///
    /// Returns `false` when the index is out of range. Rotating twice
    /// restores the original geometry.
    pub fn rotate_position(&mut self, index: usize) -> bool {
        let Some(position) = self.spread.positions.get_mut(index) else {
            return false;
        };
        position.toggle_rotation();
        true
    }

    /// Points the position at `index` at a deck slot (or back at the
    /// implicit first slot with `None`).
    ///
    /// The key is not validated against the slot list; readers resolve
    /// unknown keys to the first slot and report them.
    pub fn assign_slot(&mut self, index: usize, slot_key: Option<String>) -> bool {
        let Some(position) = self.spread.positions.get_mut(index) else {
            return false;
        };
        position.deck_slot_key = slot_key;
        true
    }

    /// Removes the position at `index`.
    ///
    /// Clears the selection when it pointed at the removed position and
    /// shifts it down when it pointed past it. Any in-progress gesture ends.
    pub fn delete_position(&mut self, index: usize) -> bool {
        if index >= self.spread.positions.len() {
            return false;
        }
        self.spread.positions.remove(index);
        self.gesture = Gesture::Idle;
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        true
    }

    /// Removes every position. Any in-progress gesture ends.
    pub fn clear_positions(&mut self) {
        self.spread.positions.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
    }

    /// Adds a deck slot with an auto-generated key and returns that key.
    pub fn add_deck_slot(
        &mut self,
        cartomancy_type: impl Into<String>,
        label: Option<String>,
    ) -> String {
        self.spread.add_slot(cartomancy_type, label)
    }

    /// Removes the deck slot with `key`, returning it if present.
    ///
    /// Positions referencing the removed slot keep their reference; readers
    /// fall back to the first remaining slot and report the dangling key.
    pub fn remove_deck_slot(&mut self, key: &str) -> Option<DeckSlot> {
        self.spread.remove_slot(key)
    }

    /// Sets the spread's display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.spread.name = name.into();
    }

    /// Sets the spread's description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.spread.description = description.into();
    }

    /// Snapshot of the session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DesignSessionDebugInfo {
        DesignSessionDebugInfo {
            canvas_size: self.canvas_size(),
            position_count: self.spread.positions.len(),
            deck_slot_count: self.spread.deck_slots.len(),
            snap_mode: self.snap,
            phase: self.phase(),
            selected: self.selected,
        }
    }
}

/// Debug snapshot of a [`DesignSession`] state.
#[derive(Clone, Copy, Debug)]
pub struct DesignSessionDebugInfo {
    /// Logical canvas size for the current layout.
    pub canvas_size: Size,
    /// Number of positions in the layout.
    pub position_count: usize,
    /// Number of deck slots on the spread.
    pub deck_slot_count: usize,
    /// Active snap mode.
    pub snap_mode: SnapMode,
    /// Phase of the in-progress gesture.
    pub phase: GesturePhase,
    /// Selected position index, if any.
    pub selected: Option<usize>,
}

fn handle_rect(position: &Position) -> Rect {
    let frame = position.frame();
    Rect::new(
        frame.x1 - RESIZE_HANDLE,
        frame.y1 - RESIZE_HANDLE,
        frame.x1,
        frame.y1,
    )
}
