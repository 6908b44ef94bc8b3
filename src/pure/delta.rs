//! Classifying interactive resizes by the edges that moved.
use crate::{driver::DriverWindow, pure::geometry::Rect, window::Window};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far each edge of a window has moved between the geometry it was last given
/// and the geometry the driver now reports for it.
///
/// Positive values mean that the edge moved outwards: a window whose west edge was
/// dragged 10px to the left has `west == 10`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResizeDelta {
    /// Displacement of the right hand edge
    pub east: i32,
    /// Displacement of the left hand edge
    pub west: i32,
    /// Displacement of the bottom edge
    pub south: i32,
    /// Displacement of the top edge
    pub north: i32,
}

impl ResizeDelta {
    /// Compute the delta between an intended and an actual geometry.
    ///
    /// The anchor of a [Rect] is its top left corner, so movement of the west and
    /// north edges shows up as a shift of the anchor while the east and south edges
    /// move by the change in extent plus that shift. Arithmetic wraps on overflow, so
    /// nonsensical driver geometry gives a nonsensical delta rather than a panic.
    /// ```
    /// # use tiling_window::{pure::geometry::Rect, ResizeDelta};
    /// let d = ResizeDelta::between(Rect::new(0, 0, 100, 100), Rect::new(-10, 5, 120, 90));
    ///
    /// assert_eq!((d.east, d.west, d.south, d.north), (10, 10, -5, -5));
    /// ```
    pub fn between(geometry: Rect, actual: Rect) -> Self {
        let diff = actual - geometry;

        Self {
            east: diff.w.wrapping_add(diff.x),
            west: diff.x.wrapping_neg(),
            south: diff.h.wrapping_add(diff.y),
            north: diff.y.wrapping_neg(),
        }
    }

    /// Compute the delta for a [Window] from a snapshot of its intended and actual geometry.
    pub fn from_window<D: DriverWindow>(w: &Window<D>) -> Self {
        Self::between(w.geometry, w.actual_geometry())
    }
}

impl fmt::Display for ResizeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WindowResizeDelta(east={} west={} north={} south={})",
            self.east, self.west, self.north, self.south
        )
    }
}
