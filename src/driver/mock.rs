//! A recording implementation of [DriverWindow] for use in tests.
//!
//! [MockDriverWindow] keeps its reported properties in [Cell]s so that tests can change what
//! the "display system" reports between calls, and records every call to `commit` and `focus`
//! so that side effects can be asserted on.
//! This module and its contents are only available when testing or with the `mock` feature.
use crate::{driver::DriverWindow, pure::geometry::Rect, WindowId};
use std::{
    cell::{Cell, RefCell},
    fmt,
};

/// The arguments of a single call to [DriverWindow::commit].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commit {
    /// Requested geometry
    pub geometry: Option<Rect>,
    /// Requested border suppression
    pub no_border: Option<bool>,
    /// Requested keep below other windows
    pub keep_below: Option<bool>,
}

/// A fake driver window.
///
/// Committed geometry is not applied to the reported geometry: tests that need the driver
/// to "move" the window should call [MockDriverWindow::set_geometry].
#[derive(Debug, Default)]
pub struct MockDriverWindow {
    id: u32,
    geometry: Cell<Rect>,
    surface: Cell<u32>,
    should_float: Cell<bool>,
    should_ignore: Cell<bool>,
    fullscreen: Cell<bool>,
    commits: RefCell<Vec<Commit>>,
    focus_requests: Cell<usize>,
}

impl MockDriverWindow {
    /// Create a new mock window on surface `0` with the given id and geometry.
    pub fn new(id: u32, r: Rect) -> Self {
        Self {
            id,
            geometry: Cell::new(r),
            ..Default::default()
        }
    }

    /// Set the geometry the driver reports for this window.
    pub fn set_geometry(&self, r: Rect) {
        self.geometry.set(r);
    }

    /// Set the native fullscreen flag for this window.
    pub fn set_fullscreen(&self, fullscreen: bool) {
        self.fullscreen.set(fullscreen);
    }

    /// Set the surface this window is shown on.
    pub fn set_surface(&self, surface: u32) {
        self.surface.set(surface);
    }

    /// Set the policy hints reported for this window.
    pub fn set_hints(&self, should_float: bool, should_ignore: bool) {
        self.should_float.set(should_float);
        self.should_ignore.set(should_ignore);
    }

    /// All calls to `commit` made so far, oldest first.
    pub fn commits(&self) -> Vec<Commit> {
        self.commits.borrow().clone()
    }

    /// The number of calls to `focus` made so far.
    pub fn focus_requests(&self) -> usize {
        self.focus_requests.get()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.commits.borrow_mut().clear();
        self.focus_requests.set(0);
    }
}

impl fmt::Display for MockDriverWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockDriverWindow({})", self.id)
    }
}

impl DriverWindow for MockDriverWindow {
    type Surface = u32;

    fn id(&self) -> WindowId {
        WindowId(self.id)
    }

    fn geometry(&self) -> Rect {
        self.geometry.get()
    }

    fn surface(&self) -> u32 {
        self.surface.get()
    }

    fn should_float(&self) -> bool {
        self.should_float.get()
    }

    fn should_ignore(&self) -> bool {
        self.should_ignore.get()
    }

    fn fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn commit(&self, geometry: Option<Rect>, no_border: Option<bool>, keep_below: Option<bool>) {
        self.commits.borrow_mut().push(Commit {
            geometry,
            no_border,
            keep_below,
        });
    }

    fn focus(&self) {
        self.focus_requests.set(self.focus_requests.get() + 1);
    }

    fn visible(&self, surface: &u32) -> bool {
        self.surface.get() == *surface
    }
}
