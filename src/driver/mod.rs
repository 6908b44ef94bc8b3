//! An abstraction layer for the display system's view of a single window.
//!
//! A [DriverWindow] is required for each [Window][crate::Window] being managed. How the
//! driver actually talks to the display server (KWin scripting, X11, a wayland compositor...)
//! is an implementation detail that does not surface in the window state machine itself.
//!
//! Drivers are assumed to be synchronous and infallible from the point of view of this crate:
//! if pushing geometry fails, handling that is the responsibility of the driver.
use crate::{pure::geometry::Rect, WindowId};
use std::{fmt, rc::Rc};

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// A handle on a real window as seen by the display system.
///
/// Implementations must be cheap to query: properties are read on every state check rather
/// than cached, as the driver is the source of truth for things such as fullscreen status.
pub trait DriverWindow: fmt::Display {
    /// The display surface (output, activity, virtual desktop...) a window can be shown on.
    type Surface;

    /// The stable identifier of this window.
    fn id(&self) -> WindowId;
    /// The geometry this window currently occupies on screen.
    fn geometry(&self) -> Rect;
    /// The surface this window is currently assigned to.
    fn surface(&self) -> Self::Surface;
    /// Whether window rules say that this window should float.
    fn should_float(&self) -> bool;
    /// Whether window rules say that this window should be left alone entirely.
    fn should_ignore(&self) -> bool;
    /// Whether this window is in native fullscreen.
    fn fullscreen(&self) -> bool;

    /// Push new geometry, decoration and stacking intent to the display system.
    ///
    /// A value of `None` for any argument leaves that aspect for the driver to manage
    /// natively.
    fn commit(&self, geometry: Option<Rect>, no_border: Option<bool>, keep_below: Option<bool>);
    /// Request input focus for this window.
    fn focus(&self);
    /// Whether this window is shown on the given surface.
    fn visible(&self, surface: &Self::Surface) -> bool;
}

macro_rules! __forward_driver_window {
    ($($ptr:ty),+) => {
        $(
            impl<T> DriverWindow for $ptr
            where
                T: DriverWindow + ?Sized,
            {
                type Surface = T::Surface;

                fn id(&self) -> WindowId {
                    (**self).id()
                }

                fn geometry(&self) -> Rect {
                    (**self).geometry()
                }

                fn surface(&self) -> Self::Surface {
                    (**self).surface()
                }

                fn should_float(&self) -> bool {
                    (**self).should_float()
                }

                fn should_ignore(&self) -> bool {
                    (**self).should_ignore()
                }

                fn fullscreen(&self) -> bool {
                    (**self).fullscreen()
                }

                fn commit(
                    &self,
                    geometry: Option<Rect>,
                    no_border: Option<bool>,
                    keep_below: Option<bool>,
                ) {
                    (**self).commit(geometry, no_border, keep_below)
                }

                fn focus(&self) {
                    (**self).focus()
                }

                fn visible(&self, surface: &Self::Surface) -> bool {
                    (**self).visible(surface)
                }
            }
        )+
    };
}

// Windows hold their driver handle without owning the underlying window, so borrowed
// and shared handles are both valid drivers.
__forward_driver_window!(&T, Rc<T>);
