//! The per-window state machine.
use crate::{
    config::Config,
    driver::DriverWindow,
    pure::{geometry::Rect, Transition, WindowState},
    Error, Result, WindowId,
};
use std::fmt;
use tracing::{debug, trace};

/// A single on-screen window and the management mode it is in.
///
/// A Window holds a handle to the [DriverWindow] it wraps but never owns the real window:
/// the display system decides when windows appear and disappear, and a Window should simply
/// be dropped once its driver window is gone.
///
/// The mode of a window can only be changed through [Window::request_state], which enforces
/// the legal transitions between modes (see [Transition::between]) along with their side
/// effects on the geometry used when floating.
#[derive(Debug, Clone)]
pub struct Window<D> {
    id: WindowId,
    /// Where this window should be while tiled. Assigned by the layout.
    pub geometry: Rect,
    /// Suppress window decorations while tiled
    pub no_border: bool,
    float_geometry: Rect,
    state: WindowState,
    driver: D,
}

impl<D> Window<D>
where
    D: DriverWindow,
{
    /// Start tracking a newly reported driver window.
    ///
    /// New windows are [WindowState::Unmanaged] with both their tiled and floating
    /// geometry set to where the driver currently has them.
    pub fn new(driver: D) -> Self {
        let r = driver.geometry();

        Self {
            id: driver.id(),
            geometry: r,
            no_border: false,
            float_geometry: r,
            state: WindowState::Unmanaged,
            driver,
        }
    }

    /// The driver assigned ID of this window
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// The driver handle for this window
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The geometry that will be restored when this window next becomes free-form.
    pub fn float_geometry(&self) -> Rect {
        self.float_geometry
    }

    /// The current mode of this window.
    ///
    /// This is [WindowState::FullScreen] whenever the driver reports the window as being
    /// fullscreen, regardless of any previously requested state.
    pub fn state(&self) -> WindowState {
        WindowState::effective(self.state, self.driver.fullscreen())
    }

    /// Request that this window move to a new [WindowState].
    ///
    /// Requests that are not permitted from the current state are dropped (and logged at
    /// `debug` level). [WindowState::FullScreen] can never be requested directly: it is only
    /// entered when the driver sets its fullscreen flag. Use [Window::try_request_state] if
    /// you need to know whether the request was accepted.
    pub fn request_state(&mut self, req: WindowState) {
        self.apply_transition(req);
    }

    /// Request that this window move to a new [WindowState], returning the [Transition]
    /// that was applied.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransition] if the request was denied. The window is left
    /// unchanged in this case.
    pub fn try_request_state(&mut self, req: WindowState) -> Result<Transition> {
        let from = self.state();

        match self.apply_transition(req) {
            Transition::Deny => Err(Error::InvalidTransition {
                id: self.id,
                from,
                to: req,
            }),
            t => Ok(t),
        }
    }

    fn apply_transition(&mut self, req: WindowState) -> Transition {
        let cur = self.state();
        let t = Transition::between(cur, req);

        match t {
            Transition::Ignore => return t,

            Transition::Deny => {
                debug!(id = %self.id, from = %cur, to = %req, "ignoring invalid state transition");
                return t;
            }

            Transition::AcceptNoop => (),

            Transition::AcceptPushFloat => {
                let r = self.float_geometry;
                trace!(id = %self.id, %r, "restoring float geometry");
                self.driver.commit(Some(r), Some(false), Some(false));
            }

            Transition::AcceptCaptureActual => {
                self.float_geometry = self.driver.geometry();
                trace!(id = %self.id, r = %self.float_geometry, "saved float geometry");
            }
        }

        trace!(id = %self.id, from = %cur, to = %req, "window state updated");
        self.state = req;

        t
    }

    /// Push the current intended geometry for this window out to the driver.
    ///
    /// Only tiled and fullscreen windows are pushed: free-form windows are positioned by
    /// the user and unmanaged windows are left alone.
    #[tracing::instrument(level = "trace", skip_all, fields(id = %self.id))]
    pub fn commit(&self, config: &Config) {
        match self.state() {
            WindowState::Tile => {
                trace!(r = %self.geometry, no_border = self.no_border, "committing tiled geometry");
                self.driver.commit(
                    Some(self.geometry),
                    Some(self.no_border),
                    Some(config.keep_tile_below),
                );
            }

            WindowState::FullScreen => {
                trace!("committing fullscreen");
                self.driver.commit(None, None, Some(false));
            }

            WindowState::Unmanaged | WindowState::Float | WindowState::FreeTile => (),
        }
    }

    /// Request input focus for this window.
    pub fn focus(&self) {
        self.driver.focus();
    }

    /// Whether this window is shown on the given surface.
    pub fn visible(&self, surface: &D::Surface) -> bool {
        self.driver.visible(surface)
    }

    /// Where the driver reports this window as actually being.
    pub fn actual_geometry(&self) -> Rect {
        self.driver.geometry()
    }

    /// The surface this window is currently assigned to.
    pub fn surface(&self) -> D::Surface {
        self.driver.surface()
    }

    /// Whether window rules say that this window should float.
    pub fn should_float(&self) -> bool {
        self.driver.should_float()
    }

    /// Whether window rules say that this window should be left alone.
    pub fn should_ignore(&self) -> bool {
        self.driver.should_ignore()
    }

    /// Whether this window takes part in tiling.
    pub fn tileable(&self) -> bool {
        self.state().is_tileable()
    }
}

impl<D> fmt::Display for Window<D>
where
    D: DriverWindow,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Window({})", self.driver)
    }
}
