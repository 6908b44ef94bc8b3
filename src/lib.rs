//! A per-window mode state machine for tiling window managers.
//!
//! Each on-screen window that the window manager knows about is wrapped in a [Window]
//! which tracks the management mode it is currently in (see [WindowState]), guards
//! transitions between those modes and pushes the resulting geometry out to the
//! underlying display system through a [DriverWindow].
//!
//! This crate does not decide *where* tiled windows go: that is the job of a layout
//! algorithm which assigns [Window::geometry] before calling [Window::commit].
//!
//! ```
//! # #[cfg(feature = "mock")]
//! # {
//! use tiling_window::{
//!     driver::mock::MockDriverWindow, pure::geometry::Rect, Config, Window, WindowState,
//! };
//!
//! let driver = MockDriverWindow::new(1, Rect::new(10, 10, 300, 200));
//! let mut w = Window::new(&driver);
//!
//! w.request_state(WindowState::Tile);
//! w.geometry = Rect::new(0, 0, 960, 1080);
//! w.commit(&Config::default());
//!
//! assert_eq!(driver.commits().len(), 1);
//! assert!(w.tileable());
//! # }
//! ```
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod config;
pub mod driver;
pub mod pure;
pub mod window;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use driver::DriverWindow;
#[doc(inline)]
pub use pure::{ResizeDelta, Transition, WindowState};
#[doc(inline)]
pub use window::Window;

/// A stable identifier for a window as assigned by the display driver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct WindowId(pub(crate) u32);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for WindowId {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for WindowId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Error variants from the window state machine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested change of [WindowState] is not permitted from the current state
    #[error("window {id} can not move from {from} to {to}")]
    InvalidTransition {
        /// The window the transition was requested for
        id: WindowId,
        /// The effective state of the window at the time of the request
        from: WindowState,
        /// The requested state
        to: WindowState,
    },

    /// Parsing a [WindowState] from a str failed.
    ///
    /// This happens when the name being parsed is not a known state.
    #[error(transparent)]
    Strum(#[from] strum::ParseError),
}

/// A Result where the error type is a crate [Error]
pub type Result<T> = std::result::Result<T, Error>;
