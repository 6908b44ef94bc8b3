//! Side effect free window state logic
mod delta;
pub mod geometry;
mod state;

#[doc(inline)]
pub use delta::ResizeDelta;
#[doc(inline)]
pub use geometry::{Point, Rect};
#[doc(inline)]
pub use state::{Transition, WindowState};
