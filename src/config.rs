//! User facing configuration for managed windows.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that affect how window state is pushed to the driver.
///
/// This is passed explicitly to [Window::commit][crate::Window::commit] rather than being
/// read from global state.
///
/// # Example
/// ```
/// use tiling_window::Config;
///
/// let config = Config::default();
///
/// assert!(!config.keep_tile_below);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Keep tiled windows stacked below other windows
    pub keep_tile_below: bool,
}
