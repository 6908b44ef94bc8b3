//! Window management modes and the legal transitions between them.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The management mode of a single window.
///
/// [WindowState::FullScreen] is never stored by a [Window][crate::Window]: it is derived from
/// the driver's native fullscreen flag (see [WindowState::effective]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(
    Debug, Default, Display, AsRefStr, EnumString, EnumIter, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum WindowState {
    /// Not yet subject to any tiling policy
    #[default]
    Unmanaged,
    /// Positioned by the external layout algorithm
    Tile,
    /// Free-form and excluded from the tiling layout
    Float,
    /// Free-form geometry that still participates in tiling stack order
    FreeTile,
    /// The driver has put the window into native fullscreen
    FullScreen,
}

impl WindowState {
    /// The mode a window is actually in given its stored mode and the driver's
    /// fullscreen flag. The flag always wins.
    /// ```
    /// # use tiling_window::WindowState;
    /// assert_eq!(WindowState::effective(WindowState::Tile, true), WindowState::FullScreen);
    /// assert_eq!(WindowState::effective(WindowState::Tile, false), WindowState::Tile);
    /// ```
    pub fn effective(stored: WindowState, fullscreen: bool) -> WindowState {
        if fullscreen {
            WindowState::FullScreen
        } else {
            stored
        }
    }

    /// Whether windows in this state have their geometry decided by the user rather
    /// than the layout.
    pub fn is_free_form(&self) -> bool {
        matches!(self, WindowState::Float | WindowState::FreeTile)
    }

    /// Whether windows in this state take part in tiling.
    pub fn is_tileable(&self) -> bool {
        matches!(self, WindowState::Tile | WindowState::FreeTile)
    }
}

/// The outcome of requesting a change from one [WindowState] to another.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Nothing to do: the request is for the current state or for fullscreen
    Ignore,
    /// Accept the new state with no further side effects
    AcceptNoop,
    /// Accept, restoring the stored float geometry on the driver
    AcceptPushFloat,
    /// Accept, first recording the driver's current geometry as the float geometry
    AcceptCaptureActual,
    /// Leave the current state as it is
    Deny,
}

impl Transition {
    /// Look up what should happen when a window currently in `from` (the effective
    /// state) is asked to move to `to`.
    pub fn between(from: WindowState, to: WindowState) -> Transition {
        use WindowState::*;

        match (from, to) {
            (_, FullScreen) => Transition::Ignore,
            (f, t) if f == t => Transition::Ignore,
            (Unmanaged, _) | (FullScreen, _) => Transition::AcceptNoop,
            (Tile, t) if t.is_free_form() => Transition::AcceptPushFloat,
            (f, Tile) if f.is_free_form() => Transition::AcceptCaptureActual,
            (f, t) if f.is_free_form() && t.is_free_form() => Transition::AcceptNoop,
            _ => Transition::Deny,
        }
    }

    /// Whether the requested state should be stored following this transition
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            Transition::AcceptNoop | Transition::AcceptPushFloat | Transition::AcceptCaptureActual
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Transition::*, WindowState::*, *};
    use crate::Error;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use simple_test_case::test_case;
    use strum::IntoEnumIterator;

    impl Arbitrary for WindowState {
        fn arbitrary(g: &mut Gen) -> Self {
            let states: Vec<WindowState> = WindowState::iter().collect();

            *g.choose(&states).expect("non-empty")
        }
    }

    #[test_case(Tile, Float, AcceptPushFloat; "tile to float")]
    #[test_case(Tile, FreeTile, AcceptPushFloat; "tile to free tile")]
    #[test_case(Float, Tile, AcceptCaptureActual; "float to tile")]
    #[test_case(FreeTile, Tile, AcceptCaptureActual; "free tile to tile")]
    #[test_case(Float, FreeTile, AcceptNoop; "float to free tile")]
    #[test_case(FreeTile, Float, AcceptNoop; "free tile to float")]
    #[test_case(Unmanaged, Tile, AcceptNoop; "adopt as tile")]
    #[test_case(Unmanaged, Float, AcceptNoop; "adopt as float")]
    #[test_case(FullScreen, FreeTile, AcceptNoop; "leave fullscreen")]
    #[test_case(FullScreen, Unmanaged, AcceptNoop; "fullscreen to unmanaged")]
    #[test_case(Tile, Unmanaged, Deny; "tile to unmanaged")]
    #[test_case(Float, Unmanaged, Deny; "float to unmanaged")]
    #[test_case(FreeTile, Unmanaged, Deny; "free tile to unmanaged")]
    #[test_case(Tile, FullScreen, Ignore; "fullscreen can not be requested")]
    #[test_case(Float, Float, Ignore; "same state")]
    #[test]
    fn transition_table(from: WindowState, to: WindowState, expected: Transition) {
        assert_eq!(Transition::between(from, to), expected);
    }

    #[test]
    fn every_pair_has_an_entry() {
        for from in WindowState::iter() {
            for to in WindowState::iter() {
                let t = Transition::between(from, to);
                if to == FullScreen || from == to {
                    assert_eq!(t, Ignore, "{from} -> {to}");
                } else {
                    assert_ne!(t, Ignore, "{from} -> {to}");
                }
            }
        }
    }

    #[quickcheck]
    fn fullscreen_is_never_accepted(from: WindowState) -> bool {
        !Transition::between(from, FullScreen).is_accepted()
    }

    #[quickcheck]
    fn requesting_the_current_state_is_ignored(s: WindowState) -> bool {
        Transition::between(s, s) == Ignore
    }

    #[quickcheck]
    fn fullscreen_flag_always_wins(stored: WindowState) -> bool {
        WindowState::effective(stored, true) == FullScreen
            && WindowState::effective(stored, false) == stored
    }

    #[test_case(Unmanaged, false; "unmanaged")]
    #[test_case(Tile, true; "tile")]
    #[test_case(Float, false; "float")]
    #[test_case(FreeTile, true; "free tile")]
    #[test_case(FullScreen, false; "fullscreen")]
    #[test]
    fn is_tileable(s: WindowState, expected: bool) {
        assert_eq!(s.is_tileable(), expected);
    }

    #[test_case(Unmanaged, false; "unmanaged")]
    #[test_case(Tile, false; "tile")]
    #[test_case(Float, true; "float")]
    #[test_case(FreeTile, true; "free tile")]
    #[test_case(FullScreen, false; "fullscreen")]
    #[test]
    fn is_free_form(s: WindowState, expected: bool) {
        assert_eq!(s.is_free_form(), expected);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for s in WindowState::iter() {
            assert_eq!(s.to_string().parse::<WindowState>(), Ok(s));
        }
    }

    #[test]
    fn unknown_names_are_an_error() {
        let res = "Maximised".parse::<WindowState>();
        assert_eq!(res, Err(strum::ParseError::VariantNotFound));

        let err: Error = res.unwrap_err().into();
        assert_eq!(err, Error::Strum(strum::ParseError::VariantNotFound));
    }
}
