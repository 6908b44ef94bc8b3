//! Geometry primitives
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Sub};

/// An x,y coordinate pair
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// An absolute x coordinate in the driver's global coordinate space
    pub x: i32,
    /// An absolute y coordinate in the driver's global coordinate space
    pub y: i32,
}

impl Point {
    /// Create a new Point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from(raw: (i32, i32)) -> Self {
        let (x, y) = raw;

        Self { x, y }
    }
}

// A Rect converts to its top left corner
impl From<Rect> for Point {
    fn from(r: Rect) -> Self {
        let Rect { x, y, .. } = r;

        Self { x, y }
    }
}

/// A window position: top left corner + extent.
///
/// Coordinates are signed as windows on a secondary output (or partially dragged off
/// screen) are reported by drivers at negative offsets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Rect {
    /// The x-coordinate of the top left corner of this rect
    pub x: i32,
    /// The y-coordinate of the top left corner of this rect
    pub y: i32,
    /// The width of this rect
    pub w: i32,
    /// The height of this rect
    pub h: i32,
}

impl Rect {
    /// Create a new Rect.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    /// The x-coordinate of the right hand edge of this [Rect]
    /// ```
    /// # use tiling_window::pure::geometry::Rect;
    /// assert_eq!(Rect::new(-10, 0, 110, 50).right(), 100);
    /// ```
    pub fn right(&self) -> i32 {
        self.x.wrapping_add(self.w)
    }

    /// The y-coordinate of the bottom edge of this [Rect]
    /// ```
    /// # use tiling_window::pure::geometry::Rect;
    /// assert_eq!(Rect::new(0, 20, 110, 50).bottom(), 70);
    /// ```
    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.h)
    }

    /// The componentwise difference between this [Rect] and `other`.
    ///
    /// The result is not a rectangle in any meaningful sense: it is the offset of the
    /// anchor (top left corner) along with the change in width and height. Differences
    /// that do not fit in an `i32` wrap rather than panicking.
    /// ```
    /// # use tiling_window::pure::geometry::Rect;
    /// let intended = Rect::new(0, 0, 100, 100);
    /// let actual = Rect::new(-10, 5, 120, 90);
    ///
    /// assert_eq!(actual.subtract(&intended), Rect::new(-10, 5, 20, -10));
    /// ```
    pub fn subtract(&self, other: &Rect) -> Rect {
        Rect {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
            w: self.w.wrapping_sub(other.w),
            h: self.h.wrapping_sub(other.h),
        }
    }
}

impl Sub for Rect {
    type Output = Rect;

    fn sub(self, rhs: Rect) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({},{} {}x{})", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test_case(r(0, 0, 100, 100), r(0, 0, 100, 100), r(0, 0, 0, 0); "identical")]
    #[test_case(r(-10, 5, 120, 90), r(0, 0, 100, 100), r(-10, 5, 20, -10); "moved and resized")]
    #[test_case(r(50, 50, 100, 100), r(0, 0, 100, 100), r(50, 50, 0, 0); "moved only")]
    #[test]
    fn subtract_is_componentwise(a: Rect, b: Rect, expected: Rect) {
        assert_eq!(a.subtract(&b), expected);
        assert_eq!(a - b, expected);
    }

    #[test]
    fn subtract_wraps_at_the_limits_of_i32() {
        let a = r(i32::MAX, i32::MIN, i32::MAX, 0);
        let b = r(i32::MIN, i32::MAX, -1, 1);

        assert_eq!(a.subtract(&b), r(-1, 1, i32::MIN, -1));
    }

    #[test]
    fn point_from_rect_is_top_left() {
        assert_eq!(Point::from(r(-3, 7, 10, 10)), Point::new(-3, 7));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(r(-1, 2, 30, 40).to_string(), "Rect(-1,2 30x40)");
    }
}
