//! Positions and the buffer-owned cursor
//!
//! Coordinates are signed: the adapter computes viewport-relative values by
//! subtraction and hands them back unclamped, so they may be negative.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A coordinate pair, column `x` and row `y`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cursor state of a screen buffer, in absolute buffer coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Point,
}

impl Cursor {
    /// Create a new cursor at the home position
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Move to an absolute position. Bounds are the owner's concern.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Carriage return - move to column 0
    pub fn carriage_return(&mut self) {
        self.position.x = 0;
    }

    /// Advance one column, wrapping to the next row at `cols`.
    /// Returns true when the cursor wrapped.
    pub fn advance(&mut self, cols: i32) -> bool {
        self.position.x += 1;
        if self.position.x >= cols {
            self.position.x = 0;
            self.position.y += 1;
            true
        } else {
            false
        }
    }

    /// Step back one column, moving to the end of the previous row from
    /// column 0. Stays put at the buffer origin.
    pub fn retreat(&mut self, cols: i32) {
        if self.position.x > 0 {
            self.position.x -= 1;
        } else if self.position.y > 0 {
            self.position.y -= 1;
            self.position.x = cols - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic_saturates() {
        assert_eq!(Point::new(3, 4) + Point::new(1, -6), Point::new(4, -2));
        assert_eq!(Point::new(i32::MAX, 0) + Point::new(1, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), Point::new(i32::MIN, 0));
    }

    #[test]
    fn test_cursor_starts_at_origin() {
        assert_eq!(Cursor::new().position(), Point::ORIGIN);
    }

    #[test]
    fn test_cursor_advance_wraps() {
        let mut cursor = Cursor::new();
        cursor.set_position(Point::new(78, 3));
        assert!(!cursor.advance(80));
        assert_eq!(cursor.position(), Point::new(79, 3));
        assert!(cursor.advance(80));
        assert_eq!(cursor.position(), Point::new(0, 4));
    }

    #[test]
    fn test_cursor_retreat() {
        let mut cursor = Cursor::new();
        cursor.retreat(80);
        assert_eq!(cursor.position(), Point::ORIGIN);

        cursor.set_position(Point::new(0, 2));
        cursor.retreat(80);
        assert_eq!(cursor.position(), Point::new(79, 1));
    }

    #[test]
    fn test_carriage_return() {
        let mut cursor = Cursor::new();
        cursor.set_position(Point::new(50, 10));
        cursor.carriage_return();
        assert_eq!(cursor.position(), Point::new(0, 10));
    }
}
