//! Viewport geometry
//!
//! The viewport is the visible sub-rectangle of the buffer. It is owned by
//! the host's viewport manager; the adapter only reads it through
//! [`ViewportSource`] to translate and clamp coordinates.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::cursor::Point;

/// Rectangle with an absolute origin and a size in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    origin: Point,
    width: u16,
    height: u16,
}

impl Viewport {
    pub fn new(origin: Point, width: u16, height: u16) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Top-left corner in buffer coordinates
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// First column past the right edge
    pub fn right_exclusive(&self) -> i32 {
        self.origin.x.saturating_add(i32::from(self.width))
    }

    /// First row past the bottom edge
    pub fn bottom_exclusive(&self) -> i32 {
        self.origin.y.saturating_add(i32::from(self.height))
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.left()..self.right_exclusive()).contains(&point.x)
            && (self.top()..self.bottom_exclusive()).contains(&point.y)
    }

    /// Pull `point` to the nearest in-bounds value, each axis on its own.
    /// A zero-sized axis clamps to the origin.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            clamp_axis(point.x, self.left(), self.right_exclusive()),
            clamp_axis(point.y, self.top(), self.bottom_exclusive()),
        )
    }

    /// Move the viewport to a new origin, keeping its size
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }
}

fn clamp_axis(value: i32, start: i32, end_exclusive: i32) -> i32 {
    let last = end_exclusive.saturating_sub(1).max(start);
    value.clamp(start, last)
}

/// Read-only access to the current viewport
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Lets a host move the viewport while the adapter holds a shared handle.
impl ViewportSource for Cell<Viewport> {
    fn viewport(&self) -> Viewport {
        self.get()
    }
}

impl<T: ViewportSource + ?Sized> ViewportSource for &T {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }
}

impl<T: ViewportSource + ?Sized> ViewportSource for Rc<T> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }
}

impl<T: ViewportSource + ?Sized> ViewportSource for Box<T> {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }
}
