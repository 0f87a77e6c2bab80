//! Axis-aligned rectangles in grid space.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Width and height of a rectangle, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub const fn new(width: usize, height: usize) -> Self {
        Size { width, height }
    }
}

/// A rectangle whose `top` corner and far corner are both inclusive.
///
/// Sizes are expected to be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub top: Position,
    pub size: Size,
}

impl Rect {
    pub const fn new(top: Position, size: Size) -> Self {
        Rect { top, size }
    }

    /// Rightmost column covered by the rectangle.
    pub fn right(&self) -> usize {
        self.top.x + self.size.width - 1
    }

    /// Bottom row covered by the rectangle.
    pub fn bottom(&self) -> usize {
        self.top.y + self.size.height - 1
    }

    /// True when the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.top.x <= other.right()
            && other.top.x <= self.right()
            && self.top.y <= other.bottom()
            && other.top.y <= self.bottom()
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.top.x..=self.right()).contains(&pos.x)
            && (self.top.y..=self.bottom()).contains(&pos.y)
    }

    /// The rectangle left once the one-cell border ring is removed, if any.
    pub fn interior(&self) -> Option<Rect> {
        if self.size.width < 3 || self.size.height < 3 {
            return None;
        }
        Some(Rect::new(
            Position::new(self.top.x + 1, self.top.y + 1),
            Size::new(self.size.width - 2, self.size.height - 2),
        ))
    }

    /// True when the rectangle lies inside a `width` x `height` grid with its
    /// far edges kept off the last row and column.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.top.x + self.size.width < width && self.top.y + self.size.height < height
    }

    /// Cells on the border ring, row by row for the top and bottom edges,
    /// then the left and right columns.
    pub fn perimeter(&self) -> impl Iterator<Item = Position> + '_ {
        let (left, right, top, bottom) = (self.top.x, self.right(), self.top.y, self.bottom());
        let horizontal =
            (left..=right).flat_map(move |x| [Position::new(x, top), Position::new(x, bottom)]);
        let vertical =
            (top..=bottom).flat_map(move |y| [Position::new(left, y), Position::new(right, y)]);
        horizontal.chain(vertical)
    }
}
