use serde::{Deserialize, Serialize};

use crate::{
    Direction, Position,
    geometry::{Rect, Size},
};

/// A walled rectangular room in a chain.
///
/// `entry_door` is the doorway shared with the previous room; for the first
/// room of a chain it is the chain's starting point. `exit_door` links to the
/// next room and stays `None` until that room is materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub rect: Rect,
    pub entry_door: Position,
    pub exit_door: Option<Position>,
}

impl Room {
    pub fn new(rect: Rect, entry_door: Position) -> Self {
        Room {
            rect,
            entry_door,
            exit_door: None,
        }
    }

    #[inline]
    pub fn top(&self) -> Position {
        self.rect.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size
    }

    /// The door cell on `wall` at `offset` cells from the wall's start.
    ///
    /// Offsets run left to right along horizontal walls and top to bottom
    /// along vertical ones. Callers keep the offset in `1..len - 1` so the
    /// door never lands on a corner.
    pub fn door_on_wall(&self, wall: Direction, offset: usize) -> Position {
        let Rect { top, .. } = self.rect;
        match wall {
            Direction::Right => Position::new(self.rect.right(), top.y + offset),
            Direction::Down => Position::new(top.x + offset, self.rect.bottom()),
            Direction::Left => Position::new(top.x, top.y + offset),
            Direction::Up => Position::new(top.x + offset, top.y),
        }
    }

    /// Number of cells along `wall`, corners included.
    pub fn wall_length(&self, wall: Direction) -> usize {
        match wall {
            Direction::Right | Direction::Left => self.rect.size.height,
            Direction::Down | Direction::Up => self.rect.size.width,
        }
    }
}
