use serde::{Deserialize, Serialize};

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod level;
pub mod map;
pub mod materialize;
pub mod normalize;
pub mod placement;
pub mod random;
pub mod room;
pub mod spawn;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use layout::{GenerationStats, Layout, generate_layout};
pub use level::{AgentPlacement, AgentRole, Capabilities, Level};
pub use materialize::{Cell, DoorPolicy};
pub use random::{RandomSource, seeded_rng};
pub use room::Room;

/// Unique identifier for entities (agents).
pub type EntityId = usize;

/// Represents a 2D grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

/// One of the four cardinal directions.
///
/// Used both for the wall of a room a doorway sits on and for the facing of an
/// agent. The discriminants give the canonical order used whenever a direction
/// is drawn at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    /// All directions, sorted by index.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() + 2) % 4]
    }
}

/// Represents the color of a door.
///
/// Variants are declared in palette order; `PALETTE[0]` is the canonical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DoorColor {
    Red,
    Green,
    Blue,
    Purple,
    Yellow,
    Grey,
}

impl DoorColor {
    pub const PALETTE: [DoorColor; 6] = [
        DoorColor::Red,
        DoorColor::Green,
        DoorColor::Blue,
        DoorColor::Purple,
        DoorColor::Yellow,
        DoorColor::Grey,
    ];

    /// The color every door gets under the default policy.
    pub const fn canonical() -> DoorColor {
        DoorColor::PALETTE[0]
    }
}
