use crate::{map::GridError, room::Room};

/// Errors that surface from layout generation and entity placement.
///
/// A single rejected room is never an error; only configurations that cannot
/// succeed and rooms with no space left are reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Cannot build {min_rooms} room(s) in a {width}x{height} grid: {reason}")]
    ConfigurationImpossible {
        min_rooms: usize,
        width: usize,
        height: usize,
        reason: String,
    },
    #[error(
        "No free cell in the {width}x{height} room at ({x}, {y}) after {attempts} attempt(s)"
    )]
    EntityPlacementExhausted {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        attempts: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl LayoutError {
    pub(crate) fn placement_exhausted(room: &Room, attempts: usize) -> Self {
        LayoutError::EntityPlacementExhausted {
            x: room.rect.top.x,
            y: room.rect.top.y,
            width: room.rect.size.width,
            height: room.rect.size.height,
            attempts,
        }
    }
}
