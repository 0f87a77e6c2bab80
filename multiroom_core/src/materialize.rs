use serde::{Deserialize, Serialize};

use crate::{DoorColor, EntityId, error::LayoutError, map::Grid, room::Room};

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Door {
        color: DoorColor,
    },
    AgentStart {
        agent: EntityId,
    },
    Goal,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// How the doorway between two consecutive rooms is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorPolicy {
    /// A door object of the given color.
    Colored(DoorColor),
    /// A gap in the wall with nothing in it.
    OpenPassage,
}

impl Default for DoorPolicy {
    fn default() -> Self {
        DoorPolicy::Colored(DoorColor::canonical())
    }
}

/// Builds a fresh `width` x `height` grid from a normalized chain.
///
/// Returns the grid together with the number of door objects placed.
pub fn materialize(
    rooms: &mut [Room],
    width: usize,
    height: usize,
    policy: DoorPolicy,
) -> Result<(Grid<Cell>, usize), LayoutError> {
    let mut grid = Grid::new(width, height)?;
    let doors = materialize_into(&mut grid, rooms, policy)?;
    Ok((grid, doors))
}

/// Draws every room's walls onto `grid` and cuts the doorways between
/// consecutive rooms, returning the number of door objects placed.
///
/// Each room's `exit_door` is set to its successor's entry door. Cells
/// outside the rooms are left as they are, so drawing onto a grid that
/// already holds a layout overlays the two.
pub fn materialize_into(
    grid: &mut Grid<Cell>,
    rooms: &mut [Room],
    policy: DoorPolicy,
) -> Result<usize, LayoutError> {
    let mut doors = 0;

    for index in 0..rooms.len() {
        for pos in rooms[index].rect.perimeter() {
            grid.set(pos, Cell::Wall)?;
        }

        if index == 0 {
            continue;
        }

        let entry = rooms[index].entry_door;
        match policy {
            DoorPolicy::Colored(color) => {
                grid.set(entry, Cell::Door { color })?;
                doors += 1;
            }
            DoorPolicy::OpenPassage => grid.set(entry, Cell::Empty)?,
        }
        rooms[index - 1].exit_door = Some(entry);
    }

    Ok(doors)
}
