//! Seating agents and the goal inside a room's interior.

use crate::{
    Direction, EntityId, Position, error::LayoutError, map::Grid, materialize::Cell,
    random::RandomSource, room::Room,
};

/// Draws random interior cells of `room` until an empty one turns up, then
/// writes `occupant` into it.
///
/// Fails with `EntityPlacementExhausted` straight away when the interior has
/// no empty cell left, or once `max_attempts` draws have all missed.
pub fn place_entity<R: RandomSource + ?Sized>(
    grid: &mut Grid<Cell>,
    room: &Room,
    occupant: Cell,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Position, LayoutError> {
    let Some(interior) = room.rect.interior() else {
        return Err(LayoutError::placement_exhausted(room, 0));
    };

    let has_free_cell = grid
        .enumerate()
        .any(|(pos, cell)| cell.is_empty() && interior.contains(pos));
    if !has_free_cell {
        return Err(LayoutError::placement_exhausted(room, 0));
    }

    let (left, top) = (interior.top.x as isize, interior.top.y as isize);
    for _ in 0..max_attempts {
        let pos = Position::new(
            rng.int_range(left, interior.right() as isize + 1) as usize,
            rng.int_range(top, interior.bottom() as isize + 1) as usize,
        );
        if grid.get(pos).is_some_and(Cell::is_empty) {
            grid.set(pos, occupant)?;
            return Ok(pos);
        }
    }

    Err(LayoutError::placement_exhausted(room, max_attempts))
}

/// Seats `agent` in `room` and draws its initial facing.
pub fn place_agent<R: RandomSource + ?Sized>(
    grid: &mut Grid<Cell>,
    room: &Room,
    agent: EntityId,
    rng: &mut R,
    max_attempts: usize,
) -> Result<(Position, Direction), LayoutError> {
    let pos = place_entity(grid, room, Cell::AgentStart { agent }, rng, max_attempts)?;
    let facing = *rng.choose(&Direction::ALL).unwrap_or(&Direction::Right);
    Ok((pos, facing))
}

/// Seats the goal marker in `room`.
pub fn place_goal<R: RandomSource + ?Sized>(
    grid: &mut Grid<Cell>,
    room: &Room,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Position, LayoutError> {
    place_entity(grid, room, Cell::Goal, rng, max_attempts)
}
