use crate::{Position, room::Room};

/// Translates a chain so the smallest `top.x` and the smallest `top.y` among
/// its rooms both become zero.
///
/// The two minima are taken independently, so no single room needs to sit at
/// the origin. Door positions move with their rooms, which keeps the chain in
/// one coordinate frame and makes the operation idempotent.
pub fn normalize(rooms: &mut [Room]) {
    let Some(shift_x) = rooms.iter().map(|room| room.rect.top.x).min() else {
        return;
    };
    let shift_y = rooms.iter().map(|room| room.rect.top.y).min().unwrap_or(0);

    let shift = |pos: Position| Position::new(pos.x - shift_x, pos.y - shift_y);
    for room in rooms.iter_mut() {
        room.rect.top = shift(room.rect.top);
        room.entry_door = shift(room.entry_door);
        room.exit_door = room.exit_door.map(shift);
    }
}
