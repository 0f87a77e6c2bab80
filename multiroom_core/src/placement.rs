//! Recursive backtracking placement of a chain of rooms.
//!
//! Each room is entered through a single doorway on one of its walls and
//! leaves through a doorway on one of the other three. A rejected room is not
//! an error: the caller simply ends up with a shorter chain and retries with
//! fresh random draws.

use crate::{
    Direction, Position,
    geometry::{Rect, Size},
    random::RandomSource,
    room::Room,
};

/// Smallest room edge that still leaves a non-corner cell for a door on every wall.
pub const MIN_ROOM_SIZE: usize = 4;

/// How many exit walls a freshly placed room tries before giving up on extending.
pub const EXTEND_ATTEMPTS: usize = 8;

/// The constraints every room in a chain must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainParams {
    pub min_size: usize,
    pub max_size: usize,
    pub grid_width: usize,
    pub grid_height: usize,
}

/// Grows a fresh chain of up to `room_count` rooms starting at `start`.
///
/// The first room is anchored with its top-left corner on `start` and is
/// treated as entered from its left wall. The returned chain may be shorter
/// than requested, and is empty when even the first room does not fit.
pub fn grow_chain<R: RandomSource + ?Sized>(
    rng: &mut R,
    params: &ChainParams,
    room_count: usize,
    start: Position,
) -> Vec<Room> {
    let mut chain = Vec::new();
    place_chain(rng, params, room_count, &mut chain, Direction::Left, start);
    chain
}

/// Tries to append one room entered through `entry_door` on its `entry_wall`,
/// then recursively extends the chain with the remaining rooms.
///
/// Returns `false` without touching `chain` if the room is rejected. Once the
/// room is placed the call succeeds even if no successor fits.
pub fn place_chain<R: RandomSource + ?Sized>(
    rng: &mut R,
    params: &ChainParams,
    rooms_remaining: usize,
    chain: &mut Vec<Room>,
    entry_wall: Direction,
    entry_door: Position,
) -> bool {
    if rooms_remaining == 0 {
        return true;
    }

    let size = Size::new(draw_edge(rng, params), draw_edge(rng, params));
    let Some(top) = anchor_top(rng, chain.is_empty(), entry_wall, entry_door, size) else {
        return false;
    };
    let rect = Rect::new(top, size);

    if !rect.fits_within(params.grid_width, params.grid_height) {
        return false;
    }

    // The previous room shares the wall the entry door sits on.
    let earlier = &chain[..chain.len().saturating_sub(1)];
    if earlier.iter().any(|room| room.rect.intersects(&rect)) {
        return false;
    }

    chain.push(Room::new(rect, entry_door));
    if rooms_remaining == 1 {
        return true;
    }

    let placed = chain.len() - 1;
    let exit_walls: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|wall| *wall != entry_wall)
        .collect();

    for _ in 0..EXTEND_ATTEMPTS {
        let Some(&exit_wall) = rng.choose(&exit_walls) else {
            break;
        };
        let room = &chain[placed];
        let wall_length = room.wall_length(exit_wall) as isize;
        let offset = rng.int_range(1, wall_length - 1) as usize;
        let exit_door = room.door_on_wall(exit_wall, offset);

        if place_chain(
            rng,
            params,
            rooms_remaining - 1,
            chain,
            exit_wall.opposite(),
            exit_door,
        ) {
            break;
        }
    }

    true
}

fn draw_edge<R: RandomSource + ?Sized>(rng: &mut R, params: &ChainParams) -> usize {
    rng.count_between(params.min_size, params.max_size)
}

/// Positions a room of `size` so that `door` sits on its `entry_wall`,
/// away from the corners. Returns `None` when the corner would fall off the
/// grid's negative side.
fn anchor_top<R: RandomSource + ?Sized>(
    rng: &mut R,
    first: bool,
    entry_wall: Direction,
    door: Position,
    size: Size,
) -> Option<Position> {
    let (door_x, door_y) = (door.x as isize, door.y as isize);
    let (width, height) = (size.width as isize, size.height as isize);

    let (x, y) = if first {
        (door_x, door_y)
    } else {
        match entry_wall {
            Direction::Right => (
                door_x - width + 1,
                rng.int_range(door_y - height + 2, door_y),
            ),
            Direction::Down => (
                rng.int_range(door_x - width + 2, door_x),
                door_y - height + 1,
            ),
            Direction::Left => (door_x, rng.int_range(door_y - height + 2, door_y)),
            Direction::Up => (rng.int_range(door_x - width + 2, door_x), door_y),
        }
    };

    Some(Position::new(
        usize::try_from(x).ok()?,
        usize::try_from(y).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    fn params(max_size: usize, grid: usize) -> ChainParams {
        ChainParams {
            min_size: MIN_ROOM_SIZE,
            max_size,
            grid_width: grid,
            grid_height: grid,
        }
    }

    fn is_corner(rect: &Rect, pos: Position) -> bool {
        (pos.x == rect.top.x || pos.x == rect.right())
            && (pos.y == rect.top.y || pos.y == rect.bottom())
    }

    #[test]
    fn first_room_is_anchored_on_the_start() {
        let mut rng = seeded_rng(3);
        let start = Position::new(2, 5);
        let chain = grow_chain(&mut rng, &params(6, 25), 1, start);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].top(), start);
        assert_eq!(chain[0].entry_door, start);
        assert_eq!(chain[0].exit_door, None);
    }

    #[test]
    fn rejected_room_leaves_chain_untouched() {
        let mut rng = seeded_rng(3);
        let mut chain = Vec::new();
        // A 4x4 room at (20, 20) cannot fit in a 22x22 grid.
        let placed = place_chain(
            &mut rng,
            &params(4, 22),
            3,
            &mut chain,
            Direction::Left,
            Position::new(20, 20),
        );
        assert!(!placed);
        assert!(chain.is_empty());
    }

    #[test]
    fn placed_room_counts_even_when_no_successor_fits() {
        let mut rng = seeded_rng(3);
        let mut chain = Vec::new();
        // The only 4x4 room in a 6x6 grid sits at the origin. Every exit wall
        // pushes its successor past the far edge or below zero.
        let placed = place_chain(
            &mut rng,
            &params(4, 6),
            3,
            &mut chain,
            Direction::Left,
            Position::new(0, 0),
        );
        assert!(placed);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].top(), Position::new(0, 0));
    }

    #[test]
    fn huge_room_counts_do_not_preallocate() {
        let mut rng = seeded_rng(4);
        let chain = grow_chain(&mut rng, &params(4, 13), 1 << 40, Position::new(1, 1));
        assert!(!chain.is_empty());
        assert!(chain.len() <= 16);
    }

    #[test]
    fn overlapping_room_is_rejected() {
        let mut rng = seeded_rng(9);
        let blocker = Room::new(
            Rect::new(Position::new(0, 0), Size::new(12, 12)),
            Position::new(0, 0),
        );
        let previous = Room::new(
            Rect::new(Position::new(14, 0), Size::new(4, 4)),
            Position::new(14, 0),
        );
        let mut chain = vec![blocker, previous];
        // Entering through a right wall at x = 11 puts the room inside the blocker.
        let placed = place_chain(
            &mut rng,
            &params(4, 25),
            1,
            &mut chain,
            Direction::Right,
            Position::new(11, 6),
        );
        assert!(!placed);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn consecutive_rooms_share_a_non_corner_door() {
        for seed in 0..50 {
            let mut rng = seeded_rng(seed);
            let chain = grow_chain(&mut rng, &params(6, 25), 4, Position::new(8, 8));
            for pair in chain.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                let door = next.entry_door;
                assert!(prev.rect.perimeter().any(|p| p == door), "seed {seed}");
                assert!(next.rect.perimeter().any(|p| p == door), "seed {seed}");
                assert!(!is_corner(&prev.rect, door), "seed {seed}");
                assert!(!is_corner(&next.rect, door), "seed {seed}");
            }
        }
    }

    #[test]
    fn chain_respects_size_bounds_and_overlap_rules() {
        for seed in 0..50 {
            let mut rng = seeded_rng(seed);
            let p = params(7, 25);
            let chain = grow_chain(&mut rng, &p, 5, Position::new(5, 5));
            assert!(!chain.is_empty());
            for room in &chain {
                let size = room.size();
                assert!((p.min_size..=p.max_size).contains(&size.width));
                assert!((p.min_size..=p.max_size).contains(&size.height));
                assert!(room.rect.fits_within(25, 25));
            }
            for (i, a) in chain.iter().enumerate() {
                for b in chain.iter().skip(i + 2) {
                    assert!(!a.rect.intersects(&b.rect), "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn exit_doors_are_left_for_the_materializer() {
        let mut rng = seeded_rng(21);
        let chain = grow_chain(&mut rng, &params(5, 25), 3, Position::new(6, 6));
        assert!(chain.iter().all(|room| room.exit_door.is_none()));
    }
}
