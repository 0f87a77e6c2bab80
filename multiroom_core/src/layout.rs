use serde::{Deserialize, Serialize};

use crate::{
    Position,
    config::LayoutConfig,
    error::LayoutError,
    map::Grid,
    materialize::{Cell, DoorPolicy, materialize},
    normalize::normalize,
    placement::{ChainParams, MIN_ROOM_SIZE, grow_chain},
    random::RandomSource,
    room::Room,
};

/// How much work a layout took to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Room count drawn for this layout.
    pub target_rooms: usize,
    /// Whole-chain attempts made, the successful one included.
    pub attempts: usize,
}

/// A finished level layout: the normalized room chain and its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid<Cell>,
    pub rooms: Vec<Room>,
    /// Door objects placed between rooms.
    pub door_count: usize,
    pub stats: GenerationStats,
}

/// Generates a connected chain of rooms and materializes it into a grid.
///
/// A room count is drawn from `[min_rooms, max_rooms]`, capped by what the
/// grid can hold, then chains are grown
/// from fresh random starting points until one reaches that count, keeping the
/// longest chain seen. When `max_attempts` runs out the longest chain is still
/// accepted if it holds at least `min_rooms` rooms.
pub fn generate_layout<R: RandomSource + ?Sized>(
    config: &LayoutConfig,
    policy: DoorPolicy,
    rng: &mut R,
) -> Result<Layout, LayoutError> {
    config.validate()?;

    let params = ChainParams {
        min_size: MIN_ROOM_SIZE,
        max_size: config.room_size_ceiling(),
        grid_width: config.width,
        grid_height: config.height,
    };
    let target_rooms = rng.count_between(config.min_rooms, config.room_count_ceiling());

    let mut best: Vec<Room> = Vec::new();
    let mut attempts = 0;
    while best.len() < target_rooms && attempts < config.max_attempts {
        attempts += 1;
        let start = Position::new(
            rng.int_range(0, config.width as isize - 2) as usize,
            rng.int_range(0, config.height as isize - 2) as usize,
        );
        let chain = grow_chain(rng, &params, target_rooms, start);
        if chain.len() > best.len() {
            best = chain;
        }
    }

    if best.len() < config.min_rooms {
        return Err(LayoutError::ConfigurationImpossible {
            min_rooms: config.min_rooms,
            width: config.width,
            height: config.height,
            reason: format!(
                "longest chain after {attempts} attempt(s) had {} room(s)",
                best.len()
            ),
        });
    }

    let mut rooms = best;
    normalize(&mut rooms);
    let (grid, door_count) = materialize(&mut rooms, config.width, config.height, policy)?;

    Ok(Layout {
        grid,
        rooms,
        door_count,
        stats: GenerationStats {
            target_rooms,
            attempts,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn two_small_rooms_on_the_default_grid() {
        let config = LayoutConfig::new(2, 2, 4);
        let mut rng = seeded_rng(42);
        let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();

        assert_eq!(layout.rooms.len(), 2);
        assert_eq!(layout.door_count, 1);
        for room in &layout.rooms {
            assert_eq!(room.size().width, 4);
            assert_eq!(room.size().height, 4);
            assert!(room.rect.fits_within(25, 25));
        }
        assert_eq!(layout.rooms[0].exit_door, Some(layout.rooms[1].entry_door));
        let doors = layout
            .grid
            .iter()
            .filter(|cell| matches!(cell, Cell::Door { .. }))
            .count();
        assert_eq!(doors, 1);
    }

    #[test]
    fn chain_is_anchored_at_the_origin() {
        let config = LayoutConfig::new(3, 5, 6);
        let mut rng = seeded_rng(8);
        let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
        let min_x = layout.rooms.iter().map(|r| r.top().x).min();
        let min_y = layout.rooms.iter().map(|r| r.top().y).min();
        assert_eq!((min_x, min_y), (Some(0), Some(0)));
    }

    #[test]
    fn open_passages_place_no_door_objects() {
        let config = LayoutConfig::new(3, 3, 5);
        let mut rng = seeded_rng(4);
        let layout = generate_layout(&config, DoorPolicy::OpenPassage, &mut rng).unwrap();
        assert_eq!(layout.door_count, 0);
        assert!(!layout.grid.iter().any(|cell| matches!(cell, Cell::Door { .. })));
        for room in &layout.rooms[1..] {
            assert_eq!(layout.grid[room.entry_door], Cell::Empty);
        }
    }

    #[test]
    fn stats_report_the_drawn_target() {
        let config = LayoutConfig::new(2, 4, 5);
        let mut rng = seeded_rng(17);
        let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
        assert!((2..=4).contains(&layout.stats.target_rooms));
        assert_eq!(layout.rooms.len(), layout.stats.target_rooms);
        assert!(layout.stats.attempts >= 1);
    }

    #[test]
    fn short_chain_is_accepted_once_the_budget_runs_out() {
        // Only one 4x4 room fits a 6x6 grid, whatever count is drawn.
        let config = LayoutConfig::new(1, 3, 4)
            .with_grid(6, 6)
            .with_max_attempts(200);
        let mut short = 0;
        for seed in 0..40 {
            let mut rng = seeded_rng(seed);
            let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
            assert_eq!(layout.rooms.len(), 1, "seed {seed}");
            assert_eq!(layout.door_count, 0);
            if layout.stats.target_rooms > 1 {
                assert_eq!(layout.stats.attempts, 200, "seed {seed}");
                short += 1;
            }
        }
        assert!(short > 0);
    }

    #[test]
    fn oversized_bounds_are_capped_by_the_grid() {
        let config = LayoutConfig::new(1, 1 << 40, 4).with_max_attempts(20);
        let mut rng = seeded_rng(6);
        let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
        assert!(layout.stats.target_rooms <= 64);
        assert!(!layout.rooms.is_empty());

        let config = LayoutConfig::new(1, 1, isize::MAX as usize);
        let mut rng = seeded_rng(6);
        let layout = generate_layout(&config, DoorPolicy::default(), &mut rng).unwrap();
        assert_eq!(layout.rooms.len(), 1);
        let size = layout.rooms[0].size();
        assert!(size.width < 25 && size.height < 25);
    }

    #[test]
    fn exhausted_budget_is_fatal() {
        // The grid passes the up-front check, but no 4x4 room keeps its far
        // edges off the border of a 4x4 grid.
        let config = LayoutConfig::new(1, 1, 4)
            .with_grid(4, 4)
            .with_max_attempts(50);
        let mut rng = seeded_rng(1);
        let result = generate_layout(&config, DoorPolicy::default(), &mut rng);
        assert!(matches!(
            result,
            Err(LayoutError::ConfigurationImpossible { min_rooms: 1, .. })
        ));
    }
}
