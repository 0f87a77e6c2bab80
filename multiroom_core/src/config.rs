use serde::{Deserialize, Serialize};

use crate::{error::LayoutError, placement::MIN_ROOM_SIZE};

/// Parameters for generating a chain-of-rooms layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Fewest rooms an accepted layout may contain.
    pub min_rooms: usize,
    /// Most rooms a layout may contain.
    pub max_rooms: usize,
    /// Largest room edge, walls included. Rooms are never smaller than 4x4.
    pub max_room_size: usize,
    pub width: usize,
    pub height: usize,
    /// Whole-chain attempts before generation gives up.
    pub max_attempts: usize,
    /// Random draws per entity before a room is considered full.
    pub max_placement_attempts: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            min_rooms: 1,
            max_rooms: 1,
            max_room_size: 10,
            width: 25,
            height: 25,
            max_attempts: 10_000,
            max_placement_attempts: 1_000,
        }
    }
}

impl LayoutConfig {
    /// A configuration on the default 25x25 grid.
    pub fn new(min_rooms: usize, max_rooms: usize, max_room_size: usize) -> Self {
        LayoutConfig {
            min_rooms,
            max_rooms,
            max_room_size,
            ..LayoutConfig::default()
        }
    }

    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Largest room edge that can actually be drawn. Both far walls must stay
    /// inside the grid, so no edge reaches the shorter grid side.
    pub fn room_size_ceiling(&self) -> usize {
        let fitting = self.width.min(self.height).saturating_sub(1);
        self.max_room_size.min(fitting).max(MIN_ROOM_SIZE)
    }

    /// Largest room count that can actually be drawn. Every room after the
    /// first claims at least twelve cells of its own, so no chain outgrows one
    /// room per 3x3 block of the grid.
    pub fn room_count_ceiling(&self) -> usize {
        let tiling = (self.width / 3).saturating_mul(self.height / 3);
        self.max_rooms.min(tiling).max(self.min_rooms)
    }

    /// Checks the configuration before any generation work is done.
    ///
    /// Malformed values are `InvalidConfig`. A grid narrower or shorter than
    /// `min_rooms` minimum-sized rooms laid end to end is `ConfigurationImpossible`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.min_rooms == 0 {
            return Err(LayoutError::InvalidConfig(
                "min_rooms must be at least 1".to_string(),
            ));
        }
        if self.max_rooms < self.min_rooms {
            return Err(LayoutError::InvalidConfig(format!(
                "max_rooms ({}) is smaller than min_rooms ({})",
                self.max_rooms, self.min_rooms
            )));
        }
        if self.max_room_size < MIN_ROOM_SIZE {
            return Err(LayoutError::InvalidConfig(format!(
                "max_room_size ({}) is smaller than the minimum room size ({})",
                self.max_room_size, MIN_ROOM_SIZE
            )));
        }
        if self.max_attempts == 0 || self.max_placement_attempts == 0 {
            return Err(LayoutError::InvalidConfig(
                "attempt budgets must be at least 1".to_string(),
            ));
        }

        let needed = self.min_rooms.saturating_mul(MIN_ROOM_SIZE);
        if self.width < needed || self.height < needed {
            return Err(LayoutError::ConfigurationImpossible {
                min_rooms: self.min_rooms,
                width: self.width,
                height: self.height,
                reason: format!("each side must span at least {needed} cells"),
            });
        }
        Ok(())
    }
}
