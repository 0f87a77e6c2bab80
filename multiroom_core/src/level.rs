use serde::{Deserialize, Serialize};

use crate::{
    Direction, EntityId, Position,
    config::LayoutConfig,
    error::LayoutError,
    layout::{GenerationStats, Layout, generate_layout},
    map::Grid,
    materialize::{Cell, DoorPolicy},
    random::RandomSource,
    room::Room,
    spawn::{place_agent, place_goal},
};

/// Mission text shown to agents for every generated level.
pub const MISSION: &str = "traverse the rooms to get to the goal";

bitflags::bitflags! {
    /// Agent roles present in an environment, fixed when it is constructed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// An agent that opens the doors between rooms. Without it doorways
        /// are left as open passages.
        const DOOR_OPENING = 1;
        /// An agent that has to reach the goal in the last room.
        const GOAL_REACHING = 1 << 1;
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::all()
    }
}

/// The role of a single agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    DoorOpening,
    GoalReaching,
}

impl AgentRole {
    /// Roles in seating order.
    pub const ALL: [AgentRole; 2] = [AgentRole::DoorOpening, AgentRole::GoalReaching];

    /// Identifier of the agent playing this role.
    pub fn id(self) -> EntityId {
        match self {
            AgentRole::DoorOpening => 0,
            AgentRole::GoalReaching => 1,
        }
    }

    pub fn capability(self) -> Capabilities {
        match self {
            AgentRole::DoorOpening => Capabilities::DOOR_OPENING,
            AgentRole::GoalReaching => Capabilities::GOAL_REACHING,
        }
    }
}

/// Where an agent starts an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPlacement {
    pub id: EntityId,
    pub role: AgentRole,
    pub position: Position,
    pub facing: Direction,
}

/// One episode's level: the layout plus the agents and goal seated in it.
#[derive(Debug, Clone)]
pub struct Level {
    layout: Layout,
    capabilities: Capabilities,
    agents: Vec<AgentPlacement>,
    goal: Option<Position>,
}

impl Level {
    /// Generates a layout for `capabilities`, seats every agent in the first
    /// room and, when a goal-reaching agent is present, the goal in the last.
    pub fn generate<R: RandomSource + ?Sized>(
        config: &LayoutConfig,
        capabilities: Capabilities,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        if capabilities.is_empty() {
            return Err(LayoutError::InvalidConfig(
                "at least one agent role is required".to_string(),
            ));
        }

        let policy = if capabilities.contains(Capabilities::DOOR_OPENING) {
            DoorPolicy::default()
        } else {
            DoorPolicy::OpenPassage
        };
        let mut layout = generate_layout(config, policy, rng)?;

        let (Some(first), Some(last)) = (layout.rooms.first(), layout.rooms.last()) else {
            return Err(LayoutError::InvalidConfig(
                "layout contains no rooms".to_string(),
            ));
        };

        let mut agents = Vec::with_capacity(AgentRole::ALL.len());
        for role in AgentRole::ALL {
            if !capabilities.contains(role.capability()) {
                continue;
            }
            let (position, facing) = place_agent(
                &mut layout.grid,
                first,
                role.id(),
                rng,
                config.max_placement_attempts,
            )?;
            agents.push(AgentPlacement {
                id: role.id(),
                role,
                position,
                facing,
            });
        }

        let goal = if capabilities.contains(Capabilities::GOAL_REACHING) {
            Some(place_goal(
                &mut layout.grid,
                last,
                rng,
                config.max_placement_attempts,
            )?)
        } else {
            None
        };

        Ok(Level {
            layout,
            capabilities,
            agents,
            goal,
        })
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.layout.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.layout.rooms
    }

    pub fn door_count(&self) -> usize {
        self.layout.door_count
    }

    pub fn stats(&self) -> GenerationStats {
        self.layout.stats
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn agents(&self) -> &[AgentPlacement] {
        &self.agents
    }

    pub fn agent(&self, role: AgentRole) -> Option<&AgentPlacement> {
        self.agents.iter().find(|agent| agent.role == role)
    }

    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    pub fn mission(&self) -> &'static str {
        MISSION
    }

    /// Positions of all door objects, in row-major order.
    pub fn door_positions(&self) -> Vec<Position> {
        self.layout
            .grid
            .enumerate()
            .filter_map(|(pos, cell)| matches!(cell, Cell::Door { .. }).then_some(pos))
            .collect()
    }
}
