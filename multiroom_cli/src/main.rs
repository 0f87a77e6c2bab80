use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use multiroom_core::{
    AgentPlacement, Capabilities, Cell, LayoutConfig, Level, Position, Room, map::Grid,
    seeded_rng,
};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about = "Generate chain-of-rooms levels", long_about = None)]
struct Args {
    /// Seed of the first episode; later episodes use the following seeds
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Fewest rooms in a level
    #[arg(long, default_value_t = 2)]
    min_rooms: usize,

    /// Most rooms in a level
    #[arg(long, default_value_t = 2)]
    max_rooms: usize,

    /// Largest room edge, walls included
    #[arg(long, default_value_t = 4)]
    max_room_size: usize,

    /// Grid width
    #[arg(long, default_value_t = 25)]
    width: usize,

    /// Grid height
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Which agents take part
    #[arg(short, long, value_enum, default_value_t = Agents::Both)]
    agents: Agents,

    /// Number of episodes to generate
    #[arg(short, long, default_value_t = 1)]
    episodes: u64,

    /// Print one JSON object per episode instead of a map
    #[arg(long)]
    json: bool,

    /// Report generation effort on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Agents {
    Both,
    DoorOpening,
    GoalReaching,
}

impl From<Agents> for Capabilities {
    fn from(agents: Agents) -> Self {
        match agents {
            Agents::Both => Capabilities::all(),
            Agents::DoorOpening => Capabilities::DOOR_OPENING,
            Agents::GoalReaching => Capabilities::GOAL_REACHING,
        }
    }
}

/// What gets printed for an episode in `--json` mode.
#[derive(Serialize)]
struct EpisodeReport<'a> {
    seed: u64,
    mission: &'a str,
    rooms: &'a [Room],
    door_count: usize,
    agents: &'a [AgentPlacement],
    goal: Option<Position>,
    attempts: usize,
    map: Vec<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let config = LayoutConfig::new(args.min_rooms, args.max_rooms, args.max_room_size)
        .with_grid(args.width, args.height);
    config.validate().context("invalid level configuration")?;
    let capabilities = Capabilities::from(args.agents);

    let mut total_attempts = 0;
    let mut total_time = Duration::ZERO;

    for episode in 0..args.episodes {
        let seed = args.seed.wrapping_add(episode);
        let mut rng = seeded_rng(seed);

        let started = Instant::now();
        let level = Level::generate(&config, capabilities, &mut rng)
            .with_context(|| format!("failed to generate level for seed {seed}"))?;
        let elapsed = started.elapsed();

        total_attempts += level.stats().attempts;
        total_time += elapsed;

        if args.verbose {
            eprintln!(
                "seed {seed}: {:?}, {} room(s), {} door(s), {} attempt(s), {:?}",
                level.capabilities(),
                level.rooms().len(),
                level.door_count(),
                level.stats().attempts,
                elapsed
            );
        }

        if args.json {
            let report = EpisodeReport {
                seed,
                mission: level.mission(),
                rooms: level.rooms(),
                door_count: level.door_count(),
                agents: level.agents(),
                goal: level.goal(),
                attempts: level.stats().attempts,
                map: render_map(level.grid()),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("seed {seed}: {}", level.mission());
            for line in render_map(level.grid()) {
                println!("{line}");
            }
            println!();
        }
    }

    if args.verbose && args.episodes > 1 {
        eprintln!(
            "{} episode(s): {:.2} attempt(s) and {:?} per level on average",
            args.episodes,
            total_attempts as f64 / args.episodes as f64,
            total_time / u32::try_from(args.episodes).unwrap_or(u32::MAX)
        );
    }

    Ok(())
}

/// Renders the grid as one string per row.
fn render_map(grid: &Grid<Cell>) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.height());
    for row in grid.rows() {
        let mut line = String::with_capacity(grid.width());
        for cell in row {
            line.push(match cell {
                Cell::Empty => '.',
                Cell::Wall => '#',
                Cell::Door { .. } => 'D',
                Cell::AgentStart { .. } => '@',
                Cell::Goal => 'G',
            });
        }
        lines.push(line);
    }
    lines
}
