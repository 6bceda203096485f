//! Command-line shortest-path search over a text grid.
//!
//! Run: cargo run --bin gridpath -- --grid maze.txt --start 0,0 --goal 4,3
//!
//! The grid is one line per row, `.`/`0` free and `#`/`1` blocked. Without
//! `--grid` it is read from stdin. Set `RUST_LOG=debug` to trace the search.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use gridpath_core::{Coord, ObstacleGrid, Occupancy};
use gridpath_demos::{Report, Scene, parse_coord};
use gridpath_search::{SearchConfig, Strategy, search};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "gridpath", version, about = "Shortest paths on 4-connected obstacle grids")]
struct Args {
    /// Grid file; stdin when omitted
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Start cell as row,col
    #[arg(long, value_parser = parse_coord)]
    start: Coord,

    /// Goal cell as row,col
    #[arg(long, value_parser = parse_coord)]
    goal: Coord,

    /// a-star, heuristic-only (alias: dijkstra, greedy) or uniform-cost
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Abort after this many expansions
    #[arg(long)]
    max_expansions: Option<usize>,

    /// JSON search config; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Drive a robot along the path and print each move
    #[arg(long)]
    simulate: bool,
}

fn load_config(args: &Args) -> Result<SearchConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(cap) = args.max_expansions {
        config.max_expansions = Some(cap);
    }
    Ok(config)
}

fn load_grid(args: &Args) -> Result<Occupancy, Box<dyn Error>> {
    let text = match &args.grid {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.parse::<Occupancy>()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let grid = load_grid(&args)?;
    info!(
        "loaded {}x{} grid with {} obstacles",
        grid.height(),
        grid.width(),
        grid.blocked_count()
    );

    let outcome = search(&grid, args.start, args.goal, &config)?;
    let report = Report::new(config.strategy, args.start, args.goal, outcome)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    if args.simulate && report.steps > 0 {
        let mut scene =
            Scene::new(ObstacleGrid::from(&grid), args.start, args.goal)?.with_config(config);
        scene.plan()?;
        while let Some(m) = scene.step() {
            println!("{m:>5} -> {}", scene.robot());
        }
        if scene.reached_goal() {
            println!("reached goal {}", scene.goal());
        }
    }

    Ok(())
}
