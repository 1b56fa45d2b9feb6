//! `wavefront` — run one route search and print the result.
//!
//! ```bash
//! # Seeded random 30x30 terrain, start (1,1), target (11,11)
//! cargo run -p wavefront-demo -- --seed 7
//!
//! # A text level with S and T markers
//! cargo run -p wavefront-demo -- --level demo/levels/marsh.txt
//! ```

mod report;
mod terrain;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wavefront_core::{Level, Point};
use wavefront_paths::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_NODES, ReverseMapping, SearchConfig, Wavefront,
};

#[derive(Parser, Debug)]
#[command(name = "wavefront")]
#[command(about = "Greedy wavefront route search on a weighted grid")]
struct Args {
    /// Text level to load (`.` open, `,` rough, `~` water, `#` wall, `S`/`T` markers)
    #[arg(long)]
    level: Option<PathBuf>,

    /// Seed for random terrain (ignored with --level)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Start cell as `x,y` (overrides the level's S marker)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Target cell as `x,y` (overrides the level's T marker)
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,

    /// Node table capacity
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: usize,

    /// Total node visits allowed
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Use the historical back-step table (SW blocks SE)
    #[arg(long)]
    legacy_reverse: bool,
}

const DEFAULT_START: Point = Point::new(1, 1);
const DEFAULT_TARGET: Point = Point::new(11, 11);

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    let (mut grid, start, target) = match &args.level {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let level = Level::parse(&text)?;
            log::info!(
                "loaded level {} ({}x{})",
                path.display(),
                level.grid.width(),
                level.grid.height()
            );
            let start = args.start.or(level.start).unwrap_or(DEFAULT_START);
            let target = args.target.or(level.target).unwrap_or(DEFAULT_TARGET);
            (level.grid, start, target)
        }
        None => {
            let start = args.start.unwrap_or(DEFAULT_START);
            let target = args.target.unwrap_or(DEFAULT_TARGET);
            let mut rng = StdRng::seed_from_u64(args.seed);
            let grid = terrain::random_grid(
                terrain::DEFAULT_WIDTH,
                terrain::DEFAULT_HEIGHT,
                &[start, target],
                &mut rng,
            );
            log::info!(
                "random terrain {}x{} from seed {}",
                grid.width(),
                grid.height(),
                args.seed
            );
            (grid, start, target)
        }
    };

    let reverse_mapping = if args.legacy_reverse {
        ReverseMapping::Legacy
    } else {
        ReverseMapping::Symmetric
    };
    let config = SearchConfig::default()
        .with_max_nodes(args.max_nodes)
        .with_max_iterations(args.max_iterations)
        .with_reverse_mapping(reverse_mapping);

    let result = Wavefront::new(config).find_path(&mut grid, start, target)?;
    println!("{}", report::describe(&grid, start, target, &result));
    Ok(())
}
