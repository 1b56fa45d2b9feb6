//! Text output for a finished search.

use std::fmt;

use wavefront_core::level::{self, START_RUNE, TARGET_RUNE};
use wavefront_core::{Direction, Grid, Point};
use wavefront_paths::{ExhaustReason, Route, SearchResult};

pub const ROUTE_RUNE: char = '*';

/// The map with start, target and the cells of the route marked.
pub fn draw_map(grid: &Grid, start: Point, target: Point, route: Option<&Route>) -> String {
    let cells = route.map(|r| r.waypoints(start)).unwrap_or_default();
    level::render(grid, |p| {
        if p == start {
            Some(START_RUNE)
        } else if p == target {
            Some(TARGET_RUNE)
        } else if cells.contains(&p) {
            Some(ROUTE_RUNE)
        } else {
            None
        }
    })
}

/// Full report: map, moves (start first) and cost totals.
pub fn describe(grid: &Grid, start: Point, target: Point, result: &SearchResult) -> String {
    Report {
        grid,
        start,
        target,
        result,
    }
    .to_string()
}

struct Report<'a> {
    grid: &'a Grid,
    start: Point,
    target: Point,
    result: &'a SearchResult,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            grid,
            start,
            target,
            result,
        } = *self;
        writeln!(f, "{}", draw_map(grid, start, target, result.route()))?;
        match result {
            SearchResult::Found { route, .. } => {
                writeln!(f, "\nroute {start} -> {target}: {} steps", route.len())?;
                for (i, step) in route.forward().enumerate() {
                    let dir = Direction::from_delta(step.delta)
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| step.delta.to_string());
                    writeln!(f, "{:>4}  {dir:<2}  g={:<5} f={:.1}", i + 1, step.g, step.f)?;
                }
                writeln!(f, "cost = {}", route.cost())?;
                writeln!(
                    f,
                    "total g cost = {}, total f cost = {}",
                    route.total_g(),
                    route.total_f() as i64
                )?;
            }
            SearchResult::Exhausted { reason, .. } => {
                let why = match reason {
                    ExhaustReason::Stalled => "no cell left to expand into",
                    ExhaustReason::IterationBudget => "iteration budget spent",
                    ExhaustReason::Capacity => "node table full",
                };
                writeln!(f, "\nno route {start} -> {target}: {why}")?;
            }
        }
        let stats = result.stats();
        write!(
            f,
            "{} rounds, {} iterations, {} nodes",
            stats.rounds, stats.iterations, stats.nodes
        )
    }
}
