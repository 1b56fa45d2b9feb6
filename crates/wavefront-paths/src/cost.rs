//! Movement and heuristic costs.
//!
//! Straight steps cost 10 and diagonal steps 14 (1 : √2 scaled by 10), times
//! the terrain multiplier of the cell being **left**.

use wavefront_core::{CostClass, Point};

pub const STRAIGHT_COST: i32 = 10;
pub const DIAGONAL_COST: i32 = 14;
/// Scale applied to Euclidean distance by [`heuristic`].
pub const HEURISTIC_SCALE: f64 = 10.0;

/// Cost of one step out of a cell of class `origin`. `None` for walls.
#[inline]
pub fn step_cost(origin: CostClass, is_diagonal: bool) -> Option<i32> {
    let base = if is_diagonal {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    };
    origin.multiplier().map(|m| base * m)
}

/// Euclidean distance from `from` to `target`, scaled by 10.
#[inline]
pub fn heuristic(from: Point, target: Point) -> f64 {
    (target - from).length() * HEURISTIC_SCALE
}

/// Ranking cost of stepping from a node with accumulated cost `g`, standing
/// on `origin`, to `candidate`.
#[inline]
pub fn f_cost(
    g: i32,
    origin: CostClass,
    candidate: Point,
    target: Point,
    is_diagonal: bool,
) -> Option<f64> {
    let step = step_cost(origin, is_diagonal)?;
    Some(f64::from(g) + f64::from(step) + heuristic(candidate, target))
}
