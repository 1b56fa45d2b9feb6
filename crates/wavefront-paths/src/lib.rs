//! Route search on weighted grids by greedy wavefront expansion.
//!
//! A search grows a table of nodes from the start cell in rounds. In each
//! round every node already in the table takes at most one step, towards the
//! neighbour with the lowest `g + step + h`, and claims the cell it steps
//! into. The first node to land on the target ends the search and its parent
//! chain becomes the route.
//!
//! - **Costs** ([`step_cost`], [`heuristic`]): 10 per straight step, 14 per
//!   diagonal, times the terrain multiplier of the cell being left.
//! - **Neighbour choice** ([`NeighborEvaluator`]): eight directions scanned
//!   N, NE, E, SE, S, SW, W, NW; walls, claimed cells and wall corners are
//!   excluded; ties go to the earliest direction.
//! - **Driver** ([`Wavefront`]): owns and reuses the node table.
//! - **Routes** ([`Route`]): step vectors plus cost totals.
//!
//! The result is not guaranteed to be the cheapest route.
//!
//! ```
//! use wavefront_core::{Grid, Point};
//! use wavefront_paths::find_path;
//!
//! let mut grid = Grid::new(3, 3);
//! let result = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2), 5000, 5000).unwrap();
//! let route = result.route().unwrap();
//! assert_eq!(route.len(), 2);
//! assert_eq!(route.cost(), 28);
//! ```

mod config;
mod cost;
mod error;
mod neighbors;
mod reconstruct;
mod search;
mod wavefront;

pub use config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_NODES, DEFAULT_MAX_PATH_LEN, ReverseMapping,
    SearchConfig,
};
pub use cost::{DIAGONAL_COST, STRAIGHT_COST, f_cost, heuristic, step_cost};
pub use error::{EndpointProblem, PathError};
pub use neighbors::{Candidate, NeighborEvaluator};
pub use reconstruct::{PathStep, Route, reconstruct};
pub use search::{ExhaustReason, SearchResult, SearchStats};
pub use wavefront::{SearchNode, SearchState, Wavefront};

use wavefront_core::{Grid, Point};

/// Run one search with the given node capacity and iteration budget and
/// default settings otherwise.
pub fn find_path(
    grid: &mut Grid,
    start: Point,
    target: Point,
    max_nodes: usize,
    max_iterations: usize,
) -> Result<SearchResult, PathError> {
    let config = SearchConfig::default()
        .with_max_nodes(max_nodes)
        .with_max_iterations(max_iterations);
    Wavefront::new(config).find_path(grid, start, target)
}
