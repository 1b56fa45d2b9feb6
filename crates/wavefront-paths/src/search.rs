//! The wavefront search.
//!
//! Every round, each node known at the start of the round takes at most one
//! outward step: the cheapest legal neighbour chosen by the
//! [`NeighborEvaluator`]. The child it creates claims its cell, so no two
//! nodes ever share a cell and no node is ever re-opened. The search stops
//! as soon as a child lands on the target.
//!
//! This is not A*: there is no global open list, only the per-node choice,
//! and the first route found is returned even when a cheaper one exists.

use wavefront_core::{CostClass, DirectionMask, Grid, Point};

use crate::cost;
use crate::error::{EndpointProblem, PathError};
use crate::neighbors::{Candidate, NeighborEvaluator};
use crate::reconstruct::{Route, reconstruct};
use crate::wavefront::{SearchNode, SearchState, Wavefront};

/// Counters describing how much work a search did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Expansion rounds started.
    pub rounds: usize,
    /// Node visits, counted against the iteration budget.
    pub iterations: usize,
    /// Size of the node table when the search ended, root included.
    pub nodes: usize,
}

/// Why a search ended without reaching the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExhaustReason {
    /// A whole round passed without creating a node.
    Stalled,
    /// The iteration budget ran out.
    IterationBudget,
    /// The node table is full.
    Capacity,
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    Found { route: Route, stats: SearchStats },
    Exhausted { reason: ExhaustReason, stats: SearchStats },
}

impl SearchResult {
    /// The route, if the target was reached.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found { route, .. } => Some(route),
            Self::Exhausted { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Found { route, .. } => Some(route),
            Self::Exhausted { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found { stats, .. } | Self::Exhausted { stats, .. } => *stats,
        }
    }
}

/// How the expansion loop ended.
enum Outcome {
    Reached(usize),
    Exhausted(ExhaustReason),
}

impl Wavefront {
    /// Search a route from `start` to `target`.
    ///
    /// The grid's occupancy layer is cleared first and holds the cells
    /// claimed by this search afterwards. Terrain is never modified.
    pub fn find_path(
        &mut self,
        grid: &mut Grid,
        start: Point,
        target: Point,
    ) -> Result<SearchResult, PathError> {
        self.state = SearchState::Idle;
        self.nodes.clear();
        validate_endpoints(grid, start, target)?;

        self.state = SearchState::Initializing;
        grid.clear_occupancy();
        grid.set_occupied(start)?;
        self.nodes
            .push(SearchNode::root(start, cost::heuristic(start, target)));

        let mut stats = SearchStats::default();
        if start == target {
            log::info!("start {start} is the target, empty route");
            self.state = SearchState::Found;
            stats.nodes = self.nodes.len();
            return Ok(SearchResult::Found {
                route: Route::empty(),
                stats,
            });
        }

        self.state = SearchState::Expanding;
        let outcome = self.expand(grid, target, &mut stats)?;
        stats.nodes = self.nodes.len();

        match outcome {
            Outcome::Reached(terminal) => {
                self.state = SearchState::Found;
                let route = reconstruct(&self.nodes, terminal, self.config.max_path_len)?;
                log::info!(
                    "found route {start} -> {target}: {} steps, {} nodes, total g cost = {}, total f cost = {:.0}",
                    route.len(),
                    stats.nodes,
                    route.total_g(),
                    route.total_f()
                );
                Ok(SearchResult::Found { route, stats })
            }
            Outcome::Exhausted(reason) => {
                self.state = SearchState::Exhausted;
                log::info!(
                    "no route {start} -> {target} ({reason:?}) after {} rounds, {} nodes",
                    stats.rounds,
                    stats.nodes
                );
                Ok(SearchResult::Exhausted { reason, stats })
            }
        }
    }

    fn expand(
        &mut self,
        grid: &mut Grid,
        target: Point,
        stats: &mut SearchStats,
    ) -> Result<Outcome, PathError> {
        let capacity = self.capacity();
        let mut budget = self.config.max_iterations;

        loop {
            if budget == 0 {
                return Ok(Outcome::Exhausted(ExhaustReason::IterationBudget));
            }
            if self.nodes.len() >= capacity {
                return Ok(Outcome::Exhausted(ExhaustReason::Capacity));
            }

            let round_len = self.nodes.len();
            stats.rounds += 1;
            log::debug!("round {}: expanding {round_len} nodes", stats.rounds);

            for i in 0..round_len {
                budget = budget.saturating_sub(1);
                stats.iterations += 1;

                let best = NeighborEvaluator::new(grid, target).best(&self.nodes[i]);
                let Some(candidate) = best else {
                    continue;
                };
                if self.nodes.len() >= capacity {
                    return Ok(Outcome::Exhausted(ExhaustReason::Capacity));
                }
                let child = self.spawn(grid, i, candidate, target)?;
                if self.nodes[child].pos == target {
                    return Ok(Outcome::Reached(child));
                }
            }

            if self.nodes.len() == round_len {
                return Ok(Outcome::Exhausted(ExhaustReason::Stalled));
            }
        }
    }

    /// Step node `parent` in the candidate's direction, returning the index
    /// of the new node.
    fn spawn(
        &mut self,
        grid: &mut Grid,
        parent: usize,
        candidate: Candidate,
        target: Point,
    ) -> Result<usize, PathError> {
        let dir = candidate.dir;
        let back = self.config.reverse_mapping.reverse(dir);
        let from = &mut self.nodes[parent];
        let pos = from.pos.step(dir);
        let g = from
            .g
            .checked_add(candidate.step)
            .ok_or(PathError::CostOverflow(pos))?;
        from.used.insert(dir);

        let child = SearchNode {
            pos,
            g,
            h: cost::heuristic(pos, target),
            used: DirectionMask::EMPTY.with(back),
            parent: Some(parent),
        };

        grid.set_occupied(pos)?;
        log::trace!("node {parent} {dir} -> {pos} g={} h={:.2}", child.g, child.h);

        self.nodes.push(child);
        Ok(self.nodes.len() - 1)
    }
}

fn validate_endpoints(grid: &Grid, start: Point, target: Point) -> Result<(), PathError> {
    let problem = match (grid.get(start), grid.get(target)) {
        (None, _) => Some(EndpointProblem::StartOutOfBounds),
        (_, None) => Some(EndpointProblem::TargetOutOfBounds),
        (_, Some(CostClass::Wall)) => Some(EndpointProblem::TargetIsWall),
        (Some(CostClass::Wall), _) => Some(EndpointProblem::StartIsWall),
        _ => None,
    };
    match problem {
        Some(problem) => {
            log::warn!("refusing search {start} -> {target}: {problem}");
            Err(PathError::InvalidEndpoints {
                start,
                target,
                problem,
            })
        }
        None => Ok(()),
    }
}
