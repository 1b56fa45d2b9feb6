use wavefront_core::{CostClass, Direction, Grid, Point};

use crate::cost;
use crate::wavefront::SearchNode;

/// A legal next step for one node, with its ranking cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub dir: Direction,
    /// Movement cost of the step, taken from the node's own cell.
    pub step: i32,
    pub f: f64,
}

/// Picks the single outward step a node takes in one round.
///
/// A neighbour is a candidate iff it is inside the grid, not a wall, not
/// already claimed by the search, its direction is not marked in the node's
/// mask, and, for diagonals, neither orthogonal corner cell is a wall.
pub struct NeighborEvaluator<'a> {
    grid: &'a Grid,
    target: Point,
}

impl<'a> NeighborEvaluator<'a> {
    pub fn new(grid: &'a Grid, target: Point) -> Self {
        Self { grid, target }
    }

    /// All legal candidates of `node`, in scan order.
    pub fn candidates(&self, node: &SearchNode) -> impl Iterator<Item = Candidate> + '_ {
        let origin = self.grid.get(node.pos);
        let (pos, g, used) = (node.pos, node.g, node.used);
        Direction::ALL.into_iter().filter_map(move |dir| {
            if used.contains(dir) || !self.is_open(pos, dir) {
                return None;
            }
            let origin = origin?;
            let step = cost::step_cost(origin, dir.is_diagonal())?;
            let f = cost::f_cost(g, origin, pos.step(dir), self.target, dir.is_diagonal())?;
            Some(Candidate { dir, step, f })
        })
    }

    /// The candidate with the lowest `f`; ties go to the earliest direction.
    pub fn best(&self, node: &SearchNode) -> Option<Candidate> {
        self.candidates(node).fold(None, |best, c| match best {
            Some(b) if b.f <= c.f => Some(b),
            _ => Some(c),
        })
    }

    fn is_open(&self, from: Point, dir: Direction) -> bool {
        let to = from.step(dir);
        if !self.passable(to) {
            return false;
        }
        if let Some((a, b)) = dir.corners() {
            if !self.passable(from + a) || !self.passable(from + b) {
                return false;
            }
        }
        matches!(self.grid.is_occupied(to), Ok(false))
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.get(p).is_some_and(CostClass::is_passable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_core::DirectionMask;

    fn root(pos: Point) -> SearchNode {
        SearchNode {
            pos,
            g: 0,
            h: 0.0,
            used: DirectionMask::EMPTY,
            parent: None,
        }
    }

    fn dirs(ev: &NeighborEvaluator<'_>, node: &SearchNode) -> Vec<Direction> {
        ev.candidates(node).map(|c| c.dir).collect()
    }

    #[test]
    fn interior_node_sees_all_eight_in_scan_order() {
        let g = Grid::new(3, 3);
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        assert_eq!(dirs(&ev, &root(Point::new(1, 1))), Direction::ALL.to_vec());
    }

    #[test]
    fn bounds_filter() {
        let g = Grid::new(3, 3);
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        assert_eq!(
            dirs(&ev, &root(Point::new(0, 0))),
            vec![Direction::N, Direction::NE, Direction::E]
        );
    }

    #[test]
    fn picks_lowest_f() {
        let g = Grid::new(3, 3);
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        let best = ev.best(&root(Point::new(0, 0))).unwrap();
        assert_eq!(best.dir, Direction::NE);
        assert_eq!(best.step, 14);
        assert!((best.f - (14.0 + 200f64.sqrt())).abs() < 1e-9);
    }

    #[test]
    fn ties_resolve_to_first_in_scan_order() {
        // N and E are symmetric with respect to the target.
        let g = Grid::new(3, 3);
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        let mut node = root(Point::new(0, 0));
        node.used.insert(Direction::NE);
        assert_eq!(ev.best(&node).map(|c| c.dir), Some(Direction::N));
    }

    #[test]
    fn diagonal_blocked_by_wall_corners() {
        let mut g = Grid::new(3, 3);
        g.set_cost_class(Point::new(1, 0), CostClass::Wall).unwrap();
        g.set_cost_class(Point::new(0, 1), CostClass::Wall).unwrap();
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        let node = root(Point::new(0, 0));
        assert_eq!(ev.candidates(&node).count(), 0);
        assert_eq!(ev.best(&node), None);
    }

    #[test]
    fn diagonal_blocked_by_a_single_wall_corner() {
        let mut g = Grid::new(3, 3);
        g.set_cost_class(Point::new(1, 0), CostClass::Wall).unwrap();
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        assert_eq!(dirs(&ev, &root(Point::new(0, 0))), vec![Direction::N]);
    }

    #[test]
    fn wall_destination_rejected() {
        let mut g = Grid::new(2, 1);
        g.set_cost_class(Point::new(1, 0), CostClass::Wall).unwrap();
        let ev = NeighborEvaluator::new(&g, Point::new(1, 0));
        assert_eq!(ev.best(&root(Point::new(0, 0))), None);
    }

    #[test]
    fn used_slots_and_occupied_cells_are_skipped() {
        let mut g = Grid::new(3, 3);
        g.set_occupied(Point::new(0, 1)).unwrap();
        let ev = NeighborEvaluator::new(&g, Point::new(2, 2));
        let mut node = root(Point::new(0, 0));
        node.used.insert(Direction::NE);
        assert_eq!(dirs(&ev, &node), vec![Direction::E]);
    }

    #[test]
    fn step_cost_comes_from_the_node_cell() {
        let mut g = Grid::new(2, 1);
        g.set_cost_class(Point::new(0, 0), CostClass::Water).unwrap();
        let ev = NeighborEvaluator::new(&g, Point::new(1, 0));
        let c = ev.best(&root(Point::new(0, 0))).unwrap();
        assert_eq!(c.step, 40);
        assert_eq!(c.f, 40.0);
    }
}
