//! Route reconstruction from the node table.

use wavefront_core::Point;

use crate::error::PathError;
use crate::wavefront::SearchNode;

/// One move of a reconstructed route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    /// Unit compass vector from the previous cell to this one.
    pub delta: Point,
    /// Cumulative `g` of the node the step arrives at.
    pub g: i32,
    /// `g + h` of the node the step arrives at.
    pub f: f64,
}

/// A route from start to target.
///
/// Steps are stored goal first, the order the parent chain is walked in.
/// Use [`forward`](Route::forward) for start-to-goal order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    steps: Vec<PathStep>,
    total_g: i64,
    total_f: f64,
    cost: i32,
}

impl Route {
    /// The zero-length route of a search whose start is its target.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Steps, goal first.
    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Steps, start first.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = &PathStep> + ExactSizeIterator {
        self.steps.iter().rev()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of every visited node's cumulative `g` (root excluded).
    ///
    /// This adds absolute costs, not per-edge costs, so it grows faster
    /// than [`cost`](Route::cost) on routes longer than one step.
    #[inline]
    pub fn total_g(&self) -> i64 {
        self.total_g
    }

    /// Sum of every visited node's `g + h` (root excluded).
    #[inline]
    pub fn total_f(&self) -> f64 {
        self.total_f
    }

    /// Accumulated movement cost of the goal node.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Sum of all step vectors.
    pub fn displacement(&self) -> Point {
        self.steps.iter().fold(Point::ZERO, |acc, s| acc + s.delta)
    }

    /// Absolute cells visited from `start` to the goal, both included.
    pub fn waypoints(&self, start: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len() + 1);
        out.push(start);
        let mut cur = start;
        for s in self.forward() {
            cur = cur + s.delta;
            out.push(cur);
        }
        out
    }
}

/// Walk parent links from `terminal` back to the root.
pub fn reconstruct(
    nodes: &[SearchNode],
    terminal: usize,
    max_len: usize,
) -> Result<Route, PathError> {
    let len = chain(nodes, terminal).count();
    if len > max_len {
        return Err(PathError::PathTooLong { len, max: max_len });
    }

    let mut route = Route {
        steps: Vec::with_capacity(len),
        total_g: 0,
        total_f: 0.0,
        cost: nodes[terminal].g,
    };
    for (node, parent) in chain(nodes, terminal) {
        route.total_g += i64::from(node.g);
        route.total_f += node.f();
        route.steps.push(PathStep {
            delta: node.pos - parent.pos,
            g: node.g,
            f: node.f(),
        });
    }
    Ok(route)
}

/// `(node, parent)` pairs from `start` up to, but excluding, the root.
fn chain(nodes: &[SearchNode], start: usize) -> impl Iterator<Item = (&SearchNode, &SearchNode)> {
    let mut cur = Some(start);
    std::iter::from_fn(move || {
        let node = &nodes[cur?];
        let parent = &nodes[node.parent?];
        cur = node.parent;
        Some((node, parent))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavefront_core::DirectionMask;

    fn node(x: i32, y: i32, g: i32, h: f64, parent: Option<usize>) -> SearchNode {
        SearchNode {
            pos: Point::new(x, y),
            g,
            h,
            used: DirectionMask::EMPTY,
            parent,
        }
    }

    fn table() -> Vec<SearchNode> {
        vec![
            node(0, 0, 0, 30.0, None),
            node(1, 1, 14, 15.0, Some(0)),
            node(0, 1, 10, 22.0, Some(0)),
            node(2, 1, 24, 10.0, Some(1)),
            node(2, 2, 34, 0.0, Some(3)),
        ]
    }

    #[test]
    fn walks_goal_to_root() {
        let route = reconstruct(&table(), 4, 1000).unwrap();
        let deltas: Vec<_> = route.steps().iter().map(|s| s.delta).collect();
        assert_eq!(
            deltas,
            vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]
        );
        let forward: Vec<_> = route.forward().map(|s| s.delta).collect();
        assert_eq!(
            forward,
            vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn totals_add_cumulative_costs() {
        let route = reconstruct(&table(), 4, 1000).unwrap();
        assert_eq!(route.total_g(), 34 + 24 + 14);
        assert_eq!(route.total_f(), 34.0 + 34.0 + 29.0);
        assert_eq!(route.cost(), 34);
        assert_eq!(route.steps()[0].g, 34);
        assert_eq!(route.steps()[2].f, 29.0);
    }

    #[test]
    fn waypoints_and_displacement() {
        let route = reconstruct(&table(), 4, 1000).unwrap();
        assert_eq!(route.displacement(), Point::new(2, 2));
        assert_eq!(
            route.waypoints(Point::new(0, 0)),
            vec![
                Point::new(0, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn root_yields_empty_route() {
        let route = reconstruct(&table(), 0, 0).unwrap();
        assert!(route.is_empty());
        assert_eq!(route, Route::empty());
    }

    #[test]
    fn too_long() {
        assert_eq!(
            reconstruct(&table(), 4, 2),
            Err(PathError::PathTooLong { len: 3, max: 2 })
        );
        assert!(reconstruct(&table(), 4, 3).is_ok());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wavefront_core::DirectionMask;

    #[test]
    fn route_round_trip() {
        let nodes = vec![
            SearchNode {
                pos: Point::new(0, 0),
                g: 0,
                h: 10.0,
                used: DirectionMask::EMPTY,
                parent: None,
            },
            SearchNode {
                pos: Point::new(1, 0),
                g: 10,
                h: 0.0,
                used: DirectionMask::EMPTY,
                parent: Some(0),
            },
        ];
        let route = reconstruct(&nodes, 1, 10).unwrap();
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
