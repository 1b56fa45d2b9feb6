use wavefront_core::{DirectionMask, Point};

use crate::config::SearchConfig;

/// One entry of the node table.
///
/// Nodes refer to each other only by table index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    /// Accumulated movement cost from the root.
    pub g: i32,
    /// Scaled straight-line distance to the target.
    pub h: f64,
    /// Directions already explored from or into this node.
    pub used: DirectionMask,
    /// Index of the node this one was expanded from; `None` for the root.
    pub parent: Option<usize>,
}

impl SearchNode {
    pub(crate) fn root(pos: Point, h: f64) -> Self {
        Self {
            pos,
            g: 0,
            h,
            used: DirectionMask::EMPTY,
            parent: None,
        }
    }

    #[inline]
    pub fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

/// Lifecycle of a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has run yet, or the last one was refused.
    #[default]
    Idle,
    Initializing,
    Expanding,
    Found,
    Exhausted,
}

/// Reusable search driver.
///
/// `Wavefront` owns the node table so that repeated searches reuse its
/// allocation. Each call to [`find_path`](Wavefront::find_path) starts from an
/// empty table and a cleared occupancy layer. Searches over different grids
/// need no coordination; one grid must not be searched by two drivers at
/// once, which `&mut Grid` already rules out.
#[derive(Debug, Clone)]
pub struct Wavefront {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) state: SearchState,
}

impl Default for Wavefront {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Wavefront {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: Vec::with_capacity(config.max_nodes.max(1)),
            state: SearchState::Idle,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration. The node table is reallocated only when
    /// the new capacity is larger.
    pub fn set_config(&mut self, config: SearchConfig) {
        let cap = config.max_nodes.max(1);
        if cap > self.nodes.capacity() {
            self.nodes.reserve_exact(cap - self.nodes.len());
        }
        self.config = config;
    }

    /// State reached by the most recent search.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Node table of the most recent search, in creation order.
    #[inline]
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Table capacity, root included. Never less than one.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.config.max_nodes.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReverseMapping;

    #[test]
    fn new_driver_is_idle_and_empty() {
        let wf = Wavefront::default();
        assert_eq!(wf.state(), SearchState::Idle);
        assert!(wf.nodes().is_empty());
        assert!(wf.nodes.capacity() >= 5000);
    }

    #[test]
    fn zero_capacity_still_holds_the_root() {
        let wf = Wavefront::new(SearchConfig::default().with_max_nodes(0));
        assert_eq!(wf.capacity(), 1);
    }

    #[test]
    fn set_config_grows_table() {
        let mut wf = Wavefront::new(SearchConfig::default().with_max_nodes(4));
        wf.set_config(
            SearchConfig::default()
                .with_max_nodes(64)
                .with_reverse_mapping(ReverseMapping::Legacy),
        );
        assert!(wf.nodes.capacity() >= 64);
        assert_eq!(wf.config().reverse_mapping, ReverseMapping::Legacy);
    }

    #[test]
    fn node_f_is_g_plus_h() {
        let mut n = SearchNode::root(Point::new(1, 1), 12.5);
        n.g = 20;
        assert_eq!(n.f(), 32.5);
        assert_eq!(n.parent, None);
    }
}
