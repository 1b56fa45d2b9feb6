use wavefront_core::Direction;

/// Node table capacity used when none is given.
pub const DEFAULT_MAX_NODES: usize = 5000;
/// Node-visit budget used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 5000;
/// Longest route the reconstructor will emit.
pub const DEFAULT_MAX_PATH_LEN: usize = 1000;

/// Which slot a freshly created node marks as "used" so that it never steps
/// straight back towards its parent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReverseMapping {
    /// The true opposite of the step taken (N↔S, NE↔SW, E↔W, SE↔NW).
    #[default]
    Symmetric,
    /// Bit-for-bit compatible with the historical lookup table, in which a
    /// step to the south-west blocks SE instead of NE.
    Legacy,
}

impl ReverseMapping {
    /// The slot to mark on a child reached by stepping `dir`.
    #[inline]
    pub const fn reverse(self, dir: Direction) -> Direction {
        match (self, dir) {
            (ReverseMapping::Legacy, Direction::SW) => Direction::SE,
            _ => dir.opposite(),
        }
    }
}

/// Resource ceilings and behaviour switches of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Capacity of the node table, root included.
    pub max_nodes: usize,
    /// Total number of node visits over all rounds.
    pub max_iterations: usize,
    /// Maximum number of steps in a reconstructed route.
    pub max_path_len: usize,
    pub reverse_mapping: ReverseMapping,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            reverse_mapping: ReverseMapping::Symmetric,
        }
    }
}

impl SearchConfig {
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_path_len(mut self, n: usize) -> Self {
        self.max_path_len = n;
        self
    }

    pub fn with_reverse_mapping(mut self, m: ReverseMapping) -> Self {
        self.reverse_mapping = m;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"max_nodes": 42}"#).unwrap();
        assert_eq!(c.max_nodes, 42);
        assert_eq!(c.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert_eq!(c.reverse_mapping, ReverseMapping::Symmetric);
    }
}
