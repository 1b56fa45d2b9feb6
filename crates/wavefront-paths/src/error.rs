use std::fmt;

use wavefront_core::{GridError, Point};

/// Why a start/target pair was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    StartOutOfBounds,
    TargetOutOfBounds,
    StartIsWall,
    TargetIsWall,
}

impl fmt::Display for EndpointProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::StartOutOfBounds => "start is out of bounds",
            Self::TargetOutOfBounds => "target is out of bounds",
            Self::StartIsWall => "start is a wall",
            Self::TargetIsWall => "target is a wall",
        };
        f.write_str(s)
    }
}

/// Errors returned by a route search.
///
/// Running out of nodes or iterations is not an error: it is reported as
/// [`SearchResult::Exhausted`](crate::SearchResult::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The endpoints were rejected before any search was attempted.
    InvalidEndpoints {
        start: Point,
        target: Point,
        problem: EndpointProblem,
    },
    /// A grid access escaped the bounds checks. Indicates a bug.
    OutOfBounds(Point),
    /// The reconstructed route has more steps than allowed.
    PathTooLong { len: usize, max: usize },
    /// The accumulated cost of the node at this cell no longer fits an `i32`.
    CostOverflow(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints {
                start,
                target,
                problem,
            } => write!(f, "invalid endpoints {start} -> {target}: {problem}"),
            Self::OutOfBounds(p) => write!(f, "search touched out-of-bounds cell {p}"),
            Self::PathTooLong { len, max } => {
                write!(f, "route of {len} steps exceeds the limit of {max}")
            }
            Self::CostOverflow(p) => write!(f, "accumulated cost overflows at {p}"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::OutOfBounds(p) => Self::OutOfBounds(p),
        }
    }
}
