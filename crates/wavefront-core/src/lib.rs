//! **wavefront-core** — grid model for the wavefront route search.
//!
//! This crate provides the types shared by grid suppliers and the search
//! engine: geometry primitives and compass directions, terrain cost classes,
//! the terrain/occupancy [`Grid`], and a text [`Level`] loader.

pub mod geom;
pub mod grid;
pub mod level;
pub mod terrain;

pub use geom::{Direction, DirectionMask, Point, Range};
pub use grid::{Grid, GridError};
pub use level::{Level, LevelError};
pub use terrain::CostClass;
