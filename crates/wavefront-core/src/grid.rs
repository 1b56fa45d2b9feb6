//! The [`Grid`] type: a terrain layer plus a per-search occupancy layer.
//!
//! Terrain is written by the grid supplier before a search starts and is
//! read-only afterwards. Occupancy marks the cells already claimed by the
//! search in flight; the search engine clears it before every run.

use std::fmt;

use crate::geom::{Point, Range};
use crate::terrain::CostClass;

/// Errors raised by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The point lies outside `[0, width) × [0, height)`.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "grid: point {p} is out of bounds"),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular terrain map with origin (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    terrain: Vec<CostClass>,
    occupied: Vec<bool>,
}

impl Grid {
    /// Create a new grid filled with [`CostClass::Open`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| CostClass::Open)
    }

    /// Create a grid whose terrain is produced cell by cell by `f`.
    pub fn from_fn(width: i32, height: i32, f: impl FnMut(Point) -> CostClass) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let bounds = Range::new(0, 0, width, height);
        let terrain = bounds.iter().map(f).collect();
        Self {
            width,
            height,
            terrain,
            occupied: vec![false; bounds.len()],
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        Ok(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Terrain class at `p`.
    pub fn cost_class(&self, p: Point) -> Result<CostClass, GridError> {
        let i = self.index(p)?;
        Ok(self.terrain[i])
    }

    /// Terrain class at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<CostClass> {
        self.cost_class(p).ok()
    }

    /// Overwrite the terrain at `p`. Meant for grid suppliers; terrain must
    /// not change while a search runs.
    pub fn set_cost_class(&mut self, p: Point, class: CostClass) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.terrain[i] = class;
        Ok(())
    }

    /// Whether `p` has been claimed by the current search.
    pub fn is_occupied(&self, p: Point) -> Result<bool, GridError> {
        let i = self.index(p)?;
        Ok(self.occupied[i])
    }

    /// Claim `p` for the current search.
    pub fn set_occupied(&mut self, p: Point) -> Result<(), GridError> {
        let i = self.index(p)?;
        self.occupied[i] = true;
        Ok(())
    }

    /// Drop every occupancy mark.
    pub fn clear_occupancy(&mut self) {
        self.occupied.fill(false);
    }

    /// Number of cells of the given class.
    pub fn count(&self, class: CostClass) -> usize {
        self.terrain.iter().filter(|&&c| c == class).count()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// Row-major iterator over `(Point, CostClass)` pairs, lowest `y` first.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CostClass)> + '_ {
        self.bounds().iter().zip(self.terrain.iter().copied())
    }
}

// Only the terrain layer is serialized; occupancy belongs to a search.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    terrain: Vec<CostClass>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width,
            height: self.height,
            terrain: self.terrain.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        let bounds = Range::new(0, 0, repr.width.max(0), repr.height.max(0));
        if repr.terrain.len() != bounds.len() {
            return Err(serde::de::Error::custom(format!(
                "grid: {} terrain cells for a {}x{} grid",
                repr.terrain.len(),
                repr.width,
                repr.height
            )));
        }
        Ok(Self {
            width: bounds.width(),
            height: bounds.height(),
            occupied: vec![false; repr.terrain.len()],
            terrain: repr.terrain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_open_and_unoccupied() {
        let g = Grid::new(4, 3);
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert_eq!(g.count(CostClass::Open), 12);
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.cost_class(Point::new(3, 2)), Ok(CostClass::Open));
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut g = Grid::new(4, 3);
        let outside = [Point::new(4, 0), Point::new(0, 3), Point::new(-1, 1)];
        for p in outside {
            assert_eq!(g.cost_class(p), Err(GridError::OutOfBounds(p)));
            assert_eq!(g.is_occupied(p), Err(GridError::OutOfBounds(p)));
            assert_eq!(g.set_occupied(p), Err(GridError::OutOfBounds(p)));
            assert_eq!(g.get(p), None);
        }
    }

    #[test]
    fn from_fn_places_cells_by_coordinate() {
        let g = Grid::from_fn(3, 2, |p| {
            if p == Point::new(2, 1) {
                CostClass::Wall
            } else {
                CostClass::Rough
            }
        });
        assert_eq!(g.get(Point::new(2, 1)), Some(CostClass::Wall));
        assert_eq!(g.get(Point::new(1, 1)), Some(CostClass::Rough));
        assert_eq!(g.count(CostClass::Wall), 1);
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(cells[5], (Point::new(2, 1), CostClass::Wall));
    }

    #[test]
    fn occupancy_set_and_clear() {
        let mut g = Grid::new(3, 3);
        let p = Point::new(1, 2);
        g.set_occupied(p).unwrap();
        assert_eq!(g.is_occupied(p), Ok(true));
        assert_eq!(g.is_occupied(Point::new(2, 1)), Ok(false));
        assert_eq!(g.occupied_count(), 1);
        g.clear_occupancy();
        assert_eq!(g.is_occupied(p), Ok(false));
    }

    #[test]
    fn set_cost_class() {
        let mut g = Grid::new(2, 2);
        g.set_cost_class(Point::new(0, 1), CostClass::Water).unwrap();
        assert_eq!(g.get(Point::new(0, 1)), Some(CostClass::Water));
        assert!(g.set_cost_class(Point::new(2, 2), CostClass::Wall).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn index_does_not_wrap_past_i32() {
        let g = Grid {
            width: 70_000,
            height: 40_000,
            terrain: Vec::new(),
            occupied: Vec::new(),
        };
        assert_eq!(g.index(Point::new(69_999, 39_999)), Ok(2_799_999_999));
        assert_eq!(g.index(Point::new(3, 1)), Ok(70_003));
    }

    #[test]
    fn negative_dimensions_clamp_to_empty() {
        let g = Grid::new(-3, 5);
        assert_eq!(g.width(), 0);
        assert!(g.bounds().is_empty());
        assert_eq!(g.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip_drops_occupancy() {
        let mut g = Grid::new(3, 2);
        g.set_cost_class(Point::new(1, 1), CostClass::Wall).unwrap();
        g.set_occupied(Point::new(0, 0)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(Point::new(1, 1)), Some(CostClass::Wall));
        assert_eq!(back.is_occupied(Point::new(0, 0)), Ok(false));
    }

    #[test]
    fn mismatched_terrain_length_is_rejected() {
        let json = r#"{"width":2,"height":2,"terrain":["Open"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
