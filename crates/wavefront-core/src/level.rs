//! Text levels: a [`Grid`] plus optional start and target markers, parsed
//! from ASCII art.
//!
//! ```text
//! #########
//! #S..,,~.#
//! #.##~~..#
//! #....,.T#
//! #########
//! ```
//!
//! Runes: `.` open, `,` rough, `~` water, `#` wall, `S` start and `T` target
//! (both on open ground). The first line is the northernmost row, so the
//! bottom-left character is (0, 0).

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::grid::Grid;
use crate::terrain::CostClass;

pub const START_RUNE: char = 'S';
pub const TARGET_RUNE: char = 'T';

/// A parsed text level.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: Grid,
    pub start: Option<Point>,
    pub target: Option<Point>,
}

impl Level {
    /// Parse a level.
    ///
    /// Each line must have the same width. Leading/trailing whitespace is
    /// trimmed from the whole string but not from individual lines.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LevelError::Empty);
        }
        let rows: Vec<Vec<char>> = s.lines().map(|l| l.chars().collect()).collect();
        let width = rows[0].len();
        if rows.iter().any(|r| r.len() != width) {
            return Err(LevelError::InconsistentSize(s.to_string()));
        }
        let height = rows.len() as i32;

        let mut classes = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut target = None;
        // Scan bottom row first so cells come out in grid order.
        for (y, row) in rows.iter().rev().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let marker = match ch {
                    START_RUNE => Some(&mut start),
                    TARGET_RUNE => Some(&mut target),
                    _ => None,
                };
                let class = match marker {
                    Some(slot) => {
                        if slot.replace(pos).is_some() {
                            return Err(LevelError::DuplicateMarker(ch));
                        }
                        CostClass::Open
                    }
                    None => CostClass::from_rune(ch).ok_or(LevelError::InvalidRune {
                        ch,
                        // Report the position as seen in the text.
                        pos: Point::new(x as i32, height - 1 - y as i32),
                    })?,
                };
                classes.push(class);
            }
        }

        let mut cells = classes.into_iter();
        let grid = Grid::from_fn(width as i32, height, |_| {
            cells.next().unwrap_or_default()
        });
        Ok(Self {
            grid,
            start,
            target,
        })
    }

    /// Render the level back to text, markers included.
    pub fn render(&self) -> String {
        render(&self.grid, |p| {
            if Some(p) == self.start {
                Some(START_RUNE)
            } else if Some(p) == self.target {
                Some(TARGET_RUNE)
            } else {
                None
            }
        })
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Render a grid as text, north row first. `overlay` may replace the terrain
/// rune of any cell.
pub fn render(grid: &Grid, overlay: impl Fn(Point) -> Option<char>) -> String {
    let mut out = String::with_capacity(((grid.width() + 1) * grid.height()) as usize);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = overlay(p)
                .or_else(|| grid.get(p).map(CostClass::rune))
                .unwrap_or(' ');
            out.push(ch);
        }
        if y > 0 {
            out.push('\n');
        }
    }
    out
}

/// Errors that can occur when parsing a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No content.
    Empty,
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside the level alphabet, at its text (column, line).
    InvalidRune { ch: char, pos: Point },
    /// `S` or `T` appears more than once.
    DuplicateMarker(char),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "level: empty"),
            Self::InconsistentSize(s) => write!(f, "level: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => write!(
                f,
                "level contains invalid rune \u{201c}{ch}\u{201d} at column {}, line {}",
                pos.x, pos.y
            ),
            Self::DuplicateMarker(ch) => write!(f, "level: marker {ch} appears more than once"),
        }
    }
}

impl std::error::Error for LevelError {}
