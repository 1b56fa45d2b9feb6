//! Terrain cost classes.

use std::fmt;

/// The traversal class of a single map cell.
///
/// The numeric codes (`Open` = 0 .. `Wall` = 3) are the terrain ids handed
/// over by grid suppliers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostClass {
    #[default]
    Open,
    Rough,
    Water,
    Wall,
}

impl CostClass {
    /// Every class, ordered by terrain id.
    pub const ALL: [CostClass; 4] = [
        CostClass::Open,
        CostClass::Rough,
        CostClass::Water,
        CostClass::Wall,
    ];

    /// Whether a search may ever enter a cell of this class.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CostClass::Wall)
    }

    /// Cost multiplier applied to a step taken out of a cell of this class.
    /// `None` for walls.
    #[inline]
    pub const fn multiplier(self) -> Option<i32> {
        match self {
            CostClass::Open => Some(1),
            CostClass::Rough => Some(2),
            CostClass::Water => Some(4),
            CostClass::Wall => None,
        }
    }

    /// Terrain id used by grid suppliers.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CostClass::Open),
            1 => Some(CostClass::Rough),
            2 => Some(CostClass::Water),
            3 => Some(CostClass::Wall),
            _ => None,
        }
    }

    /// Map rune used by text levels.
    #[inline]
    pub const fn rune(self) -> char {
        match self {
            CostClass::Open => '.',
            CostClass::Rough => ',',
            CostClass::Water => '~',
            CostClass::Wall => '#',
        }
    }

    /// Inverse of [`rune`](Self::rune).
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CostClass::Open),
            ',' => Some(CostClass::Rough),
            '~' => Some(CostClass::Water),
            '#' => Some(CostClass::Wall),
            _ => None,
        }
    }
}

impl fmt::Display for CostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CostClass::Open => "open",
            CostClass::Rough => "rough",
            CostClass::Water => "water",
            CostClass::Wall => "wall",
        };
        f.write_str(s)
    }
}
