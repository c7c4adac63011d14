use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate, `x` growing east and `y` growing south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self { x: self.x, y: self.y - 1 },
            Direction::East => Self { x: self.x + 1, y: self.y },
            Direction::South => Self { x: self.x, y: self.y + 1 },
            Direction::West => Self { x: self.x - 1, y: self.y },
        }
    }

    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [i32; 2] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed neighbor order used everywhere adjacency is enumerated.
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    pub fn perpendicular(self) -> [Self; 2] {
        match self {
            Self::North | Self::South => [Self::East, Self::West],
            Self::East | Self::West => [Self::North, Self::South],
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Self::North => '↑',
            Self::East => '→',
            Self::South => '↓',
            Self::West => '←',
        }
    }

    pub(crate) fn code(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// What occupies a single cell of the board. The cell index is the position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Grass,
    Eye { direction: Direction },
    StartField { direction: Direction },
    /// `rank` is the placement order, which is also the intended visiting order.
    Checkpoint { rank: usize },
    Hole,
    ResourceField { amount: u32 },
    River { direction: Direction },
}

impl Field {
    pub fn is_grass(&self) -> bool {
        matches!(self, Self::Grass)
    }

    pub fn is_river(&self) -> bool {
        matches!(self, Self::River { .. })
    }

    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Self::Eye { direction }
            | Self::StartField { direction }
            | Self::River { direction } => Some(direction),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Grass => "Grass",
            Self::Eye { .. } => "Eye",
            Self::StartField { .. } => "StartField",
            Self::Checkpoint { .. } => "Checkpoint",
            Self::Hole => "Hole",
            Self::ResourceField { .. } => "Resource",
            Self::River { .. } => "River",
        }
    }
}
