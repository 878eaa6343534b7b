//! Sparse axial hex grid used by the discrete weather model
//!
//! Cells are keyed by [`HexCoord`] in an `FxHashMap`; the populated area is
//! irregular, so any neighbour lookup may miss.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{unrecognised, WeatherError};

/// Axial hex coordinate (pointy-top layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Neighbouring coordinate in the given direction
    pub fn neighbor(&self, direction: Direction) -> HexCoord {
        let (dq, dr) = direction.offset();
        HexCoord::new(self.q + dq, self.r + dr)
    }

    /// Hex distance in steps
    pub fn distance(&self, other: HexCoord) -> i32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// One of the six movement directions, numbered 1..=6 clockwise from NE
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    SouthWest = 4,
    West = 5,
    NorthWest = 6,
}

// Alternates by angular proximity: one step clockwise, one counter-clockwise,
// two clockwise, two counter-clockwise, then the opposite direction.
const ALTERNATES: [[Direction; 5]; 6] = {
    use Direction::*;
    [
        [East, NorthWest, SouthEast, West, SouthWest],
        [SouthEast, NorthEast, SouthWest, NorthWest, West],
        [SouthWest, East, West, NorthEast, NorthWest],
        [West, SouthEast, NorthWest, East, NorthEast],
        [NorthWest, SouthWest, NorthEast, SouthEast, East],
        [NorthEast, West, East, SouthWest, SouthEast],
    ]
};

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Axial (dq, dr) offset
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (0, -1),
        }
    }

    /// Fallback directions tried in order when this one leads off the grid
    pub fn alternates(&self) -> &'static [Direction; 5] {
        &ALTERNATES[self.index()]
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    fn index(&self) -> usize {
        (self.number() - 1) as usize
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = WeatherError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=6 => Ok(Direction::ALL[(value - 1) as usize]),
            _ => Err(unrecognised("direction", value)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction.number()
    }
}

impl FromStr for Direction {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Direction::try_from(number);
        }
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.abbreviation().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| unrecognised("direction", s))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Sparse map from coordinate to weather-type id
#[derive(Debug, Clone)]
pub struct HexGrid {
    cells: FxHashMap<HexCoord, String>,
    start: HexCoord,
}

impl HexGrid {
    pub fn new(start: HexCoord) -> Self {
        Self {
            cells: FxHashMap::default(),
            start,
        }
    }

    pub fn insert(&mut self, coord: HexCoord, weather_type_id: impl Into<String>) {
        self.cells.insert(coord, weather_type_id.into());
    }

    /// Builder form of [`HexGrid::insert`]
    pub fn with_cell(mut self, coord: HexCoord, weather_type_id: impl Into<String>) -> Self {
        self.insert(coord, weather_type_id);
        self
    }

    pub fn start(&self) -> HexCoord {
        self.start
    }

    pub fn cell_type(&self, coord: HexCoord) -> Option<&str> {
        self.cells.get(&coord).map(String::as_str)
    }

    pub fn is_populated(&self, coord: HexCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = (HexCoord, &str)> {
        self.cells.iter().map(|(coord, id)| (*coord, id.as_str()))
    }

    /// Destination of one step from `from`, with the direction actually taken
    ///
    /// Returns `None` when neither the requested direction nor any of its
    /// alternates leads to a populated cell.
    pub fn resolve_step(&self, from: HexCoord, direction: Direction) -> Option<(HexCoord, Direction)> {
        std::iter::once(direction)
            .chain(direction.alternates().iter().copied())
            .map(|d| (from.neighbor(d), d))
            .find(|(coord, _)| self.is_populated(*coord))
    }
}
