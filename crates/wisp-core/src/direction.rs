//! Compass headings and cell faces.
//!
//! `Heading` is the horizontal direction an agent approaches from: the
//! eight compass points, so yaw rounds to the nearest cardinal *or*
//! ordinal.  `Face` is the side of a cell (or entity) through which a
//! transfer capability is accessed.

use std::f32::consts::TAU;

// ── Heading ──────────────────────────────────────────────────────────────────

/// One of the eight compass points, ordered by increasing yaw from +x.
///
/// With the [`Vec3::yaw_to`][crate::Vec3::yaw_to] convention (0 along +x,
/// increasing toward +z): East = 0, South = τ/4, West = τ/2, North = 3τ/4.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

/// All headings in yaw order; `from_yaw` indexes into this.
const HEADINGS: [Heading; 8] = [
    Heading::East,
    Heading::SouthEast,
    Heading::South,
    Heading::SouthWest,
    Heading::West,
    Heading::NorthWest,
    Heading::North,
    Heading::NorthEast,
];

impl Heading {
    /// The heading nearest to `yaw` (radians, any range).
    pub fn from_yaw(yaw: f32) -> Heading {
        let sector = TAU / 8.0;
        // Normalize into [0, τ), then round to the nearest sector boundary.
        let norm = yaw.rem_euclid(TAU);
        let idx = ((norm + sector * 0.5) / sector) as usize % 8;
        HEADINGS[idx]
    }

    /// The reverse heading (180°).
    pub fn opposite(self) -> Heading {
        match self {
            Heading::East      => Heading::West,
            Heading::SouthEast => Heading::NorthWest,
            Heading::South     => Heading::North,
            Heading::SouthWest => Heading::NorthEast,
            Heading::West      => Heading::East,
            Heading::NorthWest => Heading::SouthEast,
            Heading::North     => Heading::South,
            Heading::NorthEast => Heading::SouthWest,
        }
    }

    /// Unit cell step `(dx, dz)` for this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::East      => (1, 0),
            Heading::SouthEast => (1, 1),
            Heading::South     => (0, 1),
            Heading::SouthWest => (-1, 1),
            Heading::West      => (-1, 0),
            Heading::NorthWest => (-1, -1),
            Heading::North     => (0, -1),
            Heading::NorthEast => (1, -1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::East      => "east",
            Heading::SouthEast => "southeast",
            Heading::South     => "south",
            Heading::SouthWest => "southwest",
            Heading::West      => "west",
            Heading::NorthWest => "northwest",
            Heading::North     => "north",
            Heading::NorthEast => "northeast",
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Face ─────────────────────────────────────────────────────────────────────

/// A side of a cell.  Transfer capabilities are exposed per face: a hopper
/// feeds from above, most containers accept from `Up`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    /// Default access face for deposit transfers.
    #[default]
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Face {
    pub fn as_str(self) -> &'static str {
        match self {
            Face::Up    => "up",
            Face::Down  => "down",
            Face::North => "north",
            Face::South => "south",
            Face::East  => "east",
            Face::West  => "west",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
