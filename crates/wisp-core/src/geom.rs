//! World-space coordinates and grid-cell positions.
//!
//! `Vec3` uses `f32` components — agents move in fractions of a cell, and
//! single precision is plenty for the distances involved (a few hundred
//! cells at most).  `CellPos` is the integer cell lattice; the interaction
//! point of a cell is its center, offset +0.5 on every axis.

use crate::direction::Heading;

// ── Vec3 ─────────────────────────────────────────────────────────────────────

/// A point (or displacement) in continuous world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Horizontal yaw (radians) from `self` toward `other`.
    ///
    /// Measured on the x/z plane: 0 along +x, increasing toward +z.  The
    /// vertical component is ignored — approach offsets are horizontal.
    #[inline]
    pub fn yaw_to(self, other: Vec3) -> f32 {
        (other.z - self.z).atan2(other.x - self.x)
    }

    #[inline]
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn scale(self, k: f32) -> Vec3 {
        Vec3::new(self.x * k, self.y * k, self.z * k)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// The cell this point falls in.
    #[inline]
    pub fn cell(self) -> CellPos {
        CellPos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ── CellPos ──────────────────────────────────────────────────────────────────

/// An integer cell on the world grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Center of the cell in world space (+0.5 on every axis).
    #[inline]
    pub fn center(self) -> Vec3 {
        Vec3::new(
            self.x as f32 + 0.5,
            self.y as f32 + 0.5,
            self.z as f32 + 0.5,
        )
    }

    /// The horizontally adjacent cell one step toward `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> CellPos {
        let (dx, dz) = heading.offset();
        CellPos::new(self.x + dx, self.y, self.z + dz)
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
