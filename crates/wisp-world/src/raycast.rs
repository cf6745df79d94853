//! Grid raycasting over solid collision geometry.
//!
//! The traversal is the standard Amanatides–Woo walk: step cell by cell
//! along the segment, crossing whichever axis boundary comes first.  Only
//! solid cells block; anything without collision geometry (including
//! fluids, which this world model simply does not represent) is ignored.

use wisp_core::{CellPos, Vec3};

/// Result of casting a ray between two points.
///
/// `Blocked::cell` is the first solid cell struck.  `Blocked::hit_cell` is
/// the cell containing the exact boundary contact point: entering a solid
/// cell across its low-coordinate face puts the contact point inside the
/// struck cell itself, entering across its high-coordinate face puts it in
/// the open cell the ray came from.  Sight checks test both (plus the
/// same-structure escape hatch) — see `DepositGoal::can_see`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RayHit {
    /// The segment reached its end without striking a solid cell.
    Miss,
    /// A solid cell was struck.
    Blocked { cell: CellPos, hit_cell: CellPos },
}

impl RayHit {
    #[inline]
    pub fn is_miss(self) -> bool {
        matches!(self, RayHit::Miss)
    }
}

/// Walk the segment `from → to`, returning the first solid cell struck.
///
/// `solid` is the collision predicate.  The starting cell is tested too: a
/// ray that begins inside solid geometry is blocked immediately (with
/// `hit_cell == cell`).
pub fn cast(from: Vec3, to: Vec3, solid: impl Fn(CellPos) -> bool) -> RayHit {
    let mut cell = from.cell();
    let end = to.cell();

    if solid(cell) {
        return RayHit::Blocked { cell, hit_cell: cell };
    }

    let d = to.sub(from);

    // Per-axis stepping state: direction, parametric t of the next boundary
    // crossing, and t advance per whole cell.
    let (step_x, mut tmax_x, tdelta_x) = axis_init(from.x, d.x, cell.x);
    let (step_y, mut tmax_y, tdelta_y) = axis_init(from.y, d.y, cell.y);
    let (step_z, mut tmax_z, tdelta_z) = axis_init(from.z, d.z, cell.z);

    while cell != end {
        // Cross the nearest boundary.  Ties break x → y → z; the corner
        // cases a tie represents are not worth disambiguating for sight
        // checks against cell-sized targets.
        let next_t = tmax_x.min(tmax_y).min(tmax_z);
        if next_t > 1.0 {
            // The segment ends inside the current cell.
            return RayHit::Miss;
        }
        let axis = if tmax_x <= tmax_y && tmax_x <= tmax_z {
            tmax_x += tdelta_x;
            cell.x += step_x;
            Axis::X
        } else if tmax_y <= tmax_z {
            tmax_y += tdelta_y;
            cell.y += step_y;
            Axis::Y
        } else {
            tmax_z += tdelta_z;
            cell.z += step_z;
            Axis::Z
        };

        if solid(cell) {
            return RayHit::Blocked {
                cell,
                hit_cell: contact_cell(cell, axis, step_x, step_y, step_z),
            };
        }
    }

    RayHit::Miss
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
    Z,
}

/// Stepping state for one axis: (step, t of first boundary, t per cell).
fn axis_init(origin: f32, delta: f32, cell: i32) -> (i32, f32, f32) {
    if delta > 0.0 {
        let boundary = (cell + 1) as f32;
        (1, (boundary - origin) / delta, 1.0 / delta)
    } else if delta < 0.0 {
        let boundary = cell as f32;
        (-1, (boundary - origin) / delta, -1.0 / delta)
    } else {
        // Axis never advances; its boundary is unreachable.
        (0, f32::INFINITY, f32::INFINITY)
    }
}

/// The cell containing the boundary contact point when `cell` was entered
/// across `axis`.  A positive step enters across the low face (contact
/// floors into `cell`); a negative step enters across the high face
/// (contact floors into the open neighbor).
fn contact_cell(cell: CellPos, axis: Axis, step_x: i32, step_y: i32, step_z: i32) -> CellPos {
    let mut hit = cell;
    match axis {
        Axis::X if step_x < 0 => hit.x += 1,
        Axis::Y if step_y < 0 => hit.y += 1,
        Axis::Z if step_z < 0 => hit.z += 1,
        _ => {}
    }
    hit
}
