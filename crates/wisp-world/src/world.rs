//! The `World` trait — every service a goal consumes from its environment.

use uuid::Uuid;
use wisp_core::{CellPos, Face, Vec3};

use crate::handler::TransferHandler;
use crate::raycast::RayHit;

/// The full service surface goals act against.
///
/// A host embedding implements this once; tests use
/// [`GridWorld`][crate::GridWorld].  All lookups that can fail for expected
/// reasons (a container was broken, an entity despawned, a face does not
/// expose a capability) return `Option` — goals treat `None` as a state
/// transition, never as an error.
///
/// # Method pairing
///
/// Capability lookup comes in `has_*` / `transfer_handler_*` pairs.  The
/// `has_*` probes take `&self` so validity checks (which happen every tick)
/// never require a mutable borrow; the mutable lookup is only made at the
/// moment of an actual transfer attempt.
pub trait World {
    // ── Capability lookup ─────────────────────────────────────────────────

    /// `true` if the container at `cell` exposes item transfer through `face`.
    fn has_transfer_handler_at(&self, cell: CellPos, face: Face) -> bool;

    /// The transfer capability of the container at `cell`, through `face`.
    fn transfer_handler_at(&mut self, cell: CellPos, face: Face)
    -> Option<&mut dyn TransferHandler>;

    /// `true` if the living entity `entity` accepts items through `face`.
    fn has_transfer_handler_of(&self, entity: Uuid, face: Face) -> bool;

    /// The transfer capability of entity `entity`, through `face`.
    fn transfer_handler_of(&mut self, entity: Uuid, face: Face)
    -> Option<&mut dyn TransferHandler>;

    // ── Entities ──────────────────────────────────────────────────────────

    /// Position of a live entity, or `None` if it no longer exists.
    fn resolve_entity(&self, entity: Uuid) -> Option<Vec3>;

    // ── Sight ─────────────────────────────────────────────────────────────

    /// Cast a ray over solid collision geometry only (fluids ignored).
    fn raycast(&self, from: Vec3, to: Vec3) -> RayHit;

    /// `true` if `cell` has no collision geometry.
    fn is_open_air(&self, cell: CellPos) -> bool;

    /// `true` if `a` and `b` belong to the same physical structure — e.g.
    /// the two halves of a double chest.  Reflexive.
    fn same_structure(&self, a: CellPos, b: CellPos) -> bool;

    // ── Cosmetics ─────────────────────────────────────────────────────────

    /// `true` if the container at `cell` has a lid to animate.
    fn is_chest_like(&self, cell: CellPos) -> bool;

    /// Fire-and-forget visual "lid opens" signal.  No-op for anything that
    /// is not chest-like.
    fn signal_open(&mut self, cell: CellPos);

    /// Fire-and-forget visual "lid closes" signal.
    fn signal_close(&mut self, cell: CellPos);
}
