//! The resolved deposit destination.

use uuid::Uuid;
use wisp_core::{CellPos, Face, Vec3};
use wisp_world::{TransferHandler, World};

/// Where a deposit behavior is currently headed: a container cell or a
/// living recipient.
///
/// A closed tagged union rather than an open target hierarchy — every
/// operation a behavior needs is a match away, and no third variant can
/// sneak in from outside.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveTarget {
    /// A world cell believed to host an item-accepting container.
    Cell(CellPos),
    /// A specific living recipient.
    Entity(Uuid),
}

impl MoveTarget {
    /// The point the agent walks toward and measures distance against:
    /// the container's cell center, or the entity's current position.
    ///
    /// `None` when an entity target no longer resolves.
    pub fn interaction_point<W: World>(&self, world: &W) -> Option<Vec3> {
        match *self {
            MoveTarget::Cell(cell)  => Some(cell.center()),
            MoveTarget::Entity(id)  => world.resolve_entity(id),
        }
    }

    /// The cell anchoring this target in the grid — the container cell
    /// itself, or the cell the entity currently occupies.
    pub fn anchor_cell<W: World>(&self, world: &W) -> Option<CellPos> {
        match *self {
            MoveTarget::Cell(cell)  => Some(cell),
            MoveTarget::Entity(id)  => world.resolve_entity(id).map(Vec3::cell),
        }
    }

    /// `true` while the underlying container/entity still exists and (for
    /// containers) still exposes transfer through `face`.
    pub fn is_valid<W: World>(&self, world: &W, face: Face) -> bool {
        match *self {
            MoveTarget::Cell(cell)  => world.has_transfer_handler_at(cell, face),
            MoveTarget::Entity(id)  => world.resolve_entity(id).is_some(),
        }
    }

    /// `true` if the target has a lid to animate.  Entity recipients never do.
    pub fn is_chest_like<W: World>(&self, world: &W) -> bool {
        match *self {
            MoveTarget::Cell(cell) => world.is_chest_like(cell),
            MoveTarget::Entity(_)  => false,
        }
    }

    /// The transfer capability, looked up at the moment of use.
    pub fn transfer_handler<'w, W: World>(
        &self,
        world: &'w mut W,
        face:  Face,
    ) -> Option<&'w mut dyn TransferHandler> {
        match *self {
            MoveTarget::Cell(cell) => world.transfer_handler_at(cell, face),
            MoveTarget::Entity(id) => world.transfer_handler_of(id, face),
        }
    }
}
