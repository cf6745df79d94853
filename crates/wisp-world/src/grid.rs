//! `GridWorld` — the in-memory `World` implementation used by tests, demos,
//! and any embedding that does not bring its own world.

use rustc_hash::{FxHashMap, FxHashSet};
use uuid::Uuid;
use wisp_core::{CellPos, Face, Vec3};

use crate::error::{WorldError, WorldResult};
use crate::handler::{SlotInventory, TransferHandler};
use crate::raycast::{self, RayHit};
use crate::world::World;

// ── Records ──────────────────────────────────────────────────────────────────

/// A container placed in the world.
#[derive(Clone, Debug)]
pub struct Container {
    pub inventory: SlotInventory,

    /// Containers with a lid receive visual open/close signals.
    pub chest_like: bool,

    /// The other half of a double chest, if any.
    linked: Option<CellPos>,

    /// Count of visual open/close signals received.  Observable side
    /// effects for tests; a rendering host would animate the lid instead.
    pub open_signals:  u32,
    pub close_signals: u32,

    /// Faces that expose the transfer capability.  `None` = all faces.
    accepts_from: Option<Vec<Face>>,
}

impl Container {
    fn accepts(&self, face: Face) -> bool {
        match &self.accepts_from {
            None        => true,
            Some(faces) => faces.contains(&face),
        }
    }
}

/// A living entity that may accept items (a recipient) or merely exist.
#[derive(Clone, Debug)]
pub struct EntityRecord {
    pub position:  Vec3,
    pub inventory: Option<SlotInventory>,
}

// ── GridWorld ────────────────────────────────────────────────────────────────

/// Solid cells, containers, and entities on an unbounded integer grid.
///
/// Container cells are always solid (they have collision geometry); open
/// air is any cell with none.
pub struct GridWorld {
    solid:      FxHashSet<CellPos>,
    containers: FxHashMap<CellPos, Container>,
    entities:   FxHashMap<Uuid, EntityRecord>,
}

impl GridWorld {
    pub fn builder() -> GridWorldBuilder {
        GridWorldBuilder::default()
    }

    // ── Mutation (world changes mid-run) ──────────────────────────────────

    /// Break the container at `cell`: removes inventory, collision, and any
    /// double-chest link from the partner.
    pub fn remove_container(&mut self, cell: CellPos) {
        if let Some(gone) = self.containers.remove(&cell) {
            self.solid.remove(&cell);
            if let Some(partner) = gone.linked
                && let Some(p) = self.containers.get_mut(&partner)
            {
                p.linked = None;
            }
        }
    }

    /// Despawn an entity.
    pub fn remove_entity(&mut self, entity: Uuid) {
        self.entities.remove(&entity);
    }

    /// Move a live entity.  Unknown uuids are ignored.
    pub fn move_entity(&mut self, entity: Uuid, position: Vec3) {
        if let Some(e) = self.entities.get_mut(&entity) {
            e.position = position;
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn container(&self, cell: CellPos) -> Option<&Container> {
        self.containers.get(&cell)
    }

    pub fn entity(&self, entity: Uuid) -> Option<&EntityRecord> {
        self.entities.get(&entity)
    }

    /// All container cells, in no particular order.
    pub fn container_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.containers.keys().copied()
    }
}

impl World for GridWorld {
    fn has_transfer_handler_at(&self, cell: CellPos, face: Face) -> bool {
        self.containers.get(&cell).is_some_and(|c| c.accepts(face))
    }

    fn transfer_handler_at(
        &mut self,
        cell: CellPos,
        face: Face,
    ) -> Option<&mut dyn TransferHandler> {
        self.containers
            .get_mut(&cell)
            .filter(|c| c.accepts(face))
            .map(|c| &mut c.inventory as &mut dyn TransferHandler)
    }

    fn has_transfer_handler_of(&self, entity: Uuid, face: Face) -> bool {
        let _ = face; // entity inventories are face-agnostic
        self.entities
            .get(&entity)
            .is_some_and(|e| e.inventory.is_some())
    }

    fn transfer_handler_of(
        &mut self,
        entity: Uuid,
        _face: Face,
    ) -> Option<&mut dyn TransferHandler> {
        self.entities
            .get_mut(&entity)
            .and_then(|e| e.inventory.as_mut())
            .map(|inv| inv as &mut dyn TransferHandler)
    }

    fn resolve_entity(&self, entity: Uuid) -> Option<Vec3> {
        self.entities.get(&entity).map(|e| e.position)
    }

    fn raycast(&self, from: Vec3, to: Vec3) -> RayHit {
        raycast::cast(from, to, |cell| self.solid.contains(&cell))
    }

    fn is_open_air(&self, cell: CellPos) -> bool {
        !self.solid.contains(&cell)
    }

    fn same_structure(&self, a: CellPos, b: CellPos) -> bool {
        if a == b {
            return true;
        }
        self.containers.get(&a).is_some_and(|c| c.linked == Some(b))
    }

    fn is_chest_like(&self, cell: CellPos) -> bool {
        self.containers.get(&cell).is_some_and(|c| c.chest_like)
    }

    fn signal_open(&mut self, cell: CellPos) {
        if let Some(c) = self.containers.get_mut(&cell)
            && c.chest_like
        {
            c.open_signals += 1;
        }
    }

    fn signal_close(&mut self, cell: CellPos) {
        if let Some(c) = self.containers.get_mut(&cell)
            && c.chest_like
        {
            c.close_signals += 1;
        }
    }
}

// ── GridWorldBuilder ─────────────────────────────────────────────────────────

/// Fluent construction of a [`GridWorld`].
///
/// ```rust,ignore
/// let mut world = GridWorld::builder()
///     .wall(CellPos::new(1, 0, 0))
///     .chest(CellPos::new(4, 0, 0), SlotInventory::new(27, 64))
///     .recipient(courier_id, Vec3::new(8.0, 0.0, 8.0), SlotInventory::new(4, 64))
///     .build();
/// ```
#[derive(Default)]
pub struct GridWorldBuilder {
    solid:      FxHashSet<CellPos>,
    containers: FxHashMap<CellPos, Container>,
    entities:   FxHashMap<Uuid, EntityRecord>,
    links:      Vec<(CellPos, CellPos)>,
}

impl GridWorldBuilder {
    /// A plain solid cell (wall, floor).
    pub fn wall(mut self, cell: CellPos) -> Self {
        self.solid.insert(cell);
        self
    }

    /// A chest-like container (lid animations apply).
    pub fn chest(self, cell: CellPos, inventory: SlotInventory) -> Self {
        self.place_container(cell, inventory, true, None)
    }

    /// A lidless container (hopper, barrel-feed, machine input).
    pub fn bin(self, cell: CellPos, inventory: SlotInventory) -> Self {
        self.place_container(cell, inventory, false, None)
    }

    /// A container that only accepts through the given faces.
    pub fn container_with_faces(
        self,
        cell:      CellPos,
        inventory: SlotInventory,
        faces:     Vec<Face>,
    ) -> Self {
        self.place_container(cell, inventory, false, Some(faces))
    }

    /// Link two already-placed chests into one structure (a double chest).
    pub fn linked(mut self, a: CellPos, b: CellPos) -> Self {
        self.links.push((a, b));
        self
    }

    /// A living entity with no inventory (valid move target, not a recipient).
    pub fn entity(mut self, id: Uuid, position: Vec3) -> Self {
        self.entities.insert(id, EntityRecord { position, inventory: None });
        self
    }

    /// A living entity that accepts items.
    pub fn recipient(mut self, id: Uuid, position: Vec3, inventory: SlotInventory) -> Self {
        self.entities.insert(
            id,
            EntityRecord { position, inventory: Some(inventory) },
        );
        self
    }

    /// Validates double-chest links (both ends must be containers).
    pub fn build(mut self) -> WorldResult<GridWorld> {
        for (a, b) in std::mem::take(&mut self.links) {
            match self.containers.get_mut(&a) {
                Some(c) => c.linked = Some(b),
                None    => return Err(WorldError::NotAContainer(a)),
            }
            match self.containers.get_mut(&b) {
                Some(c) => c.linked = Some(a),
                None    => return Err(WorldError::NotAContainer(b)),
            }
        }
        Ok(GridWorld {
            solid:      self.solid,
            containers: self.containers,
            entities:   self.entities,
        })
    }

    fn place_container(
        mut self,
        cell:         CellPos,
        inventory:    SlotInventory,
        chest_like:   bool,
        accepts_from: Option<Vec<Face>>,
    ) -> Self {
        self.solid.insert(cell);
        self.containers.insert(
            cell,
            Container {
                inventory,
                chest_like,
                linked: None,
                open_signals: 0,
                close_signals: 0,
                accepts_from,
            },
        );
        self
    }
}
