//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use wisp_agent::{AgentStoreBuilder, DepositHint};
//! use wisp_core::{CellPos, ItemKind, ItemStack, Vec3};
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(Vec3::new(0.5, 0.0, 0.5))
//!     .holding(ItemStack::new(ItemKind(1), 10))
//!     .hinted(DepositHint::Cell(CellPos::new(5, 0, 0)))
//!     .spawn(Vec3::new(3.5, 0.0, 3.5))
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! assert_eq!(rngs.len(),  2);
//! ```

use uuid::Uuid;
use wisp_core::{Face, ItemStack, Vec3};

use crate::hint::DepositHint;
use crate::store::{Agent, AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Each [`spawn`](Self::spawn) appends one agent; the modifier methods
/// (`holding`, `facing`, `hinted`, `with_uuid`) configure the most recently
/// spawned agent.
pub struct AgentStoreBuilder {
    seed:   u64,
    agents: Vec<Agent>,
}

impl AgentStoreBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, agents: Vec::new() }
    }

    /// Spawn an agent at `position` with default state and a uuid derived
    /// deterministically from the seed and spawn order.
    pub fn spawn(mut self, position: Vec3) -> Self {
        let uuid = Uuid::from_u64_pair(self.seed, self.agents.len() as u64);
        self.agents.push(Agent::new(uuid, position));
        self
    }

    /// Set the held item of the last spawned agent.
    ///
    /// # Panics
    /// Panics if called before any [`spawn`](Self::spawn).
    pub fn holding(mut self, stack: ItemStack) -> Self {
        self.last().held = stack;
        self
    }

    /// Set the transfer facing of the last spawned agent.
    pub fn facing(mut self, face: Face) -> Self {
        self.last().transfer_facing = face;
        self
    }

    /// Set the deposit hint of the last spawned agent.
    pub fn hinted(mut self, hint: DepositHint) -> Self {
        self.last().deposit_hint = hint;
        self
    }

    /// Override the generated uuid of the last spawned agent.
    pub fn with_uuid(mut self, uuid: Uuid) -> Self {
        self.last().uuid = uuid;
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let count = self.agents.len();
        let store = AgentStore::new(self.agents);
        let rngs = AgentRngs::new(count, self.seed);
        (store, rngs)
    }

    fn last(&mut self) -> &mut Agent {
        self.agents
            .last_mut()
            .expect("modifier called before spawn()")
    }
}
