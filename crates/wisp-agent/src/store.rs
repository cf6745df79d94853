//! Core agent storage: `AgentStore` (per-agent records) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The goal phase needs `&mut AgentRngs` (exclusive access to each agent's
//! RNG) alongside `&mut AgentStore` inside one context struct.  Keeping the
//! RNGs out of the store lets the simulation borrow both as separate fields
//! without fighting the borrow checker, and mirrors how the rest of the
//! framework splits read-mostly state from always-mutable state.

use rustc_hash::FxHashMap;
use uuid::Uuid;
use wisp_core::{AgentId, AgentRng, Face, ItemStack, Vec3};

use crate::hint::DepositHint;

// ── Agent ────────────────────────────────────────────────────────────────────

/// One autonomous agent.
///
/// Everything the deposit behavior reads or writes lives here; transient
/// behavior state (the resolved move target, the pause deadline) belongs to
/// the goal instance, not the agent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Stable identity, used by entity hints and host lookups.
    pub uuid: Uuid,

    /// Continuous world position.
    pub position: Vec3,

    /// The face through which this agent accesses transfer capabilities.
    pub transfer_facing: Face,

    /// The held item (possibly empty).
    pub held: ItemStack,

    /// Combat target.  While set, work behaviors stand down.
    pub attack_target: Option<Uuid>,

    /// Where to deliver the held item.
    pub deposit_hint: DepositHint,
}

impl Agent {
    pub fn new(uuid: Uuid, position: Vec3) -> Self {
        Self {
            uuid,
            position,
            transfer_facing: Face::default(),
            held: ItemStack::EMPTY,
            attack_target: None,
            deposit_hint: DepositHint::None,
        }
    }
}

// ── AgentStore ───────────────────────────────────────────────────────────────

/// All agents, indexed by [`AgentId`].
///
/// IDs are dense: `AgentId(i)` is the agent at index `i`, and the store
/// never removes agents mid-run (despawned *world* entities are a world
/// concern; the agent population is fixed per simulation).
pub struct AgentStore {
    agents:  Vec<Agent>,
    by_uuid: FxHashMap<Uuid, AgentId>,
}

impl AgentStore {
    pub(crate) fn new(agents: Vec<Agent>) -> Self {
        let by_uuid = agents
            .iter()
            .enumerate()
            .map(|(i, a)| (a.uuid, AgentId(i as u32)))
            .collect();
        Self { agents, by_uuid }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }

    /// Look an agent up by its stable uuid.
    pub fn by_uuid(&self, uuid: Uuid) -> Option<AgentId> {
        self.by_uuid.get(&uuid).copied()
    }
}

// ── AgentRngs ────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] for the
/// split-borrow pattern described in the module docs.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
