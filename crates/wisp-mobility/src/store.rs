//! The `NavStore` — per-agent navigation orders.

use wisp_core::{AgentId, Vec3};

use crate::state::NavState;

/// Movement orders for every agent, indexed by [`AgentId`].
///
/// This is the locomotion surface goals write to: `set_destination` is
/// "move toward", `clear` is "halt".  The store holds orders only; actual
/// position updates happen in [`NavEngine::advance`][crate::NavEngine::advance].
pub struct NavStore {
    pub states: Vec<NavState>,
}

impl NavStore {
    /// Create a store with all agents idle.
    pub fn new(agent_count: usize) -> Self {
        Self {
            states: vec![NavState::idle(); agent_count],
        }
    }

    /// Order `agent` to move toward `point` at `speed` units per tick.
    #[inline]
    pub fn set_destination(&mut self, agent: AgentId, point: Vec3, speed: f32) {
        self.states[agent.index()] = NavState {
            destination: Some(point),
            speed,
        };
    }

    /// Halt `agent` (clears any pending order).
    #[inline]
    pub fn clear(&mut self, agent: AgentId) {
        self.states[agent.index()] = NavState::idle();
    }

    /// `true` if `agent` currently has a movement order.
    #[inline]
    pub fn is_moving(&self, agent: AgentId) -> bool {
        self.states[agent.index()].is_moving()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
