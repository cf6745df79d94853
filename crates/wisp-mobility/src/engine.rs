//! Straight-line locomotion: one `advance` per tick.

use wisp_agent::AgentStore;
use wisp_core::AgentId;

use crate::store::NavStore;

/// Advances navigating agents toward their destinations.
///
/// Stateless; exists as a type so embeddings can swap in a smarter mover
/// (the store/engine split keeps goal code independent of how motion is
/// integrated).
pub struct NavEngine;

impl NavEngine {
    /// Move every navigating agent one tick's worth toward its destination.
    ///
    /// Agents that reach their destination this tick are clamped onto it,
    /// their order is cleared, and their ids are returned in ascending
    /// order.
    pub fn advance(nav: &mut NavStore, agents: &mut AgentStore) -> Vec<AgentId> {
        let mut arrived = Vec::new();

        for (i, state) in nav.states.iter_mut().enumerate() {
            let Some(dest) = state.destination else {
                continue;
            };
            let agent = AgentId(i as u32);
            let pos = agents.get(agent).position;

            let to_dest = dest.sub(pos);
            let dist = to_dest.length();

            if dist <= state.speed || dist == 0.0 {
                agents.get_mut(agent).position = dest;
                *state = crate::state::NavState::idle();
                arrived.push(agent);
            } else {
                let step = to_dest.scale(state.speed / dist);
                agents.get_mut(agent).position = pos.add(step);
            }
        }

        arrived
    }
}
