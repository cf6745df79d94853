//! The per-tick context handed to every goal callback.

use wisp_agent::{Agent, AgentStore};
use wisp_core::{AgentId, AgentRng, Tick};
use wisp_mobility::NavStore;
use wisp_world::World;

/// Everything one agent's goals may read or mutate during one tick.
///
/// Built by the simulation loop per agent per tick from disjoint borrows of
/// its own fields.  Goals mutate the world directly (capability commits,
/// visual signals) rather than emitting intents: the tick loop is
/// single-threaded and sequential per agent, so direct mutation is safe and
/// keeps the simulate-then-commit transfer protocol in one call frame.
pub struct GoalCtx<'a, W: World> {
    /// Current simulation tick.
    pub now: Tick,

    /// The agent whose goals are running.
    pub agent: AgentId,

    /// All agents.  Goals normally touch only `self.agent`'s record via
    /// [`me`][Self::me]/[`me_mut`][Self::me_mut].
    pub agents: &'a mut AgentStore,

    /// Movement orders (`set_destination` to steer, `clear` to halt).
    pub nav: &'a mut NavStore,

    /// The world: capability lookup, sight, entities, cosmetic signals.
    pub world: &'a mut W,

    /// This agent's deterministic RNG.
    pub rng: &'a mut AgentRng,
}

impl<'a, W: World> GoalCtx<'a, W> {
    /// This agent's record.
    #[inline]
    pub fn me(&self) -> &Agent {
        self.agents.get(self.agent)
    }

    /// This agent's record, mutably.
    #[inline]
    pub fn me_mut(&mut self) -> &mut Agent {
        self.agents.get_mut(self.agent)
    }
}
