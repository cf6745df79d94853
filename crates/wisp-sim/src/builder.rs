//! Fluent builder for assembling a `Sim` with validated state.

use wisp_agent::{AgentRngs, AgentStore};
use wisp_core::{SimConfig, Tick};
use wisp_goal::GoalSelector;
use wisp_mobility::NavStore;
use wisp_world::World;

use crate::error::{SimError, SimResult};
use crate::sim::Sim;

/// Builder for [`Sim`].
///
/// Selectors can be supplied per agent ([`selectors`][Self::selectors]) or
/// stamped out uniformly ([`uniform_selectors`][Self::uniform_selectors]);
/// either way the count must match the agent store at
/// [`build`][Self::build] time.
pub struct SimBuilder<W: World> {
    config:    SimConfig,
    agents:    AgentStore,
    rngs:      AgentRngs,
    world:     W,
    selectors: Vec<GoalSelector<W>>,
}

impl<W: World> SimBuilder<W> {
    pub fn new(config: SimConfig, agents: AgentStore, rngs: AgentRngs, world: W) -> Self {
        Self {
            config,
            agents,
            rngs,
            world,
            selectors: Vec::new(),
        }
    }

    /// Supply one pre-built selector per agent, in `AgentId` order.
    pub fn selectors(mut self, selectors: Vec<GoalSelector<W>>) -> Self {
        self.selectors = selectors;
        self
    }

    /// Give every agent an identical goal set, built by `make`.
    pub fn uniform_selectors(mut self, make: impl Fn() -> GoalSelector<W>) -> Self {
        self.selectors = (0..self.agents.len()).map(|_| make()).collect();
        self
    }

    /// Validate counts and assemble the simulation at tick zero.
    pub fn build(self) -> SimResult<Sim<W>> {
        let expected = self.agents.len();
        if self.rngs.len() != expected {
            return Err(SimError::AgentCountMismatch {
                expected,
                got: self.rngs.len(),
                what: "rngs",
            });
        }
        if self.selectors.len() != expected {
            return Err(SimError::AgentCountMismatch {
                expected,
                got: self.selectors.len(),
                what: "selectors",
            });
        }
        if self.config.total_ticks == 0 {
            return Err(SimError::Config("total_ticks must be positive".into()));
        }

        Ok(Sim {
            nav: NavStore::new(expected),
            now: Tick::ZERO,
            config: self.config,
            agents: self.agents,
            rngs: self.rngs,
            world: self.world,
            selectors: self.selectors,
        })
    }
}
