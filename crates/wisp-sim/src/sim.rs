//! The `Sim` struct and its tick loop.

use tracing::{debug, trace};
use wisp_agent::{AgentRngs, AgentStore};
use wisp_core::{AgentId, SimConfig, Tick};
use wisp_goal::{GoalCtx, GoalSelector};
use wisp_mobility::{NavEngine, NavStore};
use wisp_world::World;

use crate::SimObserver;

/// The main simulation runner.
///
/// Holds all simulation state and drives the two-phase tick loop:
///
/// 1. **Goal phase**: per agent in ascending [`AgentId`] order (the fixed
///    order is what makes runs deterministic), build a [`GoalCtx`] from
///    disjoint borrows and let the agent's [`GoalSelector`] arbitrate.
/// 2. **Movement phase**: [`NavEngine::advance`] integrates all pending
///    movement orders.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<W: World> {
    /// Global configuration (total ticks, seed).
    pub config: SimConfig,

    /// The current tick.
    pub now: Tick,

    /// All agent state.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Per-agent movement orders.
    pub nav: NavStore,

    /// The world agents act against.
    pub world: W,

    /// One goal selector per agent, indexed by `AgentId`.
    pub selectors: Vec<GoalSelector<W>>,
}

impl<W: World> Sim<W> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.now < self.config.end_tick() {
            observer.on_tick_start(self.now);
            let arrivals = self.process_tick();
            observer.on_tick_end(self.now, arrivals);
            self.now = self.now.offset(1);
        }
        debug!(final_tick = %self.now, "simulation complete");
        observer.on_sim_end(self.now);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.now);
            let arrivals = self.process_tick();
            observer.on_tick_end(self.now, arrivals);
            self.now = self.now.offset(1);
        }
    }

    /// Number of agents currently navigating somewhere.
    pub fn moving_count(&self) -> usize {
        (0..self.agents.len() as u32)
            .filter(|&i| self.nav.is_moving(AgentId(i)))
            .count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// One tick: goal phase then movement phase.  Returns the number of
    /// agents that arrived at a destination this tick.
    fn process_tick(&mut self) -> usize {
        let now = self.now;

        // ── Phase ①: goals ────────────────────────────────────────────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access:
        // the selector being ticked is never reachable through the ctx.
        let Self { agents, rngs, nav, world, selectors, .. } = self;

        for idx in 0..agents.len() {
            let agent = AgentId(idx as u32);
            let mut ctx = GoalCtx {
                now,
                agent,
                agents: &mut *agents,
                nav:    &mut *nav,
                world:  &mut *world,
                rng:    rngs.get_mut(agent),
            };
            selectors[idx].tick(&mut ctx);
        }

        // ── Phase ②: movement ─────────────────────────────────────────────
        let arrived = NavEngine::advance(nav, agents);
        if !arrived.is_empty() {
            trace!(%now, arrivals = arrived.len(), "agents arrived");
        }
        arrived.len()
    }
}
