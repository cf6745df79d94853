//! `wisp-sim` — tick loop orchestrator for the wisp framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Goals    — per agent in ascending AgentId order, the agent's
//!                GoalSelector arbitrates and runs at most one goal.
//!                Goals mutate the agent, the nav store, and the world
//!                directly; resolution always precedes transfer within
//!                a goal's tick.
//!   ② Movement — NavEngine advances every navigating agent and clamps
//!                arrivals.
//! ```
//!
//! Everything is single-threaded and synchronous: a goal's capability
//! lookups, sight checks, and simulate-then-commit transfers all complete
//! inside its `tick` call, so the only interleaving between agents is at
//! whole-turn granularity.  That per-turn interleaving is the one accepted
//! race in the design — two agents can target the same container, and the
//! second one's commit may accept less than its simulation saw a turn
//! earlier.  The deposit goal's pause/retry policy absorbs exactly that.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let (agents, rngs) = AgentStoreBuilder::new(42)
//!     .spawn(Vec3::new(0.5, 0.5, 0.5))
//!     .holding(ItemStack::new(ORE, 10))
//!     .hinted(DepositHint::Cell(chest))
//!     .build();
//! let mut sim = SimBuilder::new(SimConfig::new(200, 42), agents, rngs, world)
//!     .uniform_selectors(|| GoalSelector::new().with_goal(1, DepositGoal::new()))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
