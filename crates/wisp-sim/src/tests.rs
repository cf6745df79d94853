//! Unit and integration tests for wisp-sim.

use wisp_agent::{AgentStoreBuilder, DepositHint};
use wisp_core::{AgentId, CellPos, ItemKind, ItemStack, SimConfig, Tick, Vec3};
use wisp_goal::{DepositGoal, GoalSelector, WanderGoal};
use wisp_world::{GridWorld, SlotInventory};

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver};

const ORE: ItemKind = ItemKind(1);

fn chest_world(chest: CellPos, inventory: SlotInventory) -> GridWorld {
    GridWorld::builder()
        .chest(chest, inventory)
        .build()
        .expect("test world")
}

fn deposit_sim(
    chest:     CellPos,
    inventory: SlotInventory,
    start:     Vec3,
    held:      ItemStack,
) -> Sim<GridWorld> {
    let (agents, rngs) = AgentStoreBuilder::new(42)
        .spawn(start)
        .holding(held)
        .hinted(DepositHint::Cell(chest))
        .build();
    SimBuilder::new(SimConfig::new(200, 42), agents, rngs, chest_world(chest, inventory))
        .uniform_selectors(|| GoalSelector::new().with_goal(1, DepositGoal::new()))
        .build()
        .expect("sim builds")
}

// ── Builder validation ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn selector_count_must_match() {
        let (agents, rngs) = AgentStoreBuilder::new(1)
            .spawn(Vec3::default())
            .spawn(Vec3::default())
            .build();
        let world = chest_world(CellPos::new(5, 0, 0), SlotInventory::new(1, 64));
        let result = SimBuilder::new(SimConfig::new(10, 1), agents, rngs, world)
            .selectors(vec![GoalSelector::new()])
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 2, got: 1, what: "selectors" })
        ));
    }

    #[test]
    fn zero_ticks_rejected() {
        let (agents, rngs) = AgentStoreBuilder::new(1).spawn(Vec3::default()).build();
        let world = chest_world(CellPos::new(5, 0, 0), SlotInventory::new(1, 64));
        let result = SimBuilder::new(SimConfig::new(0, 1), agents, rngs, world)
            .uniform_selectors(GoalSelector::new)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn builds_at_tick_zero() {
        let sim = deposit_sim(
            CellPos::new(5, 0, 0),
            SlotInventory::new(1, 64),
            Vec3::new(0.5, 0.5, 0.5),
            ItemStack::new(ORE, 10),
        );
        assert_eq!(sim.now, Tick::ZERO);
        assert_eq!(sim.agents.len(), 1);
        assert_eq!(sim.nav.len(), 1);
        assert_eq!(sim.moving_count(), 0);
    }
}

// ── End-to-end hauling ───────────────────────────────────────────────────────

#[cfg(test)]
mod hauling {
    use super::*;

    /// The full journey: walk up to the chest, open the lid on approach,
    /// deposit everything, close the lid.
    #[test]
    fn walk_and_deposit() {
        let chest = CellPos::new(6, 0, 0);
        let mut sim = deposit_sim(
            chest,
            SlotInventory::new(2, 64),
            Vec3::new(0.5, 0.5, 0.5),
            ItemStack::new(ORE, 10),
        );

        sim.run_ticks(60, &mut NoopObserver);

        let agent = sim.agents.get(AgentId(0));
        assert!(agent.held.is_empty());
        let container = sim.world.container(chest).expect("chest still there");
        assert_eq!(container.inventory.total_of(ORE), 10);
        // The lid opened on approach and closed after the transfer.
        assert!(container.open_signals >= 1);
        assert!(container.close_signals >= 1);
        // The hint stays: the destination is still a valid deposit site.
        assert_eq!(agent.deposit_hint, DepositHint::Cell(chest));
        // The agent stopped next to the chest, within reach.
        assert!(agent.position.distance(chest.center()) < 2.0);
    }

    /// A nearly full chest: the agent delivers what fits, then sits out the
    /// retry pause with the remainder still in hand.
    #[test]
    fn partial_delivery_then_pause() {
        let chest = CellPos::new(6, 0, 0);
        let mut sim = deposit_sim(
            chest,
            SlotInventory::with_free_space(6),
            Vec3::new(0.5, 0.5, 0.5),
            ItemStack::new(ORE, 10),
        );

        sim.run_ticks(60, &mut NoopObserver);

        let agent = sim.agents.get(AgentId(0));
        assert_eq!(agent.held, ItemStack::new(ORE, 4));
        assert_eq!(
            sim.world.container(chest).unwrap().inventory.total_of(ORE),
            6
        );
        // Still hinted at the same chest for the post-pause retry.
        assert_eq!(agent.deposit_hint, DepositHint::Cell(chest));
    }

    /// Two agents race for the last space in one chest.  The loser keeps
    /// its remainder — the simulate-then-commit race resolves per turn, and
    /// nothing is lost or duplicated.
    #[test]
    fn two_agents_one_nearly_full_chest() {
        let chest = CellPos::new(4, 0, 2);
        let world = chest_world(chest, SlotInventory::with_free_space(15));
        let (agents, rngs) = AgentStoreBuilder::new(7)
            .spawn(Vec3::new(0.5, 0.5, 2.5))
            .holding(ItemStack::new(ORE, 10))
            .hinted(DepositHint::Cell(chest))
            .spawn(Vec3::new(8.5, 0.5, 2.5))
            .holding(ItemStack::new(ORE, 10))
            .hinted(DepositHint::Cell(chest))
            .build();
        let mut sim = SimBuilder::new(SimConfig::new(200, 7), agents, rngs, world)
            .uniform_selectors(|| GoalSelector::new().with_goal(1, DepositGoal::new()))
            .build()
            .expect("sim builds");

        sim.run_ticks(80, &mut NoopObserver);

        let held_total: u32 = (0..2)
            .map(|i| sim.agents.get(AgentId(i)).held.count)
            .sum();
        let stored = sim.world.container(chest).unwrap().inventory.total_of(ORE);
        // Conservation: 20 units split between the chest and the loser's hand.
        assert_eq!(stored, 15);
        assert_eq!(held_total, 5);
    }

    /// Same seed, same world → identical trajectories, even with random
    /// wandering in the mix.
    #[test]
    fn deterministic_with_wander() {
        let run = || {
            let world = GridWorld::builder().build().expect("open world");
            let (agents, rngs) = AgentStoreBuilder::new(99)
                .spawn(Vec3::new(0.5, 0.5, 0.5))
                .spawn(Vec3::new(4.5, 0.5, 4.5))
                .build();
            let mut sim = SimBuilder::new(SimConfig::new(50, 99), agents, rngs, world)
                .uniform_selectors(|| {
                    GoalSelector::new()
                        .with_goal(2, WanderGoal::new(0.2, 5.0, 0.3).expect("config"))
                })
                .build()
                .expect("sim builds");
            sim.run(&mut NoopObserver);
            (
                sim.agents.get(AgentId(0)).position,
                sim.agents.get(AgentId(1)).position,
            )
        };

        assert_eq!(run(), run());
    }
}

// ── Observer ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts:   u64,
        ends:     u64,
        arrivals: usize,
        finished: Option<Tick>,
    }

    impl SimObserver for CountingObserver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _tick: Tick, arrivals: usize) {
            self.ends += 1;
            self.arrivals += arrivals;
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn hooks_fire_once_per_tick() {
        let world = GridWorld::builder().build().expect("open world");
        let (agents, rngs) = AgentStoreBuilder::new(5).spawn(Vec3::new(0.5, 0.5, 0.5)).build();
        let mut sim = SimBuilder::new(SimConfig::new(30, 5), agents, rngs, world)
            .uniform_selectors(|| {
                // Always-strolling agent: every stroll ends in an arrival.
                GoalSelector::new().with_goal(2, WanderGoal::new(1.0, 2.0, 0.5).expect("config"))
            })
            .build()
            .expect("sim builds");

        let mut obs = CountingObserver::default();
        sim.run(&mut obs);

        assert_eq!(obs.starts, 30);
        assert_eq!(obs.ends, 30);
        assert_eq!(obs.finished, Some(Tick(30)));
        // Strolls complete within a handful of ticks each.
        assert!(obs.arrivals >= 1);
        assert_eq!(sim.now, Tick(30));
    }
}
