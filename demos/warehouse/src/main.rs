//! warehouse — smallest demo for the wisp hauling-agent framework.
//!
//! Four couriers spawn in a yard holding ore, with a row of chests along
//! the north wall (one of them nearly full) and a quartermaster entity
//! standing in the middle.  Each courier is hinted at its nearest deposit
//! site, hauls its stack over, and drifts idly once its hands are empty.

use anyhow::Result;
use uuid::Uuid;

use wisp_agent::{AgentStoreBuilder, DepositHint};
use wisp_core::{AgentId, CellPos, ItemKind, ItemStack, SimConfig, Tick, Vec3};
use wisp_goal::{DepositGoal, GoalSelector, WanderGoal};
use wisp_sim::{SimBuilder, SimObserver};
use wisp_world::{ContainerIndex, GridWorld, SlotInventory};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 400;

const ORE: ItemKind = ItemKind(1);

const COURIER_SPEED: f32 = 0.25;
const WANDER_CHANCE: f64 = 0.05;
const WANDER_RADIUS: f32 = 3.0;

// ── Observer ──────────────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, arrivals: usize) {
        if tick.0 % self.interval == 0 {
            println!("{tick}: {arrivals} arrivals this tick");
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("done at {final_tick}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The yard: chests along the north wall (z = 0), one nearly full.
    let chests = [
        CellPos::new(2, 0, 0),
        CellPos::new(8, 0, 0),
        CellPos::new(14, 0, 0),
    ];
    let quartermaster = Uuid::new_v4();

    let world = GridWorld::builder()
        .chest(chests[0], SlotInventory::new(27, 64))
        .chest(chests[1], SlotInventory::with_free_space(6))
        .chest(chests[2], SlotInventory::new(27, 64))
        .recipient(
            quartermaster,
            Vec3::new(8.5, 0.5, 10.5),
            SlotInventory::new(4, 64),
        )
        .build()?;

    // Hint each courier at the chest closest to its spawn point.
    let index = ContainerIndex::build(world.container_cells());
    let spawns = [
        Vec3::new(1.5, 0.5, 8.5),
        Vec3::new(7.5, 0.5, 8.5),
        Vec3::new(13.5, 0.5, 8.5),
    ];

    let mut builder = AgentStoreBuilder::new(SEED);
    for spawn in spawns {
        let nearest = index
            .nearest(spawn)
            .expect("the yard has chests");
        builder = builder
            .spawn(spawn)
            .holding(ItemStack::new(ORE, 24))
            .hinted(DepositHint::Cell(nearest));
    }
    // The fourth courier delivers to the quartermaster directly.
    builder = builder
        .spawn(Vec3::new(8.5, 0.5, 14.5))
        .holding(ItemStack::new(ORE, 8))
        .hinted(DepositHint::Entity(quartermaster));
    let (agents, rngs) = builder.build();

    let mut sim = SimBuilder::new(SimConfig::new(TOTAL_TICKS, SEED), agents, rngs, world)
        .uniform_selectors(|| {
            GoalSelector::new()
                .with_goal(1, DepositGoal::new().with_speed(COURIER_SPEED))
                .with_goal(
                    2,
                    WanderGoal::new(WANDER_CHANCE, WANDER_RADIUS, COURIER_SPEED)
                        .expect("wander config is static"),
                )
        })
        .build()?;

    sim.run(&mut ProgressPrinter { interval: 50 });

    // ── Report ────────────────────────────────────────────────────────────
    println!();
    for (i, cell) in chests.iter().enumerate() {
        let container = sim
            .world
            .container(*cell)
            .expect("chests are never broken in this demo");
        println!(
            "chest {i} at {cell}: {} ore ({} opens, {} closes)",
            container.inventory.total_of(ORE),
            container.open_signals,
            container.close_signals,
        );
    }
    if let Some(qm) = sim.world.entity(quartermaster) {
        let received = qm
            .inventory
            .as_ref()
            .map(|inv| inv.total_of(ORE))
            .unwrap_or(0);
        println!("quartermaster: {received} ore received");
    }
    for agent in 0..sim.agents.len() as u32 {
        let a = sim.agents.get(AgentId(agent));
        println!(
            "courier {agent}: holding {} at {}",
            a.held, a.position,
        );
    }

    Ok(())
}
