//! `GoalSelector` — priority arbitration between one agent's goals.

use tracing::trace;
use wisp_world::World;

use crate::ctx::GoalCtx;
use crate::goal::Goal;

/// Runs at most one goal per tick, preferring lower priority numbers.
///
/// Each agent owns one selector.  Per tick:
///
/// 1. A goal with a strictly more important (lower) priority than the
///    running one may preempt it.
/// 2. Otherwise the running goal continues while its
///    [`should_continue`][Goal::should_continue] holds; when it stops, it
///    is [`reset`][Goal::reset].
/// 3. With the slot free, the most important goal whose
///    [`should_start`][Goal::should_start] passes takes it.
///
/// Goals with equal priority are tried in registration order.
pub struct GoalSelector<W: World> {
    goals:  Vec<(u8, Box<dyn Goal<W>>)>,
    active: Option<usize>,
}

impl<W: World> GoalSelector<W> {
    pub fn new() -> Self {
        Self { goals: Vec::new(), active: None }
    }

    /// Register `goal` at `priority` (lower = more important).
    pub fn with_goal(mut self, priority: u8, goal: impl Goal<W> + 'static) -> Self {
        self.add_goal(priority, goal);
        self
    }

    /// Register `goal` at `priority` (lower = more important).
    pub fn add_goal(&mut self, priority: u8, goal: impl Goal<W> + 'static) {
        // Stable insert keeps registration order within a priority class.
        let at = self.goals.partition_point(|(p, _)| *p <= priority);
        self.goals.insert(at, (priority, Box::new(goal)));
        // Indices shifted; the running goal (if any) must be re-found.
        if let Some(active) = self.active
            && active >= at
        {
            self.active = Some(active + 1);
        }
    }

    /// Priority of the running goal, if any.
    pub fn active_priority(&self) -> Option<u8> {
        self.active.map(|i| self.goals[i].0)
    }

    /// Drive one tick of arbitration and execution.
    pub fn tick(&mut self, ctx: &mut GoalCtx<'_, W>) {
        // ── ① Preemption ──────────────────────────────────────────────────
        if let Some(active) = self.active {
            let active_priority = self.goals[active].0;
            for i in 0..self.goals.len() {
                if self.goals[i].0 >= active_priority {
                    break; // sorted — nothing more important remains
                }
                if self.goals[i].1.should_start(ctx) {
                    trace!(agent = %ctx.agent, from = active_priority, to = self.goals[i].0,
                           "goal preempted");
                    self.goals[active].1.reset(ctx);
                    self.active = Some(i);
                    self.goals[i].1.tick(ctx);
                    return;
                }
            }
        }

        // ── ② Continuation ────────────────────────────────────────────────
        if let Some(active) = self.active {
            if self.goals[active].1.should_continue(ctx) {
                self.goals[active].1.tick(ctx);
                return;
            }
            self.goals[active].1.reset(ctx);
            self.active = None;
        }

        // ── ③ Start the most important eligible goal ──────────────────────
        for i in 0..self.goals.len() {
            if self.goals[i].1.should_start(ctx) {
                self.active = Some(i);
                self.goals[i].1.tick(ctx);
                return;
            }
        }
    }

    /// Stop the running goal (if any) and reset it.  Used by hosts on
    /// despawn or when an agent is forcibly re-tasked.
    pub fn stop(&mut self, ctx: &mut GoalCtx<'_, W>) {
        if let Some(active) = self.active.take() {
            self.goals[active].1.reset(ctx);
        }
    }
}

impl<W: World> Default for GoalSelector<W> {
    fn default() -> Self {
        Self::new()
    }
}
