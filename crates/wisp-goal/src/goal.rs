//! The `Goal` trait — the main extension point for agent behaviors.

use wisp_world::World;

use crate::ctx::GoalCtx;

/// A pluggable agent behavior.
///
/// Implement this trait to define one thing an agent can decide to do.  The
/// [`GoalSelector`][crate::GoalSelector] arbitrates between a priority-
/// ordered set of goals and drives the lifecycle:
///
/// - [`should_start`][Self::should_start] is polled while the goal is not
///   running.  It takes `&mut self` and a mutable context on purpose:
///   eligibility checks are allowed to refresh internal state (e.g. target
///   resolution) and to clear stale agent hints they discover along the way.
/// - [`should_continue`][Self::should_continue] is polled every tick while
///   running; when it returns `false` the selector calls
///   [`reset`][Self::reset] and the slot opens up again.
/// - [`tick`][Self::tick] runs once per tick while the goal holds the slot.
/// - [`reset`][Self::reset] must be idempotent — the selector may call it
///   on goals that barely started, and a host may call it on despawn.
///
/// All methods complete synchronously within the tick; blocking or
/// long-running work has no place here.
pub trait Goal<W: World> {
    /// `true` if the behavior is eligible to take the agent's goal slot.
    fn should_start(&mut self, ctx: &mut GoalCtx<'_, W>) -> bool;

    /// `true` while the running behavior should keep the slot.
    fn should_continue(&self, ctx: &GoalCtx<'_, W>) -> bool;

    /// One step of work.
    fn tick(&mut self, ctx: &mut GoalCtx<'_, W>);

    /// Cleanup when the selector stops this behavior.
    fn reset(&mut self, ctx: &mut GoalCtx<'_, W>);
}
