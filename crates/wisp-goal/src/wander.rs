//! `WanderGoal` — aimless drift while nothing better to do.

use wisp_core::Vec3;
use wisp_world::World;

use crate::ctx::GoalCtx;
use crate::error::{GoalError, GoalResult};
use crate::goal::Goal;

/// Low-priority idle behavior: occasionally pick a nearby point and stroll
/// to it.
///
/// Register this below work goals in the selector; it only ever starts when
/// everything above it declined the tick, and it yields the slot the moment
/// the stroll ends.
pub struct WanderGoal {
    /// Per-tick probability of starting a stroll while idle.
    chance: f64,
    /// Max horizontal offset of a stroll destination, per axis.
    radius: f32,
    /// Movement speed in world units per tick.
    speed:  f32,

    /// Destination of the stroll in progress.
    chosen: Option<Vec3>,
}

impl WanderGoal {
    pub fn new(chance: f64, radius: f32, speed: f32) -> GoalResult<Self> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(GoalError::Config(format!(
                "wander chance {chance} outside [0, 1]"
            )));
        }
        if radius <= 0.0 || speed <= 0.0 {
            return Err(GoalError::Config(format!(
                "wander radius/speed must be positive (got {radius}/{speed})"
            )));
        }
        Ok(Self { chance, radius, speed, chosen: None })
    }
}

impl<W: World> Goal<W> for WanderGoal {
    fn should_start(&mut self, ctx: &mut GoalCtx<'_, W>) -> bool {
        if ctx.me().attack_target.is_some() || ctx.nav.is_moving(ctx.agent) {
            return false;
        }
        ctx.rng.gen_bool(self.chance)
    }

    fn should_continue(&self, ctx: &GoalCtx<'_, W>) -> bool {
        // The stroll is over once the nav order completes (or was cleared).
        self.chosen.is_some() && ctx.nav.is_moving(ctx.agent)
    }

    fn tick(&mut self, ctx: &mut GoalCtx<'_, W>) {
        if self.chosen.is_some() {
            return; // en route, the nav engine does the walking
        }
        let pos = ctx.me().position;
        let dest = Vec3::new(
            pos.x + ctx.rng.gen_range(-self.radius..=self.radius),
            pos.y,
            pos.z + ctx.rng.gen_range(-self.radius..=self.radius),
        );
        self.chosen = Some(dest);
        ctx.nav.set_destination(ctx.agent, dest, self.speed);
    }

    fn reset(&mut self, ctx: &mut GoalCtx<'_, W>) {
        self.chosen = None;
        ctx.nav.clear(ctx.agent);
    }
}
