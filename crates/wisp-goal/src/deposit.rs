//! `DepositGoal` — carry the held item to a container or recipient and
//! transfer it.

use tracing::{debug, trace};
use wisp_agent::DepositHint;
use wisp_core::{CellPos, Face, Heading, ItemStack, Tick, Vec3};
use wisp_world::{RayHit, World};

use crate::ctx::GoalCtx;
use crate::goal::Goal;
use crate::pause::PauseTimer;
use crate::target::MoveTarget;

/// Range at which the agent stops approaching and attempts the transfer.
pub const ACCESS_RANGE: f32 = 1.86;

/// Upper bound of the band in which a chest lid is opened visually while
/// the agent is still closing in.
pub const PRE_OPEN_RANGE: f32 = 2.5;

/// Cooldown after a partial insertion before the target is retried.
pub const RETRY_PAUSE_TICKS: u64 = 2000;

const DEFAULT_SPEED: f32 = 0.25;

/// Owned result of one insertion attempt (see `attempt_transfer`).
enum Attempt {
    MissingHandler,
    Rejected,
    Accepted { simulated: ItemStack, leftover: ItemStack },
}

/// Drives an agent holding an item toward its deposit hint and inserts the
/// item on arrival.
///
/// All transient state — the resolved [`MoveTarget`] and the retry pause —
/// lives here, not on the agent.  The agent owns only the durable pieces:
/// the held stack and the [`DepositHint`], which this goal clears when the
/// hinted destination stops existing or stops accepting items.
///
/// # Failure policy
///
/// - Capability missing at transfer time (the world changed between
///   resolution and arrival): drop the target silently and re-resolve.
/// - Partial acceptance (the container is nearly full): commit what fits,
///   keep the target, and pause for [`RETRY_PAUSE_TICKS`].
/// - Target destroyed: re-resolve; once the hint is cleared the
///   continuation predicate ends the behavior naturally.
pub struct DepositGoal {
    target: Option<MoveTarget>,
    pause:  PauseTimer,
    speed:  f32,
}

impl DepositGoal {
    pub fn new() -> Self {
        Self {
            target: None,
            pause:  PauseTimer::new(),
            speed:  DEFAULT_SPEED,
        }
    }

    /// Override the approach speed (world units per tick).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// The currently resolved target, if any.
    pub fn target(&self) -> Option<MoveTarget> {
        self.target
    }

    /// `true` while the goal is in its retry cooldown.
    pub fn is_paused(&self, now: Tick) -> bool {
        self.pause.is_paused(now)
    }

    // ── Target resolution ─────────────────────────────────────────────────

    /// Re-read the agent's deposit hint and resolve it into a target.
    ///
    /// A hint whose destination no longer accepts items is cleared on the
    /// agent — that is the signal to whoever issued the order that this
    /// delivery cannot complete, and it lets the behavior wind down instead
    /// of retrying forever.
    fn resolve_target<W: World>(&mut self, ctx: &mut GoalCtx<'_, W>) {
        self.target = None;
        let face = ctx.me().transfer_facing;

        match ctx.me().deposit_hint {
            DepositHint::None => {}
            DepositHint::Cell(cell) => {
                if ctx.world.has_transfer_handler_at(cell, face) {
                    self.target = Some(MoveTarget::Cell(cell));
                } else {
                    ctx.me_mut().deposit_hint = DepositHint::None;
                }
            }
            DepositHint::Entity(id) => {
                if ctx.world.resolve_entity(id).is_some() {
                    self.target = Some(MoveTarget::Entity(id));
                } else {
                    ctx.me_mut().deposit_hint = DepositHint::None;
                }
            }
        }
    }

    // ── Sight ─────────────────────────────────────────────────────────────

    /// Line of sight from the agent to the target's interaction point.
    ///
    /// Solid collision geometry only.  Sight holds on a clean miss, when
    /// either cell reported at the obstruction is open air, or when the
    /// obstruction is part of the target's own structure (a double chest's
    /// far half must not occlude its near half).
    fn can_see<W: World>(ctx: &GoalCtx<'_, W>, point: Vec3, anchor: CellPos) -> bool {
        match ctx.world.raycast(ctx.me().position, point) {
            RayHit::Miss => true,
            RayHit::Blocked { cell, hit_cell } => {
                ctx.world.is_open_air(cell)
                    || ctx.world.is_open_air(hit_cell)
                    || ctx.world.same_structure(cell, anchor)
            }
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Where to walk: one cell out from the target, on the side the agent
    /// is approaching from, so the agent ends up facing the target.
    fn approach_point(agent_pos: Vec3, anchor: CellPos) -> Vec3 {
        let toward = Heading::from_yaw(agent_pos.yaw_to(anchor.center()));
        anchor.step(toward.opposite()).center()
    }

    // ── Transfer ──────────────────────────────────────────────────────────

    fn attempt_transfer<W: World>(
        &mut self,
        ctx:    &mut GoalCtx<'_, W>,
        target: MoveTarget,
        anchor: CellPos,
        face:   Face,
    ) {
        let held = ctx.me().held;
        let chest_like = target.is_chest_like(ctx.world);

        // The handler borrow must end before any other ctx access, so the
        // attempt result is collected into an owning value first.
        let attempt = match target.transfer_handler(ctx.world, face) {
            None => Attempt::MissingHandler,
            Some(handler) => {
                let simulated = handler.simulate_insert(&held);
                if simulated.count == held.count {
                    Attempt::Rejected
                } else {
                    Attempt::Accepted {
                        simulated,
                        leftover: handler.commit_insert(&held),
                    }
                }
            }
        };

        match attempt {
            // The capability vanished after resolution — the world changed
            // between then and arrival.  Drop the target and re-resolve.
            Attempt::MissingHandler => {
                self.target = None;
                self.resolve_target(ctx);
                return;
            }
            // Nothing would be accepted; keep waiting at the target.
            Attempt::Rejected => {}
            Attempt::Accepted { simulated, leftover } => {
                ctx.me_mut().held = leftover;
                if simulated.is_empty() {
                    debug!(agent = %ctx.agent, ?target, "deposited full stack");
                    self.clear_transient(ctx);
                } else {
                    debug!(
                        agent = %ctx.agent,
                        ?target,
                        remaining = leftover.count,
                        "partial deposit, pausing"
                    );
                    self.pause.pause(ctx.now, RETRY_PAUSE_TICKS);
                }
            }
        }

        // Lid down after the attempt, whatever came of it.
        if chest_like {
            ctx.world.signal_close(anchor);
        }
    }

    /// Full-success cleanup: the behavior ends with nothing pending.
    fn clear_transient<W: World>(&mut self, ctx: &mut GoalCtx<'_, W>) {
        self.target = None;
        self.pause.clear();
        ctx.nav.clear(ctx.agent);
    }
}

impl Default for DepositGoal {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: World> Goal<W> for DepositGoal {
    fn should_start(&mut self, ctx: &mut GoalCtx<'_, W>) -> bool {
        // Combat suppresses hauling outright.
        if ctx.me().attack_target.is_some() {
            return false;
        }
        // Nothing in hand, nothing to deliver.
        if ctx.me().held.is_empty() {
            return false;
        }
        // Resolve even while paused so stale hints get cleared promptly.
        self.resolve_target(ctx);
        !self.pause.is_paused(ctx.now) && self.target.is_some()
    }

    fn should_continue(&self, ctx: &GoalCtx<'_, W>) -> bool {
        !self.pause.is_paused(ctx.now) && self.target.is_some() && !ctx.me().held.is_empty()
    }

    fn tick(&mut self, ctx: &mut GoalCtx<'_, W>) {
        let Some(target) = self.target else {
            return;
        };
        let face = ctx.me().transfer_facing;

        if !target.is_valid(ctx.world, face) {
            // Container broken or recipient despawned: recheck the hints.
            self.resolve_target(ctx);
            return;
        }
        let (Some(point), Some(anchor)) = (
            target.interaction_point(ctx.world),
            target.anchor_cell(ctx.world),
        ) else {
            self.resolve_target(ctx);
            return;
        };

        let pos = ctx.me().position;
        let distance = pos.distance(point);

        // Briefly before reaching a chest, open its lid.
        if (ACCESS_RANGE..PRE_OPEN_RANGE).contains(&distance)
            && target.is_chest_like(ctx.world)
            && Self::can_see(ctx, point, anchor)
        {
            ctx.world.signal_open(anchor);
        }

        if distance < ACCESS_RANGE {
            // Hold still while transferring.
            ctx.nav.clear(ctx.agent);
        } else {
            let approach = Self::approach_point(pos, anchor);
            trace!(agent = %ctx.agent, %approach, "approaching deposit target");
            ctx.nav.set_destination(ctx.agent, approach, self.speed);
        }

        if distance < ACCESS_RANGE && Self::can_see(ctx, point, anchor) {
            self.attempt_transfer(ctx, target, anchor, face);
        }
    }

    fn reset(&mut self, ctx: &mut GoalCtx<'_, W>) {
        ctx.nav.clear(ctx.agent);
        self.resolve_target(ctx);
    }
}
