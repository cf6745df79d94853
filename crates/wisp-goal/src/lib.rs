//! `wisp-goal` — agent behaviors and their lifecycle machinery.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`goal`]     | `Goal` trait — the four-phase behavior lifecycle              |
//! | [`ctx`]      | `GoalCtx<'a, W>` — everything a goal may touch during a tick  |
//! | [`target`]   | `MoveTarget` — resolved deposit destination                   |
//! | [`pause`]    | `PauseTimer` — cooldown gating for retry-style behaviors      |
//! | [`deposit`]  | `DepositGoal` — carry the held item to a container/recipient  |
//! | [`wander`]   | `WanderGoal` — low-priority idle drift                        |
//! | [`selector`] | `GoalSelector` — priority arbitration between goals           |
//! | [`error`]    | `GoalError`, `GoalResult<T>`                                  |
//!
//! # Lifecycle
//!
//! A behavior is four pure-ish functions over an explicit state struct, not
//! a framework callback soup:
//!
//! 1. `should_start` — eligibility.  May refresh/clear stale agent hints.
//! 2. `should_continue` — whether the running behavior keeps the slot.
//! 3. `tick` — one step of work.  All host access goes through [`GoalCtx`].
//! 4. `reset` — cleanup when the selector stops the behavior (idempotent).
//!
//! The [`GoalSelector`] drives these once per simulation tick per agent:
//! higher-priority goals preempt, a stopped goal is `reset`, and at most
//! one goal ticks per agent per tick.

pub mod ctx;
pub mod deposit;
pub mod error;
pub mod goal;
pub mod pause;
pub mod selector;
pub mod target;
pub mod wander;


pub use ctx::GoalCtx;
pub use deposit::DepositGoal;
pub use error::{GoalError, GoalResult};
pub use goal::Goal;
pub use pause::PauseTimer;
pub use selector::GoalSelector;
pub use target::MoveTarget;
pub use wander::WanderGoal;
