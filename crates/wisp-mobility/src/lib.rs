//! `wisp-mobility` — agent locomotion.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`state`]  | `NavState` — one agent's destination and speed           |
//! | [`store`]  | `NavStore` — per-agent nav states, the goal-facing API   |
//! | [`engine`] | `NavEngine` — per-tick straight-line advancement         |
//!
//! # Movement model
//!
//! Goals steer by writing a destination (`NavStore::set_destination`) or
//! clearing it (`NavStore::clear`).  Once per tick, after all goals have
//! run, [`NavEngine::advance`] moves every navigating agent straight toward
//! its destination by its speed, clamping at arrival.
//!
//! There is no pathfinding here: route planning around obstacles belongs to
//! whatever host this framework is embedded in.  Straight-line kinematics
//! are exactly enough to make approach behaviors executable and testable.

pub mod engine;
pub mod state;
pub mod store;


pub use engine::NavEngine;
pub use state::NavState;
pub use store::NavStore;
