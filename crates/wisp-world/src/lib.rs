//! `wisp-world` — the world abstraction agents act against.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`handler`] | `TransferHandler` trait, `SlotInventory`                       |
//! | [`world`]   | `World` trait — the full service surface goals consume         |
//! | [`raycast`] | `RayHit`, grid DDA traversal                                   |
//! | [`grid`]    | `GridWorld`, `GridWorldBuilder` — in-memory implementation     |
//! | [`index`]   | `ContainerIndex` — R-tree nearest-container queries            |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                                 |
//!
//! # Design notes
//!
//! Goals never talk to a concrete world type: everything they need —
//! capability lookup, line-of-sight raycasts, entity resolution, cosmetic
//! open/close signals — goes through the [`World`] trait, so tests mock the
//! world and a real host embedding implements the same surface.
//!
//! Item transfer is a **simulate-then-commit** protocol and deliberately
//! non-atomic: between a goal's simulation and its commit, another agent's
//! turn may insert into the same container.  The framework accepts the
//! resulting partial-insert retries (a paused goal tries again later)
//! rather than locking a single-threaded tick loop.

pub mod error;
pub mod grid;
pub mod handler;
pub mod index;
pub mod raycast;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use grid::{GridWorld, GridWorldBuilder};
pub use handler::{SlotInventory, TransferHandler};
pub use index::ContainerIndex;
pub use raycast::RayHit;
pub use world::World;
