//! `wisp-core` — foundational types for the `wisp` hauling-agent framework.
//!
//! This crate is a dependency of every other `wisp-*` crate.  It intentionally
//! has no `wisp-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `ItemKind`                                   |
//! | [`geom`]      | `Vec3`, `CellPos`, yaw math                             |
//! | [`direction`] | `Heading` (compass), `Face` (cell faces)                |
//! | [`item`]      | `ItemStack`                                             |
//! | [`time`]      | `Tick`, `SimConfig`                                     |
//! | [`rng`]       | `AgentRng` (deterministic per-agent RNG)                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod direction;
pub mod geom;
pub mod ids;
pub mod item;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Face, Heading};
pub use geom::{CellPos, Vec3};
pub use ids::{AgentId, ItemKind};
pub use item::ItemStack;
pub use rng::AgentRng;
pub use time::{SimConfig, Tick};
