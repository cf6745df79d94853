//! `wisp-agent` — per-agent state storage for the wisp framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`hint`]    | `DepositHint` — the agent's deposit target hint     |
//! | [`store`]   | `Agent`, `AgentStore`, `AgentRngs`                  |
//! | [`builder`] | `AgentStoreBuilder` (fluent spawning)               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod builder;
pub mod hint;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use hint::DepositHint;
pub use store::{Agent, AgentRngs, AgentStore};
