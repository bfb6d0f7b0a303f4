//! `fab-core` — foundational types for the `fab` production-line simulator.
//!
//! This crate is a dependency of every other `fab-*` crate.  It intentionally
//! has no `fab-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`component`]   | `Component` enum (`A`, `B`, `C`) and unit weights     |
//! | [`ids`]         | `CellId`, `WorkerId`                                  |
//! | [`tally`]       | `Tally` — fixed-size counts keyed by component/empty  |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seedable global stream)                     |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`error`]       | `FabError`, `FabResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod component;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tally;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use component::Component;
pub use config::SimConfig;
pub use error::{FabError, FabResult};
pub use ids::{CellId, WorkerId};
pub use rng::SimRng;
pub use tally::Tally;
pub use time::Tick;
