//! `lg-core` — foundational types for the loop-gate traffic simulation.
//!
//! This crate is a dependency of every other `lg-*` crate.  It has no
//! `lg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `GateId`                                   |
//! | [`geo`]         | `Point`, `Rect` (half-open containment)               |
//! | [`leg`]         | `TravelLeg` and its cyclic successor                  |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`rng`]         | `SimRng` (seedable, per spawner)                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod leg;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, Rect};
pub use ids::{AgentId, GateId};
pub use leg::TravelLeg;
pub use rng::SimRng;
pub use time::Tick;
