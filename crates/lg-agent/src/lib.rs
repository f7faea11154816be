//! `lg-agent` — the travelling agent ("car").
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`agent`]     | `Agent` (mutable, owned by its driver), `AgentView`       |
//! | [`builder`]   | `Route`, `AgentBuilder` (route + offset + speed)          |
//!
//! # Ownership
//!
//! An `Agent` is owned by exactly one driver (a worker thread or the
//! cooperative loop).  Everything else sees it only through an
//! [`AgentView`] copy published to the supervisor's registry.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod builder;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentView};
pub use builder::{AgentBuilder, Route};
