//! `lg-spatial` — the static layout: play field, rectangular loop, and the
//! two shared gate regions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`geometry`] | `Geometry` (immutable layout + R-tree), `GeometryBuilder`  |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `lg-core` types.        |

pub mod error;
pub mod geometry;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use geometry::{Geometry, GeometryBuilder};
