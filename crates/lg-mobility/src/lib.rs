//! `lg-mobility` — per-tick agent motion.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`advance`] | `Advance` — a candidate next position, leg, and exit flag         |
//! | [`engine`]  | `MotionEngine` — computes an `Advance` for one agent              |
//!
//! # Movement model
//!
//! Each tick an agent moves `speed` units along the axis of its current
//! leg.  A move that would reach or pass the leg's corner is clamped onto
//! the corner and the leg switches to its successor, so every corner is
//! visited exactly once per lap and positions never drift off the path.
//!
//! `advance` is pure: it never touches the agent or any gate.  The
//! supervisor decides whether the candidate is committed.

pub mod advance;
pub mod engine;

#[cfg(test)]
mod tests;

pub use advance::Advance;
pub use engine::MotionEngine;
