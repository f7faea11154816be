//! Observer trait for progress reporting and rendering.

use lg_core::Tick;

use crate::{Snapshot, TickSummary};

/// Callbacks invoked by the cooperative [`Sim`][crate::Sim] at key points
/// in its tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — occupancy printer
///
/// ```rust,ignore
/// struct Occupancy;
///
/// impl SimObserver for Occupancy {
///     fn on_snapshot(&mut self, tick: Tick, snap: &Snapshot) {
///         for g in &snap.gates {
///             println!("{tick} {}: {:?}", g.id, g.occupants);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each active tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has been stepped once.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.snapshot_interval_ticks` ticks with a read-only
    /// copy of all live agents and gate queues.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called once when [`Sim::run_ticks`][crate::Sim::run_ticks] returns.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
