//! Top-level simulation configuration.

use std::time::Duration;

use crate::{CoreError, CoreResult};

/// Simulation configuration.
///
/// Typically built by the application from constants or a config file and
/// passed to the supervisor builder.  `Default` reproduces the reference
/// layout's tuning (capacity 4, ~120 Hz ticks, speeds in `[0.5, 2.0]`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed for spawners.
    pub seed: u64,

    /// Maximum number of agents admitted to one gate at a time.
    pub gate_capacity: usize,

    /// Wall-clock pause between two steps of a threaded worker.
    pub tick_interval: Duration,

    /// Inclusive lower bound of a spawned agent's speed (units per tick).
    pub speed_min: f32,

    /// Upper bound of a spawned agent's speed (units per tick).
    pub speed_max: f32,

    /// Shortest delay between two spawns of one spawner.
    pub spawn_interval_min: Duration,

    /// Longest delay between two spawns of one spawner.
    pub spawn_interval_max: Duration,

    /// Maximum lateral offset as a fraction of the track thickness.
    pub offset_fraction: f32,

    /// Emit an observer snapshot every N cooperative ticks.  0 disables.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            gate_capacity:           4,
            tick_interval:           Duration::from_micros(8_333),
            speed_min:               0.5,
            speed_max:               2.0,
            spawn_interval_min:      Duration::from_millis(100),
            spawn_interval_max:      Duration::from_millis(1_000),
            offset_fraction:         0.25,
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.gate_capacity == 0 {
            return Err(CoreError::Config("gate_capacity must be at least 1".into()));
        }
        if self.tick_interval.is_zero() {
            return Err(CoreError::Config("tick_interval must be non-zero".into()));
        }
        if !(self.speed_min.is_finite() && self.speed_max.is_finite())
            || self.speed_min <= 0.0
        {
            return Err(CoreError::Config(format!(
                "speeds must be finite and positive, got [{}, {}]",
                self.speed_min, self.speed_max
            )));
        }
        if self.speed_min > self.speed_max {
            return Err(CoreError::Config(format!(
                "speed_min {} exceeds speed_max {}",
                self.speed_min, self.speed_max
            )));
        }
        if self.spawn_interval_min > self.spawn_interval_max {
            return Err(CoreError::Config(format!(
                "spawn_interval_min {:?} exceeds spawn_interval_max {:?}",
                self.spawn_interval_min, self.spawn_interval_max
            )));
        }
        if !self.offset_fraction.is_finite() || !(0.0..=0.5).contains(&self.offset_fraction) {
            return Err(CoreError::Config(format!(
                "offset_fraction must lie in [0, 0.5], got {}",
                self.offset_fraction
            )));
        }
        Ok(())
    }
}
