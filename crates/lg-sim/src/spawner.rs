//! Random agent creation.
//!
//! A `Spawner` draws a lateral offset, a speed, and a delay for every new
//! agent from its own seeded [`SimRng`], registers the agent, and hands it
//! to a fresh worker thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use lg_agent::{AgentBuilder, Route};
use lg_core::{Point, SimConfig, SimRng};
use lg_spatial::Geometry;
use tracing::info;

use crate::{SimError, SimResult, Supervisor, WorkerExit, spawn_worker};

/// Longest uninterrupted sleep between shutdown checks.
const SHUTDOWN_POLL: Duration = Duration::from_millis(10);

/// Creates agents for one route at randomized intervals.
pub struct Spawner {
    route:        Route,
    rng:          SimRng,
    offset_bound: f32,
    speed_min:    f32,
    speed_max:    f32,
    interval_min: Duration,
    interval_max: Duration,
}

impl Spawner {
    /// Offsets are bounded by `config.offset_fraction` of the track
    /// thickness; speeds and delays come from `config`.
    pub fn new(route: Route, config: &SimConfig, geometry: &Geometry, rng: SimRng) -> Self {
        Self {
            route,
            rng,
            offset_bound: geometry.track_thickness() * config.offset_fraction,
            speed_min:    config.speed_min,
            speed_max:    config.speed_max,
            interval_min: config.spawn_interval_min,
            interval_max: config.spawn_interval_max,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Offset in `[-bound, bound]²`, speed in `[speed_min, speed_max]`.
    pub fn next_builder(&mut self) -> AgentBuilder {
        let b = self.offset_bound;
        let offset = Point::new(self.rng.gen_range(-b..=b), self.rng.gen_range(-b..=b));
        let speed = self.rng.gen_range(self.speed_min..=self.speed_max);
        AgentBuilder::new(self.route, offset, speed)
    }

    /// Delay before the next spawn, in `[interval_min, interval_max]`.
    pub fn next_delay(&mut self) -> Duration {
        let lo = self.interval_min.as_micros() as u64;
        let hi = self.interval_max.as_micros() as u64;
        Duration::from_micros(self.rng.gen_range(lo..=hi))
    }

    /// Spawn agents until `limit` have been created (`None` = no limit) or
    /// the simulation shuts down.  Paused intervals spawn nothing and do not
    /// count towards the limit.  Returns the handles of every worker started.
    pub fn run(
        mut self,
        supervisor: Arc<Supervisor>,
        limit:      Option<usize>,
    ) -> SimResult<Vec<JoinHandle<WorkerExit>>> {
        let mut workers = Vec::new();
        while limit.is_none_or(|n| workers.len() < n) {
            if !sleep_while_running(&supervisor, self.next_delay()) {
                break;
            }
            if supervisor.is_paused() {
                continue;
            }
            let agent = match supervisor.register(self.next_builder()) {
                Ok(agent) => agent,
                Err(SimError::ShutDown) => break,
                Err(e) => return Err(e),
            };
            workers.push(spawn_worker(Arc::clone(&supervisor), agent)?);
        }
        info!(route = ?self.route, spawned = workers.len(), "spawner exiting");
        Ok(workers)
    }
}

/// Sleep for `delay` in short slices.  Returns `false` as soon as shutdown
/// is observed.
fn sleep_while_running(supervisor: &Supervisor, delay: Duration) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if !supervisor.is_running() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(SHUTDOWN_POLL));
    }
}
