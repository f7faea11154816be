//! headless — the loop-gate simulation without a window.
//!
//! Phase 1 drives a fixed set of agents cooperatively on one thread and
//! prints per-tick totals.  Phase 2 runs the threaded mode the way a
//! renderer would host it: two spawners, one worker thread per agent,
//! periodic snapshots, a pause in the middle, and a clean shutdown.
//!
//! Set `RUST_LOG=debug` to see gate traffic.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lg_agent::Route;
use lg_core::{SimConfig, SimRng, Tick};
use lg_sim::{
    ExitReason, Sim, SimObserver, Snapshot, Spawner, Supervisor, SupervisorBuilder, TickSummary,
    WorkerExit,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64      = 42;
const COOP_AGENTS:        usize    = 6;     // per route
const COOP_TICKS:         u64      = 2_000;
const COOP_SNAPSHOT_EVERY: u64     = 250;
const LOOP_LIMIT:         usize    = 20;    // cross spawner is unlimited
const RUN_FOR:            Duration = Duration::from_secs(6);
const SNAPSHOT_EVERY:     Duration = Duration::from_millis(500);
const PAUSE_AT:           Duration = Duration::from_secs(3);
const PAUSE_FOR:          Duration = Duration::from_secs(1);

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Totals {
    ticks:     u64,
    moved:     usize,
    waiting:   usize,
    finished:  usize,
    cancelled: usize,
}

impl SimObserver for Totals {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        self.ticks += 1;
        self.moved += summary.moved;
        self.waiting += summary.waiting;
        self.finished += summary.finished;
        self.cancelled += summary.cancelled;
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        info!(%tick, agents = snapshot.agents.len(), "snapshot");
        log_gates(snapshot);
    }
}

fn log_gates(snapshot: &Snapshot) {
    for gate in &snapshot.gates {
        info!(
            gate = %gate.id,
            occupants = gate.occupants.len(),
            queued = gate.queued,
            "gate occupancy"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let config = SimConfig {
        seed:                    SEED,
        snapshot_interval_ticks: COOP_SNAPSHOT_EVERY,
        ..SimConfig::default()
    };
    println!("=== headless — loop-gate simulation ===");
    println!(
        "Gate capacity: {}  |  Speeds: {}..={}  |  Seed: {}",
        config.gate_capacity, config.speed_min, config.speed_max, config.seed
    );
    println!();

    run_cooperative(&config)?;
    run_threaded(&config)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ── Phase 1: cooperative ──────────────────────────────────────────────────────

fn run_cooperative(config: &SimConfig) -> Result<()> {
    let supervisor = Arc::new(SupervisorBuilder::new(config.clone()).build()?);
    let mut rng = SimRng::new(config.seed);
    let mut loops = Spawner::new(Route::Loop, config, supervisor.geometry(), rng.child(0));
    let mut crosses = Spawner::new(Route::Cross, config, supervisor.geometry(), rng.child(1));

    let mut sim = Sim::new(Arc::clone(&supervisor));
    for _ in 0..COOP_AGENTS {
        sim.spawn(loops.next_builder())?;
        sim.spawn(crosses.next_builder())?;
    }

    let mut totals = Totals::default();
    let t0 = Instant::now();
    sim.run_ticks(COOP_TICKS, &mut totals);
    let elapsed = t0.elapsed();

    println!("Cooperative: {} ticks in {:.3} s", totals.ticks, elapsed.as_secs_f64());
    println!(
        "  moved {}  waiting {}  finished {}  cancelled {}  still driven {}",
        totals.moved,
        totals.waiting,
        totals.finished,
        totals.cancelled,
        sim.len()
    );
    println!();
    Ok(())
}

// ── Phase 2: threaded ─────────────────────────────────────────────────────────

fn run_threaded(config: &SimConfig) -> Result<()> {
    let supervisor = Arc::new(SupervisorBuilder::new(config.clone()).build()?);
    let mut rng = SimRng::new(config.seed);

    let spawners = [(Route::Loop, Some(LOOP_LIMIT)), (Route::Cross, None)]
        .into_iter()
        .enumerate()
        .map(|(i, (route, limit))| {
            let spawner = Spawner::new(route, config, supervisor.geometry(), rng.child(i as u64));
            let sup = Arc::clone(&supervisor);
            thread::Builder::new()
                .name(format!("lg-spawner-{route:?}").to_lowercase())
                .spawn(move || spawner.run(sup, limit))
        })
        .collect::<std::io::Result<Vec<_>>>()?;

    let t0 = Instant::now();
    let mut paused_once = false;
    while t0.elapsed() < RUN_FOR {
        thread::sleep(SNAPSHOT_EVERY);
        let snapshot = supervisor.snapshot();
        info!(elapsed_ms = t0.elapsed().as_millis() as u64, agents = snapshot.agents.len(), "snapshot");
        log_gates(&snapshot);

        if !paused_once && t0.elapsed() >= PAUSE_AT {
            supervisor.toggle_pause();
            thread::sleep(PAUSE_FOR);
            supervisor.toggle_pause();
            paused_once = true;
        }
    }
    supervisor.shutdown();

    let mut exits: Vec<WorkerExit> = Vec::new();
    for handle in spawners {
        let workers = handle.join().map_err(|_| anyhow!("spawner thread panicked"))??;
        for worker in workers {
            exits.push(worker.join().map_err(|_| anyhow!("worker thread panicked"))?);
        }
    }

    summarize(&supervisor, &exits, t0.elapsed());
    Ok(())
}

fn summarize(supervisor: &Supervisor, exits: &[WorkerExit], elapsed: Duration) {
    let count = |reason| exits.iter().filter(|e| e.reason == reason).count();
    println!("Threaded: {} workers in {:.3} s", exits.len(), elapsed.as_secs_f64());
    println!(
        "  finished {}  cancelled in gate {}  stopped between steps {}",
        count(ExitReason::Finished),
        count(ExitReason::Cancelled),
        count(ExitReason::Shutdown),
    );
    println!("  agents still registered: {}", supervisor.agent_count());
    println!();

    println!("{:<8} {:<10} {:<8}", "Agent", "Exit", "Steps");
    println!("{}", "-".repeat(28));
    for exit in exits.iter().take(10) {
        println!("{:<8} {:<10} {:<8}", exit.agent.0, format!("{:?}", exit.reason), exit.ticks);
    }
}
