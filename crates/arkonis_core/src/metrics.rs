//! Engine metrics and logging setup.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Counters describing what the council has done so far.
pub struct Metrics {
    tick_count: AtomicU64,
    dropped_ticks: AtomicU64,
    population: AtomicU64,
    replications: AtomicU64,
    offensive_actions: AtomicU64,
    milestones: AtomicU64,
    messages: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("tick_count", &self.tick_count())
            .field("replications", &self.replications())
            .field("offensive_actions", &self.offensive_actions())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            dropped_ticks: AtomicU64::new(0),
            population: AtomicU64::new(0),
            replications: AtomicU64::new(0),
            offensive_actions: AtomicU64::new(0),
            milestones: AtomicU64::new(0),
            messages: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, population: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);

        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % 100 == 0 {
            tracing::info!(
                tick = tick,
                population = population,
                replications = self.replications(),
                duration_us = duration.as_micros() as u64,
                "Council tick"
            );
        }
    }

    pub fn record_dropped_tick(&self) {
        self.dropped_ticks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_replication(&self) {
        self.replications.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_offensive_action(&self) {
        self.offensive_actions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_milestones(&self, count: usize) {
        self.milestones.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_message(&self) {
        self.messages.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |c| c.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn dropped_ticks(&self) -> u64 {
        self.dropped_ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn replications(&self) -> u64 {
        self.replications.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn offensive_actions(&self) -> u64 {
        self.offensive_actions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn milestones(&self) -> u64 {
        self.milestones.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn messages(&self) -> u64 {
        self.messages.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
