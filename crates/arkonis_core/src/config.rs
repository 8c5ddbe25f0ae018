//! Configuration management for engine parameters.
//!
//! Strongly-typed sections mapping to `arkonis.toml`. Every field has a
//! default, so a partial file only overrides what it names.
//!
//! ## Example `arkonis.toml`
//!
//! ```toml
//! [population]
//! cap = 48
//! low_water = 16
//!
//! [magnification]
//! duration_ms = 8000
//!
//! [simulation]
//! seed = 42
//! tick_interval_ms = 1000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Population control.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PopulationConfig {
    /// Hard ceiling on the number of agents.
    pub cap: usize,
    /// Below this size the tick may replicate a donor on its own.
    pub low_water: usize,
    pub donor_min_efficiency: f64,
    pub donor_max_generation: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            cap: 48,
            low_water: 16,
            donor_min_efficiency: 100.0,
            donor_max_generation: 6,
        }
    }
}

/// Milestone and replication scaling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EvolutionConfig {
    pub milestone_speed_bonus: u32,
    pub replica_efficiency_min: f64,
    pub replica_efficiency_max: f64,
    pub magnified_efficiency_multiplier: f64,
    pub replica_speed_multiplier: u32,
    pub magnified_speed_multiplier: u32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            milestone_speed_bonus: 2,
            replica_efficiency_min: 1.5,
            replica_efficiency_max: 2.5,
            magnified_efficiency_multiplier: 10.0,
            replica_speed_multiplier: 2,
            magnified_speed_multiplier: 4,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MagnificationConfig {
    pub duration_ms: u64,
    pub architect_efficiency: f64,
    pub architect_speed: u32,
    pub boost_min_speed: u32,
    pub decay_divisor: f64,
    pub baseline_efficiency: f64,
    /// Number of top agents replicated when magnification starts.
    pub replicas: usize,
}

impl Default for MagnificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 8000,
            architect_efficiency: 369.0,
            architect_speed: 10,
            boost_min_speed: 8,
            decay_divisor: 1.2,
            baseline_efficiency: 100.0,
            replicas: 3,
        }
    }
}

/// Thresholds for the architect's batch review.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QueueConfig {
    pub block_threshold: f64,
    pub verify_threshold: f64,
    pub stand_down_ms: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            block_threshold: 0.85,
            verify_threshold: 0.65,
            stand_down_ms: 2000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: Option<u64>,
    pub tick_interval_ms: u64,
    pub journal_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval_ms: 1000,
            journal_capacity: 100,
        }
    }
}

/// Top-level engine configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub population: PopulationConfig,
    pub evolution: EvolutionConfig,
    pub magnification: MagnificationConfig,
    pub queue: QueueConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Validates configuration values are within acceptable ranges.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.population.cap > 0, "Population cap must be positive");
        anyhow::ensure!(
            self.population.cap <= 10_000,
            "Population cap too large (max 10000)"
        );
        anyhow::ensure!(
            self.population.low_water <= self.population.cap,
            "Low-water mark cannot exceed the population cap"
        );
        anyhow::ensure!(
            self.population.donor_min_efficiency >= 0.0,
            "Donor efficiency floor must be non-negative"
        );

        anyhow::ensure!(
            self.evolution.replica_efficiency_min > 0.0,
            "Replica efficiency multiplier must be positive"
        );
        anyhow::ensure!(
            self.evolution.replica_efficiency_min < self.evolution.replica_efficiency_max,
            "Replica efficiency range must be non-empty"
        );
        anyhow::ensure!(
            self.evolution.magnified_efficiency_multiplier > 0.0,
            "Magnified efficiency multiplier must be positive"
        );
        anyhow::ensure!(
            self.evolution.replica_speed_multiplier >= 1
                && self.evolution.magnified_speed_multiplier >= 1,
            "Speed multipliers must be at least 1"
        );

        anyhow::ensure!(
            self.magnification.duration_ms > 0,
            "Magnification duration must be positive"
        );
        anyhow::ensure!(
            self.magnification.architect_speed >= 1 && self.magnification.boost_min_speed >= 1,
            "Magnified speeds must be at least 1"
        );
        anyhow::ensure!(
            self.magnification.decay_divisor >= 1.0,
            "Decay divisor must be at least 1.0"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.queue.block_threshold)
                && (0.0..=1.0).contains(&self.queue.verify_threshold),
            "Queue thresholds must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.queue.verify_threshold < self.queue.block_threshold,
            "Verify threshold must sit below the block threshold"
        );

        anyhow::ensure!(
            self.simulation.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        anyhow::ensure!(
            self.simulation.journal_capacity > 0,
            "Journal capacity must be positive"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file is absent.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    #[must_use]
    pub fn magnification_window(&self) -> Duration {
        Duration::from_millis(self.magnification.duration_ms)
    }

    #[must_use]
    pub fn stand_down_delay(&self) -> Duration {
        Duration::from_millis(self.queue.stand_down_ms)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.population).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.magnification).as_bytes());
        hasher.update(format!("{:?}", self.queue).as_bytes());
        hex::encode(hasher.finalize())
    }
}
