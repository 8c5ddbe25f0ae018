//! Arkonis: the Neural Council autonomous multi-agent simulation.
//!
//! The engine lives in [`arkonis_core`]; this crate adds the cadence driver
//! that ticks it on a fixed period and the operator chat surface.

pub mod app;

pub use app::{App, EntityStore, ShutdownManager};
pub use arkonis_core::{init_logging, AppConfig, Council, Orchestrator, TickOutcome};
