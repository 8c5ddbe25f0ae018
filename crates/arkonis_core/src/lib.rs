//! # Arkonis Core
//!
//! The simulation engine behind the Arkonis Neural Council: a population of
//! role-specialized agents that scan, analyze, coordinate and replicate under
//! a global directive.
//!
//! This crate contains:
//! - The agent registry, per-agent mailboxes and the tick scheduler
//! - The evolution engine (milestones, replication, harmonic magnification)
//! - Role behaviors driven by directive-scaled probabilities
//! - The ledger collaborator boundary and an in-memory kernel
//! - Configuration, structured logging and metrics
//!
//! ## Architecture
//!
//! All state lives in one [`Council`] mutated through `&mut self`. The
//! [`Orchestrator`] wraps it for concurrent callers: ticks are non-reentrant and
//! delayed side effects (the magnification reversal, the architect stand-down)
//! fire under the same lock as ticks. Seeding `simulation.seed` makes runs
//! reproducible.
//!
//! ## Example
//!
//! ```
//! use arkonis_core::config::AppConfig;
//! use arkonis_core::Council;
//!
//! let mut config = AppConfig::default();
//! config.simulation.seed = Some(7);
//!
//! let mut council = Council::new(config);
//! let _outcome = council.tick(&[]);
//! assert!(council.population() >= 12);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// The council state and its tick, behaviors and evolution engine
pub mod council;
/// Directive probability multipliers and flavor text
pub mod directive;
/// Ledger collaborator errors
pub mod error;
/// Bounded observability journal
pub mod journal;
/// Ledger collaborator trait, sessions and the in-memory kernel
pub mod ledger;
/// Inter-agent message delivery
pub mod mailbox;
/// Performance metrics collection and logging
pub mod metrics;
/// Efficiency milestones and topology rewrites
pub mod milestone;
/// Thread-safe handle with non-reentrant ticks and timers
pub mod orchestrator;
/// Provenance hashing and stamping
pub mod provenance;
/// Agent storage with population cap
pub mod registry;
/// Founding agents
pub mod roster;
/// Delayed side effects
pub mod schedule;

pub use config::AppConfig;
pub use council::{Council, QueueOutcome, TickOutcome};
pub use directive::{DirectiveLogic, Modifiers};
pub use error::LedgerError;
pub use ledger::{Actor, Kernel, Ledger, Session, UserRole};
pub use metrics::{init_logging, Metrics};
pub use orchestrator::Orchestrator;
