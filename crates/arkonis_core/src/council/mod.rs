//! The council: agent registry, shared memory and directive owned as one unit.
//!
//! All mutation goes through `&mut Council`, so a tick, a magnification
//! reversal and an operator action can never interleave on the same agent.
//! [`crate::orchestrator::Orchestrator`] wraps it for concurrent callers.

mod behavior;
mod console;
mod evolution;
mod review;
mod tick;

pub use evolution::{spawn_replica, EVOLUTION_TRAITS, REPLICA_ADAPTATION};
pub use review::QueueOutcome;
pub use tick::TickOutcome;

use crate::config::AppConfig;
use crate::error::Result as LedgerResult;
use crate::journal::Journal;
use crate::ledger::{Actor, Kernel, Ledger, Session};
use crate::mailbox;
use crate::metrics::Metrics;
use crate::registry::AgentRegistry;
use crate::roster;
use crate::schedule::{Schedule, ScheduledAction};
use arkonis_data::{
    Agent, Directive, Entity, EntityStatus, LogLevel, MessageType, RawRecord, SharedMemory,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::Instant;

const COUNCIL_SOURCE: &str = "NEURAL_COUNCIL";

pub struct Council {
    config: AppConfig,
    registry: AgentRegistry,
    memory: SharedMemory,
    directive: Directive,
    magnified: bool,
    rng: ChaCha8Rng,
    schedule: Schedule,
    ledger: Box<dyn Ledger>,
    journal: Journal,
    metrics: Arc<Metrics>,
}

impl Council {
    /// Creates a council seeded with the twelve founding agents.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::from_agents(config, roster::founding_council())
    }

    /// Creates a council with an explicit starting population.
    ///
    /// Agents beyond the population cap, or with repeated ids, are dropped with a warning.
    #[must_use]
    pub fn from_agents(config: AppConfig, agents: Vec<Agent>) -> Self {
        let rng = match config.simulation.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut registry = AgentRegistry::new(config.population.cap);
        for agent in agents {
            if let Err(rejected) = registry.insert(agent) {
                tracing::warn!(agent = %rejected.id, "Agent rejected at council formation");
            }
        }
        let journal = Journal::new(config.simulation.journal_capacity);

        Self {
            config,
            registry,
            memory: SharedMemory::default(),
            directive: Directive::default(),
            magnified: false,
            rng,
            schedule: Schedule::new(),
            ledger: Box::new(Kernel::default()),
            journal,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Replaces the ledger collaborator.
    #[must_use]
    pub fn with_ledger(mut self, ledger: Box<dyn Ledger>) -> Self {
        self.ledger = ledger;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Snapshot of every agent in registry order.
    #[must_use]
    pub fn agents(&self) -> Vec<Agent> {
        self.registry.snapshot()
    }

    #[must_use]
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn shared_memory(&self) -> SharedMemory {
        self.memory.clone()
    }

    /// Applies an external adjustment to shared memory, re-clamping coherence afterwards.
    pub fn update_memory<F>(&mut self, update: F)
    where
        F: FnOnce(&mut SharedMemory),
    {
        update(&mut self.memory);
        self.memory.adjust_coherence(0.0);
    }

    #[must_use]
    pub fn directive(&self) -> Directive {
        self.directive
    }

    pub fn set_directive(&mut self, directive: Directive) {
        self.directive = directive;
        let task = format!("Updating protocols for {directive}...");
        for agent in self.registry.iter_mut() {
            agent.current_task = task.clone();
        }
        self.journal.record(
            LogLevel::Warn,
            COUNCIL_SOURCE,
            format!("Directive changed to {directive}"),
        );
    }

    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.magnified
    }

    #[must_use]
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(crate) fn metrics_handle(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub(crate) fn take_unarmed_deadlines(&mut self) -> Vec<Instant> {
        self.schedule.take_unarmed()
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        self.ledger.session()
    }

    pub fn set_session(&mut self, session: Session) {
        self.ledger.set_session(session);
    }

    /// Registers raw intel with the ledger.
    pub fn ingest(&mut self, raw: RawRecord) -> Entity {
        self.ledger.ingest(raw)
    }

    /// Human-initiated review transition, subject to the session's permissions.
    pub fn review(
        &mut self,
        entity: &Entity,
        status: EntityStatus,
        reason: &str,
    ) -> LedgerResult<Entity> {
        let result = self
            .ledger
            .update_status(entity, status, reason, &Actor::Session);
        if let Err(err) = &result {
            let user = self.ledger.session().name.clone();
            self.journal.record(LogLevel::Warn, &user, err.to_string());
        }
        result
    }

    /// Delivers an inter-agent message. Unknown ids are logged and dropped.
    pub fn send(
        &mut self,
        sender_id: &str,
        receiver_id: &str,
        kind: MessageType,
        content: impl Into<String>,
    ) -> bool {
        let delivered = mailbox::send(
            &mut self.registry,
            &mut self.journal,
            sender_id,
            receiver_id,
            kind,
            content,
        );
        if delivered {
            self.metrics.record_message();
        }
        delivered
    }

    /// Runs every scheduled task whose deadline has passed. Returns how many fired.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let due = self.schedule.take_due(now);
        for task in &due {
            match task.action {
                ScheduledAction::EndMagnification => self.end_magnification(),
                ScheduledAction::ArchitectStandDown => self.architect_stand_down(),
            }
        }
        due.len()
    }

    fn roll(&mut self) -> f64 {
        self.rng.gen()
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.rng.gen_range(0..items.len())])
    }
}
