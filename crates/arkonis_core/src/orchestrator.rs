//! Thread-safe handle over a [`Council`].
//!
//! The council sits behind a single mutex shared by the cadence driver, operator
//! calls and the scheduled-task timers, so none of them can interleave writes to
//! an agent. Ticks are additionally non-reentrant: a tick requested while
//! another is in flight is dropped, never queued.

use crate::config::AppConfig;
use crate::council::{Council, QueueOutcome, TickOutcome};
use crate::error::Result as LedgerResult;
use crate::ledger::Session;
use crate::metrics::Metrics;
use arkonis_data::{
    Agent, Directive, Entity, EntityStatus, PersonaContext, RawRecord, SharedMemory, SystemLog,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Marks a tick in flight. Dropping it lets the next tick through.
#[derive(Debug)]
pub struct TickGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
pub struct Orchestrator {
    council: Arc<Mutex<Council>>,
    ticking: Arc<AtomicBool>,
    metrics: Arc<Metrics>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(council: Council) -> Self {
        let metrics = council.metrics_handle();
        Self {
            council: Arc::new(Mutex::new(council)),
            ticking: Arc::new(AtomicBool::new(false)),
            metrics,
        }
    }

    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        Self::new(Council::new(config))
    }

    fn lock(&self) -> MutexGuard<'_, Council> {
        self.council.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the tick slot, or `None` if a tick is already running.
    #[must_use]
    pub fn try_begin_tick(&self) -> Option<TickGuard> {
        self.ticking
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| TickGuard {
                flag: Arc::clone(&self.ticking),
            })
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking.load(Ordering::Acquire)
    }

    /// Runs one tick. Returns `None` when the call overlapped a tick in flight.
    pub fn tick(&self, resources: &[Entity]) -> Option<TickOutcome> {
        let Some(_guard) = self.try_begin_tick() else {
            self.metrics.record_dropped_tick();
            tracing::debug!("Tick already in progress, dropping");
            return None;
        };
        let outcome = self.lock().tick(resources);
        self.arm_timers();
        Some(outcome)
    }

    #[must_use]
    pub fn agents(&self) -> Vec<Agent> {
        self.lock().agents()
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.lock().population()
    }

    #[must_use]
    pub fn shared_memory(&self) -> SharedMemory {
        self.lock().shared_memory()
    }

    #[must_use]
    pub fn directive(&self) -> Directive {
        self.lock().directive()
    }

    pub fn set_directive(&self, directive: Directive) {
        self.lock().set_directive(directive);
    }

    #[must_use]
    pub fn is_magnified(&self) -> bool {
        self.lock().is_magnified()
    }

    pub fn trigger_magnification(&self) -> Vec<String> {
        let replicas = self.lock().trigger_magnification();
        self.arm_timers();
        replicas
    }

    pub fn process_pending_queue(&self, entities: &[Entity]) -> QueueOutcome {
        let outcome = self.lock().process_pending_queue(entities);
        self.arm_timers();
        outcome
    }

    pub fn ingest(&self, raw: RawRecord) -> Entity {
        self.lock().ingest(raw)
    }

    /// Human-initiated review under the current session's permissions.
    pub fn review(
        &self,
        entity: &Entity,
        status: EntityStatus,
        reason: &str,
    ) -> LedgerResult<Entity> {
        self.lock().review(entity, status, reason)
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.lock().session().clone()
    }

    pub fn set_session(&self, session: Session) {
        self.lock().set_session(session);
    }

    pub fn ask(&self, query: &str) -> String {
        let reply = self.lock().ask(query);
        self.arm_timers();
        reply
    }

    #[must_use]
    pub fn persona_context(&self, agent_id: &str) -> Option<PersonaContext> {
        self.lock().persona_context(agent_id)
    }

    /// Newest-first slice of the journal.
    #[must_use]
    pub fn recent_logs(&self, n: usize) -> Vec<SystemLog> {
        self.lock().journal().recent(n)
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Runs `f` under the council lock, then arms anything it scheduled.
    pub fn with_council<R>(&self, f: impl FnOnce(&mut Council) -> R) -> R {
        let result = f(&mut self.lock());
        self.arm_timers();
        result
    }

    /// Spawns one sleeper per newly scheduled deadline.
    ///
    /// Outside a tokio runtime nothing is spawned; due tasks still fire at the
    /// start of the next tick.
    fn arm_timers(&self) {
        let deadlines = self.lock().take_unarmed_deadlines();
        if deadlines.is_empty() {
            return;
        }
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(
                pending = deadlines.len(),
                "No async runtime, scheduled tasks will fire on tick"
            );
            return;
        };

        for deadline in deadlines {
            let council = Arc::clone(&self.council);
            runtime.spawn(async move {
                tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                let now = Instant::now().max(deadline);
                let fired = council
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .fire_due(now);
                tracing::debug!(fired, "Scheduled tasks fired");
            });
        }
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("ticking", &self.is_ticking())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
