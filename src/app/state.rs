use super::seed;
use super::shutdown::ShutdownManager;
use super::store::EntityStore;
use anyhow::Result;
use arkonis_core::{AppConfig, Orchestrator, QueueOutcome, TickOutcome};
use arkonis_data::ChatTurn;
use arkonis_observer::{Converser, HeuristicConverser};

/// The cadence driver: owns the entity store and feeds it to the council.
pub struct App {
    pub orchestrator: Orchestrator,
    pub store: EntityStore,
    pub config: AppConfig,
    pub shutdown: ShutdownManager,
    pub ticks_run: u64,
    /// Tick after which magnification is triggered once.
    pub magnify_at: Option<u64>,
    converser: Box<dyn Converser>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            orchestrator: Orchestrator::from_config(config.clone()),
            store: EntityStore::new(),
            config,
            shutdown: ShutdownManager::new(),
            ticks_run: 0,
            magnify_at: None,
            converser: Box::new(HeuristicConverser),
        })
    }

    #[must_use]
    pub fn with_converser(mut self, converser: Box<dyn Converser>) -> Self {
        self.converser = converser;
        self
    }

    #[must_use]
    pub fn with_magnify_at(mut self, tick: Option<u64>) -> Self {
        self.magnify_at = tick;
        self
    }

    /// Registers the initial intel batch. Returns how many entities were added.
    pub fn seed_intel(&mut self) -> usize {
        let records = seed::seed_records();
        let count = records.len();
        for raw in records {
            let entity = self.orchestrator.ingest(raw);
            self.store.upsert(entity);
        }
        tracing::info!(
            seeded = count,
            pending = self.store.pending_count(),
            "Intel seeded"
        );
        count
    }

    /// Runs one tick against the tracked entities. `None` if the tick was dropped.
    pub fn step(&mut self) -> Option<TickOutcome> {
        let outcome = self.orchestrator.tick(self.store.entities())?;
        self.store.absorb_tick(&outcome);
        self.ticks_run += 1;

        if let Some(log) = &outcome.log {
            tracing::info!(tick = self.ticks_run, "{log}");
        }
        if self.magnify_at == Some(self.ticks_run) {
            let replicas = self.orchestrator.trigger_magnification();
            tracing::info!(tick = self.ticks_run, replicas = replicas.len(), "Magnification triggered");
        }
        Some(outcome)
    }

    /// Hands every pending entity to the Architect's batch review.
    pub fn delegate_queue(&mut self) -> QueueOutcome {
        let outcome = self.orchestrator.process_pending_queue(self.store.entities());
        self.store.absorb_queue(&outcome);
        for log in &outcome.logs {
            tracing::info!("{log}");
        }
        outcome
    }

    /// Talks to one agent. Never fails; see [`arkonis_observer::chat`].
    pub async fn chat_with_agent(
        &self,
        agent_id: &str,
        message: &str,
        history: &[ChatTurn],
    ) -> String {
        let context = self.orchestrator.persona_context(agent_id);
        arkonis_observer::chat(self.converser.as_ref(), context.as_ref(), message, history).await
    }
}
