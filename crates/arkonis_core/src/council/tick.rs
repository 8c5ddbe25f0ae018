use super::Council;
use crate::directive::DirectiveLogic;
use crate::mailbox;
use crate::milestone::{self, MilestoneUpgrade};
use arkonis_data::{Entity, LogLevel, Role};
use std::time::Instant;

/// The one event a tick surfaces. The first agent to produce an event wins;
/// everything else only reaches the journal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub new_entity: Option<Entity>,
    pub updated_entity: Option<Entity>,
    pub log: Option<String>,
}

impl TickOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_entity.is_none() && self.updated_entity.is_none() && self.log.is_none()
    }

    pub(crate) fn offer_log(&mut self, log: String) {
        if self.is_empty() {
            self.log = Some(log);
        }
    }

    pub(crate) fn offer_new(&mut self, entity: Entity, log: String) {
        if self.is_empty() {
            self.new_entity = Some(entity);
            self.log = Some(log);
        }
    }

    pub(crate) fn offer_updated(&mut self, entity: Entity, log: String) {
        if self.is_empty() {
            self.updated_entity = Some(entity);
            self.log = Some(log);
        }
    }
}

impl Council {
    /// Advances the simulation by one step.
    ///
    /// `resources` are the externally tracked entities; only those pending
    /// review are offered to analysts, and each at most once per tick. Agents
    /// born during the tick first act on the next one. Never fails.
    pub fn tick(&mut self, resources: &[Entity]) -> TickOutcome {
        let started = Instant::now();
        self.fire_due(started);

        let mut outcome = TickOutcome::default();
        let mut pending: Vec<Entity> = resources.iter().filter(|e| e.is_pending()).cloned().collect();

        self.expansion_gate(&mut outcome);

        for id in self.registry.ids() {
            self.step_agent(&id, &mut pending, &mut outcome);
        }

        self.metrics.record_tick(started.elapsed(), self.registry.len());
        outcome
    }

    /// Replicates a capable donor while the population sits below the low-water mark.
    fn expansion_gate(&mut self, outcome: &mut TickOutcome) {
        let population = &self.config.population;
        if self.registry.len() >= population.low_water {
            return;
        }
        let (min_efficiency, max_generation) =
            (population.donor_min_efficiency, population.donor_max_generation);
        if self.roll() <= 0.6 / self.directive.modifiers().replicate {
            return;
        }

        let Some((donor_id, donor_name)) = self
            .registry
            .iter()
            .find(|a| a.efficiency > min_efficiency && a.generation < max_generation)
            .map(|a| (a.id.clone(), a.name()))
        else {
            return;
        };

        if let Some(child) = self
            .replicate(&donor_id)
            .and_then(|child_id| self.registry.get(&child_id))
        {
            outcome.offer_log(format!(
                "AUTONOMOUS EXPANSION: {donor_name} spawned Gen-{} node [{}x Speed].",
                child.generation, child.process_speed
            ));
        }
    }

    fn step_agent(&mut self, id: &str, pending: &mut Vec<Entity>, outcome: &mut TickOutcome) {
        let Some(agent) = self.registry.get(id) else {
            return;
        };
        // Boosted agents hold still until the reversal decays them.
        if self.magnified && agent.role != Role::Architect {
            return;
        }

        let bonus = self.config.evolution.milestone_speed_bonus;
        if let Some(upgrade) = milestone::check_milestones(agent, self.directive, bonus) {
            self.apply_milestones(upgrade, outcome);
        }

        if let Some(message) = mailbox::next_message(&mut self.registry, id) {
            self.handle_message(id, message);
        }

        let cycles = self.registry.get(id).map_or(0, |a| a.process_speed);
        for _ in 0..cycles {
            self.run_cycle(id, pending, outcome);
        }
    }

    fn apply_milestones(&mut self, upgrade: MilestoneUpgrade, outcome: &mut TickOutcome) {
        let MilestoneUpgrade {
            agent,
            thresholds,
            log,
        } = upgrade;
        self.metrics.record_milestones(thresholds.len());
        self.journal.record(LogLevel::Success, agent.name(), log.clone());
        self.registry.replace(agent);
        outcome.offer_log(log);
    }
}
