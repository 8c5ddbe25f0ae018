//! Architect batch delegation of the pending-review queue.

use super::Council;
use crate::ledger::{Actor, SystemActor};
use crate::schedule::ScheduledAction;
use arkonis_data::{AgentStatus, Entity, EntityStatus, LogLevel, ModelId, Role};
use std::time::Instant;

const BLOCK_REASON: &str = "ARCHITECT OVERRIDE: High entropy signal detected.";
const VERIFY_REASON: &str = "ARCHITECT OVERRIDE: Syntropic alignment confirmed.";

/// Entities the architect moved and one log line per move, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueOutcome {
    pub updated: Vec<Entity>,
    pub logs: Vec<String>,
}

impl Council {
    pub fn process_pending_queue(&mut self, entities: &[Entity]) -> QueueOutcome {
        self.process_pending_queue_at(entities, Instant::now())
    }

    /// Partitions pending entities by confidence and applies the architect's verdicts.
    ///
    /// Items between the verify and block thresholds are left untouched. The
    /// Architect stands down after the configured delay.
    pub fn process_pending_queue_at(&mut self, entities: &[Entity], now: Instant) -> QueueOutcome {
        let architect = self.registry.first_of(Role::Architect).map(|a| a.id.clone());
        let signer = architect
            .as_deref()
            .and_then(|id| self.registry.get(id))
            .map_or(ModelId::NikolaTesla.as_str(), |a| a.name());

        if let Some(agent) = architect.as_deref().and_then(|id| self.registry.get_mut(id)) {
            agent.set_activity(
                AgentStatus::Magnifying,
                "Batch processing verification queue via Resonance...",
            );
        }

        let (block, verify) = (self.config.queue.block_threshold, self.config.queue.verify_threshold);
        let actor = Actor::System(SystemActor::new(signer));
        let mut outcome = QueueOutcome::default();

        for item in entities.iter().filter(|e| e.is_pending()) {
            let verdict = if item.confidence_score >= block {
                Some((EntityStatus::Blocked, BLOCK_REASON))
            } else if item.confidence_score <= verify {
                Some((EntityStatus::Verified, VERIFY_REASON))
            } else {
                None
            };
            let Some((status, reason)) = verdict else {
                continue;
            };

            match self.ledger.update_status(item, status, reason, &actor) {
                Ok(updated) => {
                    outcome.logs.push(format!("{signer} {status} {}", item.recipient));
                    outcome.updated.push(updated);
                }
                Err(err) => {
                    tracing::warn!(entity = %item.id, error = %err, "Architect override rejected");
                }
            }
        }

        if architect.is_some() {
            self.schedule
                .push(now + self.config.stand_down_delay(), ScheduledAction::ArchitectStandDown);
        }
        self.journal.record(
            LogLevel::Resonance,
            signer,
            format!("Batch review resolved {} pending entities.", outcome.updated.len()),
        );
        outcome
    }

    /// Returns the Architect to monitoring unless magnification still holds it.
    pub(super) fn architect_stand_down(&mut self) {
        if self.magnified {
            return;
        }
        for agent in self.registry.iter_mut().filter(|a| a.role == Role::Architect) {
            agent.set_activity(AgentStatus::Idle, "Monitoring system frequency (432Hz)");
        }
    }
}
