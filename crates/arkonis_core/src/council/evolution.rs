//! Replication and harmonic magnification.

use super::Council;
use crate::config::EvolutionConfig;
use crate::milestone;
use crate::provenance::{self, SYSTEM_ORCHESTRATOR};
use crate::schedule::ScheduledAction;
use arkonis_data::{Agent, AgentStatus, LogLevel, ModelId, Role};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

/// Trait vocabulary a replica draws its one new trait from.
pub const EVOLUTION_TRAITS: [&str; 13] = [
    "QUANTUM_SYNC",
    "PRECOGNITION",
    "HYPER_THREADED",
    "NEURAL_DENSITY",
    "ZERO_LATENCY",
    "VOID_WALKER",
    "OMNISCIENT",
    "HIVE_MIND",
    "SELF_AWARE",
    "RESONANCE_LINK",
    "ADAPTIVE_LEARNING",
    "DATA_FUSION",
    "ENTROPY_NEGATION",
];

pub const REPLICA_ADAPTATION: &str = "REPLICA_CORE_INITIATE";

/// Builds a replica of `parent` before milestone evaluation.
///
/// The new trait is drawn from vocabulary entries the parent does not already
/// hold, so a replica gains exactly one trait unless the parent has them all.
#[must_use]
pub fn spawn_replica<R: Rng>(
    parent: &Agent,
    id: String,
    magnified: bool,
    config: &EvolutionConfig,
    rng: &mut R,
) -> Agent {
    let generation = parent.generation + 1;
    let (efficiency_multiplier, speed_multiplier) = if magnified {
        (config.magnified_efficiency_multiplier, config.magnified_speed_multiplier)
    } else {
        (
            rng.gen_range(config.replica_efficiency_min..config.replica_efficiency_max),
            config.replica_speed_multiplier,
        )
    };
    let speed = parent.process_speed.saturating_mul(speed_multiplier).max(1);

    let mut child = parent.clone();
    child.id = id;
    child.set_activity(
        AgentStatus::Booting,
        format!("Initializing Gen-{generation} [Speed: {speed}x]..."),
    );
    child.last_active = Utc::now();
    child.efficiency = parent.efficiency * efficiency_multiplier;
    child.generation = generation;
    child.parent_id = Some(parent.id.clone());
    child.process_speed = speed;
    child.evolution_log.clear();
    child.inbox.clear();

    let fresh: Vec<&str> = EVOLUTION_TRAITS
        .iter()
        .copied()
        .filter(|t| !parent.has_trait(t))
        .collect();
    if let Some(t) = fresh.choose(rng) {
        child.traits.insert((*t).to_string());
    }

    child.topology.version = f64::from(generation) + parent.topology.version / 100.0;
    child.topology.adapt(REPLICA_ADAPTATION);

    provenance::stamp(
        &mut child,
        &format!("PARENT_{}", parent.id),
        "AGENT_REPLICATION_GENESIS",
    );
    child
}

impl Council {
    /// Replicates `parent_id`, returning the new agent's id.
    ///
    /// Returns `None` when the population is at its cap or the parent is unknown.
    pub fn replicate(&mut self, parent_id: &str) -> Option<String> {
        if self.registry.is_full() {
            return None;
        }
        let parent = self.registry.get(parent_id)?.clone();
        let id = self
            .registry
            .mint_replica_id(parent.role, parent.generation + 1, &mut self.rng);
        let mut child = spawn_replica(
            &parent,
            id,
            self.magnified,
            &self.config.evolution,
            &mut self.rng,
        );

        let bonus = self.config.evolution.milestone_speed_bonus;
        if let Some(upgrade) = milestone::check_milestones(&child, self.directive, bonus) {
            self.metrics.record_milestones(upgrade.thresholds.len());
            child = upgrade.agent;
        }

        let (child_id, generation, speed) = (child.id.clone(), child.generation, child.process_speed);
        if let Err(rejected) = self.registry.insert(child) {
            tracing::warn!(agent = %rejected.id, "Replica rejected by registry");
            return None;
        }

        self.metrics.record_replication();
        tracing::info!(
            parent = parent_id,
            child = %child_id,
            generation,
            speed,
            "Replica spawned"
        );
        self.journal.record(
            LogLevel::Success,
            parent.name(),
            format!("{} spawned Gen-{generation} node [{speed}x Speed].", parent.name()),
        );
        Some(child_id)
    }

    /// Enters harmonic magnification at the current instant.
    ///
    /// Returns the ids of the replicas spawned from the top agents.
    pub fn trigger_magnification(&mut self) -> Vec<String> {
        self.trigger_magnification_at(Instant::now())
    }

    /// Enters harmonic magnification and schedules its reversal relative to `now`.
    ///
    /// Every Architect is driven to peak resonance; every other agent is boosted
    /// and frozen in `Magnifying` until the reversal. A second trigger while
    /// active schedules a second reversal; nothing cancels the first.
    pub fn trigger_magnification_at(&mut self, now: Instant) -> Vec<String> {
        self.magnified = true;
        let settings = self.config.magnification.clone();
        let signer = ModelId::NikolaTesla.as_str();

        for agent in self.registry.iter_mut() {
            if agent.role == Role::Architect {
                agent.set_activity(AgentStatus::Magnifying, "INJECTING QUANTUM RESONANCE...");
                agent.efficiency = settings.architect_efficiency;
                agent.process_speed = settings.architect_speed;
                provenance::stamp(agent, signer, "MAGNIFICATION_INITIATED");
            } else {
                agent.efficiency *= 2.0;
                agent.status = AgentStatus::Magnifying;
                agent.process_speed = agent
                    .process_speed
                    .saturating_mul(2)
                    .max(settings.boost_min_speed);
                provenance::stamp(agent, signer, "MAGNIFICATION_BOOST");
            }
        }

        let mut ranked: Vec<(String, f64)> = self
            .registry
            .iter()
            .filter(|a| a.role != Role::Architect)
            .map(|a| (a.id.clone(), a.efficiency))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let replicas: Vec<String> = ranked
            .into_iter()
            .take(settings.replicas)
            .filter_map(|(id, _)| self.replicate(&id))
            .collect();

        self.schedule
            .push(now + self.config.magnification_window(), ScheduledAction::EndMagnification);
        tracing::info!(replicas = replicas.len(), "Harmonic magnification engaged");
        self.journal.record(
            LogLevel::Resonance,
            signer,
            format!(
                "HARMONIC MAGNIFICATION ENGAGED: {} replicas forged at 10x resonance.",
                replicas.len()
            ),
        );
        replicas
    }

    /// Clears the magnification flag and decays every agent still boosted.
    pub fn end_magnification(&mut self) {
        self.magnified = false;
        let settings = self.config.magnification.clone();
        let signer = ModelId::NikolaTesla.as_str();
        let mut decayed = 0usize;

        for agent in self.registry.iter_mut() {
            if agent.role == Role::Architect {
                agent.set_activity(AgentStatus::Idle, "Harmonizing system frequency (432Hz)");
                agent.efficiency = settings.baseline_efficiency;
                agent.process_speed = 1;
                provenance::stamp(agent, signer, "MAGNIFICATION_TERMINATED");
            } else if agent.status == AgentStatus::Magnifying {
                agent.status = AgentStatus::Idle;
                agent.efficiency =
                    (agent.efficiency / settings.decay_divisor).max(settings.baseline_efficiency);
                if agent.generation == 0 {
                    agent.process_speed = 1;
                }
                provenance::stamp(agent, SYSTEM_ORCHESTRATOR, "MAGNIFICATION_DECAY");
                decayed += 1;
            }
        }

        tracing::info!(decayed, "Harmonic magnification reversed");
        self.journal.record(
            LogLevel::Resonance,
            signer,
            format!("Magnification cycle complete. {decayed} nodes decayed to baseline."),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkonis_data::Topology;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn parent() -> Agent {
        let mut agent = Agent::new(
            "ag_parent",
            ModelId::Qwen,
            Role::Analyst,
            Topology::new("TRANSFORMER-XL", 2.0, &["MULTILINGUAL_DECODING"]),
        );
        agent.efficiency = 120.0;
        agent
    }

    #[test]
    fn test_replica_lineage() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let parent = parent();
        let child = spawn_replica(
            &parent,
            "ag_child".to_string(),
            false,
            &EvolutionConfig::default(),
            &mut rng,
        );

        assert_eq!(child.generation, 1);
        assert_eq!(child.parent_id.as_deref(), Some("ag_parent"));
        assert_eq!(child.process_speed, 2);
        assert!(child.efficiency >= 180.0 && child.efficiency < 300.0);
        assert_eq!(child.traits.len(), parent.traits.len() + 1);
        assert!(child.traits.is_superset(&parent.traits));
        assert_eq!(child.status, AgentStatus::Booting);
        assert!((child.topology.version - 1.02).abs() < 1e-9);
        assert!(child.topology.has(REPLICA_ADAPTATION));
        assert_eq!(child.evolution_log.len(), 1);
        assert_eq!(child.evolution_log[0].actor, "PARENT_ag_parent");
        assert_eq!(child.evolution_log[0].action, "AGENT_REPLICATION_GENESIS");
    }

    #[test]
    fn test_magnified_replica_multipliers() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut parent = parent();
        parent.process_speed = 3;
        let child = spawn_replica(
            &parent,
            "ag_child".to_string(),
            true,
            &EvolutionConfig::default(),
            &mut rng,
        );

        assert!((child.efficiency - 1200.0).abs() < 1e-9);
        assert_eq!(child.process_speed, 12);
        assert_eq!(child.current_task, "Initializing Gen-1 [Speed: 12x]...");
    }

    #[test]
    fn test_replica_with_full_vocabulary_gains_nothing_new() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut parent = parent();
        parent.traits.extend(EVOLUTION_TRAITS.iter().map(|t| t.to_string()));
        let child = spawn_replica(
            &parent,
            "ag_child".to_string(),
            false,
            &EvolutionConfig::default(),
            &mut rng,
        );
        assert_eq!(child.traits, parent.traits);
    }
}
