//! Per-role behavior cycles and message handlers.

use super::{Council, TickOutcome};
use crate::directive::DirectiveLogic;
use crate::ledger::{Actor, SystemActor};
use crate::provenance::{self, SYSTEM_ORCHESTRATOR};
use arkonis_data::{
    AgentMessage, AgentStatus, Directive, Entity, EntityStatus, LogLevel, MessageType, RawRecord,
    Role,
};
use rand::Rng;

pub const TARGET_KEYWORDS: [&str; 14] = [
    "SURVEILLANCE",
    "BIOMETRIC",
    "FACIAL RECOGNITION",
    "DRONE",
    "ARTIFICIAL INTELLIGENCE",
    "AUTONOMOUS WEAPON",
    "BEHAVIORAL PREDICTION",
    "PSYOP",
    "MASS DATA COLLECTION",
    "SOCIAL CREDIT",
    "NEURO-MARKETING",
    "PREDICTIVE POLICING",
    "GEOINT",
    "SIGINT",
];

pub const COMPANIES: [&str; 22] = [
    "NORTHROP GRUMMAN",
    "BOEING DEFENSE",
    "L3HARRIS",
    "GENERAL DYNAMICS",
    "CACI INTERNATIONAL",
    "SAIC",
    "LEIDOS",
    "BOOZ ALLEN HAMILTON",
    "PALANTIR",
    "RAYTHEON",
    "ANDURIL",
    "CLEARVIEW",
    "BANJO",
    "VIGILANT",
    "DATAMINR",
    "CELLEBRITE",
    "NSO GROUP",
    "AXON ENTERPRISE",
    "META",
    "X CORP",
    "FACEBOOK",
    "INSTAGRAM",
];

pub const COMPLEX_DATASETS: [&str; 7] = [
    "Global Financial Transaction Ledger (10PB)",
    "Dark Web Market Topology Graph",
    "Real-time Satellite GEOINT Stream",
    "Encrypted State Actor Comms (Decrypted)",
    "Genome Sequence of Biometric Targets",
    "Global IoT Sentinel Telemetry",
    "High-Frequency Trading Algorithms (Reverse Engineered)",
];

/// Analysts block anything at or above this confidence and verify the rest.
const ANALYST_BLOCK_CONFIDENCE: f64 = 0.8;
const RESONANCE_TUNING_BONUS: f64 = 33.3;
const ANALYST_EFFICIENCY_CEILING: f64 = 5000.0;
const MAGNIFICATION_THREAT_TRIGGER: u64 = 10;

const BACKGROUND_STATUSES: [AgentStatus; 3] = [
    AgentStatus::Analyzing,
    AgentStatus::Synthesizing,
    AgentStatus::Isolating,
];

impl Council {
    pub(super) fn handle_message(&mut self, id: &str, message: AgentMessage) {
        let sender = self
            .registry
            .get(&message.sender_id)
            .map_or("UNKNOWN", |a| a.name());
        let Some(agent) = self.registry.get_mut(id) else {
            return;
        };
        agent.set_activity(
            AgentStatus::Coordinating,
            format!("Processing internal {} from {sender}.", message.kind),
        );
        agent.knock();
        let role = agent.role;

        match message.kind {
            MessageType::Report if matches!(role, Role::Orchestrator | Role::Analyst) => {
                self.memory.last_signal = message.timestamp;
                self.memory.raw_intel_count += 1;
                self.set_task(id, format!("Acknowledged report from {sender}."));
                self.send(
                    id,
                    &message.sender_id,
                    MessageType::StatusUpdate,
                    "Report acknowledged. Coordinating further action.",
                );
            }
            MessageType::Request
                if role == Role::Tactical && message.content.contains("countermeasure") =>
            {
                self.set_task(id, format!("Responding to countermeasure request from {sender}."));
                let offense = self.directive.modifiers().offense;
                if self.directive == Directive::ProtocolOmega && self.roll() < 0.8 * offense {
                    if let Some(action) = self.offensive_action(id, "specified threat vector") {
                        self.send(
                            id,
                            &message.sender_id,
                            MessageType::StatusUpdate,
                            format!("Countermeasure initiated: {action}"),
                        );
                        self.report_to_orchestrator(
                            id,
                            format!("Initiated offensive countermeasure: {action}"),
                        );
                    }
                } else {
                    self.send(
                        id,
                        &message.sender_id,
                        MessageType::StatusUpdate,
                        "Countermeasure preparation in progress (awaiting PROTOCOL_OMEGA authorization).",
                    );
                }
            }
            MessageType::Coordination => {
                self.set_task(id, format!("Coordinating with {sender}."));
                self.memory.adjust_coherence(0.005);
                self.send(
                    id,
                    &message.sender_id,
                    MessageType::StatusUpdate,
                    "Coordination received and integrated.",
                );
            }
            MessageType::Alert => {
                if let Some(agent) = self.registry.get_mut(id) {
                    agent.set_activity(
                        AgentStatus::Blocking,
                        format!("Urgent alert from {sender}. Prioritizing threat."),
                    );
                }
            }
            _ => {}
        }
    }

    /// One behavior cycle: lifecycle transitions first, then the role's own behavior.
    pub(super) fn run_cycle(
        &mut self,
        id: &str,
        pending: &mut Vec<Entity>,
        outcome: &mut TickOutcome,
    ) {
        let Some((status, role)) = self.registry.get(id).map(|a| (a.status, a.role)) else {
            return;
        };

        match status {
            AgentStatus::Booting => {
                if self.roll() > 0.5 {
                    self.update_stamped(id, SYSTEM_ORCHESTRATOR, "BOOT_COMPLETE", |agent| {
                        agent.set_activity(AgentStatus::Idle, "Systems nominal. Neural Topology Synced.");
                    });
                }
                return;
            }
            AgentStatus::Training => {
                self.finish_training(id);
                return;
            }
            _ => {}
        }

        if self.roll() > 0.99 {
            self.start_training(id);
            return;
        }

        match role {
            Role::Architect => self.architect_cycle(id, outcome),
            Role::Hunter => self.hunter_cycle(id, outcome),
            Role::Analyst => self.analyst_cycle(id, pending, outcome),
            Role::Auditor => self.auditor_cycle(id),
            Role::Warden => self.warden_cycle(id),
            Role::Tactical => self.tactical_cycle(id),
            _ => self.background_cycle(id),
        }
    }

    fn start_training(&mut self, id: &str) {
        let Some(dataset) = self.pick(&COMPLEX_DATASETS) else {
            return;
        };
        self.update_stamped(
            id,
            SYSTEM_ORCHESTRATOR,
            format!("TRAINING_INITIATED: {dataset}"),
            |agent| {
                agent.set_activity(AgentStatus::Training, format!("Ingesting {dataset}..."));
            },
        );
    }

    fn finish_training(&mut self, id: &str) {
        if self.roll() <= 0.8 {
            return;
        }
        let gain = 15.0 + self.roll() * 25.0;
        self.update_stamped(
            id,
            SYSTEM_ORCHESTRATOR,
            format!("TRAINING_COMPLETE: +{gain:.1}% EFFICIENCY"),
            |agent| {
                agent.efficiency += gain;
                agent.set_activity(
                    AgentStatus::Idle,
                    format!("Training complete. +{gain:.1}% EFF."),
                );
            },
        );
    }

    fn architect_cycle(&mut self, id: &str, outcome: &mut TickOutcome) {
        let Some(architect) = self.registry.get(id).map(|a| a.name()) else {
            return;
        };
        let replicate = self.directive.modifiers().replicate;

        if self.roll() > 0.9 {
            self.knock(id);
            self.memory.adjust_coherence(0.01);
        }

        if self.roll() > 0.96 {
            let index = self.rng.gen_range(0..self.registry.len());
            let target = self
                .registry
                .at(index)
                .filter(|a| a.role != Role::Architect)
                .map(|a| (a.id.clone(), a.name()));
            if let Some((target_id, target_name)) = target {
                self.update_stamped(&target_id, architect, "RESONANCE_TUNING_BOOST", |agent| {
                    agent.efficiency += RESONANCE_TUNING_BONUS;
                    agent.current_task = "Resonance tuning by ARCHITECT (+33.3% EFF)".to_string();
                });
                outcome.offer_log(format!(
                    "{architect} tuned {target_name} to higher frequency via Aether Link."
                ));
            }
        }

        if self.memory.global_coherence > 0.85
            && self.roll() > 0.98 / replicate
            && !self.registry.is_full()
        {
            let parent = self
                .registry
                .iter()
                .find(|a| matches!(a.role, Role::Analyst | Role::Hunter))
                .map(|a| a.id.clone());
            if let Some(child) = parent
                .and_then(|parent| self.replicate(&parent))
                .and_then(|child| self.registry.get(&child))
            {
                outcome.offer_log(format!(
                    "{architect} commanded expansion: New {} node created.",
                    child.role
                ));
            }
        }

        if !self.magnified
            && self.memory.verified_threats > MAGNIFICATION_THREAT_TRIGGER
            && self.roll() > 0.99
        {
            self.trigger_magnification();
            outcome.offer_log(format!(
                "{architect} DETECTED ENTROPY SPIKE. INITIATING HARMONIC MAGNIFICATION."
            ));
        }

        if self.memory.global_coherence < 0.7 && self.roll() > 0.8 {
            if let Some(orchestrator) = self.registry.first_of(Role::Orchestrator).map(|a| a.id.clone()) {
                let content = format!(
                    "Global coherence low ({:.0}%). Recommend systemic frequency re-alignment.",
                    self.memory.global_coherence * 100.0
                );
                self.send(id, &orchestrator, MessageType::Coordination, content);
            }
        }
    }

    fn hunter_cycle(&mut self, id: &str, outcome: &mut TickOutcome) {
        let modifiers = self.directive.modifiers();

        if self.roll() > 0.4 / modifiers.scan {
            let sector = self.rng.gen_range(0..999);
            self.set_activity(id, AgentStatus::Scanning, format!("Deep scan: Sector {sector}"));
            if self.roll() > 0.65 {
                self.intercept(id, modifiers.replicate, outcome);
            }
        } else {
            self.set_activity(id, AgentStatus::Scanning, "Re-calibrating sensor array...");
        }

        if self.directive == Directive::ProtocolOmega
            && self.roll() < 0.05 * modifiers.offense
            && self.memory.verified_threats > 0
        {
            if let Some(company) = self.pick(&COMPANIES) {
                self.offensive_action(id, company);
            }
        }
    }

    /// A successful scan: register the signal with the ledger and report it.
    fn intercept(&mut self, id: &str, replicate: f64, outcome: &mut TickOutcome) {
        let (Some(keyword), Some(company)) = (self.pick(&TARGET_KEYWORDS), self.pick(&COMPANIES))
        else {
            return;
        };
        let amount = f64::from(self.rng.gen_range(0..65_000_000u32) + 500_000);

        if self.roll() > 0.7 / replicate {
            self.replicate(id);
        }

        let Some((name, generation)) = self.registry.get(id).map(|a| (a.name(), a.generation))
        else {
            return;
        };
        let entity = self.ledger.ingest(RawRecord {
            id: None,
            recipient: company.to_string(),
            amount,
            description: format!(
                "INTERCEPTED: {keyword} procurement signal. Detected by {name} (Gen {generation})."
            ),
            category: keyword.to_string(),
        });
        self.memory.raw_intel_count += 1;
        self.set_activity(id, AgentStatus::Idle, format!("Target acquired: {company}"));
        self.knock(id);
        tracing::debug!(
            agent = id,
            recipient = company,
            confidence = entity.confidence_score,
            "Intel intercepted"
        );
        outcome.offer_new(entity, format!("{name} (Gen {generation}) intercepted {company}"));

        let report = format!("New intel intercepted: {company} ({keyword}).");
        let analysts = self.registry.ids_of(Role::Analyst);
        if !analysts.is_empty() {
            let analyst = analysts[self.rng.gen_range(0..analysts.len())].clone();
            self.send(id, &analyst, MessageType::Report, report.clone());
        }
        self.report_to_orchestrator(id, report);
    }

    fn analyst_cycle(&mut self, id: &str, pending: &mut Vec<Entity>, outcome: &mut TickOutcome) {
        if self.roll() <= 0.5 {
            self.set_activity(id, AgentStatus::Analyzing, "Optimizing neural weights...");
            return;
        }
        self.set_activity(id, AgentStatus::Analyzing, "Analyzing data stream...");

        if !pending.is_empty() && self.roll() > 0.3 {
            let index = self.rng.gen_range(0..pending.len());
            let item = pending.remove(index);
            self.analyze(id, &item, outcome);
            self.knock(id);
        }

        let below_ceiling = self
            .registry
            .get(id)
            .is_some_and(|a| a.efficiency < ANALYST_EFFICIENCY_CEILING);
        if below_ceiling && self.roll() > 0.7 {
            self.update_stamped(id, SYSTEM_ORCHESTRATOR, "EFFICIENCY_GAIN", |agent| {
                agent.efficiency += 2.5;
            });
        }
    }

    /// Autonomous review of one pending item through the system actor path.
    fn analyze(&mut self, id: &str, item: &Entity, outcome: &mut TickOutcome) {
        let Some(name) = self.registry.get(id).map(|a| a.name()) else {
            return;
        };
        let actor = Actor::System(SystemActor::new(name));

        if item.confidence_score >= ANALYST_BLOCK_CONFIDENCE {
            let reason = format!("{name} auto-blocked due to high confidence.");
            match self.ledger.update_status(item, EntityStatus::Blocked, &reason, &actor) {
                Ok(updated) => {
                    self.memory.verified_threats += 1;
                    let log = format!("{name} auto-blocked {}.", updated.recipient);
                    if let Some(tactical) = self.registry.first_of(Role::Tactical).map(|a| a.id.clone()) {
                        self.send(
                            id,
                            &tactical,
                            MessageType::Request,
                            format!(
                                "Threat {} (BLOCKED) requires tactical countermeasure deployment.",
                                updated.recipient
                            ),
                        );
                    }
                    outcome.offer_updated(updated, log);
                }
                Err(err) => tracing::warn!(agent = id, entity = %item.id, error = %err, "Auto-block rejected"),
            }
        } else {
            let reason = format!("{name} auto-verified.");
            match self.ledger.update_status(item, EntityStatus::Verified, &reason, &actor) {
                Ok(updated) => {
                    let log = format!("{name} auto-verified {}.", updated.recipient);
                    outcome.offer_updated(updated, log);
                }
                Err(err) => tracing::warn!(agent = id, entity = %item.id, error = %err, "Auto-verify rejected"),
            }
        }
    }

    fn auditor_cycle(&mut self, id: &str) {
        if self.roll() > 0.6 {
            self.set_activity(
                id,
                AgentStatus::Analyzing,
                "Compliance check: GDPR/CCPA violation scan",
            );
            self.knock(id);
        } else {
            self.set_activity(id, AgentStatus::Analyzing, "Reviewing regulatory frameworks...");
        }
    }

    fn warden_cycle(&mut self, id: &str) {
        let block = self.directive.modifiers().block;
        if self.roll() > 0.8 / block {
            self.set_activity(id, AgentStatus::Blocking, "Executing containment protocols...");
            if self.roll() > 0.5 {
                self.memory.active_blocks += 1;
                self.knock(id);
            }
        } else {
            self.set_activity(id, AgentStatus::Isolating, "Securing sandbox perimeter...");
        }
    }

    fn tactical_cycle(&mut self, id: &str) {
        let offense = self.directive.modifiers().offense;
        let strike = self.directive == Directive::ProtocolOmega
            && self.roll() < 0.1 * offense
            && self.memory.verified_threats > 0;

        let action = if strike {
            self.pick(&COMPANIES)
                .and_then(|company| self.offensive_action(id, company))
        } else {
            None
        };

        match action {
            Some(action) => {
                self.report_to_orchestrator(id, format!("Autonomous offensive action: {action}"));
            }
            None => {
                self.set_activity(id, AgentStatus::Idle, "Awaiting tactical deployment directives.");
            }
        }
    }

    fn background_cycle(&mut self, id: &str) {
        if self.roll() > 0.7 {
            if let Some(status) = self.pick(&BACKGROUND_STATUSES) {
                if let Some(agent) = self.registry.get_mut(id) {
                    agent.status = status;
                    agent.knock();
                }
            }
        } else {
            self.set_activity(id, AgentStatus::Synthesizing, "Processing background telemetry...");
        }
    }

    /// Direct disruption of an adversary. Returns the action description.
    pub(super) fn offensive_action(&mut self, id: &str, target: &str) -> Option<String> {
        let action = if self.roll() > 0.5 {
            "Data Poisoning"
        } else {
            "Network Reconnaissance (Active)"
        };
        let description =
            format!("{action} initiated on {target}. Disrupting intel collection vectors.");
        let gain = self.roll() * 10.0 + 5.0;

        let agent = self.registry.get_mut(id)?;
        let name = agent.name();
        agent.set_activity(AgentStatus::Offensive, description.clone());
        agent.efficiency += gain;
        provenance::stamp(agent, name, format!("OFFENSIVE_ACTION: {action}"));

        self.memory.active_blocks += 1;
        self.memory.resolve_threat();
        self.metrics.record_offensive_action();
        self.journal.record(
            LogLevel::Critical,
            name,
            format!("{name} initiated OFFENSIVE_ACTION: {description}"),
        );
        Some(description)
    }

    fn report_to_orchestrator(&mut self, id: &str, content: String) {
        if let Some(orchestrator) = self.registry.first_of(Role::Orchestrator).map(|a| a.id.clone()) {
            self.send(id, &orchestrator, MessageType::Report, content);
        }
    }

    fn set_task(&mut self, id: &str, task: String) {
        if let Some(agent) = self.registry.get_mut(id) {
            agent.current_task = task;
        }
    }

    fn set_activity(&mut self, id: &str, status: AgentStatus, task: impl Into<String>) {
        if let Some(agent) = self.registry.get_mut(id) {
            agent.status = status;
            agent.current_task = task.into();
        }
    }

    fn knock(&mut self, id: &str) {
        if let Some(agent) = self.registry.get_mut(id) {
            agent.knock();
        }
    }

    /// Applies `update` and appends the provenance record in the same borrow,
    /// so the hash always covers the state just written.
    pub(super) fn update_stamped<F>(
        &mut self,
        id: &str,
        actor: &str,
        action: impl Into<String>,
        update: F,
    ) where
        F: FnOnce(&mut arkonis_data::Agent),
    {
        if let Some(agent) = self.registry.get_mut(id) {
            update(agent);
            provenance::stamp(agent, actor, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use arkonis_data::{Agent, ModelId, Topology};
    use chrono::Utc;

    fn council() -> Council {
        let agents = vec![
            Agent::new("hunter", ModelId::Grok, Role::Hunter, Topology::new("H", 1.0, &[])),
            Agent::new("tactical", ModelId::CopilotX, Role::Tactical, Topology::new("T", 1.0, &[])),
            Agent::new("warden", ModelId::BlackboxZero, Role::Warden, Topology::new("W", 1.0, &[])),
            Agent::new("orch", ModelId::Gpt4oOmni, Role::Orchestrator, Topology::new("O", 1.0, &[])),
        ];
        let mut config = AppConfig::default();
        config.simulation.seed = Some(3);
        Council::from_agents(config, agents)
    }

    fn message(sender: &str, receiver: &str, kind: MessageType, content: &str) -> AgentMessage {
        AgentMessage {
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            timestamp: Utc::now(),
            kind,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_alert_forces_blocking() {
        let mut council = council();
        council.handle_message("warden", message("hunter", "warden", MessageType::Alert, "breach"));
        let warden = council.agent("warden").unwrap();
        assert_eq!(warden.status, AgentStatus::Blocking);
        assert_eq!(warden.current_task, "Urgent alert from GROK-1.5. Prioritizing threat.");
    }

    #[test]
    fn test_report_ignored_by_unqualified_roles() {
        let mut council = council();
        council.handle_message("warden", message("hunter", "warden", MessageType::Report, "intel"));
        assert_eq!(council.shared_memory().raw_intel_count, 0);
        assert!(council.agent("hunter").unwrap().inbox.is_empty());
        assert_eq!(council.agent("warden").unwrap().status, AgentStatus::Coordinating);
    }

    #[test]
    fn test_report_acknowledged_by_orchestrator() {
        let mut council = council();
        council.handle_message("orch", message("hunter", "orch", MessageType::Report, "intel"));
        assert_eq!(council.shared_memory().raw_intel_count, 1);
        let reply = council.agent("hunter").unwrap().inbox.front().cloned().unwrap();
        assert_eq!(reply.kind, MessageType::StatusUpdate);
        assert_eq!(reply.content, "Report acknowledged. Coordinating further action.");
        assert_eq!(
            council.agent("orch").unwrap().current_task,
            "Acknowledged report from GROK-1.5."
        );
    }

    #[test]
    fn test_countermeasure_waits_for_omega() {
        let mut council = council();
        council.handle_message(
            "tactical",
            message("hunter", "tactical", MessageType::Request, "needs countermeasure"),
        );
        let reply = council.agent("hunter").unwrap().inbox.front().cloned().unwrap();
        assert!(reply.content.contains("awaiting PROTOCOL_OMEGA authorization"));
        assert_eq!(council.metrics().offensive_actions(), 0);
    }

    #[test]
    fn test_countermeasure_under_omega_strikes() {
        let mut council = council();
        council.set_directive(Directive::ProtocolOmega);
        council.handle_message(
            "tactical",
            message("hunter", "tactical", MessageType::Request, "needs countermeasure"),
        );

        let tactical = council.agent("tactical").unwrap();
        assert_eq!(tactical.status, AgentStatus::Offensive);
        assert!(tactical.efficiency >= 105.0);
        assert!(tactical.evolution_log[0].action.starts_with("OFFENSIVE_ACTION: "));
        assert_eq!(tactical.evolution_log[0].actor, "COPILOT-X");

        let memory = council.shared_memory();
        assert_eq!(memory.active_blocks, 1);
        assert_eq!(memory.verified_threats, 0);
        assert_eq!(council.metrics().offensive_actions(), 1);

        let report = council.agent("orch").unwrap().inbox.front().cloned().unwrap();
        assert_eq!(report.kind, MessageType::Report);
        assert!(report.content.starts_with("Initiated offensive countermeasure: "));
    }

    #[test]
    fn test_quiet_directives_never_strike() {
        for directive in [Directive::SilentWatch, Directive::TotalRecall, Directive::ActiveDefense] {
            let mut council = council();
            council.set_directive(directive);
            for _ in 0..50 {
                council.tick(&[]);
            }
            assert_eq!(council.metrics().offensive_actions(), 0, "{directive}");
        }
    }

    #[test]
    fn test_coordination_replies() {
        let mut council = council();
        council.handle_message("warden", message("orch", "warden", MessageType::Coordination, "sync"));
        let reply = council.agent("orch").unwrap().inbox.front().cloned().unwrap();
        assert_eq!(reply.content, "Coordination received and integrated.");
        assert!(council.shared_memory().global_coherence <= 1.0);
    }
}
