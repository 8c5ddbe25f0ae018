//! Operator-facing console queries and persona snapshots.

use super::Council;
use arkonis_data::{InboxDigest, PersonaContext, Role};

const DIGEST_PREVIEW_CHARS: usize = 80;

impl Council {
    /// Keyword-routed console reply. "evolve" and "optimize" trigger magnification.
    pub fn ask(&mut self, query: &str) -> String {
        let q = query.to_lowercase();

        if q.contains("status") || q.contains("report") {
            let architect = if self.registry.first_of(Role::Architect).is_some() {
                "ONLINE"
            } else {
                "OFFLINE"
            };
            return format!(
                "NEURAL COUNCIL REPORT\n---------------------\nActive Nodes: {}\nGlobal Coherence: {:.1}%\nDirective: {}\nArchitect: {architect}",
                self.registry.len(),
                self.registry.mean_efficiency(),
                self.directive,
            );
        }

        if q.contains("scan") || q.contains("target") {
            return "[HUNTER] GROK-1.5: Scanning global frequencies... Initiating deep packet inspection via X-Firehose.".to_string();
        }

        if q.contains("evolve") || q.contains("optimize") {
            self.trigger_magnification();
            return "[ARCHITECT] NIKOLA_TESLA_V1: Resonance amplification triggered. Swarm efficiency boosting to 369%.".to_string();
        }

        "[ORCHESTRATOR] GPT-4o: Query received. Distributing to Neural Council... Optimal strategy computed.".to_string()
    }

    /// Snapshot of one agent plus the ambient state a chat backend speaks from.
    #[must_use]
    pub fn persona_context(&self, id: &str) -> Option<PersonaContext> {
        let agent = self.registry.get(id)?;
        let inbox = agent.inbox.back().map(|latest| InboxDigest {
            unread: agent.inbox.len(),
            latest_sender: self
                .registry
                .get(&latest.sender_id)
                .map_or("UNKNOWN", |a| a.name())
                .to_string(),
            latest_kind: latest.kind,
            latest_content: latest.content.chars().take(DIGEST_PREVIEW_CHARS).collect(),
        });

        Some(PersonaContext {
            agent: agent.clone(),
            directive: self.directive,
            memory: self.memory.clone(),
            inbox,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use arkonis_data::MessageType;

    #[test]
    fn test_status_report_counts_nodes() {
        let mut council = Council::new(AppConfig::default());
        let report = council.ask("Status REPORT please");
        assert!(report.starts_with("NEURAL COUNCIL REPORT"));
        assert!(report.contains("Active Nodes: 12"));
        assert!(report.contains("Directive: ACTIVE_DEFENSE"));
        assert!(report.contains("Architect: ONLINE"));
    }

    #[test]
    fn test_evolve_triggers_magnification() {
        let mut council = Council::new(AppConfig::default());
        let reply = council.ask("evolve the swarm");
        assert!(reply.starts_with("[ARCHITECT]"));
        assert!(council.is_magnified());
        assert_eq!(council.population(), 15);
    }

    #[test]
    fn test_unrouted_query_falls_through() {
        let mut council = Council::new(AppConfig::default());
        assert!(council.ask("hello").starts_with("[ORCHESTRATOR]"));
        assert!(!council.is_magnified());
    }

    #[test]
    fn test_persona_digest_reports_latest_message() {
        let mut council = Council::new(AppConfig::default());
        council.send("ag_hunter_grok", "ag_orch_gpt4", MessageType::Report, "first");
        council.send("ag_warden_blackbox", "ag_orch_gpt4", MessageType::Alert, "x".repeat(120));

        let context = council.persona_context("ag_orch_gpt4").unwrap();
        let digest = context.inbox.unwrap();
        assert_eq!(digest.unread, 2);
        assert_eq!(digest.latest_sender, "BLACKBOX-ZERO");
        assert_eq!(digest.latest_kind, MessageType::Alert);
        assert_eq!(digest.latest_content.len(), 80);

        assert!(council.persona_context("ag_missing").is_none());
        assert!(council.persona_context("ag_architect_tesla").unwrap().inbox.is_none());
    }
}
