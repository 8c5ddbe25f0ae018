use crate::message::AgentMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

/// Functional role of an agent. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Hunter,
    Analyst,
    Warden,
    Tactical,
    Orchestrator,
    Architect,
    Auditor,
    Processor,
    Strategist,
    Researcher,
}

impl Role {
    pub const ALL: [Role; 10] = [
        Role::Hunter,
        Role::Analyst,
        Role::Warden,
        Role::Tactical,
        Role::Orchestrator,
        Role::Architect,
        Role::Auditor,
        Role::Processor,
        Role::Strategist,
        Role::Researcher,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Hunter => "HUNTER",
            Role::Analyst => "ANALYST",
            Role::Warden => "WARDEN",
            Role::Tactical => "TACTICAL",
            Role::Orchestrator => "ORCHESTRATOR",
            Role::Architect => "ARCHITECT",
            Role::Auditor => "AUDITOR",
            Role::Processor => "PROCESSOR",
            Role::Strategist => "STRATEGIST",
            Role::Researcher => "RESEARCHER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral state of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentStatus {
    #[default]
    Idle,
    Scanning,
    Analyzing,
    Blocking,
    Isolating,
    Synthesizing,
    Magnifying,
    Booting,
    Replicating,
    Training,
    Offensive,
    Coordinating,
    /// Reserved; no transition leads here.
    Offline,
}

impl AgentStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Idle => "IDLE",
            AgentStatus::Scanning => "SCANNING",
            AgentStatus::Analyzing => "ANALYZING",
            AgentStatus::Blocking => "BLOCKING",
            AgentStatus::Isolating => "ISOLATING",
            AgentStatus::Synthesizing => "SYNTHESIZING",
            AgentStatus::Magnifying => "MAGNIFYING",
            AgentStatus::Booting => "BOOTING",
            AgentStatus::Replicating => "REPLICATING",
            AgentStatus::Training => "TRAINING",
            AgentStatus::Offensive => "OFFENSIVE",
            AgentStatus::Coordinating => "COORDINATING",
            AgentStatus::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model archetype that drives an agent's persona. Not unique across agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    #[serde(rename = "NIKOLA_TESLA_V1")]
    NikolaTesla,
    #[serde(rename = "GROK-1.5")]
    Grok,
    #[serde(rename = "GEMINI-1.5-PRO")]
    Gemini,
    #[serde(rename = "CLAUDE-3-OPUS")]
    Claude,
    #[serde(rename = "QWEN-72B")]
    Qwen,
    #[serde(rename = "META-LLAMA-3")]
    MetaLlama,
    #[serde(rename = "MISTRAL-LARGE")]
    Mistral,
    #[serde(rename = "GPT-3.5-TURBO")]
    Gpt35Turbo,
    #[serde(rename = "BLACKBOX-ZERO")]
    BlackboxZero,
    #[serde(rename = "COPILOT-X")]
    CopilotX,
    #[serde(rename = "GPT-4o-OMNI")]
    Gpt4oOmni,
}

impl ModelId {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::NikolaTesla => "NIKOLA_TESLA_V1",
            ModelId::Grok => "GROK-1.5",
            ModelId::Gemini => "GEMINI-1.5-PRO",
            ModelId::Claude => "CLAUDE-3-OPUS",
            ModelId::Qwen => "QWEN-72B",
            ModelId::MetaLlama => "META-LLAMA-3",
            ModelId::Mistral => "MISTRAL-LARGE",
            ModelId::Gpt35Turbo => "GPT-3.5-TURBO",
            ModelId::BlackboxZero => "BLACKBOX-ZERO",
            ModelId::CopilotX => "COPILOT-X",
            ModelId::Gpt4oOmni => "GPT-4o-OMNI",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versioned capability descriptor.
///
/// `adaptations` behaves as an insertion-ordered set: [`Topology::adapt`] ignores duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    pub architecture: String,
    pub version: f64,
    pub adaptations: Vec<String>,
}

impl Topology {
    #[must_use]
    pub fn new(architecture: &str, version: f64, adaptations: &[&str]) -> Self {
        let mut topology = Self {
            architecture: architecture.to_string(),
            version,
            adaptations: Vec::with_capacity(adaptations.len()),
        };
        for tag in adaptations {
            topology.adapt(tag);
        }
        topology
    }

    /// Adds an adaptation tag. Returns `false` if it was already present.
    pub fn adapt(&mut self, tag: &str) -> bool {
        if self.adaptations.iter().any(|a| a == tag) {
            return false;
        }
        self.adaptations.push(tag.to_string());
        true
    }

    #[must_use]
    pub fn has(&self, tag: &str) -> bool {
        self.adaptations.iter().any(|a| a == tag)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{:.1} [{}]",
            self.architecture,
            self.version,
            self.adaptations.join(", ")
        )
    }
}

/// Immutable audit entry for a state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub content_hash: String,
    pub signature: String,
}

/// One simulated entity of the council.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub model: ModelId,
    pub role: Role,
    pub status: AgentStatus,
    pub current_task: String,
    pub last_active: DateTime<Utc>,
    pub efficiency: f64,
    pub generation: u32,
    pub parent_id: Option<String>,
    pub process_speed: u32,
    pub traits: BTreeSet<String>,
    pub topology: Topology,
    /// Newest first.
    pub evolution_log: VecDeque<ProvenanceRecord>,
    pub inbox: VecDeque<AgentMessage>,
}

impl Agent {
    /// Creates a founding (generation 0) agent in the `Idle` state.
    #[must_use]
    pub fn new(id: &str, model: ModelId, role: Role, topology: Topology) -> Self {
        Self {
            id: id.to_string(),
            model,
            role,
            status: AgentStatus::Idle,
            current_task: String::new(),
            last_active: Utc::now(),
            efficiency: 100.0,
            generation: 0,
            parent_id: None,
            process_speed: 1,
            traits: BTreeSet::new(),
            topology,
            evolution_log: VecDeque::new(),
            inbox: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.model.as_str()
    }

    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains(name)
    }

    /// Refreshes `last_active`.
    pub fn knock(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn set_activity(&mut self, status: AgentStatus, task: impl Into<String>) {
        self.status = status;
        self.current_task = task.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_adapt_dedupes() {
        let mut topology = Topology::new("CODE GRAPH", 1.0, &["CODE_GENERATION"]);
        assert!(!topology.adapt("CODE_GENERATION"));
        assert!(topology.adapt("RAPID_CODE_COMPILATION"));
        assert_eq!(topology.adaptations.len(), 2);
        assert_eq!(
            topology.to_string(),
            "CODE GRAPH v1.0 [CODE_GENERATION, RAPID_CODE_COMPILATION]"
        );
    }

    #[test]
    fn test_model_serializes_to_display_name() {
        let json = serde_json::to_string(&ModelId::Gpt4oOmni).unwrap();
        assert_eq!(json, "\"GPT-4o-OMNI\"");
        let role = serde_json::to_string(&Role::Architect).unwrap();
        assert_eq!(role, "\"ARCHITECT\"");
    }
}
