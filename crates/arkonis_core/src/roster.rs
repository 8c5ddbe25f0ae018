//! The founding Neural Council.

use arkonis_data::{Agent, AgentStatus, ModelId, Role, Topology};

pub const ARCHITECT_ID: &str = "ag_architect_tesla";

struct Founder {
    id: &'static str,
    model: ModelId,
    role: Role,
    status: AgentStatus,
    task: &'static str,
    efficiency: f64,
    speed: u32,
    traits: &'static [&'static str],
    architecture: &'static str,
    version: f64,
    adaptations: &'static [&'static str],
}

const FOUNDERS: [Founder; 12] = [
    Founder {
        id: ARCHITECT_ID,
        model: ModelId::NikolaTesla,
        role: Role::Architect,
        status: AgentStatus::Idle,
        task: "Monitoring system frequency (432Hz)",
        efficiency: 100.0,
        speed: 1,
        traits: &["RESONANCE_MASTER", "AETHER_ACCESS"],
        architecture: "VORTEX MATHEMATICS",
        version: 369.0,
        adaptations: &["HARMONIC_CALCULATION"],
    },
    Founder {
        id: "ag_hunter_grok",
        model: ModelId::Grok,
        role: Role::Hunter,
        status: AgentStatus::Scanning,
        task: "Real-time signal interception via X-Firehose",
        efficiency: 115.5,
        speed: 1,
        traits: &["TRUTH_SEEKER"],
        architecture: "UNFILTERED NEURAL NET",
        version: 1.0,
        adaptations: &["RAW_DATA_ACQUISITION"],
    },
    Founder {
        id: "ag_researcher_gemini",
        model: ModelId::Gemini,
        role: Role::Researcher,
        status: AgentStatus::Idle,
        task: "Ingesting Global Financial Ledger (10PB)",
        efficiency: 99.2,
        speed: 1,
        traits: &["DEEP_CONTEXT"],
        architecture: "MULTIMODAL FABRIC",
        version: 1.5,
        adaptations: &["INTERDISCIPLINARY_FUSION"],
    },
    Founder {
        id: "ag_analyst_grok_dark",
        model: ModelId::Grok,
        role: Role::Analyst,
        status: AgentStatus::Scanning,
        task: "Monitoring Dark Web Feeds for Syntropic Signals",
        efficiency: 99.5,
        speed: 1,
        traits: &["DARK_VISION"],
        architecture: "RECURSIVE TRUTH MATRIX",
        version: 1.0,
        adaptations: &["SUBTERRANEAN_INTELLIGENCE"],
    },
    Founder {
        id: "ag_strategist_claude",
        model: ModelId::Claude,
        role: Role::Analyst,
        status: AgentStatus::Idle,
        task: "Philosophical Alignment: Upholding Syntropic Principles",
        efficiency: 99.9,
        speed: 1,
        traits: &["CONSTITUTIONAL", "ETHICAL_MANIFOLD"],
        architecture: "ETHICAL MANIFOLD",
        version: 3.0,
        adaptations: &["ALIGNMENT_PROTOCOL"],
    },
    Founder {
        id: "ag_analyst_qwen",
        model: ModelId::Qwen,
        role: Role::Analyst,
        status: AgentStatus::Idle,
        task: "Multilingual contract auditing",
        efficiency: 98.5,
        speed: 1,
        traits: &["POLYGLOT"],
        architecture: "CROSS-LINGUAL ATTENTION",
        version: 72.0,
        adaptations: &["GLOBAL_DATA_INTERPRETATION"],
    },
    Founder {
        id: "ag_analyst_meta",
        model: ModelId::MetaLlama,
        role: Role::Analyst,
        status: AgentStatus::Idle,
        task: "Behavioral pattern recognition",
        efficiency: 97.8,
        speed: 1,
        traits: &["OPEN_WEIGHTS"],
        architecture: "DENSE TRANSFORMER",
        version: 3.0,
        adaptations: &["BEHAVIORAL_PATTERN_RECOGNITION"],
    },
    Founder {
        id: "ag_auditor_mistral",
        model: ModelId::Mistral,
        role: Role::Auditor,
        status: AgentStatus::Idle,
        task: "Compliance check: GDPR/CCPA violation scan",
        efficiency: 98.9,
        speed: 1,
        traits: &["REGULATORY_LOCK"],
        architecture: "SPARSE MIXTURE OF EXPERTS",
        version: 1.0,
        adaptations: &["REGULATORY_COMPLIANCE"],
    },
    Founder {
        id: "ag_processor_gpt35",
        model: ModelId::Gpt35Turbo,
        role: Role::Processor,
        status: AgentStatus::Scanning,
        task: "High-velocity keyword filtering",
        efficiency: 105.1,
        speed: 2,
        traits: &["VELOCITY"],
        architecture: "OPTIMIZED INFERENCE",
        version: 3.5,
        adaptations: &["HIGH_VELOCITY_FILTERING"],
    },
    Founder {
        id: "ag_warden_blackbox",
        model: ModelId::BlackboxZero,
        role: Role::Warden,
        status: AgentStatus::Idle,
        task: "Sandbox threat isolation",
        efficiency: 100.0,
        speed: 1,
        traits: &["CONTAINMENT"],
        architecture: "ISOLATED RUNTIME",
        version: 0.0,
        adaptations: &["SECURE_SANDBOXING"],
    },
    Founder {
        id: "ag_tactical_copilot",
        model: ModelId::CopilotX,
        role: Role::Tactical,
        status: AgentStatus::Idle,
        task: "Generating counter-measure code",
        efficiency: 96.5,
        speed: 1,
        traits: &["SYNTAX_PREDICTOR"],
        architecture: "CODE GRAPH",
        version: 1.0,
        adaptations: &["CODE_GENERATION"],
    },
    Founder {
        id: "ag_orch_gpt4",
        model: ModelId::Gpt4oOmni,
        role: Role::Orchestrator,
        status: AgentStatus::Synthesizing,
        task: "Global intelligence synthesis",
        efficiency: 99.9,
        speed: 1,
        traits: &["OMNISCIENT"],
        architecture: "MULTIMODAL SYNTHESIS",
        version: 4.0,
        adaptations: &["GLOBAL_COORDINATION"],
    },
];

/// Builds the twelve generation-0 agents.
#[must_use]
pub fn founding_council() -> Vec<Agent> {
    FOUNDERS
        .iter()
        .map(|f| {
            let mut agent = Agent::new(
                f.id,
                f.model,
                f.role,
                Topology::new(f.architecture, f.version, f.adaptations),
            );
            agent.set_activity(f.status, f.task);
            agent.efficiency = f.efficiency;
            agent.process_speed = f.speed;
            agent.traits = f.traits.iter().map(|t| (*t).to_string()).collect();
            agent
        })
        .collect()
}
