//! Content hashing and provenance stamping.

use arkonis_data::{Agent, ModelId, ProvenanceRecord, Role, Topology};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

pub const SYSTEM_ORCHESTRATOR: &str = "SYSTEM_ORCHESTRATOR";
pub const SYSTEM_KERNEL: &str = "SYSTEM_KERNEL";

/// Canonical projection of an agent used for hashing.
#[derive(Serialize)]
struct AgentDigest<'a> {
    id: &'a str,
    name: ModelId,
    role: Role,
    efficiency: f64,
    process_speed: u32,
    traits: &'a BTreeSet<String>,
    topology: &'a Topology,
}

/// SHA-256 of `payload`, hex encoded.
#[must_use]
pub fn content_hash(payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hex::encode(hasher.finalize())
}

/// Deterministic digest of an agent's observable state.
#[must_use]
pub fn agent_hash(agent: &Agent) -> String {
    let digest = AgentDigest {
        id: &agent.id,
        name: agent.model,
        role: agent.role,
        efficiency: agent.efficiency,
        process_speed: agent.process_speed,
        traits: &agent.traits,
        topology: &agent.topology,
    };
    // Serializing plain strings and numbers cannot fail.
    let json = serde_json::to_vec(&digest).unwrap_or_default();
    content_hash(&json)
}

#[must_use]
pub fn record(actor: &str, action: impl Into<String>, content_hash: String) -> ProvenanceRecord {
    let timestamp = Utc::now();
    ProvenanceRecord {
        timestamp,
        actor: actor.to_string(),
        action: action.into(),
        content_hash,
        signature: format!("{actor}_SIG_{}", timestamp.timestamp_millis()),
    }
}

/// Hashes the agent's current state and prepends the record to its evolution log.
///
/// Callers mutate first and stamp second while still holding `&mut Agent`,
/// so no other write can land in between.
pub fn stamp(agent: &mut Agent, actor: &str, action: impl Into<String>) {
    let hash = agent_hash(agent);
    agent.evolution_log.push_front(record(actor, action, hash));
}
