//! Per-agent FIFO message delivery.

use crate::journal::Journal;
use crate::registry::AgentRegistry;
use arkonis_data::{AgentMessage, LogLevel, MessageType};
use chrono::Utc;

const PREVIEW_CHARS: usize = 100;

/// Appends a message to the receiver's inbox.
///
/// Unknown sender or receiver ids are logged and dropped. Returns whether the
/// message was delivered.
pub fn send(
    registry: &mut AgentRegistry,
    journal: &mut Journal,
    sender_id: &str,
    receiver_id: &str,
    kind: MessageType,
    content: impl Into<String>,
) -> bool {
    let Some(sender_name) = registry.get(sender_id).map(|a| a.name()) else {
        tracing::warn!(sender = sender_id, receiver = receiver_id, "Message sender not found");
        return false;
    };
    let Some(receiver) = registry.get_mut(receiver_id) else {
        tracing::warn!(sender = sender_id, receiver = receiver_id, "Message receiver not found");
        return false;
    };

    let content = content.into();
    let preview: String = content.chars().take(PREVIEW_CHARS).collect();
    let receiver_name = receiver.name();
    receiver.inbox.push_back(AgentMessage {
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        timestamp: Utc::now(),
        kind,
        content,
    });

    journal.record(
        LogLevel::AgentComm,
        sender_name,
        format!("[{sender_name} -> {receiver_name}] {kind}: {preview}..."),
    );
    true
}

/// Dequeues the oldest pending message for `agent_id`.
pub fn next_message(registry: &mut AgentRegistry, agent_id: &str) -> Option<AgentMessage> {
    registry.get_mut(agent_id)?.inbox.pop_front()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkonis_data::{Agent, ModelId, Role, Topology};

    fn registry() -> AgentRegistry {
        let mut registry = AgentRegistry::new(8);
        for id in ["a", "b"] {
            registry
                .insert(Agent::new(id, ModelId::Qwen, Role::Analyst, Topology::new("X", 1.0, &[])))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_fifo_per_receiver() {
        let mut registry = registry();
        let mut journal = Journal::new(16);
        for body in ["one", "two", "three"] {
            assert!(send(&mut registry, &mut journal, "a", "b", MessageType::Report, body));
        }
        let order: Vec<String> = std::iter::from_fn(|| next_message(&mut registry, "b"))
            .map(|m| m.content)
            .collect();
        assert_eq!(order, vec!["one", "two", "three"]);
        assert_eq!(journal.len(), 3);
    }

    #[test]
    fn test_unknown_receiver_dropped() {
        let mut registry = registry();
        let mut journal = Journal::new(16);
        assert!(!send(&mut registry, &mut journal, "a", "ghost", MessageType::Alert, "x"));
        assert!(!send(&mut registry, &mut journal, "ghost", "a", MessageType::Alert, "x"));
        assert!(registry.get("a").unwrap().inbox.is_empty());
        assert!(journal.is_empty());
    }
}
