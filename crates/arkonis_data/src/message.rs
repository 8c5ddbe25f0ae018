use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Report,
    Request,
    Coordination,
    Alert,
    StatusUpdate,
}

impl MessageType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Report => "REPORT",
            MessageType::Request => "REQUEST",
            MessageType::Coordination => "COORDINATION",
            MessageType::Alert => "ALERT",
            MessageType::StatusUpdate => "STATUS_UPDATE",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inter-agent message. Never mutated after it is enqueued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageType,
    pub content: String,
}
