use crate::agent::Agent;
use crate::memory::{Directive, SharedMemory};
use crate::message::MessageType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Summary of unread internal messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxDigest {
    pub unread: usize,
    pub latest_sender: String,
    pub latest_kind: MessageType,
    pub latest_content: String,
}

/// Everything a chat backend needs to speak as an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaContext {
    pub agent: Agent,
    pub directive: Directive,
    pub memory: SharedMemory,
    pub inbox: Option<InboxDigest>,
}
