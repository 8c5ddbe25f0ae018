//! Plain data model shared by the Arkonis engine, its collaborators and the driver.

pub mod agent;
pub mod intel;
pub mod journal;
pub mod memory;
pub mod message;
pub mod persona;

pub use agent::{Agent, AgentStatus, ModelId, ProvenanceRecord, Role, Topology};
pub use intel::{Entity, EntityStatus, RawRecord};
pub use journal::{LogLevel, SystemLog};
pub use memory::{Directive, SharedMemory};
pub use message::{AgentMessage, MessageType};
pub use persona::{ChatTurn, InboxDigest, PersonaContext, Speaker};
