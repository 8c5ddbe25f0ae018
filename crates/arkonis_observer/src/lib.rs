//! # Arkonis Observer
//!
//! The language-chat boundary: lets an operator talk to a council agent in its
//! archetype's voice. Backend failures never reach the simulation; they degrade
//! to an archetype-flavored fallback line.

pub mod converser;
pub mod error;
pub mod persona;

pub use converser::{Converser, HeuristicConverser, HttpConverser};
pub use error::ConverseError;
pub use persona::{fallback_reply, persona_for, system_prompt, Persona};

use arkonis_data::{ChatTurn, PersonaContext};

pub const NEURAL_LINK_SEVERED: &str = "ERROR: Neural Link Severed.";

/// Talks to the agent described by `context`.
///
/// `None` means the agent no longer exists. Never fails: backend errors are
/// logged and replaced with the archetype's fallback reply.
pub async fn chat(
    converser: &dyn Converser,
    context: Option<&PersonaContext>,
    message: &str,
    history: &[ChatTurn],
) -> String {
    let Some(context) = context else {
        return NEURAL_LINK_SEVERED.to_string();
    };

    match converser.converse(context, message, history).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(agent = %context.agent.id, error = %err, "Chat backend failed");
            fallback_reply(context.agent.model, &err.to_string())
        }
    }
}
