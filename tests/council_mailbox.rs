mod common;

use arkonis_data::{LogLevel, MessageType, Role};
use common::{AgentBuilder, CouncilBuilder};

fn relay_council() -> arkonis_core::Council {
    CouncilBuilder::empty()
        .with_seed(11)
        .with_agent(AgentBuilder::new("proc", Role::Processor).build())
        .with_agent(AgentBuilder::new("orch", Role::Orchestrator).build())
        .build()
}

#[test]
fn test_one_message_drained_per_tick_in_send_order() {
    let mut council = relay_council();
    for n in 1..=3 {
        assert!(council.send("proc", "orch", MessageType::Report, format!("report {n}")));
    }
    assert_eq!(council.agent("orch").unwrap().inbox.len(), 3);

    council.tick(&[]);
    let remaining: Vec<String> = council
        .agent("orch")
        .unwrap()
        .inbox
        .iter()
        .map(|m| m.content.clone())
        .collect();
    assert_eq!(remaining, vec!["report 2", "report 3"]);

    council.tick(&[]);
    council.tick(&[]);
    assert!(council.agent("orch").unwrap().inbox.is_empty());
    assert_eq!(council.shared_memory().raw_intel_count, 3);
}

#[test]
fn test_report_reply_lands_in_sender_inbox() {
    let mut council = relay_council();
    council.send("proc", "orch", MessageType::Report, "signal");
    council.tick(&[]);

    // proc acts before orch, so the acknowledgement waits for the next tick.
    let inbox = &council.agent("proc").unwrap().inbox;
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, MessageType::StatusUpdate);
    assert_eq!(inbox[0].sender_id, "orch");
}

#[test]
fn test_unknown_ids_are_dropped() {
    let mut council = relay_council();
    let journal_before = council.journal().len();

    assert!(!council.send("ghost", "orch", MessageType::Alert, "boo"));
    assert!(!council.send("orch", "ghost", MessageType::Alert, "boo"));

    assert!(council.agent("orch").unwrap().inbox.is_empty());
    assert_eq!(council.journal().len(), journal_before);
    assert_eq!(council.metrics().messages(), 0);
}

#[test]
fn test_delivery_is_journaled_under_sender() {
    let mut council = relay_council();
    council.send("proc", "orch", MessageType::Coordination, "align");

    let entry = council.journal().iter().next().unwrap();
    assert_eq!(entry.level, LogLevel::AgentComm);
    assert_eq!(entry.source, "GPT-3.5-TURBO");
    assert_eq!(entry.message, "[GPT-3.5-TURBO -> GPT-4o-OMNI] COORDINATION: align...");
    assert_eq!(council.metrics().messages(), 1);
}
