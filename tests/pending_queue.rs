mod common;

use arkonis_core::roster::ARCHITECT_ID;
use arkonis_core::Council;
use arkonis_data::{AgentStatus, Entity, EntityStatus, RawRecord, Role};
use common::{AgentBuilder, CouncilBuilder};
use std::time::{Duration, Instant};

fn pending(council: &mut Council, recipient: &str, confidence: f64) -> Entity {
    let mut entity = council.ingest(RawRecord {
        id: Some(format!("ent_{}", recipient.to_lowercase())),
        recipient: recipient.to_string(),
        amount: 10.0,
        description: "OFFICE".to_string(),
        category: "SUPPLIES".to_string(),
    });
    entity.status = EntityStatus::PendingReview;
    entity.confidence_score = confidence;
    entity
}

#[test]
fn test_architect_resolves_queue_by_confidence() {
    let mut council = CouncilBuilder::new().build();
    let items = vec![
        pending(&mut council, "ANDURIL", 0.85),
        pending(&mut council, "PALANTIR", 0.75),
        pending(&mut council, "CLEARVIEW", 0.65),
    ];

    let outcome = council.process_pending_queue(&items);

    assert_eq!(outcome.updated.len(), 2);
    assert_eq!(outcome.updated[0].id, "ent_anduril");
    assert_eq!(outcome.updated[0].status, EntityStatus::Blocked);
    assert_eq!(outcome.updated[1].id, "ent_clearview");
    assert_eq!(outcome.updated[1].status, EntityStatus::Verified);
    assert_eq!(
        outcome.logs,
        vec![
            "NIKOLA_TESLA_V1 BLOCKED ANDURIL".to_string(),
            "NIKOLA_TESLA_V1 VERIFIED CLEARVIEW".to_string(),
        ]
    );

    let record = &outcome.updated[0].provenance[0];
    assert_eq!(record.actor, "NIKOLA_TESLA_V1");
    assert_eq!(record.action, "STATUS_CHANGE_TO_BLOCKED");
    assert_eq!(outcome.updated[0].provenance.len(), 2);
}

#[test]
fn test_non_pending_items_are_ignored() {
    let mut council = CouncilBuilder::new().build();
    let mut done = pending(&mut council, "PALANTIR", 0.95);
    done.status = EntityStatus::Verified;

    let outcome = council.process_pending_queue(&[done]);
    assert!(outcome.updated.is_empty());
    assert!(outcome.logs.is_empty());
}

#[test]
fn test_architect_stands_down_after_delay() {
    let mut council = CouncilBuilder::new().build();
    let start = Instant::now();

    council.process_pending_queue_at(&[], start);
    assert_status!(council, ARCHITECT_ID, AgentStatus::Magnifying);
    assert_eq!(
        council.agent(ARCHITECT_ID).unwrap().current_task,
        "Batch processing verification queue via Resonance..."
    );

    assert_eq!(council.fire_due(start + Duration::from_millis(1_999)), 0);
    assert_status!(council, ARCHITECT_ID, AgentStatus::Magnifying);
    assert_eq!(council.fire_due(start + Duration::from_millis(2_001)), 1);
    assert_status!(council, ARCHITECT_ID, AgentStatus::Idle);
    assert_eq!(
        council.agent(ARCHITECT_ID).unwrap().current_task,
        "Monitoring system frequency (432Hz)"
    );
}

#[test]
fn test_stand_down_waits_out_magnification() {
    let mut council = CouncilBuilder::new().with_seed(4).build();
    let start = Instant::now();

    council.trigger_magnification_at(start);
    council.process_pending_queue_at(&[], start);
    council.fire_due(start + Duration::from_millis(2_001));
    assert_status!(council, ARCHITECT_ID, AgentStatus::Magnifying);
    assert!(council.is_magnified());
}

#[test]
fn test_queue_without_architect_still_resolves() {
    let mut council = CouncilBuilder::empty()
        .with_agent(AgentBuilder::new("a", Role::Analyst).build())
        .build();
    let item = pending(&mut council, "PALANTIR", 0.9);

    let outcome = council.process_pending_queue(&[item]);
    assert_eq!(outcome.updated.len(), 1);
    assert_eq!(outcome.logs[0], "NIKOLA_TESLA_V1 BLOCKED PALANTIR");
    assert!(council.schedule().is_empty());
}
