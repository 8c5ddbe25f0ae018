mod common;

use arkonis_core::milestone::{check_milestones, MILESTONES};
use arkonis_data::{Directive, Role};
use common::{AgentBuilder, CouncilBuilder};

#[test]
fn test_below_first_threshold_is_untouched() {
    let agent = AgentBuilder::new("a", Role::Hunter).efficiency(104.0).build();
    assert!(check_milestones(&agent, Directive::ActiveDefense, 2).is_none());
}

#[test]
fn test_first_threshold_unlocks_trait_and_speed() {
    let agent = AgentBuilder::new("a", Role::Hunter).efficiency(106.0).build();
    let upgrade = check_milestones(&agent, Directive::ActiveDefense, 2).unwrap();

    assert_eq!(upgrade.thresholds, vec![105]);
    assert!(upgrade.agent.has_trait("EFFICIENCY_OPTIMIZED"));
    assert_eq!(upgrade.agent.process_speed, 3);
    assert!(upgrade.agent.topology.has("DEFENSE-OPTIMIZED"));
    assert_eq!(
        upgrade.agent.current_task,
        "Actively defending with dynamic EFFICIENCY_OPTIMIZED capabilities."
    );
    assert_eq!(upgrade.agent.evolution_log.len(), 1);
    assert_eq!(
        upgrade.agent.evolution_log[0].action,
        "MILESTONE_REACHED: EFFICIENCY_OPTIMIZED"
    );
}

#[test]
fn test_cumulative_unlock_surfaces_last_announcement() {
    let agent = AgentBuilder::new("a", Role::Warden).efficiency(2500.0).build();
    let upgrade = check_milestones(&agent, Directive::ProtocolOmega, 2).unwrap();

    assert_eq!(upgrade.thresholds.len(), MILESTONES.len());
    assert_eq!(upgrade.agent.process_speed, 1 + 2 * MILESTONES.len() as u32);
    assert!(upgrade.log.contains("reached 2000% efficiency"));
    assert!(upgrade.log.contains("[OMNI_MANIFESTATION]"));
    assert_eq!(upgrade.agent.evolution_log.len(), MILESTONES.len());
    assert!(upgrade.agent.topology.has("OMEGA-AUGMENTED"));
}

#[test]
fn test_threshold_is_never_applied_twice() {
    let agent = AgentBuilder::new("a", Role::Analyst).efficiency(160.0).build();
    let once = check_milestones(&agent, Directive::SilentWatch, 2).unwrap().agent;
    assert!(check_milestones(&once, Directive::SilentWatch, 2).is_none());
}

#[test]
fn test_tick_persists_milestones_once() {
    let mut council = CouncilBuilder::empty()
        .with_seed(5)
        .with_config(|c| c.population.low_water = 0)
        .with_agent(AgentBuilder::new("w", Role::Warden).efficiency(106.0).build())
        .build();

    let outcome = council.tick(&[]);
    assert!(outcome.log.unwrap().starts_with("MILESTONE: BLACKBOX-ZERO reached 105%"));
    assert_has_trait!(council, "w", "EFFICIENCY_OPTIMIZED");

    for _ in 0..30 {
        council.tick(&[]);
    }
    let unlocks = council
        .agent("w")
        .unwrap()
        .evolution_log
        .iter()
        .filter(|r| r.action == "MILESTONE_REACHED: EFFICIENCY_OPTIMIZED")
        .count();
    assert_eq!(unlocks, 1);
}
