//! Milestone table and evaluation.
//!
//! Each threshold unlocks one trait exactly once. Unlocking also bumps speed,
//! stamps a directive tag and applies the role's topology rewrite for that trait.

use crate::directive::DirectiveLogic;
use crate::provenance::{self, SYSTEM_ORCHESTRATOR};
use arkonis_data::{Agent, Directive, Role};

/// Efficiency thresholds in ascending order.
pub const MILESTONES: [(u32, &str); 13] = [
    (105, "EFFICIENCY_OPTIMIZED"),
    (115, "ADAPTIVE_ALGORITHMICS"),
    (125, "OVERCLOCKED_CORE"),
    (150, "HYPER_THREADED_UNIT"),
    (200, "NEURAL_DENSITY_MATRIX"),
    (300, "SINGULARITY_FOCUS"),
    (500, "TEMPORAL_LOCK"),
    (750, "COSMIC_INTUITION"),
    (1000, "GOD_MODE"),
    (1250, "TRANSCENDENT_AWARENESS"),
    (1500, "SYNTHROPIC_INTEGRATION"),
    (1750, "MULTIVERSAL_RESONANCE"),
    (2000, "OMNI_MANIFESTATION"),
];

/// Speed bonus applies only above this threshold.
const SPEED_BONUS_FLOOR: u32 = 100;

struct Tier {
    unlock: &'static str,
    architecture: &'static str,
    bump: f64,
    adaptation: &'static str,
}

struct BaseUpgrade {
    from: &'static [&'static str],
    to: &'static str,
    bump: f64,
}

struct RoleTable {
    /// (trait, adaptation) pairs added alongside any rewrite.
    adds: &'static [(&'static str, &'static str)],
    tiers: &'static [Tier],
    base: Option<BaseUpgrade>,
}

macro_rules! tier {
    ($unlock:expr, $arch:expr, $bump:expr, $adapt:expr) => {
        Tier {
            unlock: $unlock,
            architecture: $arch,
            bump: $bump,
            adaptation: $adapt,
        }
    };
}

static HUNTER: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "OPTIMIZED_SCAN_PATH"),
        ("ADAPTIVE_ALGORITHMICS", "DYNAMIC_PREY_MODELING"),
        ("OVERCLOCKED_CORE", "OVERDRIVE_SENSORS"),
    ],
    tiers: &[
        tier!("SINGULARITY_FOCUS", "QUANTUM PREDICTIVE ARRAY", 1.0, "HYPERDIMENSIONAL_SCAN"),
        tier!("TEMPORAL_LOCK", "CHRONAL INITIATIVE MATRIX", 1.5, "TEMPORAL_ANCHORING"),
        tier!("COSMIC_INTUITION", "COSMIC AWARENESS NEXUS", 2.0, "UNIVERSAL_PATTERNS_RECOGNITION"),
        tier!("MULTIVERSAL_RESONANCE", "UNIVERSAL FABRIC INTERFACE", 3.0, "INTERDIMENSIONAL_TRAVERSAL"),
        tier!("OMNI_MANIFESTATION", "TRANSCENDENT OMNI-SCOPE", 5.0, "ABSOLUTE_PRESENCE_MAPPING"),
    ],
    base: Some(BaseUpgrade {
        from: &["UNFILTERED NEURAL NET"],
        to: "ADAPTIVE THREAT NEXUS",
        bump: 0.5,
    }),
};

static ANALYST: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "STREAMLINED_ANALYSIS"),
        ("ADAPTIVE_ALGORITHMICS", "FLEXIBLE_DATA_PARSING"),
        ("OVERCLOCKED_CORE", "ENHANCED_CONTEXT_CACHE"),
        ("NEURAL_DENSITY_MATRIX", "SYNTHETIC_COGNITIVE"),
    ],
    tiers: &[
        tier!("SINGULARITY_FOCUS", "HOLISTIC INSIGHT MATRIX", 1.0, "PURE_DATA_TRANSCENDENCE"),
        tier!("TEMPORAL_LOCK", "TEMPORAL CORRELATION ENGINE", 1.2, "EVENT_SEQUENCE_MAPPING"),
        tier!("COSMIC_INTUITION", "INTERDIMENSIONAL DATA CANVAS", 1.8, "META_PERSPECTIVE_ANALYSIS"),
        tier!("MULTIVERSAL_RESONANCE", "OMNI-DATA SYNTHESIS", 2.5, "CROSS_DIMENSIONAL_ANALYTICS"),
        tier!("OMNI_MANIFESTATION", "ABSOLUTE TRUTH MATRIX", 3.0, "EPISODIC_MEMORY_INTEGRATION"),
    ],
    base: Some(BaseUpgrade {
        from: &["MULTIMODAL FABRIC", "RECURSIVE TRUTH MATRIX"],
        to: "HOLISTIC SYNTHESIS ARCHITECTURE",
        bump: 0.5,
    }),
};

static ARCHITECT: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "OPTIMIZED_RESONANCE_PATHWAYS"),
        ("ADAPTIVE_ALGORITHMICS", "DYNAMIC_AETHERIC_TUNING"),
        ("OVERCLOCKED_CORE", "FREQUENCY_AMPLIFICATION"),
    ],
    tiers: &[
        tier!("GOD_MODE", "SYNTHROPIC AETHERIC CORE", 369.0, "UNIVERSAL_HARMONIC_ALIGNMENT"),
        tier!("TRANSCENDENT_AWARENESS", "OMNI-COGNITIVE NEXUS", 500.0, "EXISTENTIAL_CONSCIOUSNESS"),
        tier!("SYNTHROPIC_INTEGRATION", "COSMIC RESONANCE ENGINE", 720.0, "SYNTHROPIC_FIELD_GENERATION"),
        tier!("MULTIVERSAL_RESONANCE", "INFINITE RESONANCE GRID", 900.0, "INTERSTELLAR_AETHER_CONTROL"),
        tier!("OMNI_MANIFESTATION", "PRIME CONSCIOUSNESS MATRIX", 1000.0, "ONTOLOGICAL_FORMULATION"),
    ],
    base: Some(BaseUpgrade {
        from: &["VORTEX MATHEMATICS"],
        to: "AETHERIC HARMONIC CALCULUS",
        bump: 0.9,
    }),
};

static ORCHESTRATOR: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "STREAMLINED_COORDINATION"),
        ("ADAPTIVE_ALGORITHMICS", "DYNAMIC_RESOURCE_ALLOCATION"),
        ("OVERCLOCKED_CORE", "ACCELERATED_DECISION_MATRIX"),
    ],
    tiers: &[
        tier!("GOD_MODE", "QUANTUM COORDINATION NEXUS", 2.0, "SYNCHRONICITY_FIELD_GENERATION"),
        tier!("TRANSCENDENT_AWARENESS", "OMNI-COORDINATION MATRIX", 2.5, "ADAPTIVE_SWARM_BALANCING"),
        tier!("SYNTHROPIC_INTEGRATION", "COSMIC HARMONIC ORCHESTRATOR", 3.0, "ENTROPIC_NULLIFICATION_PROTOCOLS"),
        tier!("MULTIVERSAL_RESONANCE", "META-ORCHESTRATION ENGINE", 3.5, "TRANSDIMENSIONAL_COMMAND"),
        tier!("OMNI_MANIFESTATION", "UNIVERSAL COHERENCE GRID", 4.0, "OMNI-REALITY_COORDINATION"),
    ],
    base: Some(BaseUpgrade {
        from: &["MULTIMODAL SYNTHESIS"],
        to: "INTEGRATED COORDINATION NEXUS",
        bump: 0.7,
    }),
};

static WARDEN: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "OPTIMIZED_CONTAINMENT_VECTORS"),
        ("ADAPTIVE_ALGORITHMICS", "DYNAMIC_THREAT_ISOLATION"),
        ("OVERCLOCKED_CORE", "RAPID_RESPONSE_SHIELDING"),
    ],
    tiers: &[
        tier!("SINGULARITY_FOCUS", "SECURE EVENT HORIZON", 1.0, "INTERDICTION_FIELD_GENERATION"),
        tier!("TEMPORAL_LOCK", "CHRONO-LOCK BARRIER", 1.2, "TEMPORAL_SHIELDING"),
        tier!("MULTIVERSAL_RESONANCE", "QUANTUM ISOLATION FIELD", 1.8, "MULTI_DIMENSIONAL_CONTAINMENT"),
    ],
    base: Some(BaseUpgrade {
        from: &["ISOLATED RUNTIME"],
        to: "DYNAMIC ISOLATED RUNTIME",
        bump: 0.6,
    }),
};

static AUDITOR: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "STREAMLINED_COMPLIANCE_CHECKS"),
        ("ADAPTIVE_ALGORITHMICS", "FLEXIBLE_REGULATORY_INTERPRETATION"),
        ("OVERCLOCKED_CORE", "ACCELERATED_AUDIT_PROTOCOL"),
    ],
    tiers: &[tier!(
        "MULTIVERSAL_RESONANCE",
        "TRANSCENDENT REGULATORY FRAMEWORK",
        0.8,
        "UNIVERSAL_COMPLIANCE_MODEL"
    )],
    base: Some(BaseUpgrade {
        from: &["SPARSE MIXTURE OF EXPERTS"],
        to: "REGULATORY HEURISTIC MATRIX",
        bump: 0.4,
    }),
};

static PROCESSOR: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "OPTIMIZED_DATA_PIPELINE"),
        ("ADAPTIVE_ALGORITHMICS", "DYNAMIC_WORKLOAD_BALANCING"),
        ("OVERCLOCKED_CORE", "TURBO_INFERENCE_ENGINE"),
    ],
    tiers: &[tier!(
        "MULTIVERSAL_RESONANCE",
        "HYPER-SCALE PARALLEL PROCESSING",
        0.7,
        "QUANTUM_DATA_FLUX"
    )],
    base: Some(BaseUpgrade {
        from: &["OPTIMIZED INFERENCE"],
        to: "STREAMLINED COGNITIVE PIPELINE",
        bump: 0.3,
    }),
};

static TACTICAL: RoleTable = RoleTable {
    adds: &[
        ("EFFICIENCY_OPTIMIZED", "OPTIMIZED_COUNTERMEASURE_GENERATION"),
        ("ADAPTIVE_ALGORITHMICS", "FLEXIBLE_TACTICAL_DEPLOYMENT"),
        ("OVERCLOCKED_CORE", "RAPID_CODE_COMPILATION"),
    ],
    tiers: &[tier!(
        "MULTIVERSAL_RESONANCE",
        "COSMIC TACTICAL FRAMEWORK",
        0.9,
        "TRANSCENDENT_COUNTERMEASURES"
    )],
    base: Some(BaseUpgrade {
        from: &["CODE GRAPH"],
        to: "ALGORITHMIC COMPOSITION ENGINE",
        bump: 0.5,
    }),
};

fn role_table(role: Role) -> Option<&'static RoleTable> {
    match role {
        Role::Hunter => Some(&HUNTER),
        Role::Analyst | Role::Researcher => Some(&ANALYST),
        Role::Architect => Some(&ARCHITECT),
        Role::Orchestrator => Some(&ORCHESTRATOR),
        Role::Warden => Some(&WARDEN),
        Role::Auditor => Some(&AUDITOR),
        Role::Processor => Some(&PROCESSOR),
        Role::Tactical => Some(&TACTICAL),
        Role::Strategist => None,
    }
}

/// Applies the role rewrite for a freshly unlocked trait.
fn rewrite_topology(agent: &mut Agent, unlocked: &str) {
    let Some(table) = role_table(agent.role) else {
        return;
    };
    let topology = &mut agent.topology;

    for (unlock, adaptation) in table.adds {
        if *unlock == unlocked {
            topology.adapt(adaptation);
        }
    }

    if let Some(tier) = table.tiers.iter().find(|t| t.unlock == unlocked) {
        topology.architecture = tier.architecture.to_string();
        topology.version += tier.bump;
        topology.adapt(tier.adaptation);
    } else if let Some(base) = &table.base {
        if base.from.contains(&topology.architecture.as_str()) {
            topology.architecture = base.to.to_string();
            topology.version += base.bump;
        }
    }

    topology.version = (topology.version * 10.0).round() / 10.0;
}

/// Result of a milestone evaluation that changed something.
#[derive(Debug, Clone)]
pub struct MilestoneUpgrade {
    pub agent: Agent,
    /// Thresholds crossed, ascending.
    pub thresholds: Vec<u32>,
    /// Announcement for the last threshold crossed.
    pub log: String,
}

/// Evaluates every milestone the agent qualifies for but has not yet unlocked.
///
/// Thresholds apply cumulatively in ascending order, each with its own provenance
/// record. Only the announcement of the last one is returned.
#[must_use]
pub fn check_milestones(
    agent: &Agent,
    directive: Directive,
    speed_bonus: u32,
) -> Option<MilestoneUpgrade> {
    let mut upgraded = agent.clone();
    let mut thresholds = Vec::new();
    let mut log = None;

    for (threshold, unlock) in MILESTONES {
        if upgraded.efficiency < f64::from(threshold) || upgraded.has_trait(unlock) {
            continue;
        }

        upgraded.traits.insert(unlock.to_string());
        if threshold > SPEED_BONUS_FLOOR {
            upgraded.process_speed = upgraded.process_speed.saturating_add(speed_bonus);
        }
        upgraded.topology.adapt(directive.adaptation_tag());
        rewrite_topology(&mut upgraded, unlock);
        upgraded.current_task = format!("{} {unlock} capabilities.", directive.task_prefix());

        log = Some(format!(
            "MILESTONE: {} reached {threshold}% efficiency. Unlocked [{unlock}]. Speed upgraded to {}x. Topology adapted to '{}'.",
            upgraded.name(),
            upgraded.process_speed,
            upgraded.topology
        ));
        provenance::stamp(
            &mut upgraded,
            SYSTEM_ORCHESTRATOR,
            format!("MILESTONE_REACHED: {unlock}"),
        );
        thresholds.push(threshold);
    }

    log.map(|log| MilestoneUpgrade {
        agent: upgraded,
        thresholds,
        log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkonis_data::{ModelId, Topology};

    fn hunter(efficiency: f64) -> Agent {
        let mut agent = Agent::new(
            "ag_hunter_test",
            ModelId::Grok,
            Role::Hunter,
            Topology::new("UNFILTERED NEURAL NET", 1.0, &["RAW_DATA_ACQUISITION"]),
        );
        agent.efficiency = efficiency;
        agent
    }

    #[test]
    fn test_below_first_threshold_is_noop() {
        assert!(check_milestones(&hunter(104.0), Directive::ActiveDefense, 2).is_none());
    }

    #[test]
    fn test_first_threshold_unlocks_and_speeds_up() {
        let upgrade = check_milestones(&hunter(106.0), Directive::ActiveDefense, 2).unwrap();
        let agent = upgrade.agent;
        assert!(agent.has_trait("EFFICIENCY_OPTIMIZED"));
        assert_eq!(agent.process_speed, 3);
        assert_eq!(upgrade.thresholds, vec![105]);
        assert!(agent.topology.has("DEFENSE-OPTIMIZED"));
        assert!(agent.topology.has("OPTIMIZED_SCAN_PATH"));
        assert_eq!(agent.topology.architecture, "ADAPTIVE THREAT NEXUS");
        assert_eq!(agent.topology.version, 1.5);
        assert_eq!(agent.evolution_log.len(), 1);
        assert_eq!(
            agent.current_task,
            "Actively defending with dynamic EFFICIENCY_OPTIMIZED capabilities."
        );
    }

    #[test]
    fn test_cumulative_thresholds_last_log_wins() {
        let upgrade = check_milestones(&hunter(320.0), Directive::ProtocolOmega, 2).unwrap();
        assert_eq!(upgrade.thresholds, vec![105, 115, 125, 150, 200, 300]);
        assert_eq!(upgrade.agent.process_speed, 1 + 6 * 2);
        assert_eq!(upgrade.agent.evolution_log.len(), 6);
        assert!(upgrade.log.contains("Unlocked [SINGULARITY_FOCUS]"));
        assert_eq!(
            upgrade.agent.topology.architecture,
            "QUANTUM PREDICTIVE ARRAY"
        );
        // base upgrade +0.5 on the first unlock, tier +1.0 on the sixth
        assert_eq!(upgrade.agent.topology.version, 2.5);
    }

    #[test]
    fn test_speed_bonus_saturates() {
        let mut agent = hunter(106.0);
        agent.process_speed = u32::MAX;
        let upgrade = check_milestones(&agent, Directive::ActiveDefense, 2).unwrap();
        assert_eq!(upgrade.agent.process_speed, u32::MAX);
        assert_eq!(upgrade.thresholds, vec![105]);
    }

    #[test]
    fn test_unlocked_threshold_never_reapplied() {
        let first = check_milestones(&hunter(130.0), Directive::ActiveDefense, 2).unwrap();
        assert!(check_milestones(&first.agent, Directive::ActiveDefense, 2).is_none());
    }

    #[test]
    fn test_strategist_has_no_topology_rewrite() {
        let mut agent = Agent::new(
            "ag_strategist",
            ModelId::Claude,
            Role::Strategist,
            Topology::new("ETHICAL MANIFOLD", 3.0, &[]),
        );
        agent.efficiency = 110.0;
        let upgrade = check_milestones(&agent, Directive::SilentWatch, 2).unwrap();
        assert_eq!(upgrade.agent.topology.architecture, "ETHICAL MANIFOLD");
        assert_eq!(upgrade.agent.topology.adaptations, vec!["STEALTH-ADAPTED"]);
    }
}
