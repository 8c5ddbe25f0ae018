/// Asserts the council holds exactly `count` agents.
#[macro_export]
macro_rules! assert_population {
    ($council:expr, $count:expr) => {
        assert_eq!($council.population(), $count, "Population count mismatch");
    };
}

/// Asserts an agent exists and is in the given status.
#[macro_export]
macro_rules! assert_status {
    ($council:expr, $id:expr, $status:expr) => {
        let agent = $council.agent($id).expect("Agent not found in council");
        assert_eq!(
            agent.status, $status,
            "Agent {} is {:?}, expected {:?}",
            $id, agent.status, $status
        );
    };
}

/// Asserts an agent exists and carries the given trait.
#[macro_export]
macro_rules! assert_has_trait {
    ($council:expr, $id:expr, $name:expr) => {
        let agent = $council.agent($id).expect("Agent not found in council");
        assert!(
            agent.has_trait($name),
            "Agent {} lacks trait {} (has {:?})",
            $id,
            $name,
            agent.traits
        );
    };
}

/// Asserts no two agents share an id.
#[macro_export]
macro_rules! assert_unique_ids {
    ($council:expr) => {
        let agents = $council.agents();
        let ids: std::collections::HashSet<&str> = agents.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), agents.len(), "Duplicate agent ids");
    };
}
