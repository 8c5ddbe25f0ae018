//! Authoritative in-memory agent list.

use arkonis_data::{Agent, Role};
use rand::Rng;
use std::collections::HashSet;

/// Owns every agent. Population never exceeds `cap`, and ids are never reused.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: Vec<Agent>,
    cap: usize,
    issued: HashSet<String>,
}

impl AgentRegistry {
    #[must_use]
    pub fn new(cap: usize) -> Self {
        Self {
            agents: Vec::new(),
            cap,
            issued: HashSet::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.agents.len() >= self.cap
    }

    /// Adds an agent. Hands it back when the population is full or the id was already issued.
    pub fn insert(&mut self, agent: Agent) -> Result<(), Agent> {
        if self.is_full() || self.issued.contains(&agent.id) {
            return Err(agent);
        }
        self.issued.insert(agent.id.clone());
        self.agents.push(agent);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the stored agent carrying the same id.
    pub fn replace(&mut self, agent: Agent) {
        if let Some(slot) = self.get_mut(&agent.id) {
            *slot = agent;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Ids in registry order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.id.clone()).collect()
    }

    #[must_use]
    pub fn first_of(&self, role: Role) -> Option<&Agent> {
        self.agents.iter().find(|a| a.role == role)
    }

    #[must_use]
    pub fn ids_of(&self, role: Role) -> Vec<String> {
        self.agents
            .iter()
            .filter(|a| a.role == role)
            .map(|a| a.id.clone())
            .collect()
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Agent> {
        self.agents.clone()
    }

    #[must_use]
    pub fn mean_efficiency(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(|a| a.efficiency).sum::<f64>() / self.agents.len() as f64
    }

    /// Mints a replica id that has never been issued by this registry.
    pub fn mint_replica_id<R: Rng>(&self, role: Role, generation: u32, rng: &mut R) -> String {
        let role = role.as_str().to_lowercase();
        loop {
            let suffix: u32 = rng.gen();
            let id = format!("ag_replica_{role}_gen{generation}_{suffix:08x}");
            if !self.issued.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkonis_data::{ModelId, Topology};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn agent(id: &str) -> Agent {
        Agent::new(id, ModelId::Qwen, Role::Analyst, Topology::new("X", 1.0, &[]))
    }

    #[test]
    fn test_insert_respects_cap() {
        let mut registry = AgentRegistry::new(2);
        assert!(registry.insert(agent("a")).is_ok());
        assert!(registry.insert(agent("b")).is_ok());
        assert!(registry.is_full());
        let rejected = registry.insert(agent("c")).unwrap_err();
        assert_eq!(rejected.id, "c");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = AgentRegistry::new(4);
        registry.insert(agent("a")).unwrap();
        assert!(registry.insert(agent("a")).is_err());
    }

    #[test]
    fn test_minted_ids_follow_format() {
        let registry = AgentRegistry::new(4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let id = registry.mint_replica_id(Role::Hunter, 2, &mut rng);
        assert!(id.starts_with("ag_replica_hunter_gen2_"));
        assert_eq!(id.len(), "ag_replica_hunter_gen2_".len() + 8);
    }
}
