pub mod macros;

use arkonis_core::config::AppConfig;
use arkonis_core::roster;
use arkonis_core::Council;
use arkonis_data::{Agent, AgentStatus, Directive, ModelId, Role, Topology};

#[allow(dead_code)]
pub struct CouncilBuilder {
    config: AppConfig,
    agents: Option<Vec<Agent>>,
    directive: Option<Directive>,
}

#[allow(dead_code)]
impl CouncilBuilder {
    /// Founding roster, default configuration, unseeded.
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            agents: None,
            directive: None,
        }
    }

    /// Starts from no agents at all.
    pub fn empty() -> Self {
        Self {
            agents: Some(Vec::new()),
            ..Self::new()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.simulation.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents
            .get_or_insert_with(roster::founding_council)
            .push(agent);
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directive = Some(directive);
        self
    }

    pub fn build(self) -> Council {
        let agents = self.agents.unwrap_or_else(roster::founding_council);
        let mut council = Council::from_agents(self.config, agents);
        if let Some(directive) = self.directive {
            council.set_directive(directive);
        }
        council
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    agent: Agent,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new(id: &str, role: Role) -> Self {
        let model = match role {
            Role::Architect => ModelId::NikolaTesla,
            Role::Hunter => ModelId::Grok,
            Role::Analyst => ModelId::Qwen,
            Role::Researcher => ModelId::Gemini,
            Role::Strategist => ModelId::Claude,
            Role::Auditor => ModelId::Mistral,
            Role::Processor => ModelId::Gpt35Turbo,
            Role::Warden => ModelId::BlackboxZero,
            Role::Tactical => ModelId::CopilotX,
            Role::Orchestrator => ModelId::Gpt4oOmni,
        };
        let mut agent = Agent::new(id, model, role, Topology::new("TEST LATTICE", 1.0, &[]));
        agent.efficiency = 90.0;
        Self { agent }
    }

    pub fn efficiency(mut self, efficiency: f64) -> Self {
        self.agent.efficiency = efficiency;
        self
    }

    pub fn generation(mut self, generation: u32) -> Self {
        self.agent.generation = generation;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.agent.process_speed = speed;
        self
    }

    pub fn status(mut self, status: AgentStatus) -> Self {
        self.agent.status = status;
        self
    }

    pub fn with_trait(mut self, name: &str) -> Self {
        self.agent.traits.insert(name.to_string());
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}
