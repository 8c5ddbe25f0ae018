use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Process-wide behavioral mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Directive {
    SilentWatch,
    #[default]
    ActiveDefense,
    ProtocolOmega,
    TotalRecall,
}

impl Directive {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::SilentWatch => "SILENT_WATCH",
            Directive::ActiveDefense => "ACTIVE_DEFENSE",
            Directive::ProtocolOmega => "PROTOCOL_OMEGA",
            Directive::TotalRecall => "TOTAL_RECALL",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Directive {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "SILENT_WATCH" => Ok(Directive::SilentWatch),
            "ACTIVE_DEFENSE" => Ok(Directive::ActiveDefense),
            "PROTOCOL_OMEGA" => Ok(Directive::ProtocolOmega),
            "TOTAL_RECALL" => Ok(Directive::TotalRecall),
            other => Err(format!("unknown directive: {other}")),
        }
    }
}

/// Global gauges read by every agent as ambient context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedMemory {
    pub raw_intel_count: u64,
    pub verified_threats: u64,
    pub active_blocks: u64,
    /// Always within `[0, 1]`.
    pub global_coherence: f64,
    pub last_signal: DateTime<Utc>,
}

impl Default for SharedMemory {
    fn default() -> Self {
        Self {
            raw_intel_count: 0,
            verified_threats: 0,
            active_blocks: 0,
            global_coherence: 1.0,
            last_signal: Utc::now(),
        }
    }
}

impl SharedMemory {
    /// Shifts coherence by `delta`, clamped to `[0, 1]`.
    pub fn adjust_coherence(&mut self, delta: f64) {
        self.global_coherence = (self.global_coherence + delta).clamp(0.0, 1.0);
    }

    pub fn resolve_threat(&mut self) {
        self.verified_threats = self.verified_threats.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coherence_clamped() {
        let mut memory = SharedMemory::default();
        memory.adjust_coherence(0.5);
        assert_eq!(memory.global_coherence, 1.0);
        memory.adjust_coherence(-3.0);
        assert_eq!(memory.global_coherence, 0.0);
    }

    #[test]
    fn test_resolve_threat_saturates() {
        let mut memory = SharedMemory::default();
        memory.resolve_threat();
        assert_eq!(memory.verified_threats, 0);
    }

    #[test]
    fn test_directive_parse() {
        assert_eq!(
            "protocol-omega".parse::<Directive>(),
            Ok(Directive::ProtocolOmega)
        );
        assert!("panic".parse::<Directive>().is_err());
    }
}
