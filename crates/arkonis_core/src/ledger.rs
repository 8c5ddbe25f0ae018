//! Record-ingestion and review-state ledger.
//!
//! The engine only talks to the [`Ledger`] trait. [`Kernel`] is the in-memory
//! implementation: confidence scoring, a role permission matrix and hashed
//! provenance on every transition.

use crate::error::{LedgerError, Result};
use crate::provenance::{self, SYSTEM_KERNEL};
use arkonis_data::{Entity, EntityStatus, RawRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
    ExportPublic,
    ExportSensitive,
    Flag,
    Annotate,
    Ban,
    Override,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Viewer,
    Analyst,
    Admin,
}

impl UserRole {
    #[must_use]
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            UserRole::Viewer => &[Read, ExportPublic],
            UserRole::Analyst => &[Read, ExportPublic, Flag, Annotate],
            UserRole::Admin => &[
                Read,
                ExportPublic,
                ExportSensitive,
                Flag,
                Annotate,
                Ban,
                Override,
            ],
        }
    }

    #[must_use]
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VIEWER" => Ok(UserRole::Viewer),
            "ANALYST" => Ok(UserRole::Analyst),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

/// The human operator behind externally triggered transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: UserRole,
    pub name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            role: UserRole::Viewer,
            name: "guest".to_string(),
        }
    }
}

/// Capability to sign transitions without a session permission check.
///
/// Only the engine can mint one, so no externally reachable path can claim it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemActor {
    name: String,
}

impl SystemActor {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Who is asking for a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// The current session user; subject to the permission matrix.
    Session,
    System(SystemActor),
}

pub trait Ledger: Send {
    /// Scores and registers raw intel.
    fn ingest(&mut self, raw: RawRecord) -> Entity;

    /// Moves an entity to `status`, prepending a provenance record.
    fn update_status(
        &mut self,
        entity: &Entity,
        status: EntityStatus,
        reason: &str,
        actor: &Actor,
    ) -> Result<Entity>;

    fn session(&self) -> &Session;

    fn set_session(&mut self, session: Session);
}

const HIGH_RISK_KEYWORDS: [&str; 8] = [
    "BIOMETRIC",
    "SURVEILLANCE",
    "AUTONOMOUS",
    "WARFARE",
    "TRACKING",
    "BEHAVIORAL",
    "PREDICTIVE",
    "RECOGNITION",
];

/// Heuristic confidence that a record describes a real threat, in `[0.5, 0.99]`.
#[must_use]
pub fn score_confidence(raw: &RawRecord) -> f64 {
    let mut score: f64 = 0.5;

    if raw.amount > 1_000_000.0 {
        score += 0.1;
    }
    if raw.amount > 10_000_000.0 {
        score += 0.1;
    }
    if raw.amount > 100_000_000.0 {
        score += 0.15;
    }

    let category = raw.category.to_uppercase();
    if HIGH_RISK_KEYWORDS.iter().any(|kw| category.contains(kw)) {
        score += 0.25;
    }
    let description = raw.description.to_uppercase();
    if description.contains("AI") || description.contains("INTELLIGENCE") {
        score += 0.15;
    }

    score.min(0.99)
}

#[derive(Debug, Default)]
pub struct Kernel {
    session: Session,
}

impl Kernel {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Ledger for Kernel {
    fn ingest(&mut self, raw: RawRecord) -> Entity {
        let confidence = score_confidence(&raw);
        let status = if confidence > 0.95 {
            EntityStatus::Blocked
        } else if confidence > 0.8 {
            EntityStatus::Verified
        } else {
            EntityStatus::PendingReview
        };

        let payload = serde_json::to_vec(&raw).unwrap_or_default();
        let mut genesis = provenance::record(
            SYSTEM_KERNEL,
            "INGESTION",
            provenance::content_hash(&payload),
        );
        genesis.signature = "AUTO_GENERATED_SIG".to_string();

        Entity {
            id: raw
                .id
                .unwrap_or_else(|| Uuid::new_v4().simple().to_string()),
            recipient: raw.recipient,
            amount: raw.amount,
            description: raw.description,
            category: raw.category,
            timestamp: Utc::now(),
            status,
            confidence_score: confidence,
            provenance: vec![genesis],
        }
    }

    fn update_status(
        &mut self,
        entity: &Entity,
        status: EntityStatus,
        reason: &str,
        actor: &Actor,
    ) -> Result<Entity> {
        let signer = match actor {
            Actor::System(system) => system.name().to_string(),
            Actor::Session => {
                let decisive = matches!(status, EntityStatus::Blocked | EntityStatus::Verified);
                if decisive && !self.session.role.can(Permission::Ban) {
                    return Err(LedgerError::access_denied(&self.session.name, status));
                }
                self.session.name.clone()
            }
        };

        if entity.status == status {
            return Err(LedgerError::InvalidTransition {
                id: entity.id.clone(),
                from: entity.status,
                to: status,
            });
        }

        let change = format!("{}:{}->{}:{}", entity.id, entity.status, status, reason);
        let record = provenance::record(
            &signer,
            format!("STATUS_CHANGE_TO_{status}"),
            provenance::content_hash(change.as_bytes()),
        );

        let mut updated = entity.clone();
        updated.status = status;
        updated.provenance.insert(0, record);
        Ok(updated)
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn set_session(&mut self, session: Session) {
        tracing::info!(user = %session.name, role = ?session.role, "Ledger session changed");
        self.session = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(amount: f64, category: &str, description: &str) -> RawRecord {
        RawRecord {
            id: None,
            recipient: "PALANTIR".to_string(),
            amount,
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_confidence_heuristic() {
        assert_eq!(score_confidence(&raw(10.0, "OFFICE", "PAPER")), 0.5);
        let high = score_confidence(&raw(
            480_000_000.0,
            "FACIAL RECOGNITION",
            "GEOINT AI INTEGRATION",
        ));
        assert_eq!(high, 0.99);
        let mid = score_confidence(&raw(4_200_000.0, "DRONE", "HARDWARE"));
        assert!((mid - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ingest_status_from_confidence() {
        let mut kernel = Kernel::default();
        let pending = kernel.ingest(raw(10.0, "OFFICE", "PAPER"));
        assert_eq!(pending.status, EntityStatus::PendingReview);
        assert_eq!(pending.provenance[0].actor, "SYSTEM_KERNEL");
        assert_eq!(pending.provenance[0].action, "INGESTION");

        let blocked = kernel.ingest(raw(500_000_000.0, "BIOMETRIC", "AI"));
        assert_eq!(blocked.status, EntityStatus::Blocked);
    }

    #[test]
    fn test_viewer_cannot_block() {
        let mut kernel = Kernel::default();
        let entity = kernel.ingest(raw(10.0, "OFFICE", "PAPER"));
        let err = kernel
            .update_status(&entity, EntityStatus::Blocked, "manual", &Actor::Session)
            .unwrap_err();
        assert!(err.is_access_denied());

        // non-decisive transitions stay open to any session
        let flagged = kernel
            .update_status(&entity, EntityStatus::FalsePositive, "noise", &Actor::Session)
            .unwrap();
        assert_eq!(flagged.provenance[0].actor, "guest");
    }

    #[test]
    fn test_admin_and_system_may_block() {
        let mut kernel = Kernel::new(Session {
            role: UserRole::Admin,
            name: "root".to_string(),
        });
        let entity = kernel.ingest(raw(10.0, "OFFICE", "PAPER"));
        let by_admin = kernel
            .update_status(&entity, EntityStatus::Blocked, "manual", &Actor::Session)
            .unwrap();
        assert_eq!(by_admin.provenance.len(), 2);
        assert_eq!(by_admin.provenance[0].action, "STATUS_CHANGE_TO_BLOCKED");

        kernel.set_session(Session::default());
        let system = Actor::System(SystemActor::new("NIKOLA_TESLA_V1"));
        let by_system = kernel
            .update_status(&entity, EntityStatus::Verified, "resonance", &system)
            .unwrap();
        assert_eq!(by_system.status, EntityStatus::Verified);
        assert!(by_system.provenance[0]
            .signature
            .starts_with("NIKOLA_TESLA_V1_SIG_"));
    }

    #[test]
    fn test_same_status_rejected() {
        let mut kernel = Kernel::default();
        let entity = kernel.ingest(raw(10.0, "OFFICE", "PAPER"));
        let system = Actor::System(SystemActor::new("SYSTEM"));
        let err = kernel
            .update_status(&entity, EntityStatus::PendingReview, "noop", &system)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTransition { .. }));
    }
}
