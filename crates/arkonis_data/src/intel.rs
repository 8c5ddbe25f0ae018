use crate::agent::ProvenanceRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Review state of a tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Detected,
    PendingReview,
    Verified,
    Blocked,
    FalsePositive,
}

impl EntityStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityStatus::Detected => "DETECTED",
            EntityStatus::PendingReview => "PENDING_REVIEW",
            EntityStatus::Verified => "VERIFIED",
            EntityStatus::Blocked => "BLOCKED",
            EntityStatus::FalsePositive => "FALSE_POSITIVE",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unscored intel as handed to the ledger for ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub recipient: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
}

/// A scored, provenance-tracked intel record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub recipient: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    pub status: EntityStatus,
    pub confidence_score: f64,
    /// Newest first.
    pub provenance: Vec<ProvenanceRecord>,
}

impl Entity {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == EntityStatus::PendingReview
    }
}
