//! Error types for the ledger boundary.

use arkonis_data::EntityStatus;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// The session user lacks the permission for this transition.
    #[error("ACCESS_DENIED: {user} may not move entities to {status}")]
    AccessDenied { user: String, status: EntityStatus },

    #[error("Invalid transition for {id}: {from} -> {to}")]
    InvalidTransition {
        id: String,
        from: EntityStatus,
        to: EntityStatus,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    #[must_use]
    pub fn access_denied<S: Into<String>>(user: S, status: EntityStatus) -> Self {
        Self::AccessDenied {
            user: user.into(),
            status,
        }
    }

    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}
