use serde::{Deserialize, Serialize};

/// Widget-local membership state machine
///
/// One state per phase of the check/join flow so the re-entrancy guard and
/// the error paths are observable on their own, rather than being folded
/// into a pair of booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    /// No wallet address has been seen yet
    Unknown,
    /// Membership query in flight
    Checking,
    /// Query returned zero rows for the address
    NotMember,
    /// The query itself failed; distinct from a confirmed non-member
    CheckFailed,
    /// Join in flight; further join requests are ignored until it settles
    Joining,
    /// A row exists for the address (found, inserted, or conflict-classified)
    Member,
    /// Last join attempt failed for a non-conflict reason; retryable
    Error(String),
}

impl MembershipStatus {
    pub fn is_member(&self) -> bool {
        matches!(self, MembershipStatus::Member)
    }

    pub fn is_joining(&self) -> bool {
        matches!(self, MembershipStatus::Joining)
    }

    /// User-facing message from the last failed join, if any
    pub fn last_error(&self) -> Option<&str> {
        match self {
            MembershipStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for MembershipStatus {
    fn default() -> Self {
        MembershipStatus::Unknown
    }
}
