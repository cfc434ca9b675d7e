use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Waitlist row keyed by wallet address
/// This is the only record type this component reads or appends; rows are
/// never updated or deleted from the client side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    /// Wallet address exactly as the wallet library supplied it
    pub wallet_address: String,

    /// When the address joined, set client-side at insert time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    pub fn new(wallet_address: String) -> Self {
        Self { wallet_address, joined_at: None }
    }

    /// Entry stamped with the current time, as the join flow inserts it
    pub fn joined_now(wallet_address: String) -> Self {
        Self {
            wallet_address,
            joined_at: Some(Utc::now()),
        }
    }
}
