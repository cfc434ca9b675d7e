//! Waitlist store operations against the hosted data service
//!
//! The store owns the only authoritative uniqueness guarantee in the
//! system: one row per wallet address, enforced by its unique constraint
//! and surfaced to this client as [`StoreError::Conflict`].

use async_trait::async_trait;
use tracing::debug;
use url::Url;
use waitlist_entity::WaitlistEntry;

use crate::http_client::{RestHttpClient, StoreError};

/// Data service connection settings
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted data service
    pub service_url: Url,
    /// Service API key, sent as both `apikey` and bearer token
    pub api_key: String,
    /// Table holding the waitlist rows
    pub table: String,
    /// HTTP client timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            service_url: Url::parse("https://project.supabase.co").unwrap(),
            api_key: String::new(),
            table: "waitlist".to_string(),
            timeout_secs: 30,
            user_agent: "GenesisWaitlist/0.1.0".to_string(),
        }
    }
}

/// Read/append interface over the waitlist table
///
/// Implemented over HTTP by [`RestStore`]; tests substitute in-memory
/// implementations.
#[async_trait]
pub trait MembershipStore {
    /// Select the row for an address, expecting zero or one result
    async fn find_by_address(
        &self,
        address: &str,
    ) -> Result<Option<WaitlistEntry>, StoreError>;

    /// Append a new row; a duplicate address yields [`StoreError::Conflict`]
    async fn insert(&self, entry: &WaitlistEntry) -> Result<(), StoreError>;
}

/// PostgREST-backed store implementation
#[derive(Debug, Clone)]
pub struct RestStore {
    http_client: RestHttpClient,
    table: String,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            http_client: RestHttpClient::new(config)?,
            table: config.table.clone(),
        })
    }

    fn select_path(&self, address: &str) -> String {
        format!(
            "/rest/v1/{}?select=*&wallet_address=eq.{}&limit=1",
            self.table,
            urlencoding::encode(address)
        )
    }

    fn insert_path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }
}

#[async_trait]
impl MembershipStore for RestStore {
    async fn find_by_address(
        &self,
        address: &str,
    ) -> Result<Option<WaitlistEntry>, StoreError> {
        debug!("Querying waitlist row for {}", address);
        let rows: Vec<WaitlistEntry> = self.http_client.get(&self.select_path(address)).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, entry: &WaitlistEntry) -> Result<(), StoreError> {
        debug!("Inserting waitlist row for {}", entry.wallet_address);
        self.http_client.post(&self.insert_path(), entry).await
    }
}
