//! Wallet session seam
//!
//! The wallet connector library owns all connection state. The widget
//! only reads that state and asks for a connection once during
//! bootstrap, so the seam is a narrow trait injected at construction
//! rather than ambient global state.

use async_trait::async_trait;

/// Identifier of one wallet-integration adapter offered by the wallet library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorId(pub String);

impl ConnectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Injected wallet session with a caller-defined lifecycle
#[async_trait]
pub trait WalletSession {
    /// Whether a wallet session is currently established
    fn is_connected(&self) -> bool;

    /// Connected address, present only while a session is established
    fn address(&self) -> Option<String>;

    /// Available connectors in host-preference order
    fn connectors(&self) -> Vec<ConnectorId>;

    /// Request a session via the given connector
    ///
    /// Resolves without surfacing errors; the wallet library's own state
    /// is authoritative, and this component never retries.
    async fn connect(&mut self, connector: &ConnectorId);
}
