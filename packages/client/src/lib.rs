//! Genesis Waitlist Widget Client
//!
//! Client library for a wallet-gated waitlist widget embedded in a
//! social-network mini-app host: bootstrap the host/wallet sessions,
//! check and join a hosted waitlist, and share a promotional post with
//! a web-composer fallback.

pub mod host;
pub mod http_client;
pub mod store;
pub mod wallet;
pub mod widget;

pub use host::{HostError, MiniAppHost};
pub use http_client::{RestHttpClient, StoreError};
pub use store::{MembershipStore, RestStore, StoreConfig};
pub use wallet::{ConnectorId, WalletSession};
pub use widget::{DEFAULT_SHARE_TEXT, ShareConfig, WaitlistWidget};

// Re-export commonly used types from waitlist_entity
pub use waitlist_entity::{MembershipStatus, SharePost, WaitlistEntry};
