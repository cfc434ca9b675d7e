//! Mini-app host seam
//!
//! Narrow view of the enclosing social-network application: a readiness
//! signal, a URL opener, and the native compose action.

use async_trait::async_trait;
use waitlist_entity::SharePost;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Compose action failed: {0}")]
    ComposeFailed(String),

    #[error("Open URL action failed: {0}")]
    OpenUrlFailed(String),

    #[error("Host unavailable: {0}")]
    Unavailable(String),
}

/// Injected mini-app host session
#[async_trait]
pub trait MiniAppHost {
    /// Signal that the widget has rendered and the splash can be dismissed
    ///
    /// Fire-and-forget: the host SDK owns any retry concern.
    async fn ready(&self);

    /// Ask the host to open a URL (used for the web-composer fallback)
    async fn open_url(&self, url: &str) -> Result<(), HostError>;

    /// Draft a social post through the host's native compose flow
    async fn compose_cast(&self, post: &SharePost) -> Result<(), HostError>;
}
