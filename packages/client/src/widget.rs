//! Waitlist widget interaction loop
//!
//! Drives the bootstrap → check → join/share flow over the injected
//! store, wallet, and host seams. The widget mutates its own state only
//! in response to its own async completions; the only cross-client
//! mutual exclusion is the store's unique constraint, which the join
//! flow treats as the authoritative duplicate guard.

use tracing::{debug, error, warn};
use url::Url;
use waitlist_entity::{MembershipStatus, SharePost, WaitlistEntry};

use crate::host::MiniAppHost;
use crate::store::MembershipStore;
use crate::wallet::WalletSession;

/// Promotional text shared through the host compose action
pub const DEFAULT_SHARE_TEXT: &str =
    "I just joined the Prime Mane Genesis waitlist! First Solana collection on Farcaster 🦁";

/// Share action settings
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Post handed to the native compose action
    pub post: SharePost,
    /// Web composer used when the native action fails
    pub composer_url: Url,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            post: SharePost::new(DEFAULT_SHARE_TEXT.to_string()),
            composer_url: Url::parse("https://warpcast.com/~/compose").unwrap(),
        }
    }
}

/// Waitlist widget over injected store, wallet, and host sessions
pub struct WaitlistWidget<S, W, H> {
    store: S,
    wallet: W,
    host: H,
    share: ShareConfig,
    status: MembershipStatus,
    ready_signaled: bool,
}

impl<S, W, H> WaitlistWidget<S, W, H>
where
    S: MembershipStore,
    W: WalletSession,
    H: MiniAppHost,
{
    pub fn new(store: S, wallet: W, host: H, share: ShareConfig) -> Self {
        Self {
            store,
            wallet,
            host,
            share,
            status: MembershipStatus::Unknown,
            ready_signaled: false,
        }
    }

    /// Current membership state
    pub fn status(&self) -> &MembershipStatus {
        &self.status
    }

    /// Whether a wallet session is established
    pub fn is_connected(&self) -> bool {
        self.wallet.is_connected()
    }

    /// Connected wallet address, if any
    pub fn address(&self) -> Option<String> {
        self.wallet.address()
    }

    /// Signal host readiness and auto-connect the first available connector
    ///
    /// The readiness signal is latched: repeated calls send it once.
    /// Connection failures are not surfaced here; the wallet library's
    /// own state decides what the UI shows.
    pub async fn bootstrap(&mut self) {
        if !self.ready_signaled {
            self.host.ready().await;
            self.ready_signaled = true;
        }

        if !self.wallet.is_connected() {
            let connectors = self.wallet.connectors();
            if let Some(connector) = connectors.first() {
                debug!("Auto-connecting wallet via connector {:?}", connector);
                self.wallet.connect(connector).await;
            }
        }
    }

    /// Query the store for an existing row for the connected address
    ///
    /// Call when the address transitions absent → present or changes.
    /// No-op without an address. A failed query lands in `CheckFailed`
    /// rather than masquerading as a confirmed non-member.
    pub async fn check_membership(&mut self) {
        let Some(address) = self.wallet.address() else {
            return;
        };

        self.status = MembershipStatus::Checking;
        match self.store.find_by_address(&address).await {
            Ok(Some(_)) => self.status = MembershipStatus::Member,
            Ok(None) => self.status = MembershipStatus::NotMember,
            Err(e) => {
                warn!("Membership check failed for {}: {}", address, e);
                self.status = MembershipStatus::CheckFailed;
            },
        }
    }

    /// Join the waitlist for the connected address
    ///
    /// Re-entrant calls while a join is in flight are ignored. The
    /// pre-insert re-check is a best-effort race-window close; only the
    /// store's unique constraint is serialized across clients, so a
    /// duplicate-key conflict on insert is classified as success.
    pub async fn join(&mut self) {
        let Some(address) = self.wallet.address() else {
            return;
        };
        if self.status.is_joining() {
            return;
        }

        self.status = MembershipStatus::Joining;

        match self.store.find_by_address(&address).await {
            Ok(Some(_)) => {
                self.status = MembershipStatus::Member;
                return;
            },
            Ok(None) => {},
            // Treated like "no row found": the insert below cannot create
            // a duplicate either way
            Err(e) => debug!("Pre-insert re-check failed for {}: {}", address, e),
        }

        let entry = WaitlistEntry::joined_now(address.clone());
        match self.store.insert(&entry).await {
            Ok(()) => self.status = MembershipStatus::Member,
            Err(e) if e.is_conflict() => {
                debug!("Insert conflict for {}, already enrolled", address);
                self.status = MembershipStatus::Member;
            },
            Err(e) => {
                error!("Join failed for {}: {}", address, e);
                self.status = MembershipStatus::Error(e.user_message());
            },
        }
    }

    /// Share the configured post through the host
    ///
    /// Tries the native compose action once; on any failure, opens the
    /// web composer with the same content. Fallback failures are logged
    /// and dropped.
    pub async fn share(&self) {
        match self.host.compose_cast(&self.share.post).await {
            Ok(()) => return,
            Err(e) => debug!("Native compose failed, falling back to composer URL: {}", e),
        }

        let url = self.composer_fallback_url();
        if let Err(e) = self.host.open_url(&url).await {
            warn!("Web composer fallback failed: {}", e);
        }
    }

    fn composer_fallback_url(&self) -> String {
        let mut url = format!(
            "{}?text={}",
            self.share.composer_url,
            urlencoding::encode(&self.share.post.text)
        );
        for embed in &self.share.post.embeds {
            url.push_str("&embeds[]=");
            url.push_str(&urlencoding::encode(embed.as_str()));
        }
        url
    }
}
