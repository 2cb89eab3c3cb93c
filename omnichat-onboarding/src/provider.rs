//! External auth collaborator contract.
//!
//! Wraps the provider SDK behind a narrow interface with explicit result
//! variants; the onboarding machine branches on these, never on raw payloads.

use async_trait::async_trait;
use omnichat_core::MetaPage;

/// Whether the provider SDK can accept calls right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkStatus {
    /// Loaded and callable.
    Ready,
    /// The page is not served over a secure origin; the SDK refuses to run.
    InsecureContext,
    /// Script still loading (or blocked); may become ready later.
    NotLoaded,
}

/// Result of one login attempt against the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authorized { access_token: String },
    Denied { reason: String },
    Unavailable { reason: String },
}

/// The external auth collaborator. `login`/`list_accounts` must only be
/// invoked once [`SdkStatus::Ready`] holds; the machine enforces that.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    fn sdk_status(&self) -> SdkStatus;

    /// Requests authorization for the given comma-separated scope set.
    async fn login(&self, scope: &str) -> LoginOutcome;

    /// Fetches the pages/accounts the authorized user manages.
    async fn list_accounts(&self) -> Result<Vec<MetaPage>, String>;
}
