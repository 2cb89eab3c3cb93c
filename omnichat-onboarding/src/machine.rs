//! Onboarding state machine.
//!
//! Steps: select-provider → meta-auth | whatsapp-signup → select-pages
//! (meta path only) → verifying → success (machine exits) | error
//! (dismissible; retry returns to select-provider). All collaborator
//! failures terminate in the error step with a human-readable cause; nothing
//! propagates past the session.

use crate::provider::{AuthProvider, LoginOutcome, SdkStatus};
use omnichat_core::types::PLACEHOLDER_APP_ID;
use omnichat_core::{Channel, MetaPage};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Scope set requested for Messenger/Instagram login.
pub const META_LOGIN_SCOPE: &str = "pages_show_list,pages_messaging,pages_read_engagement,instagram_basic,instagram_manage_messages,public_profile,email";

/// Scope set requested for the WhatsApp embedded signup.
pub const WHATSAPP_SIGNUP_SCOPE: &str = "whatsapp_business_management,whatsapp_business_messaging";

// --- User-facing error messages shown in the error step ---
const MSG_HTTPS_REQUIRED: &str =
    "Meta SDK requires HTTPS. Please use http://localhost or host on HTTPS.";
const MSG_APP_ID_MISSING: &str =
    "Meta App ID not configured. Please go to Developer Settings (Gear icon) and enter your App ID.";
const MSG_SDK_INIT_FAILED: &str =
    "Meta SDK failed to initialize. Check your adblocker or internet connection.";
const MSG_LOGIN_CANCELLED: &str = "User cancelled login or did not fully authorize.";
const MSG_PAGES_FETCH_FAILED: &str =
    "Failed to fetch Facebook pages. Ensure your App ID is correct and has Permissions.";
const MSG_WHATSAPP_DENIED: &str = "WhatsApp authorization failed.";

const DEFAULT_SDK_POLL_ATTEMPTS: u32 = 10;
const DEFAULT_SDK_POLL_INTERVAL: Duration = Duration::from_millis(500);
const DEFAULT_VERIFY_DELAY_PAGE: Duration = Duration::from_millis(1500);
const DEFAULT_VERIFY_DELAY_SIGNUP: Duration = Duration::from_millis(2000);

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingStep {
    SelectProvider,
    MetaAuth,
    WhatsappSignup,
    SelectPages,
    Verifying,
    Error(String),
}

/// Success payload handed to the caller; the caller synthesizes the new
/// conversation from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedChannel {
    pub channel: Channel,
    pub display_name: String,
    pub access_token: String,
}

pub struct OnboardingSession<P: AuthProvider> {
    provider: P,
    app_id: String,
    step: OnboardingStep,
    channel: Option<Channel>,
    pages: Vec<MetaPage>,
    sdk_poll_attempts: u32,
    sdk_poll_interval: Duration,
    verify_delay_page: Duration,
    verify_delay_signup: Duration,
}

impl<P: AuthProvider> OnboardingSession<P> {
    pub fn new(provider: P, app_id: impl Into<String>) -> Self {
        Self {
            provider,
            app_id: app_id.into(),
            step: OnboardingStep::SelectProvider,
            channel: None,
            pages: Vec::new(),
            sdk_poll_attempts: DEFAULT_SDK_POLL_ATTEMPTS,
            sdk_poll_interval: DEFAULT_SDK_POLL_INTERVAL,
            verify_delay_page: DEFAULT_VERIFY_DELAY_PAGE,
            verify_delay_signup: DEFAULT_VERIFY_DELAY_SIGNUP,
        }
    }

    /// Overrides the readiness poll bounds and fake-latency verify delays.
    pub fn with_timings(
        mut self,
        sdk_poll_attempts: u32,
        sdk_poll_interval: Duration,
        verify_delay_page: Duration,
        verify_delay_signup: Duration,
    ) -> Self {
        self.sdk_poll_attempts = sdk_poll_attempts;
        self.sdk_poll_interval = sdk_poll_interval;
        self.verify_delay_page = verify_delay_page;
        self.verify_delay_signup = verify_delay_signup;
        self
    }

    pub fn step(&self) -> &OnboardingStep {
        &self.step
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn selected_channel(&self) -> Option<Channel> {
        self.channel
    }

    pub fn pages(&self) -> &[MetaPage] {
        &self.pages
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.step {
            OnboardingStep::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the given page can be connected for the selected provider.
    /// The instagram path requires a linked instagram business account.
    pub fn page_selectable(&self, page: &MetaPage) -> bool {
        self.channel != Some(Channel::Instagram) || page.instagram_business_account.is_some()
    }

    /// From select-provider: whatsapp goes to the embedded signup, the Meta
    /// channels go through Meta login.
    pub fn choose_provider(&mut self, channel: Channel) {
        if self.step != OnboardingStep::SelectProvider {
            return;
        }
        self.channel = Some(channel);
        self.step = match channel {
            Channel::Whatsapp => OnboardingStep::WhatsappSignup,
            Channel::Instagram | Channel::Messenger => OnboardingStep::MetaAuth,
        };
        info!(channel = %channel, "provider chosen");
    }

    /// Meta login for Messenger/Instagram: on authorization, fetches the
    /// page list and moves to select-pages; otherwise lands in the error
    /// step.
    pub async fn login_with_meta(&mut self) {
        if self.step != OnboardingStep::MetaAuth {
            return;
        }
        if !self.ensure_sdk_ready().await {
            return;
        }

        match self.provider.login(META_LOGIN_SCOPE).await {
            LoginOutcome::Authorized { .. } => match self.provider.list_accounts().await {
                Ok(pages) => {
                    info!(count = pages.len(), "fetched provider pages");
                    self.pages = pages;
                    self.step = OnboardingStep::SelectPages;
                }
                Err(e) => {
                    warn!("Account fetch failed: {}", e);
                    self.fail(MSG_PAGES_FETCH_FAILED);
                }
            },
            LoginOutcome::Denied { reason } => {
                info!(reason = %reason, "meta login denied");
                self.fail(MSG_LOGIN_CANCELLED);
            }
            LoginOutcome::Unavailable { reason } => {
                warn!("Meta login unavailable: {}", reason);
                self.fail(&reason);
            }
        }
    }

    /// Connects one of the fetched pages. Returns `None` without any
    /// transition when the page is not selectable for the provider; on
    /// success runs the verifying delay and exits the machine with the
    /// connected channel.
    pub async fn select_page(&mut self, page_id: &str) -> Option<ConnectedChannel> {
        if self.step != OnboardingStep::SelectPages {
            return None;
        }
        let channel = self.channel?;
        let page = self.pages.iter().find(|p| p.id == page_id)?.clone();
        if !self.page_selectable(&page) {
            return None;
        }

        let display_name = match (&channel, &page.instagram_business_account) {
            (Channel::Instagram, Some(account)) => account.username.clone(),
            _ => page.name.clone(),
        };

        self.step = OnboardingStep::Verifying;
        sleep(self.verify_delay_page).await;

        info!(channel = %channel, page = %page.name, "page connected");
        Some(ConnectedChannel {
            channel,
            display_name,
            access_token: page.access_token,
        })
    }

    /// WhatsApp embedded signup: authorization yields the access token
    /// directly; the display name is fixed.
    pub async fn signup_whatsapp(&mut self) -> Option<ConnectedChannel> {
        if self.step != OnboardingStep::WhatsappSignup {
            return None;
        }
        if !self.ensure_sdk_ready().await {
            return None;
        }

        match self.provider.login(WHATSAPP_SIGNUP_SCOPE).await {
            LoginOutcome::Authorized { access_token } => {
                self.step = OnboardingStep::Verifying;
                sleep(self.verify_delay_signup).await;
                info!("whatsapp signup authorized");
                Some(ConnectedChannel {
                    channel: Channel::Whatsapp,
                    display_name: "WhatsApp Business".to_string(),
                    access_token,
                })
            }
            LoginOutcome::Denied { reason } => {
                info!(reason = %reason, "whatsapp signup denied");
                self.fail(MSG_WHATSAPP_DENIED);
                None
            }
            LoginOutcome::Unavailable { reason } => {
                warn!("WhatsApp signup unavailable: {}", reason);
                self.fail(&reason);
                None
            }
        }
    }

    /// From the error step back to select-provider, clearing the recorded
    /// message and any stale page list. Cancel is simply dropping the
    /// session, which also cancels a pending verifying delay.
    pub fn retry(&mut self) {
        if !matches!(self.step, OnboardingStep::Error(_)) {
            return;
        }
        self.step = OnboardingStep::SelectProvider;
        self.channel = None;
        self.pages.clear();
    }

    /// Readiness precondition for any login call: secure context, configured
    /// app id, SDK loaded. Polls for SDK readiness a bounded number of times
    /// before declaring failure; an already-ready SDK incurs no delay.
    async fn ensure_sdk_ready(&mut self) -> bool {
        match self.provider.sdk_status() {
            SdkStatus::Ready => return true,
            SdkStatus::InsecureContext => {
                self.fail(MSG_HTTPS_REQUIRED);
                return false;
            }
            SdkStatus::NotLoaded => {}
        }

        if self.app_id.is_empty() || self.app_id == PLACEHOLDER_APP_ID {
            self.fail(MSG_APP_ID_MISSING);
            return false;
        }

        for _ in 0..self.sdk_poll_attempts {
            sleep(self.sdk_poll_interval).await;
            if self.provider.sdk_status() == SdkStatus::Ready {
                return true;
            }
        }

        self.fail(MSG_SDK_INIT_FAILED);
        false
    }

    fn fail(&mut self, message: &str) {
        warn!(message, "onboarding failed");
        self.step = OnboardingStep::Error(message.to_string());
    }
}
